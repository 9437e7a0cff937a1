use super::{TerrainGrid, TerrainType};
use crate::config::TerrainConfig;
use crate::hash::{mod_u256, phase_seed, positional_hash, Hash32, MAP_LABEL};
use expedition_data::Seed;

/// Offset applied to row and column for each smoothing pass's tie-break hash.
const PASS_STRIDE: u64 = 1000;

impl TerrainGrid {
    /// Generates the terrain for a seed.
    ///
    /// A weighted pass assigns every tile from `H(row, col, H(seed, "map"))`,
    /// then cellular-automaton smoothing clusters the noise into regions.
    #[must_use]
    pub fn generate(seed: &Seed, size: usize, config: &TerrainConfig) -> Self {
        let map_seed = phase_seed(seed, MAP_LABEL);
        let mut grid = Self::weighted_pass(&map_seed, size, &config.weights);
        for pass in 0..config.smoothing_passes {
            grid = grid.smoothing_pass(seed, pass, config);
        }
        tracing::debug!(
            size,
            ground = grid.count(TerrainType::Ground),
            mushroom = grid.count(TerrainType::Mushroom),
            "Terrain generated"
        );
        grid
    }

    fn weighted_pass(map_seed: &Hash32, size: usize, weights: &[u64; 5]) -> Self {
        let mut grid = Self::filled(size, TerrainType::Ground);
        for row in 0..size {
            for col in 0..size {
                let roll = mod_u256(&positional_hash(row as u64, col as u64, map_seed), 100);
                grid.set(row, col, pick_weighted(roll, weights));
            }
        }
        grid
    }

    /// Per-type counts over the tile and its in-grid neighbours.
    fn neighbourhood_counts(&self, row: usize, col: usize) -> [usize; TerrainType::COUNT] {
        let mut counts = [0usize; TerrainType::COUNT];
        let (row, col) = (row as i64, col as i64);
        for dr in -1..=1 {
            for dc in -1..=1 {
                if let Some(t) = self.get(row + dr, col + dc) {
                    counts[t.index()] += 1;
                }
            }
        }
        counts
    }

    fn smoothing_pass(&self, seed: &Seed, pass: u64, config: &TerrainConfig) -> Self {
        let mut next = self.clone();
        for row in 0..self.size {
            for col in 0..self.size {
                let current = self.tiles[self.index(row, col)];
                let counts = self.neighbourhood_counts(row, col);
                let smoothed = smooth_tile(current, &counts, config, || {
                    let hash = positional_hash(
                        row as u64 + pass * PASS_STRIDE,
                        col as u64 + pass * PASS_STRIDE,
                        seed.as_bytes(),
                    );
                    mod_u256(&hash, 100)
                });
                next.set(row, col, smoothed);
            }
        }
        next
    }
}

/// Terrain type whose cumulative weight range contains `roll`.
fn pick_weighted(roll: u64, weights: &[u64; 5]) -> TerrainType {
    let mut cumulative = 0;
    for (t, &weight) in TerrainType::ALL.iter().zip(weights) {
        cumulative += weight;
        if roll < cumulative {
            return *t;
        }
    }
    // Weights are validated to sum to 100, so only a bad table lands here.
    TerrainType::ALL[TerrainType::COUNT - 1]
}

/// First type in table order whose count strictly exceeds the running maximum.
fn dominant(counts: &[usize; TerrainType::COUNT]) -> (TerrainType, usize) {
    let mut best = (TerrainType::ALL[0], 0);
    for t in TerrainType::ALL {
        if counts[t.index()] > best.1 {
            best = (t, counts[t.index()]);
        }
    }
    best
}

/// Smoothing rule for one tile. `tie_roll` is only drawn for close contests.
fn smooth_tile(
    current: TerrainType,
    counts: &[usize; TerrainType::COUNT],
    config: &TerrainConfig,
    tie_roll: impl FnOnce() -> u64,
) -> TerrainType {
    let current_count = counts[current.index()];
    if current == TerrainType::RubyMountain && current_count >= config.ruby_keep_count {
        return current;
    }

    let (dominant_type, dominant_count) = dominant(counts);
    if dominant_count == current_count {
        return current;
    }
    if dominant_count - current_count <= config.tie_margin {
        return if tie_roll() < config.tie_keep_threshold {
            current
        } else {
            dominant_type
        };
    }
    dominant_type
}
