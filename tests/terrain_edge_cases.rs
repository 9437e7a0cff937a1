use expedition_lib::model::config::TerrainConfig;
use expedition_lib::model::{Seed, TerrainGrid, TerrainType};

#[test]
fn test_grid_shape_for_many_sizes() {
    let config = TerrainConfig::default();
    for size in [1, 2, 3, 7, 16, 64, 65] {
        let grid = TerrainGrid::generate(&Seed::from_u64(size as u64), size, &config);
        assert_eq!(grid.size(), size);
        assert_eq!(grid.rows().count(), size);
        assert!(grid.rows().all(|row| row.len() == size));
        let total: usize = TerrainType::ALL.iter().map(|&t| grid.count(t)).sum();
        assert_eq!(total, size * size);
    }
}

#[test]
fn test_all_ground_weights_give_all_ground() {
    let config = TerrainConfig {
        weights: [100, 0, 0, 0, 0],
        ..Default::default()
    };
    let grid = TerrainGrid::generate(&Seed::from_u64(3), 32, &config);
    assert_eq!(grid.count(TerrainType::Ground), 32 * 32);
}

#[test]
fn test_single_type_survives_smoothing() {
    let config = TerrainConfig {
        weights: [0, 0, 100, 0, 0],
        smoothing_passes: 5,
        ..Default::default()
    };
    let grid = TerrainGrid::generate(&Seed::from_u64(3), 16, &config);
    assert_eq!(grid.count(TerrainType::Liquid), 16 * 16);
}

#[test]
fn test_smoothing_clusters_terrain() {
    let seed = Seed::from_u64(11);
    let raw = TerrainGrid::generate(
        &seed,
        64,
        &TerrainConfig {
            smoothing_passes: 0,
            ..Default::default()
        },
    );
    let smoothed = TerrainGrid::generate(&seed, 64, &TerrainConfig::default());
    // Smoothing lets the majority type absorb scattered minorities.
    assert!(smoothed.count(TerrainType::Ground) > raw.count(TerrainType::Ground));
    assert!(same_neighbour_pairs(&smoothed) > same_neighbour_pairs(&raw));
}

#[test]
fn test_out_of_grid_is_never_ground() {
    let grid = TerrainGrid::generate(&Seed::from_u64(1), 8, &TerrainConfig::default());
    for (row, col) in [(-1, 0), (0, -1), (8, 0), (0, 8), (i64::MAX, 0), (0, i64::MIN)] {
        assert!(!grid.is_ground(row, col));
        assert_eq!(grid.get(row, col), None);
    }
}

fn same_neighbour_pairs(grid: &TerrainGrid) -> usize {
    let size = grid.size() as i64;
    let mut pairs = 0;
    for row in 0..size {
        for col in 0..size {
            let here = grid.get(row, col);
            if grid.get(row, col + 1) == here {
                pairs += 1;
            }
            if grid.get(row + 1, col) == here {
                pairs += 1;
            }
        }
    }
    pairs
}
