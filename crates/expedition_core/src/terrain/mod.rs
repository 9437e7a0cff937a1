pub use expedition_data::TerrainType;
use serde::{Deserialize, Serialize};

pub mod generation;

pub trait TerrainLogic {
    fn symbol(&self) -> char;
    fn is_scoring_bonus(&self) -> bool;
}

impl TerrainLogic for TerrainType {
    fn symbol(&self) -> char {
        match self {
            TerrainType::Ground => '.',
            TerrainType::Mountain => '▲',
            TerrainType::Liquid => '≈',
            TerrainType::Mushroom => '♣',
            TerrainType::RubyMountain => '◆',
        }
    }

    fn is_scoring_bonus(&self) -> bool {
        matches!(self, TerrainType::Mushroom)
    }
}

/// Square terrain grid, row-major. Immutable once generated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    size: usize,
    tiles: Vec<TerrainType>,
}

impl TerrainGrid {
    /// Grid of a single terrain type. Mostly useful for tests and tools.
    #[must_use]
    pub fn filled(size: usize, terrain_type: TerrainType) -> Self {
        Self {
            size,
            tiles: vec![terrain_type; size * size],
        }
    }

    /// Builds a grid from explicit rows. Returns `None` unless the rows form a square.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<TerrainType>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            size,
            tiles: rows.into_iter().flatten().collect(),
        })
    }

    #[inline(always)]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Terrain at `(row, col)`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, row: i64, col: i64) -> Option<TerrainType> {
        let size = self.size as i64;
        if row < 0 || col < 0 || row >= size || col >= size {
            return None;
        }
        Some(self.tiles[self.index(row as usize, col as usize)])
    }

    /// Out-of-grid lookups are never ground.
    #[inline]
    #[must_use]
    pub fn is_ground(&self, row: i64, col: i64) -> bool {
        self.get(row, col).is_some_and(TerrainType::is_ground)
    }

    #[must_use]
    pub fn count(&self, terrain_type: TerrainType) -> usize {
        self.tiles.iter().filter(|&&t| t == terrain_type).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[TerrainType]> {
        self.tiles.chunks(self.size.max(1))
    }

    /// One string per row using [`TerrainLogic::symbol`].
    #[must_use]
    pub fn ascii_rows(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(TerrainLogic::symbol).collect())
            .collect()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, terrain_type: TerrainType) {
        let idx = self.index(row, col);
        self.tiles[idx] = terrain_type;
    }
}
