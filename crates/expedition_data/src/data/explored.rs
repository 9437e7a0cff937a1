use super::coords::TileCoord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fog-of-war record: every tile some agent has been adjacent to.
///
/// Backed by a fixed bitmap over the square grid so marking never allocates.
/// Coordinates outside the grid are silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawExploredTileSet")]
pub struct ExploredTileSet {
    size: usize,
    words: Vec<u64>,
    count: usize,
}

/// Persisted form, checked before it becomes an [`ExploredTileSet`].
#[derive(Deserialize)]
struct RawExploredTileSet {
    size: usize,
    words: Vec<u64>,
    count: usize,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExploredSetError {
    #[error("grid size {0} is too large")]
    Oversized(usize),
    #[error("bitmap has {actual} words, a {size}x{size} grid needs {expected}")]
    WordCount {
        size: usize,
        expected: usize,
        actual: usize,
    },
    #[error("stored count {stored} does not match the {actual} marked tiles")]
    Count { stored: usize, actual: usize },
    #[error("bitmap marks cells outside the grid")]
    StrayBits,
}

impl TryFrom<RawExploredTileSet> for ExploredTileSet {
    type Error = ExploredSetError;

    fn try_from(raw: RawExploredTileSet) -> Result<Self, Self::Error> {
        let cells = raw
            .size
            .checked_mul(raw.size)
            .ok_or(ExploredSetError::Oversized(raw.size))?;
        let expected = cells.div_ceil(64);
        if raw.words.len() != expected {
            return Err(ExploredSetError::WordCount {
                size: raw.size,
                expected,
                actual: raw.words.len(),
            });
        }
        if cells % 64 != 0 {
            if let Some(&last) = raw.words.last() {
                if last >> (cells % 64) != 0 {
                    return Err(ExploredSetError::StrayBits);
                }
            }
        }
        let actual: usize = raw.words.iter().map(|w| w.count_ones() as usize).sum();
        if actual != raw.count {
            return Err(ExploredSetError::Count {
                stored: raw.count,
                actual,
            });
        }
        Ok(Self {
            size: raw.size,
            words: raw.words,
            count: raw.count,
        })
    }
}

impl ExploredTileSet {
    #[must_use]
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        Self {
            size,
            words: vec![0; cells.div_ceil(64)],
            count: 0,
        }
    }

    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.size
    }

    fn slot(&self, tile: TileCoord) -> Option<usize> {
        let size = self.size as i64;
        if tile.row < 0 || tile.col < 0 || tile.row >= size || tile.col >= size {
            return None;
        }
        Some(tile.row as usize * self.size + tile.col as usize)
    }

    /// Marks a tile. Returns `true` when it was not explored before.
    pub fn insert(&mut self, tile: TileCoord) -> bool {
        let Some(idx) = self.slot(tile) else {
            return false;
        };
        let mask = 1u64 << (idx % 64);
        let word = &mut self.words[idx / 64];
        if *word & mask != 0 {
            return false;
        }
        *word |= mask;
        self.count += 1;
        true
    }

    #[must_use]
    pub fn contains(&self, tile: TileCoord) -> bool {
        self.slot(tile)
            .is_some_and(|idx| self.words[idx / 64] & (1u64 << (idx % 64)) != 0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Explored tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = TileCoord> + '_ {
        let size = self.size;
        (0..size * size)
            .filter(move |&idx| self.words[idx / 64] & (1u64 << (idx % 64)) != 0)
            .map(move |idx| TileCoord::new((idx / size) as i64, (idx % size) as i64))
    }
}
