use serde::{Deserialize, Serialize};

/// Terrain type for world tiles.
///
/// Declaration order is the weight-table order used by generation and by the
/// smoothing tie-break, so it must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TerrainType {
    /// Walkable open ground.
    #[default]
    Ground,
    /// Impassable rock.
    Mountain,
    /// Lakes and rivers.
    Liquid,
    /// Mushroom patch, worth a scoring bonus when explored.
    Mushroom,
    /// Rare ruby-bearing rock.
    RubyMountain,
}

impl TerrainType {
    /// All terrain types in table order.
    pub const ALL: [TerrainType; 5] = [
        TerrainType::Ground,
        TerrainType::Mountain,
        TerrainType::Liquid,
        TerrainType::Mushroom,
        TerrainType::RubyMountain,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// Position of this type in the weight table.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub fn is_ground(self) -> bool {
        self == TerrainType::Ground
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_index() {
        for (i, t) in TerrainType::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn test_only_ground_is_ground() {
        let ground: Vec<_> = TerrainType::ALL.iter().filter(|t| t.is_ground()).collect();
        assert_eq!(ground, vec![&TerrainType::Ground]);
    }
}
