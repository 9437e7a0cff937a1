use crate::coords::CoordinateMapper;
use expedition_data::{ExploredTileSet, TileCoord, WorldPoint};

/// Marks the 3×3 tile neighbourhood around `point` as explored.
///
/// Tiles outside the grid are skipped. Returns how many tiles were new.
pub fn reveal_around(explored: &mut ExploredTileSet, mapper: &CoordinateMapper, point: WorldPoint) -> usize {
    let center = mapper.world_to_tile(point);
    let mut revealed = 0;
    for dr in -1..=1 {
        for dc in -1..=1 {
            if explored.insert(TileCoord::new(center.row + dr, center.col + dc)) {
                revealed += 1;
            }
        }
    }
    revealed
}
