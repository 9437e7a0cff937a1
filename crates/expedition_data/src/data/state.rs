use super::agent::Agent;
use super::explored::ExploredTileSet;
use serde::{Deserialize, Serialize};

/// Mutable part of a game: everything that changes from round to round.
///
/// Terrain and team spawn points are pure functions of the seed and are not
/// stored here, so a persisted state is small and can be resumed anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Number of completed rounds.
    pub round: u32,
    pub agents: Vec<Agent>,
    pub explored: ExploredTileSet,
}

impl SimulationState {
    #[must_use]
    pub fn new(grid_size: usize) -> Self {
        Self {
            round: 0,
            agents: Vec::new(),
            explored: ExploredTileSet::new(grid_size),
        }
    }
}

/// Final score of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub rounds: u32,
    pub agent_count: usize,
    pub tiles_discovered: u64,
    pub mushrooms_found: u64,
    pub payout: u128,
}
