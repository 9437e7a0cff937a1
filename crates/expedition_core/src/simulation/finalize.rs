use super::Simulation;
use crate::error::{Result, SimulationError};
use crate::terrain::TerrainLogic;
use expedition_data::GameResult;
use sha2::{Digest, Sha256};

impl Simulation {
    /// Explored tiles whose terrain earns the bonus payout.
    #[must_use]
    pub fn mushrooms_found(&self) -> u64 {
        self.state
            .explored
            .iter()
            .filter(|tile| {
                self.terrain
                    .get(tile.row, tile.col)
                    .is_some_and(|t| t.is_scoring_bonus())
            })
            .count() as u64
    }

    /// Scores the game as it stands.
    ///
    /// # Errors
    /// [`SimulationError::PayoutOverflow`] if the payout does not fit in `u128`.
    pub fn result(&self) -> Result<GameResult> {
        let tiles = self.state.explored.len() as u64;
        let mushrooms = self.mushrooms_found();
        let scoring = &self.config.scoring;

        let payout = u128::from(tiles)
            .checked_mul(u128::from(scoring.payout_per_tile))
            .and_then(|base| {
                u128::from(mushrooms)
                    .checked_mul(u128::from(scoring.payout_per_mushroom))
                    .and_then(|bonus| base.checked_add(bonus))
            })
            .ok_or(SimulationError::PayoutOverflow { tiles, mushrooms })?;

        Ok(GameResult {
            rounds: self.state.round,
            agent_count: self.state.agents.len(),
            tiles_discovered: tiles,
            mushrooms_found: mushrooms,
            payout,
        })
    }

    /// Hex SHA-256 of the full game state.
    ///
    /// Layout, all integers big-endian: `round: u32`, `agent_count: u64`,
    /// per agent `x: i64, y: i64, direction: u8, team: u8, vehicle_type: u8`,
    /// then `explored_count: u64` and each explored tile in row-major order
    /// as `row: u64, col: u64`.
    #[must_use]
    pub fn state_digest(&self) -> String {
        let state = &self.state;
        let mut hasher = Sha256::new();
        hasher.update(state.round.to_be_bytes());
        hasher.update((state.agents.len() as u64).to_be_bytes());
        for agent in &state.agents {
            hasher.update(agent.x.to_be_bytes());
            hasher.update(agent.y.to_be_bytes());
            hasher.update([agent.direction.index(), agent.team, agent.vehicle_type]);
        }
        hasher.update((state.explored.len() as u64).to_be_bytes());
        for tile in state.explored.iter() {
            hasher.update((tile.row as u64).to_be_bytes());
            hasher.update((tile.col as u64).to_be_bytes());
        }
        hex::encode(hasher.finalize())
    }
}
