//! The game driver.
//!
//! A [`Simulation`] owns everything a game needs: the seed, the rule tables,
//! the generated terrain, the derived team spawn points and the mutable
//! [`SimulationState`]. Rounds are the unit of progress; between rounds the
//! state can be persisted and later handed back to [`Simulation::resume`].

use crate::config::GameConfig;
use crate::coords::CoordinateMapper;
use crate::metrics::RunMetrics;
use crate::terrain::TerrainGrid;
use expedition_data::{AgentSnapshot, Seed, SimulationState, WorldPoint};

pub mod finalize;
pub mod init;
pub mod update;

#[derive(Debug, Clone)]
pub struct Simulation {
    seed: Seed,
    config: GameConfig,
    terrain: TerrainGrid,
    team_spawns: Vec<WorldPoint>,
    state: SimulationState,
    metrics: RunMetrics,
}

impl Simulation {
    #[must_use]
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn terrain(&self) -> &TerrainGrid {
        &self.terrain
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper<'_> {
        CoordinateMapper::new(&self.terrain, &self.config.world)
    }

    #[must_use]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Home point of each team, indexed by team id.
    #[must_use]
    pub fn team_spawns(&self) -> &[WorldPoint] {
        &self.team_spawns
    }

    #[must_use]
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.round >= self.config.world.max_rounds
    }

    /// Flat agent table for renderers.
    #[must_use]
    pub fn agent_snapshots(&self) -> Vec<AgentSnapshot> {
        self.state
            .agents
            .iter()
            .enumerate()
            .map(|(i, agent)| agent.snapshot(i))
            .collect()
    }

    /// Consumes the driver, keeping only the persistable part.
    #[must_use]
    pub fn into_state(self) -> SimulationState {
        self.state
    }
}
