//! Facade over the workspace crates so the binary and the integration tests
//! have one import path.

pub use expedition_core::{
    init_logging, CoordinateMapper, Dice, DiceError, RunMetrics, Simulation, SimulationError,
    TerrainGrid, TerrainLogic,
};
pub use expedition_data::{
    Agent, AgentSnapshot, Direction, ExploredTileSet, GameResult, Seed, SimulationState,
    TerrainType, TileCoord, WorldPoint,
};

pub mod config {
    pub use expedition_core::config::*;
}
pub mod coords {
    pub use expedition_core::coords::*;
}
pub mod dice {
    pub use expedition_core::dice::*;
}
pub mod hash {
    pub use expedition_core::hash::*;
}
pub mod systems {
    pub use expedition_core::systems::*;
}
pub mod terrain {
    pub use expedition_core::terrain::*;
}
pub mod persistence {
    pub use expedition_io::persistence::*;
}
pub mod claim {
    pub use expedition_io::claim::*;
}
