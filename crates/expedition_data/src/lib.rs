//! Core data structures shared by the Expedition simulation crates.
//!
//! Everything in here is plain data: no hashing, no randomness, no rules.
//! The simulation logic lives in `expedition_core`.

pub mod data;

pub use data::agent::{Agent, AgentSnapshot, Direction};
pub use data::coords::{TileCoord, WorldPoint};
pub use data::explored::{ExploredSetError, ExploredTileSet};
pub use data::seed::{Seed, SeedParseError};
pub use data::state::{GameResult, SimulationState};
pub use data::terrain::TerrainType;
