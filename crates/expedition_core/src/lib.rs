//! # Expedition Core
//!
//! The deterministic simulation engine for Expedition, an exploration game
//! whose outcome must be reproducible bit-for-bit by independent evaluators.
//!
//! This crate contains:
//! - Hash-chained dice drawing uniform values from a fixed seed
//! - Procedural terrain generation with cellular-automaton smoothing
//! - Isometric world/tile mapping in fixed-point integers
//! - Agent movement, flocking, spawning and fog-of-war systems
//! - The round-based simulation driver and scoring
//! - Metrics collection and structured logging
//!
//! ## Architecture
//!
//! Every value that influences an outcome is an integer. Randomness comes
//! only from [`dice::Dice`] streams keyed by the seed, a phase label and, for
//! per-round streams, the round number. Rule tables live in
//! [`config::GameConfig`] and are passed explicitly to each system.
//!
//! ## Example
//!
//! ```
//! use expedition_core::config::GameConfig;
//! use expedition_core::Simulation;
//! use expedition_data::Seed;
//!
//! let mut config = GameConfig::default();
//! config.world.max_rounds = 10;
//!
//! let mut sim = Simulation::new(Seed::from_u64(42), config).unwrap();
//! let result = sim.run_to_completion().unwrap();
//! assert_eq!(result.rounds, 10);
//! assert!(result.tiles_discovered > 0);
//! ```

/// Rule tables and their validation
pub mod config;
/// Fixed-point isometric coordinate mapping
pub mod coords;
/// Deterministic dice over a hash-chained entropy pool
pub mod dice;
/// Error types
pub mod error;
/// Hash derivations shared with independent verifiers
pub mod hash;
/// Run counters and logging setup
pub mod metrics;
/// The round-based game driver
pub mod simulation;
/// Per-agent update rules (movement, flocking, spawning, fog)
pub mod systems;
/// Terrain grid and generation
pub mod terrain;

pub use coords::CoordinateMapper;
pub use dice::Dice;
pub use error::{DiceError, Result, SimulationError};
pub use metrics::{init_logging, RunMetrics};
pub use simulation::Simulation;
pub use terrain::{TerrainGrid, TerrainLogic};
