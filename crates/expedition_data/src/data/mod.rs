//! Core data structures for the Expedition simulation.

pub mod agent;
pub mod coords;
pub mod explored;
pub mod seed;
pub mod state;
pub mod terrain;
