//! Per-agent update rules.
//!
//! Each system works on borrowed data handed out by the simulation driver:
//! the terrain through a [`CoordinateMapper`], the rule tables through
//! [`GameConfig`], and the agent list itself. None of them keep state between
//! calls.

use crate::config::GameConfig;
use crate::coords::CoordinateMapper;
use expedition_data::WorldPoint;

pub mod flocking;
pub mod fog;
pub mod movement;
pub mod spawn;

/// Number of distinct actions a round's roll selects from.
pub const ACTION_SIDES: i64 = 16;

/// Read-only inputs shared by every agent step in a round.
pub struct StepContext<'a> {
    pub mapper: CoordinateMapper<'a>,
    pub config: &'a GameConfig,
    /// Home point per team, indexed by team id.
    pub team_spawns: &'a [WorldPoint],
}

/// What a single agent step did. Only used for metrics and tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved forward onto valid terrain.
    Advanced,
    /// Blocked; reversed and moved without re-checking the destination.
    TurnedAround,
    TurnedLeft,
    TurnedRight,
    /// Flocking forces cancelled out.
    Idle,
}
