//! Run counters and structured logging setup.
//!
//! Counters are plain integers owned by the simulation; a game is sequential,
//! so nothing here needs atomics. They never feed back into the outcome.

use crate::systems::StepOutcome;
use serde::Serialize;

/// Counters collected while a game runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunMetrics {
    pub rounds: u64,
    pub advances: u64,
    pub turn_arounds: u64,
    pub turns: u64,
    pub idle_steps: u64,
    pub spawns: u64,
}

impl RunMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one agent step.
    pub fn record(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Advanced => self.advances += 1,
            StepOutcome::TurnedAround => self.turn_arounds += 1,
            StepOutcome::TurnedLeft | StepOutcome::TurnedRight => self.turns += 1,
            StepOutcome::Idle => self.idle_steps += 1,
        }
    }

    pub fn record_round(&mut self, spawned: usize) {
        self.rounds += 1;
        self.spawns += spawned as u64;
    }

    /// Total agent steps recorded.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.advances + self.turn_arounds + self.turns + self.idle_steps
    }

    pub fn log_summary(&self) {
        tracing::info!(
            rounds = self.rounds,
            advances = self.advances,
            turn_arounds = self.turn_arounds,
            turns = self.turns,
            idle = self.idle_steps,
            spawns = self.spawns,
            "Run metrics"
        );
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honours `RUST_LOG`; defaults to `info`. Safe to call more than once.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
