//! Headless game runner behind the `expedition` binary.
//!
//! Loads the rules, starts or resumes a game, plays it in batches and writes
//! the optional snapshot and claim files.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::model::config::GameConfig;
use crate::model::{GameResult, RunMetrics, Seed, Simulation};
use expedition_io::{load_state, save_state, write_json_file, GameClaim};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub seed: Seed,
    /// Rounds to play in this invocation; `None` plays to the end.
    pub rounds: Option<u32>,
    /// Rounds per batch between progress reports.
    pub batch: u32,
    pub config_path: Option<PathBuf>,
    /// Snapshot file: resumed from when it exists, written after the run.
    pub save_path: Option<PathBuf>,
    pub claim_path: Option<PathBuf>,
}

impl RunOptions {
    #[must_use]
    pub fn new(seed: Seed) -> Self {
        Self {
            seed,
            rounds: None,
            batch: 10,
            config_path: None,
            save_path: None,
            claim_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub seed: Seed,
    /// Round the game was resumed from, if a snapshot was loaded.
    pub resumed_from: Option<u32>,
    pub finished: bool,
    pub result: GameResult,
    pub state_digest: String,
    pub metrics: RunMetrics,
}

/// Rules from a TOML file, or the canonical defaults.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GameConfig::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(GameConfig::default()),
    }
}

/// Starts a fresh game, or resumes the one stored at `save_path`.
pub fn open_game(seed: Seed, config: GameConfig, save_path: Option<&Path>) -> Result<(Simulation, Option<u32>)> {
    if let Some(path) = save_path.filter(|p| p.exists()) {
        let snapshot = load_state(path)?;
        anyhow::ensure!(
            snapshot.seed == seed,
            "Snapshot {} belongs to seed {}, not {}",
            path.display(),
            snapshot.seed,
            seed
        );
        let round = snapshot.state.round;
        return Ok((snapshot.resume(config)?, Some(round)));
    }
    Ok((Simulation::new(seed, config)?, None))
}

/// Plays up to `rounds` rounds in batches of `batch`.
pub fn play(sim: &mut Simulation, rounds: Option<u32>, batch: u32) -> Result<u32> {
    let mut remaining = rounds.unwrap_or(u32::MAX);
    let batch = batch.max(1);
    let mut played = 0;
    while remaining > 0 && !sim.is_finished() {
        let step = sim.advance_rounds(batch.min(remaining))?;
        played += step;
        remaining -= step;
        tracing::info!(
            round = sim.round(),
            agents = sim.state().agents.len(),
            explored = sim.state().explored.len(),
            "Batch complete"
        );
    }
    Ok(played)
}

/// Runs one invocation end to end.
pub fn run(options: &RunOptions) -> Result<(Simulation, RunReport)> {
    let config = load_config(options.config_path.as_deref())?;
    let (mut sim, resumed_from) = open_game(options.seed, config, options.save_path.as_deref())?;

    play(&mut sim, options.rounds, options.batch)?;
    sim.metrics().log_summary();

    if let Some(path) = &options.save_path {
        save_state(&sim, path)?;
    }
    if let Some(path) = &options.claim_path {
        let claim = GameClaim::from_simulation(&sim)?;
        write_json_file(&claim, path)?;
        tracing::info!(path = %path.display(), "Claim written");
    }

    let report = RunReport {
        seed: options.seed,
        resumed_from,
        finished: sim.is_finished(),
        result: sim.result()?,
        state_digest: sim.state_digest(),
        metrics: *sim.metrics(),
    };
    Ok((sim, report))
}

/// Terrain rows with each agent drawn as its team number.
#[must_use]
pub fn render_map(sim: &Simulation) -> Vec<String> {
    let mut rows: Vec<Vec<char>> = sim
        .terrain()
        .ascii_rows()
        .iter()
        .map(|row| row.chars().collect())
        .collect();
    let mapper = sim.mapper();
    for agent in &sim.state().agents {
        let tile = mapper.world_to_tile(agent.position());
        if tile.row < 0 || tile.col < 0 {
            continue;
        }
        if let Some(cell) = rows
            .get_mut(tile.row as usize)
            .and_then(|row| row.get_mut(tile.col as usize))
        {
            *cell = char::from_digit(u32::from(agent.team % 10), 10).unwrap_or('@');
        }
    }
    rows.into_iter().map(|row| row.into_iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_respects_round_limit() {
        let mut sim = Simulation::new(Seed::from_u64(1), GameConfig::default()).unwrap();
        assert_eq!(play(&mut sim, Some(25), 10).unwrap(), 25);
        assert_eq!(sim.round(), 25);
        assert_eq!(play(&mut sim, None, 7).unwrap(), 75);
        assert!(sim.is_finished());
    }

    #[test]
    fn test_zero_batch_still_progresses() {
        let mut sim = Simulation::new(Seed::from_u64(1), GameConfig::default()).unwrap();
        assert_eq!(play(&mut sim, Some(3), 0).unwrap(), 3);
    }

    #[test]
    fn test_render_map_marks_agents() {
        let sim = Simulation::new(Seed::from_u64(1), GameConfig::default()).unwrap();
        let map = render_map(&sim);
        assert_eq!(map.len(), 64);
        assert!(map.iter().all(|row| row.chars().count() == 64));
        let marked: usize = map.iter().map(|row| row.chars().filter(|c| c.is_ascii_digit()).count()).sum();
        assert!(marked >= 1);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(load_config(Some(Path::new("/definitely/not/here.toml"))).is_err());
        assert_eq!(load_config(None).unwrap(), GameConfig::default());
    }
}
