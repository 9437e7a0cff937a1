//! Between-round snapshots.
//!
//! A snapshot is the seed, the fingerprint of the rules it was played under,
//! and the mutable [`SimulationState`]. Terrain and team spawns are rebuilt
//! from the seed on load. A SHA-256 checksum over the state guards against
//! hand-edited or truncated files.

use crate::error::{IoError, Result};
use crate::serialization::{read_json_file, to_json, write_json_file};
use expedition_core::config::GameConfig;
use expedition_core::Simulation;
use expedition_data::{Seed, SimulationState};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Bumped whenever the snapshot layout changes.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub version: u32,
    pub seed: Seed,
    pub config_fingerprint: String,
    pub state: SimulationState,
    /// Hex SHA-256 of the state's compact JSON.
    pub checksum: String,
}

fn state_checksum(state: &SimulationState) -> Result<String> {
    let json = to_json(state)?;
    Ok(hex::encode(Sha256::digest(json.as_bytes())))
}

impl StateSnapshot {
    pub fn capture(sim: &Simulation) -> Result<Self> {
        let state = sim.state().clone();
        Ok(Self {
            version: SNAPSHOT_VERSION,
            seed: *sim.seed(),
            config_fingerprint: sim.config().fingerprint(),
            checksum: state_checksum(&state)?,
            state,
        })
    }

    /// Checks version and checksum.
    pub fn verify_integrity(&self) -> Result<()> {
        if self.version != SNAPSHOT_VERSION {
            return Err(IoError::validation(format!(
                "Unsupported snapshot version {} (expected {})",
                self.version, SNAPSHOT_VERSION
            )));
        }
        if state_checksum(&self.state)? != self.checksum {
            return Err(IoError::validation("Snapshot checksum mismatch"));
        }
        Ok(())
    }

    /// Rebuilds the game under `config`, which must be the rule set the
    /// snapshot was taken with.
    pub fn resume(self, config: GameConfig) -> Result<Simulation> {
        let fingerprint = config.fingerprint();
        if fingerprint != self.config_fingerprint {
            return Err(IoError::validation(format!(
                "Snapshot was taken under config {}, not {}",
                self.config_fingerprint, fingerprint
            )));
        }
        Ok(Simulation::resume(self.seed, config, self.state)?)
    }
}

/// Writes a snapshot of `sim`. Paths ending in `.gz` are gzip compressed.
pub fn save_state<P: AsRef<Path>>(sim: &Simulation, path: P) -> Result<()> {
    let snapshot = StateSnapshot::capture(sim)?;
    write_json_file(&snapshot, &path)?;
    tracing::info!(
        path = %path.as_ref().display(),
        round = snapshot.state.round,
        "State saved"
    );
    Ok(())
}

/// Reads a snapshot and checks its integrity.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<StateSnapshot> {
    let snapshot: StateSnapshot = read_json_file(&path)?;
    snapshot
        .verify_integrity()
        .map_err(|e| e.with_context(format!("loading {:?}", path.as_ref())))?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.world.max_rounds = 12;
        config
    }

    #[test]
    fn test_save_load_resume_matches_uninterrupted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json.gz");

        let mut sim = Simulation::new(Seed::from_u64(17), short_config()).unwrap();
        sim.advance_rounds(5).unwrap();
        save_state(&sim, &path).unwrap();

        let mut resumed = load_state(&path).unwrap().resume(short_config()).unwrap();
        assert_eq!(resumed.state(), sim.state());

        sim.run_to_completion().unwrap();
        resumed.run_to_completion().unwrap();
        assert_eq!(resumed.state_digest(), sim.state_digest());
    }

    #[test]
    fn test_tampered_state_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        let sim = Simulation::new(Seed::from_u64(17), short_config()).unwrap();

        let mut snapshot = StateSnapshot::capture(&sim).unwrap();
        snapshot.state.agents[0].x += 1;
        write_json_file(&snapshot, &path).unwrap();

        let err = load_state(&path).unwrap_err();
        assert!(err.to_string().contains("checksum"));
    }

    #[test]
    fn test_forged_explored_set_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        let sim = Simulation::new(Seed::from_u64(17), short_config()).unwrap();

        let mut json = serde_json::to_value(StateSnapshot::capture(&sim).unwrap()).unwrap();
        json["state"]["explored"]["words"] = serde_json::json!([]);
        json["state"]["explored"]["count"] = serde_json::json!(4000);
        std::fs::write(&path, serde_json::to_vec(&json).unwrap()).unwrap();

        assert!(load_state(&path).is_err());
    }

    #[test]
    fn test_resume_under_other_rules_is_rejected() {
        let sim = Simulation::new(Seed::from_u64(17), short_config()).unwrap();
        let snapshot = StateSnapshot::capture(&sim).unwrap();
        let err = snapshot.resume(GameConfig::default()).unwrap_err();
        assert!(matches!(err, IoError::Validation(_)));
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let sim = Simulation::new(Seed::from_u64(17), short_config()).unwrap();
        let mut snapshot = StateSnapshot::capture(&sim).unwrap();
        snapshot.version = SNAPSHOT_VERSION + 1;
        assert!(snapshot.verify_integrity().is_err());
    }
}
