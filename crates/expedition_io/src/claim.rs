//! Result claims and their verification.
//!
//! A claim is what an evaluator publishes after playing a seed: the counts,
//! the payout and the state digest. A verifier holding the same rules re-runs
//! the game from the seed and compares field by field.

use crate::error::Result;
use chrono::{DateTime, Utc};
use expedition_core::config::GameConfig;
use expedition_core::Simulation;
use expedition_data::Seed;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClaim {
    pub seed: Seed,
    pub rounds: u32,
    pub tiles_discovered: u64,
    pub mushrooms_found: u64,
    /// Decimal string so the full `u128` survives any JSON reader.
    #[serde(with = "decimal_u128")]
    pub payout: u128,
    pub state_digest: String,
    pub config_fingerprint: String,
    pub created_at: DateTime<Utc>,
}

impl GameClaim {
    /// Claim for the game as it currently stands.
    pub fn from_simulation(sim: &Simulation) -> Result<Self> {
        let result = sim.result()?;
        Ok(Self {
            seed: *sim.seed(),
            rounds: result.rounds,
            tiles_discovered: result.tiles_discovered,
            mushrooms_found: result.mushrooms_found,
            payout: result.payout,
            state_digest: sim.state_digest(),
            config_fingerprint: sim.config().fingerprint(),
            created_at: Utc::now(),
        })
    }
}

/// One field on which a claim disagrees with the re-executed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimMismatch {
    pub field: &'static str,
    pub claimed: String,
    pub actual: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub seed: Seed,
    pub mismatches: Vec<ClaimMismatch>,
}

impl VerificationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.mismatches.is_empty()
    }

    fn check<T: PartialEq + ToString>(&mut self, field: &'static str, claimed: T, actual: T) {
        if claimed != actual {
            self.mismatches.push(ClaimMismatch {
                field,
                claimed: claimed.to_string(),
                actual: actual.to_string(),
            });
        }
    }
}

/// Re-executes the claimed game under `config` and reports every mismatch.
///
/// A claim made under different rules fails on the fingerprint alone and is
/// not re-executed. A claim for more rounds than `max_rounds` is compared
/// against the completed game.
///
/// # Errors
/// Only when the game itself cannot be run, e.g. `config` is invalid.
pub fn verify_claim(claim: &GameClaim, config: &GameConfig) -> Result<VerificationReport> {
    let mut report = VerificationReport {
        seed: claim.seed,
        mismatches: Vec::new(),
    };

    let fingerprint = config.fingerprint();
    report.check("config_fingerprint", claim.config_fingerprint.clone(), fingerprint);
    if !report.is_valid() {
        tracing::warn!(seed = %claim.seed, "Claim made under different rules");
        return Ok(report);
    }

    let mut sim = Simulation::new(claim.seed, config.clone())?;
    sim.advance_rounds(claim.rounds)?;
    let result = sim.result()?;

    report.check("rounds", claim.rounds, result.rounds);
    report.check("tiles_discovered", claim.tiles_discovered, result.tiles_discovered);
    report.check("mushrooms_found", claim.mushrooms_found, result.mushrooms_found);
    report.check("payout", claim.payout, result.payout);
    report.check("state_digest", claim.state_digest.clone(), sim.state_digest());

    tracing::info!(
        seed = %claim.seed,
        valid = report.is_valid(),
        mismatches = report.mismatches.len(),
        "Claim verified"
    );
    Ok(report)
}

mod decimal_u128 {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
