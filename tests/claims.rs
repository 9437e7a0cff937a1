mod common;

use common::GameBuilder;
use expedition_lib::model::claim::{verify_claim, GameClaim};
use expedition_io::{read_json_file, write_json_file};

fn played_claim(seed: u64) -> (GameClaim, expedition_lib::model::config::GameConfig) {
    let builder = GameBuilder::new().with_seed(seed).with_rounds(40);
    let config = builder.config();
    let mut sim = builder.build();
    sim.run_to_completion().unwrap();
    (GameClaim::from_simulation(&sim).unwrap(), config)
}

#[test]
fn test_claim_file_verifies() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("claim.json");
    let (claim, config) = played_claim(70);
    write_json_file(&claim, &path).unwrap();

    let loaded: GameClaim = read_json_file(&path).unwrap();
    assert_eq!(loaded, claim);
    assert!(verify_claim(&loaded, &config).unwrap().is_valid());
}

#[test]
fn test_claim_for_another_seed_fails() {
    let (mut claim, config) = played_claim(71);
    claim.seed = expedition_lib::model::Seed::from_u64(72);
    let report = verify_claim(&claim, &config).unwrap();
    assert!(!report.is_valid());
    assert!(report.mismatches.iter().any(|m| m.field == "state_digest"));
}

#[test]
fn test_forged_digest_fails() {
    let (mut claim, config) = played_claim(73);
    claim.state_digest = "00".repeat(32);
    let report = verify_claim(&claim, &config).unwrap();
    let fields: Vec<_> = report.mismatches.iter().map(|m| m.field).collect();
    assert_eq!(fields, vec!["state_digest"]);
}

#[test]
fn test_partial_game_claim_verifies() {
    let builder = GameBuilder::new().with_seed(74);
    let config = builder.config();
    let mut sim = builder.build();
    sim.advance_rounds(17).unwrap();
    let claim = GameClaim::from_simulation(&sim).unwrap();
    assert_eq!(claim.rounds, 17);
    assert!(verify_claim(&claim, &config).unwrap().is_valid());
}

#[test]
fn test_claim_under_changed_rules_fails() {
    let (claim, mut config) = played_claim(75);
    config.comms.repel_percent = 30;
    let report = verify_claim(&claim, &config).unwrap();
    assert_eq!(report.mismatches.len(), 1);
    assert_eq!(report.mismatches[0].field, "config_fingerprint");
}
