//! Hash derivations shared by every evaluator of a game.
//!
//! The exact byte layouts below are the contract with independent verifiers:
//!
//! - positional hash: `SHA-256(u256(a) ‖ u256(b) ‖ u256(c))`, 96 bytes, each
//!   word big-endian and tightly packed;
//! - phase seed: `SHA-256(seed ‖ utf8(label))`;
//! - round seed: `SHA-256(seed ‖ utf8(label) ‖ u256(round))`.

use expedition_data::Seed;
use sha2::{Digest, Sha256};

/// A 256-bit hash or hash-derived seed, big-endian.
pub type Hash32 = [u8; 32];

pub const MAP_LABEL: &str = "map";
pub const TEAMS_LABEL: &str = "teams";
pub const SETUP_LABEL: &str = "setup";
pub const ROUND_LABEL: &str = "round";
pub const SPAWN_LABEL: &str = "spawn";

/// Big-endian 256-bit encoding of `value`.
#[inline]
#[must_use]
pub fn u256_be(value: u64) -> Hash32 {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

#[inline]
#[must_use]
pub fn sha256(bytes: &[u8]) -> Hash32 {
    Sha256::digest(bytes).into()
}

/// `H(a, b, c)` over three packed 256-bit words.
#[must_use]
pub fn hash_words(a: &Hash32, b: &Hash32, c: &Hash32) -> Hash32 {
    let mut hasher = Sha256::new();
    hasher.update(a);
    hasher.update(b);
    hasher.update(c);
    hasher.finalize().into()
}

/// `H(row, col, seed)` as used by terrain generation.
#[inline]
#[must_use]
pub fn positional_hash(row: u64, col: u64, seed: &Hash32) -> Hash32 {
    hash_words(&u256_be(row), &u256_be(col), seed)
}

#[must_use]
pub fn phase_seed(seed: &Seed, label: &str) -> Hash32 {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(label.as_bytes());
    hasher.finalize().into()
}

#[must_use]
pub fn round_seed(seed: &Seed, label: &str, round: u64) -> Hash32 {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(label.as_bytes());
    hasher.update(u256_be(round));
    hasher.finalize().into()
}

/// The 256-bit big-endian value of `hash`, reduced modulo `m`.
#[must_use]
pub fn mod_u256(hash: &Hash32, m: u64) -> u64 {
    debug_assert!(m > 0);
    let m = u128::from(m);
    let rem = hash
        .iter()
        .fold(0u128, |acc, &byte| ((acc << 8) | u128::from(byte)) % m);
    rem as u64
}
