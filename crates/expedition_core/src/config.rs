//! Rule tables for a game.
//!
//! Every constant that influences an outcome lives here and is passed
//! explicitly into the component that needs it. The `Default` impl is the
//! canonical rule set; claims record its fingerprint so that a verifier can
//! refuse results produced under different rules.
//!
//! ## Example `expedition.toml`
//!
//! ```toml
//! [world]
//! grid_size = 64
//! center_x = 0
//! bounds_margin = 2
//! traverse_padding = 150
//! max_rounds = 100
//!
//! [spawn]
//! num_teams = 1
//! spawn_interval = 5
//! spawn_cutoff_round = 100
//! max_agents = 21
//! spawnable = [0, 2]
//! ```

use serde::{Deserialize, Serialize};

/// Largest per-round move a vehicle may have, in fixed-point units.
pub const MAX_SPEED: i64 = 100_000;
/// Largest comms range, in fixed-point units. Keeps the squared-range band
/// tests inside `i64`.
pub const MAX_COMMS_RANGE: i64 = 1_000_000;

/// Grid and coordinate-space parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WorldConfig {
    pub grid_size: usize,
    /// Horizontal camera offset baked into world coordinates, in pixels.
    pub center_x: i64,
    /// Tiles closer than this to an edge are out of bounds for movement.
    pub bounds_margin: i64,
    /// Look-ahead distance, in speed units, for the traversability probe.
    pub traverse_padding: i64,
    pub max_rounds: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid_size: 64,
            center_x: 0,
            bounds_margin: 2,
            traverse_padding: 150,
            max_rounds: 100,
        }
    }
}

/// Terrain generation weights and smoothing rules.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Percent weight per terrain type, in `TerrainType::ALL` order.
    pub weights: [u64; 5],
    pub smoothing_passes: u64,
    /// Tie-break rolls below this keep the current type.
    pub tie_keep_threshold: u64,
    /// Largest count gap still decided by a tie-break roll.
    pub tie_margin: usize,
    /// Ruby tiles with at least this many ruby tiles around (self included) never change.
    pub ruby_keep_count: usize,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            weights: [50, 20, 17, 10, 3],
            smoothing_passes: 2,
            tie_keep_threshold: 40,
            tie_margin: 2,
            ruby_keep_count: 2,
        }
    }
}

/// One row of the vehicle table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VehicleSpec {
    pub name: String,
    /// Distance moved per step, multiplied into the direction vector.
    pub speed: i64,
    /// Awareness radius in fixed-point units; zero means no flocking.
    pub comms_range: i64,
}

impl VehicleSpec {
    fn new(name: &str, speed: i64, comms_range: i64) -> Self {
        Self {
            name: name.to_string(),
            speed,
            comms_range,
        }
    }

    #[must_use]
    pub fn has_comms(&self) -> bool {
        self.comms_range > 0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct VehicleConfig {
    pub table: Vec<VehicleSpec>,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            table: vec![
                VehicleSpec::new("rover", 300, 0),
                VehicleSpec::new("crawler", 200, 0),
                VehicleSpec::new("relay", 250, 12_000),
                VehicleSpec::new("skimmer", 450, 0),
                VehicleSpec::new("beacon", 150, 16_000),
            ],
        }
    }
}

impl VehicleConfig {
    /// Spec for a vehicle type. Unknown types fall back to the first row.
    #[must_use]
    pub fn spec(&self, vehicle_type: u8) -> &VehicleSpec {
        self.table
            .get(usize::from(vehicle_type))
            .unwrap_or(&self.table[0])
    }
}

/// Flocking thresholds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CommsConfig {
    /// Squared distance under which two points count as overlapping.
    pub overlap_distance_sq: i64,
    /// Closer than this percentage of range repels.
    pub repel_percent: i64,
    /// Farther than this percentage of range attracts.
    pub attract_percent: i64,
}

impl Default for CommsConfig {
    fn default() -> Self {
        Self {
            overlap_distance_sq: 100,
            repel_percent: 40,
            attract_percent: 80,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SpawnConfig {
    pub num_teams: u8,
    pub spawn_interval: u32,
    /// Last round after which spawning may still happen.
    pub spawn_cutoff_round: u32,
    pub max_agents: usize,
    /// Vehicle types a spawn event draws from.
    pub spawnable: Vec<u8>,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            num_teams: 3,
            spawn_interval: 5,
            spawn_cutoff_round: 100,
            max_agents: 63,
            spawnable: vec![0, 1, 2, 3, 4],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Payout units per discovered tile. Totals are computed in `u128`.
    pub payout_per_tile: u64,
    pub payout_per_mushroom: u64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            payout_per_tile: 1_000_000_000_000_000,
            payout_per_mushroom: 5_000_000_000_000_000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub terrain: TerrainConfig,
    pub vehicles: VehicleConfig,
    pub comms: CommsConfig,
    pub spawn: SpawnConfig,
    pub scoring: ScoringConfig,
}

impl GameConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if every table is usable, or `Err` describing the
    /// first failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // World validation
        let size = self.world.grid_size;
        anyhow::ensure!(size > 0, "Grid size must be positive");
        anyhow::ensure!(size <= 4096, "Grid size too large (max 4096)");
        anyhow::ensure!(
            self.world.bounds_margin >= 0,
            "Bounds margin must be non-negative"
        );
        anyhow::ensure!(
            (self.world.bounds_margin as usize) * 2 < size,
            "Bounds margin leaves no playable tiles"
        );
        anyhow::ensure!(
            self.world.traverse_padding >= 0,
            "Traverse padding must be non-negative"
        );

        // Terrain validation
        anyhow::ensure!(
            self.terrain.weights.iter().sum::<u64>() == 100,
            "Terrain weights must sum to 100"
        );
        anyhow::ensure!(
            self.terrain.tie_keep_threshold <= 100,
            "Tie keep threshold must be in [0, 100]"
        );

        // Vehicle validation
        anyhow::ensure!(
            !self.vehicles.table.is_empty(),
            "Vehicle table must not be empty"
        );
        anyhow::ensure!(
            self.vehicles.table.len() <= usize::from(u8::MAX) + 1,
            "Vehicle table too large (max 256)"
        );
        for spec in &self.vehicles.table {
            anyhow::ensure!(
                (0..=MAX_SPEED).contains(&spec.speed),
                "Vehicle {} speed must be in [0, {}]",
                spec.name,
                MAX_SPEED
            );
            anyhow::ensure!(
                (0..=MAX_COMMS_RANGE).contains(&spec.comms_range),
                "Vehicle {} comms range must be in [0, {}]",
                spec.name,
                MAX_COMMS_RANGE
            );
        }

        // Comms validation
        anyhow::ensure!(
            self.comms.overlap_distance_sq >= 0,
            "Overlap distance must be non-negative"
        );
        anyhow::ensure!(
            0 <= self.comms.repel_percent
                && self.comms.repel_percent <= self.comms.attract_percent
                && self.comms.attract_percent <= 100,
            "Comms percentages must satisfy 0 <= repel <= attract <= 100"
        );

        // Spawn validation
        anyhow::ensure!(self.spawn.num_teams > 0, "At least one team is required");
        anyhow::ensure!(
            self.spawn.spawn_interval > 0,
            "Spawn interval must be positive"
        );
        anyhow::ensure!(
            !self.spawn.spawnable.is_empty(),
            "Spawnable vehicle set must not be empty"
        );
        for &v in &self.spawn.spawnable {
            anyhow::ensure!(
                usize::from(v) < self.vehicles.table.len(),
                "Spawnable vehicle type {} is not in the vehicle table",
                v
            );
        }

        Ok(())
    }

    /// Loads and validates configuration from TOML text.
    ///
    /// Missing sections and fields fall back to the canonical defaults.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// SHA-256 of the canonical JSON encoding, hex encoded.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        // Struct fields serialize in declaration order, so this is stable.
        let json = serde_json::to_vec(self).expect("config is plain data and always serializes");
        hasher.update(&json);
        hex::encode(hasher.finalize())
    }
}
