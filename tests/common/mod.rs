pub mod macros;

use expedition_lib::model::config::GameConfig;
use expedition_lib::model::{Seed, Simulation};

#[allow(dead_code)]
pub struct GameBuilder {
    seed: Seed,
    config: GameConfig,
}

#[allow(dead_code)]
impl GameBuilder {
    pub fn new() -> Self {
        Self {
            seed: Seed::from_u64(0),
            config: GameConfig::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Seed::from_u64(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut GameConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_grid(mut self, size: usize) -> Self {
        self.config.world.grid_size = size;
        self
    }

    pub fn with_rounds(mut self, max_rounds: u32) -> Self {
        self.config.world.max_rounds = max_rounds;
        self
    }

    pub fn with_teams(mut self, num_teams: u8) -> Self {
        self.config.spawn.num_teams = num_teams;
        self
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn config(&self) -> GameConfig {
        self.config.clone()
    }

    pub fn build(self) -> Simulation {
        Simulation::new(self.seed, self.config).expect("Failed to create game in test builder")
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
