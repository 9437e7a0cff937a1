use super::Simulation;
use crate::config::GameConfig;
use crate::coords::CoordinateMapper;
use crate::dice::Dice;
use crate::error::{Result, SimulationError};
use crate::hash::{SETUP_LABEL, TEAMS_LABEL};
use crate::metrics::RunMetrics;
use crate::systems::fog::reveal_around;
use crate::systems::spawn::spawn_wave;
use crate::terrain::TerrainGrid;
use expedition_data::{Seed, SimulationState, TileCoord, WorldPoint};

/// Attempts per team before falling back to the grid centre.
pub const MAX_SPAWN_ATTEMPTS: u32 = 4096;

impl Simulation {
    /// Starts a new game: terrain, team spawn points, then the setup wave.
    ///
    /// # Errors
    /// [`SimulationError::InvalidConfig`] when `config` fails validation.
    pub fn new(seed: Seed, config: GameConfig) -> Result<Self> {
        validate(&config)?;
        let terrain = TerrainGrid::generate(&seed, config.world.grid_size, &config.terrain);
        let team_spawns = derive_team_spawns(&seed, &terrain, &config)?;

        let mut state = SimulationState::new(config.world.grid_size);
        let mut dice = Dice::from_phase(&seed, SETUP_LABEL);
        let spawned = spawn_wave(&mut state.agents, &mut dice, &team_spawns, &config.spawn)?;
        let mapper = CoordinateMapper::new(&terrain, &config.world);
        for agent in &state.agents {
            reveal_around(&mut state.explored, &mapper, agent.position());
        }

        let mut metrics = RunMetrics::new();
        metrics.spawns = spawned.len() as u64;

        tracing::info!(
            seed = %seed,
            teams = team_spawns.len(),
            agents = state.agents.len(),
            "Game started"
        );

        Ok(Self {
            seed,
            config,
            terrain,
            team_spawns,
            state,
            metrics,
        })
    }

    /// Continues a game from a persisted state.
    ///
    /// Terrain and team spawns are rebuilt from the seed, so resuming after
    /// `k` rounds and playing on is identical to never having stopped.
    ///
    /// # Errors
    /// [`SimulationError::InvalidConfig`] for a bad config and
    /// [`SimulationError::StateMismatch`] when the state cannot belong to a
    /// game played under `config`.
    pub fn resume(seed: Seed, config: GameConfig, state: SimulationState) -> Result<Self> {
        validate(&config)?;
        check_state(&state, &config)?;
        let terrain = TerrainGrid::generate(&seed, config.world.grid_size, &config.terrain);
        let team_spawns = derive_team_spawns(&seed, &terrain, &config)?;

        tracing::info!(
            seed = %seed,
            round = state.round,
            agents = state.agents.len(),
            "Game resumed"
        );

        Ok(Self {
            seed,
            config,
            terrain,
            team_spawns,
            state,
            metrics: RunMetrics::new(),
        })
    }
}

fn validate(config: &GameConfig) -> Result<()> {
    config
        .validate()
        .map_err(|e| SimulationError::invalid_config(format!("{e:#}")))
}

fn check_state(state: &SimulationState, config: &GameConfig) -> Result<()> {
    if state.explored.grid_size() != config.world.grid_size {
        return Err(SimulationError::state_mismatch(format!(
            "explored set is for a {} grid, config has {}",
            state.explored.grid_size(),
            config.world.grid_size
        )));
    }
    if state.round > config.world.max_rounds {
        return Err(SimulationError::state_mismatch(format!(
            "round {} is past max_rounds {}",
            state.round, config.world.max_rounds
        )));
    }
    if state.agents.len() > config.spawn.max_agents {
        return Err(SimulationError::state_mismatch(format!(
            "{} agents exceed max_agents {}",
            state.agents.len(),
            config.spawn.max_agents
        )));
    }
    for (i, agent) in state.agents.iter().enumerate() {
        if agent.team >= config.spawn.num_teams {
            return Err(SimulationError::state_mismatch(format!(
                "agent {i} belongs to unknown team {}",
                agent.team
            )));
        }
        if usize::from(agent.vehicle_type) >= config.vehicles.table.len() {
            return Err(SimulationError::state_mismatch(format!(
                "agent {i} has unknown vehicle type {}",
                agent.vehicle_type
            )));
        }
    }
    Ok(())
}

/// Home point per team, drawn from the `"teams"` dice.
///
/// Each team rolls a row and a column inside the bounds margin until it hits
/// ground. After [`MAX_SPAWN_ATTEMPTS`] misses it settles on the grid centre.
pub fn derive_team_spawns(
    seed: &Seed,
    terrain: &TerrainGrid,
    config: &GameConfig,
) -> Result<Vec<WorldPoint>> {
    let mapper = CoordinateMapper::new(terrain, &config.world);
    let size = terrain.size() as i64;
    let margin = config.world.bounds_margin;
    let span = size - 2 * margin;
    let mut dice = Dice::from_phase(seed, TEAMS_LABEL);

    let mut spawns = Vec::with_capacity(usize::from(config.spawn.num_teams));
    for team in 0..config.spawn.num_teams {
        let mut home = None;
        for _ in 0..MAX_SPAWN_ATTEMPTS {
            let row = margin + dice.roll_in_place(span)? as i64;
            let col = margin + dice.roll_in_place(span)? as i64;
            if terrain.is_ground(row, col) {
                home = Some(TileCoord::new(row, col));
                break;
            }
        }
        let tile = home.unwrap_or_else(|| {
            tracing::warn!(team, "No ground found for team spawn, using grid centre");
            TileCoord::new(size / 2, size / 2)
        });
        spawns.push(mapper.tile_center_to_world(tile));
    }
    Ok(spawns)
}
