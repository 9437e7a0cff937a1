use crate::config::SpawnConfig;
use crate::dice::Dice;
use crate::error::Result;
use expedition_data::{Agent, Direction, WorldPoint};

/// Whether a spawn event follows the round with zero-based index `round`.
#[must_use]
pub fn is_spawn_round(round: u32, config: &SpawnConfig) -> bool {
    let completed = round + 1;
    completed % config.spawn_interval == 0 && completed <= config.spawn_cutoff_round
}

/// Spawns one agent per team, in team order, at each team's home point.
///
/// Stops early once `max_agents` is reached. Each agent consumes one roll for
/// its heading and one for its vehicle type. Returns the indices of the new
/// agents.
pub fn spawn_wave(
    agents: &mut Vec<Agent>,
    dice: &mut Dice,
    team_spawns: &[WorldPoint],
    config: &SpawnConfig,
) -> Result<std::ops::Range<usize>> {
    let first = agents.len();
    for (team, &home) in team_spawns.iter().enumerate() {
        if agents.len() >= config.max_agents {
            break;
        }
        let direction = Direction::from_index(dice.roll_in_place(4)?);
        let pick = dice.roll_in_place(config.spawnable.len() as i64)?;
        let vehicle_type = config.spawnable[pick as usize];
        agents.push(Agent::new(home, direction, team as u8, vehicle_type));
    }
    Ok(first..agents.len())
}
