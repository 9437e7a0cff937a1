use super::StepOutcome;
use crate::coords::CoordinateMapper;
use expedition_data::Agent;

/// Moves `speed` steps along the agent's heading.
///
/// If the destination is out of bounds or not traversable the agent reverses
/// and moves the same distance from its original position. That fallback
/// destination is deliberately not validated and can leave the agent on
/// non-ground terrain or off the grid.
pub fn advance(agent: &mut Agent, speed: i64, mapper: &CoordinateMapper) -> StepOutcome {
    let origin = agent.position();
    let (dx, dy) = agent.direction.vector();
    let candidate = origin.offset(dx, dy, speed);

    if mapper.is_within_bounds(mapper.world_to_tile(candidate))
        && mapper.is_traversable(candidate, agent.direction)
    {
        agent.set_position(candidate);
        return StepOutcome::Advanced;
    }

    agent.direction = agent.direction.reverse();
    let (rx, ry) = agent.direction.vector();
    agent.set_position(origin.offset(rx, ry, speed));
    tracing::trace!(x = agent.x, y = agent.y, "Blocked move reversed");
    StepOutcome::TurnedAround
}

/// Random-walk state machine for vehicles without comms.
///
/// `action` is the round's roll in `0..16`: ten forward faces, three left,
/// three right.
pub fn wander(agent: &mut Agent, action: u64, speed: i64, mapper: &CoordinateMapper) -> StepOutcome {
    match action {
        0..=9 => advance(agent, speed, mapper),
        10..=12 => {
            agent.direction = agent.direction.turn_left();
            StepOutcome::TurnedLeft
        }
        _ => {
            agent.direction = agent.direction.turn_right();
            StepOutcome::TurnedRight
        }
    }
}
