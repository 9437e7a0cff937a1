//! Comms-equipped vehicles move as a loose web around their team's home.
//!
//! Every connection (the home point and each other comms vehicle of the same
//! team) contributes a small integer force. Too close repels, too far
//! attracts, and the band in between is neutral so the web settles. The summed
//! force only picks a heading; the actual move is the ordinary forward step.

use super::movement::advance;
use super::{StepContext, StepOutcome};
use crate::config::{CommsConfig, VehicleConfig};
use expedition_data::{Agent, Direction, WorldPoint};

/// Force contributed by one connection at `to` on an agent at `from`.
#[must_use]
pub fn connection_force(
    from: WorldPoint,
    to: WorldPoint,
    range: i64,
    action: u64,
    comms: &CommsConfig,
) -> (i64, i64) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let dist_sq = from.distance_sq(to);

    if dist_sq < comms.overlap_distance_sq {
        // Stacked on the connection: push away along the rolled heading.
        let (jx, jy) = Direction::from_index(action % 4).vector();
        return (-jx.signum(), -jy.signum());
    }

    let range_sq = range * range;
    if dist_sq > range_sq {
        return (0, 0);
    }

    // dist < range * p / 100  <=>  dist² * 100² < range² * p²
    let scaled = dist_sq * 100 * 100;
    if scaled < range_sq * comms.repel_percent * comms.repel_percent {
        (-dx.signum(), -dy.signum())
    } else if scaled > range_sq * comms.attract_percent * comms.attract_percent {
        (dx.signum(), dy.signum())
    } else {
        (0, 0)
    }
}

/// Summed force on `agents[index]` from its home and same-team comms peers.
///
/// Peers are read in list order at their current positions, so peers updated
/// earlier in the round are seen where they moved to.
#[must_use]
pub fn flocking_force(
    index: usize,
    agents: &[Agent],
    home: WorldPoint,
    action: u64,
    vehicles: &VehicleConfig,
    comms: &CommsConfig,
) -> (i64, i64) {
    let agent = &agents[index];
    let range = vehicles.spec(agent.vehicle_type).comms_range;
    let from = agent.position();

    let (mut fx, mut fy) = connection_force(from, home, range, action, comms);
    for (j, peer) in agents.iter().enumerate() {
        if j == index || peer.team != agent.team || !vehicles.spec(peer.vehicle_type).has_comms() {
            continue;
        }
        let (px, py) = connection_force(from, peer.position(), range, action, comms);
        fx += px;
        fy += py;
    }
    (fx, fy)
}

/// One flocking step for `agents[index]`.
pub fn flock(index: usize, agents: &mut [Agent], action: u64, ctx: &StepContext) -> StepOutcome {
    let config = ctx.config;
    let team = usize::from(agents[index].team);
    let Some(&home) = ctx.team_spawns.get(team) else {
        return StepOutcome::Idle;
    };

    let (fx, fy) = flocking_force(index, agents, home, action, &config.vehicles, &config.comms);
    if fx == 0 && fy == 0 {
        return StepOutcome::Idle;
    }

    let agent = &mut agents[index];
    agent.direction = Direction::from_quadrant(fx, fy);
    let speed = config.vehicles.spec(agent.vehicle_type).speed;
    advance(agent, speed, &ctx.mapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::coords::CoordinateMapper;
    use crate::terrain::TerrainGrid;
    use expedition_data::{TerrainType, TileCoord};

    const RELAY: u8 = 2;
    const ROVER: u8 = 0;

    fn comms() -> CommsConfig {
        CommsConfig::default()
    }

    #[test]
    fn test_overlap_uses_rolled_heading() {
        let p = WorldPoint::new(1_000, 1_000);
        // Action 1 -> East (2, 1): push is (-1, -1).
        assert_eq!(connection_force(p, p, 12_000, 1, &comms()), (-1, -1));
        // Action 4 wraps to North (2, -1): push is (-1, 1).
        assert_eq!(connection_force(p, p, 12_000, 4, &comms()), (-1, 1));
        // Within overlap distance but not identical.
        let near = WorldPoint::new(1_005, 1_005);
        assert_eq!(connection_force(p, near, 12_000, 2, &comms()), (1, -1));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let from = WorldPoint::new(0, 0);
        let to = WorldPoint::new(12_001, 0);
        assert_eq!(connection_force(from, to, 12_000, 0, &comms()), (0, 0));
    }

    #[test]
    fn test_bands() {
        let from = WorldPoint::new(0, 0);
        let range = 10_000;
        // 0.4 * range = 4_000, 0.8 * range = 8_000.
        assert_eq!(connection_force(from, WorldPoint::new(3_999, 0), range, 0, &comms()), (-1, 0));
        assert_eq!(connection_force(from, WorldPoint::new(4_000, 0), range, 0, &comms()), (0, 0));
        assert_eq!(connection_force(from, WorldPoint::new(8_000, 0), range, 0, &comms()), (0, 0));
        assert_eq!(connection_force(from, WorldPoint::new(8_001, 0), range, 0, &comms()), (1, 0));
        assert_eq!(connection_force(from, WorldPoint::new(10_000, 0), range, 0, &comms()), (1, 0));
        assert_eq!(connection_force(from, WorldPoint::new(-3_000, 2_000), range, 0, &comms()), (1, -1));
    }

    #[test]
    fn test_force_ignores_other_teams_and_non_comms() {
        let config = GameConfig::default();
        let home = WorldPoint::new(0, 0);
        let agents = vec![
            Agent::new(WorldPoint::new(5_000, 0), Direction::North, 0, RELAY),
            // Other team relay, would repel.
            Agent::new(WorldPoint::new(5_100, 0), Direction::North, 1, RELAY),
            // Same team rover, would repel.
            Agent::new(WorldPoint::new(5_200, 0), Direction::North, 0, ROVER),
        ];
        // Only home counts: 5_000 is inside the neutral band of 12_000.
        assert_eq!(
            flocking_force(0, &agents, home, 0, &config.vehicles, &config.comms),
            (0, 0)
        );
    }

    #[test]
    fn test_force_sums_peers() {
        let config = GameConfig::default();
        let home = WorldPoint::new(0, 0);
        let agents = vec![
            Agent::new(WorldPoint::new(5_000, 0), Direction::North, 0, RELAY),
            Agent::new(WorldPoint::new(5_000, 2_000), Direction::North, 0, RELAY),
            Agent::new(WorldPoint::new(5_000, -2_000), Direction::North, 0, RELAY),
        ];
        // Two close peers above and below: x cancels to 0, y cancels to 0.
        assert_eq!(
            flocking_force(0, &agents, home, 0, &config.vehicles, &config.comms),
            (0, 0)
        );
        // Peer 1 sees home neutral; peers 0 and 2 are both above it and push (0, 1).
        assert_eq!(
            flocking_force(1, &agents, home, 0, &config.vehicles, &config.comms),
            (0, 2)
        );
    }

    #[test]
    fn test_flock_idle_when_balanced() {
        let config = GameConfig::default();
        let grid = TerrainGrid::filled(64, TerrainType::Ground);
        let mapper = CoordinateMapper::new(&grid, &config.world);
        let home = mapper.tile_center_to_world(TileCoord::new(32, 32));
        let spawns = [home];
        let ctx = StepContext {
            mapper,
            config: &config,
            team_spawns: &spawns,
        };
        // 6_000 from home: neutral band for a 12_000 range relay.
        let mut agents = vec![Agent::new(home.offset(1, 0, 6_000), Direction::South, 0, RELAY)];
        let before = agents[0];
        assert_eq!(flock(0, &mut agents, 3, &ctx), StepOutcome::Idle);
        assert_eq!(agents[0], before);
    }

    #[test]
    fn test_flock_heads_home_when_far() {
        let config = GameConfig::default();
        let grid = TerrainGrid::filled(64, TerrainType::Ground);
        let mapper = CoordinateMapper::new(&grid, &config.world);
        let home = mapper.tile_center_to_world(TileCoord::new(32, 32));
        let spawns = [home];
        let ctx = StepContext {
            mapper,
            config: &config,
            team_spawns: &spawns,
        };
        // Home lies up-left (dx < 0, dy < 0) at ~11_180: attract -> West.
        let start = home.offset(1, 0, 10_000).offset(0, 1, 5_000);
        let mut agents = vec![Agent::new(start, Direction::East, 0, RELAY)];
        assert_eq!(flock(0, &mut agents, 0, &ctx), StepOutcome::Advanced);
        assert_eq!(agents[0].direction, Direction::West);
        assert_eq!(agents[0].position(), start.offset(-2, -1, 250));
    }

    #[test]
    fn test_repel_from_home_on_spawn() {
        let config = GameConfig::default();
        let grid = TerrainGrid::filled(64, TerrainType::Ground);
        let mapper = CoordinateMapper::new(&grid, &config.world);
        let home = mapper.tile_center_to_world(TileCoord::new(32, 32));
        let spawns = [home];
        let ctx = StepContext {
            mapper,
            config: &config,
            team_spawns: &spawns,
        };
        let mut agents = vec![Agent::new(home, Direction::North, 0, RELAY)];
        // Action 6 -> South (-2, 1): push (1, -1) -> North.
        assert_eq!(flock(0, &mut agents, 6, &ctx), StepOutcome::Advanced);
        assert_eq!(agents[0].direction, Direction::North);
    }
}
