mod common;

use common::GameBuilder;

#[test]
fn test_single_team_reaches_cap_exactly() {
    let mut sim = GameBuilder::new()
        .with_seed(3)
        .with_teams(1)
        .with_config(|c| {
            c.spawn.spawn_interval = 5;
            c.spawn.max_agents = 21;
        })
        .build();
    assert_agent_count!(sim, 1);
    sim.run_to_completion().unwrap();
    assert_eq!(sim.round(), 100);
    assert_agent_count!(sim, 21);
}

#[test]
fn test_agent_count_grows_only_on_spawn_rounds() {
    let mut sim = GameBuilder::new().with_seed(5).with_teams(2).build();
    let mut previous = sim.state().agents.len();
    while sim.advance_round().unwrap() {
        let now = sim.state().agents.len();
        if sim.round() % 5 == 0 {
            assert_eq!(now, (previous + 2).min(63), "round {}", sim.round());
        } else {
            assert_eq!(now, previous, "round {}", sim.round());
        }
        previous = now;
    }
}

#[test]
fn test_cap_cuts_a_wave_short() {
    let mut sim = GameBuilder::new()
        .with_seed(8)
        .with_teams(3)
        .with_config(|c| c.spawn.max_agents = 10)
        .build();
    sim.run_to_completion().unwrap();
    assert_agent_count!(sim, 10);
    // Waves fill in team order, so the last partial wave only reached team 0.
    let teams: Vec<u8> = sim.state().agents.iter().map(|a| a.team).collect();
    assert_eq!(teams, vec![0, 1, 2, 0, 1, 2, 0, 1, 2, 0]);
}

#[test]
fn test_no_spawns_after_cutoff() {
    let mut sim = GameBuilder::new()
        .with_seed(8)
        .with_teams(1)
        .with_config(|c| c.spawn.spawn_cutoff_round = 20)
        .build();
    sim.run_to_completion().unwrap();
    // Setup plus waves after rounds 5, 10, 15 and 20.
    assert_agent_count!(sim, 5);
}

#[test]
fn test_spawned_agents_use_spawnable_types() {
    let mut sim = GameBuilder::new()
        .with_seed(13)
        .with_config(|c| c.spawn.spawnable = vec![2, 4])
        .build();
    sim.run_to_completion().unwrap();
    assert!(sim
        .state()
        .agents
        .iter()
        .all(|a| a.vehicle_type == 2 || a.vehicle_type == 4));
}
