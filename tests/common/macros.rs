/// Asserts that two games are in exactly the same state.
#[macro_export]
macro_rules! assert_same_game {
    ($a:expr, $b:expr) => {
        assert_eq!($a.round(), $b.round(), "Round mismatch");
        assert_eq!(
            $a.state_digest(),
            $b.state_digest(),
            "State digest mismatch at round {}",
            $a.round()
        );
    };
}

/// Asserts the number of live agents.
#[macro_export]
macro_rules! assert_agent_count {
    ($sim:expr, $count:expr) => {
        assert_eq!(
            $sim.state().agents.len(),
            $count,
            "Agent count mismatch at round {}",
            $sim.round()
        );
    };
}
