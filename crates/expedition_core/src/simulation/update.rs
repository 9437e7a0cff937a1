use super::Simulation;
use crate::coords::CoordinateMapper;
use crate::dice::Dice;
use crate::error::Result;
use crate::hash::{ROUND_LABEL, SPAWN_LABEL};
use crate::systems::flocking::flock;
use crate::systems::fog::reveal_around;
use crate::systems::movement::wander;
use crate::systems::spawn::{is_spawn_round, spawn_wave};
use crate::systems::{StepContext, StepOutcome, ACTION_SIDES};
use expedition_data::{Agent, GameResult};

impl Simulation {
    /// Plays one round.
    ///
    /// Every agent, in list order, draws exactly one action from the round's
    /// dice and is updated in place; later agents see earlier agents' new
    /// positions. A spawn wave with its own dice may follow. Returns `false`
    /// without touching anything once `max_rounds` is reached.
    ///
    /// # Errors
    /// Propagates dice errors, which a validated config never produces.
    pub fn advance_round(&mut self) -> Result<bool> {
        if self.is_finished() {
            return Ok(false);
        }
        let round = self.state.round;

        let ctx = StepContext {
            mapper: CoordinateMapper::new(&self.terrain, &self.config.world),
            config: &self.config,
            team_spawns: &self.team_spawns,
        };

        let mut dice = Dice::from_round(&self.seed, ROUND_LABEL, u64::from(round));
        for index in 0..self.state.agents.len() {
            let action = dice.roll_in_place(ACTION_SIDES)?;
            let outcome = step_agent(index, &mut self.state.agents, action, &ctx);
            self.metrics.record(outcome);
            let position = self.state.agents[index].position();
            reveal_around(&mut self.state.explored, &ctx.mapper, position);
        }

        let mut spawned = 0;
        if is_spawn_round(round, &self.config.spawn) {
            let mut spawn_dice = Dice::from_round(&self.seed, SPAWN_LABEL, u64::from(round));
            let new_agents = spawn_wave(
                &mut self.state.agents,
                &mut spawn_dice,
                &self.team_spawns,
                &self.config.spawn,
            )?;
            spawned = new_agents.len();
            for agent in &self.state.agents[new_agents] {
                reveal_around(&mut self.state.explored, &ctx.mapper, agent.position());
            }
        }

        self.state.round += 1;
        self.metrics.record_round(spawned);

        tracing::debug!(
            round = self.state.round,
            agents = self.state.agents.len(),
            explored = self.state.explored.len(),
            spawned,
            "Round complete"
        );
        Ok(true)
    }

    /// Plays up to `n` rounds, stopping at `max_rounds`. Returns how many ran.
    ///
    /// # Errors
    /// See [`Simulation::advance_round`].
    pub fn advance_rounds(&mut self, n: u32) -> Result<u32> {
        let mut played = 0;
        while played < n && self.advance_round()? {
            played += 1;
        }
        Ok(played)
    }

    /// Plays every remaining round and scores the game.
    ///
    /// # Errors
    /// See [`Simulation::advance_round`] and [`Simulation::result`].
    pub fn run_to_completion(&mut self) -> Result<GameResult> {
        while self.advance_round()? {}
        let result = self.result()?;
        tracing::info!(
            seed = %self.seed,
            rounds = result.rounds,
            tiles = result.tiles_discovered,
            mushrooms = result.mushrooms_found,
            payout = %result.payout,
            "Game complete"
        );
        Ok(result)
    }
}

/// Dispatches one agent to flocking or the random walk by its vehicle's comms.
fn step_agent(index: usize, agents: &mut [Agent], action: u64, ctx: &StepContext) -> StepOutcome {
    let spec = ctx.config.vehicles.spec(agents[index].vehicle_type);
    if spec.has_comms() {
        flock(index, agents, action, ctx)
    } else {
        wander(&mut agents[index], action, spec.speed, &ctx.mapper)
    }
}
