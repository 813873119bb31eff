use ndarray::Array1;
use rand::rngs::StdRng;
use std::collections::HashSet;
use tracing::{debug, trace, warn};

use super::jitter::{GaussianJitter, TrajectoryJitter};
use super::traits::{Environment, Info, StepResult};
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::types::{Action, Cell, TrajectoryPoint, ACTION_SPACE};

/// How far along the action vector the in-flight point is drawn.
const IN_FLIGHT_LEAD: f32 = 0.2;

/// Deterministic grid world.
///
/// The agent starts at `config.start` and moves with one of the five
/// canonical actions per step. Walls and forbidden cells cost
/// `reward_forbidden`, reaching the target pays `reward_target` and ends the
/// episode, every other move costs `reward_step`.
///
/// # Example
///
/// ```
/// use gridworld::config::GridConfig;
/// use gridworld::env::GridWorld;
/// use gridworld::types::{Action, Cell};
///
/// let mut env = GridWorld::with_seed(GridConfig::default(), 0);
/// let (state, _) = env.reset();
/// assert_eq!(state, Cell::new(0, 0));
///
/// let result = env.step(Action::RIGHT).unwrap();
/// assert_eq!(result.next_state, Cell::new(1, 0));
/// assert!(!result.done);
/// ```
pub struct GridWorld<J: TrajectoryJitter = GaussianJitter<StdRng>> {
    config: GridConfig,
    forbidden: HashSet<Cell>,
    agent_position: Cell,
    trajectory: Vec<TrajectoryPoint>,
    steps: usize,
    jitter: J,
}

impl GridWorld<GaussianJitter<StdRng>> {
    /// Environment with entropy-seeded trajectory jitter.
    pub fn new(config: GridConfig) -> Self {
        Self::with_jitter(config, GaussianJitter::from_entropy())
    }

    /// Environment whose trajectory jitter is reproducible.
    pub fn with_seed(config: GridConfig, seed: u64) -> Self {
        Self::with_jitter(config, GaussianJitter::seeded(seed))
    }
}

impl<J: TrajectoryJitter> GridWorld<J> {
    /// The configuration is taken as is; see [`GridConfig::validate`].
    pub fn with_jitter(config: GridConfig, jitter: J) -> Self {
        let forbidden = config.forbidden.iter().copied().collect();
        let start = config.start;
        GridWorld {
            config,
            forbidden,
            agent_position: start,
            trajectory: vec![start.into()],
            steps: 0,
            jitter,
        }
    }

    /// Put the agent back on the start cell and clear the trajectory.
    pub fn reset(&mut self) -> (Cell, Info) {
        self.agent_position = self.config.start;
        self.trajectory.clear();
        self.trajectory.push(self.config.start.into());
        self.steps = 0;
        debug!(start = %self.config.start, "episode reset");
        (self.agent_position, Info::new())
    }

    /// Apply `action` to the current episode.
    ///
    /// Appends two trajectory points: a jittered in-flight point followed by
    /// the exact resulting position. Stepping after the target was reached is
    /// allowed; the rules simply apply from the target cell.
    pub fn step(&mut self, action: Action) -> Result<StepResult<Cell>> {
        let (next_state, reward) = self.next_state_and_reward(self.agent_position, action)?;
        let done = next_state == self.config.target;

        let (jx, jy) = self.jitter.offset();
        let in_flight = TrajectoryPoint::new(
            next_state.x as f32 + jx + IN_FLIGHT_LEAD * action.dx as f32,
            next_state.y as f32 + jy + IN_FLIGHT_LEAD * action.dy as f32,
        );

        let previous = self.agent_position;
        self.agent_position = next_state;
        self.trajectory.push(in_flight);
        self.trajectory.push(next_state.into());
        self.steps += 1;

        trace!(from = %previous, %action, to = %next_state, reward, done, "step");
        if done {
            debug!(steps = self.steps, "target reached");
        }

        Ok(StepResult {
            next_state,
            reward,
            done,
            info: Info::new(),
        })
    }

    /// Transition function: next cell and reward for `action` taken in `state`.
    ///
    /// Pure; the episode state is not touched. Rules are tried in order and the
    /// first match wins:
    ///
    /// 1. down past the last column, right past the last row, up past column 0
    ///    or left past row 0: clamp to the edge, `reward_forbidden`
    /// 2. landing on the target: move, `reward_target`
    /// 3. landing on a forbidden cell: stay put, `reward_forbidden`
    /// 4. otherwise: move, `reward_step`
    ///
    /// The goal check precedes the forbidden check, so a target placed inside
    /// the forbidden set is still reachable.
    pub fn next_state_and_reward(&self, state: Cell, action: Action) -> Result<(Cell, f32)> {
        if !ACTION_SPACE.contains(&action) {
            warn!(%action, "rejected action outside the action set");
            return Err(GridError::InvalidAction { action });
        }

        let max_x = self.config.rows() as i32 - 1;
        let max_y = self.config.cols() as i32 - 1;
        let candidate = state.offset(action);
        let config = &self.config;

        // Per-direction checks are only sound because every action moves
        // along at most one axis.
        let outcome = if action == Action::DOWN && candidate.y > max_y {
            (Cell::new(state.x, max_y), config.reward_forbidden)
        } else if action == Action::RIGHT && candidate.x > max_x {
            (Cell::new(max_x, state.y), config.reward_forbidden)
        } else if action == Action::UP && candidate.y < 0 {
            (Cell::new(state.x, 0), config.reward_forbidden)
        } else if action == Action::LEFT && candidate.x < 0 {
            (Cell::new(0, state.y), config.reward_forbidden)
        } else if candidate == config.target {
            (config.target, config.reward_target)
        } else if self.forbidden.contains(&candidate) {
            (state, config.reward_forbidden)
        } else {
            (candidate, config.reward_step)
        };

        Ok(outcome)
    }

    /// Position of `action` in the action set.
    pub fn action_index(&self, action: Action) -> Option<usize> {
        ACTION_SPACE.iter().position(|a| *a == action)
    }

    pub fn action_at(&self, index: usize) -> Option<Action> {
        ACTION_SPACE.get(index).copied()
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn agent_position(&self) -> Cell {
        self.agent_position
    }

    pub fn trajectory(&self) -> &[TrajectoryPoint] {
        &self.trajectory
    }

    pub fn target(&self) -> Cell {
        self.config.target
    }

    pub fn forbidden(&self) -> &[Cell] {
        &self.config.forbidden
    }

    pub fn size(&self) -> (usize, usize) {
        self.config.size
    }

    pub fn num_states(&self) -> usize {
        self.config.num_states()
    }

    pub fn num_actions(&self) -> usize {
        self.config.num_actions()
    }

    /// Steps taken since the last reset
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn is_terminal(&self) -> bool {
        self.agent_position == self.config.target
    }

    /// Every action is always legal; walls and forbidden cells are penalised,
    /// not masked.
    pub fn legal_actions(&self) -> Array1<bool> {
        Array1::from_elem(self.num_actions(), true)
    }
}

impl<J: TrajectoryJitter> Environment for GridWorld<J> {
    type State = Cell;
    type Action = Action;

    fn reset(&mut self) -> (Cell, Info) {
        GridWorld::reset(self)
    }

    fn step(&mut self, action: Action) -> Result<StepResult<Cell>> {
        GridWorld::step(self, action)
    }

    fn num_actions(&self) -> usize {
        GridWorld::num_actions(self)
    }

    fn legal_actions(&self) -> Array1<bool> {
        GridWorld::legal_actions(self)
    }

    fn is_terminal(&self) -> bool {
        GridWorld::is_terminal(self)
    }
}
