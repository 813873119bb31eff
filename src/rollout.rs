use serde::{Deserialize, Serialize};
use tracing::info;

use crate::env::{Environment, StepResult};
use crate::error::Result;
use crate::types::{Action, Cell};

/// Summary of one scripted episode
#[derive(Clone, Debug)]
pub struct EpisodeSummary {
    pub steps: usize,
    pub total_reward: f32,
    pub reached_target: bool,
    pub final_state: Cell,
    pub transitions: Vec<StepRecord>,
}

/// One applied action and its outcome
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub action: Action,
    pub next_state: Cell,
    pub reward: f32,
    pub done: bool,
}

impl StepRecord {
    fn new(action: Action, result: &StepResult<Cell>) -> Self {
        StepRecord {
            action,
            next_state: result.next_state,
            reward: result.reward,
            done: result.done,
        }
    }
}

/// Reset `env` and apply `actions` in order, stopping once the episode ends.
///
/// Fails on the first action outside the action set; steps applied before it
/// remain applied to the environment.
pub fn run_actions<E, I>(env: &mut E, actions: I) -> Result<EpisodeSummary>
where
    E: Environment<State = Cell, Action = Action>,
    I: IntoIterator<Item = Action>,
{
    let (mut state, _) = env.reset();
    let mut total_reward = 0.0;
    let mut reached_target = false;
    let mut transitions = Vec::new();

    for action in actions {
        let result = env.step(action)?;
        total_reward += result.reward;
        state = result.next_state;
        transitions.push(StepRecord::new(action, &result));

        if result.done {
            reached_target = true;
            break;
        }
    }

    info!(
        steps = transitions.len(),
        total_reward,
        reached_target,
        "episode finished"
    );

    Ok(EpisodeSummary {
        steps: transitions.len(),
        total_reward,
        reached_target,
        final_state: state,
        transitions,
    })
}
