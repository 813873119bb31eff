use ndarray::Array1;
use std::collections::HashMap;

use crate::error::Result;

/// Auxiliary information returned by `reset` and `step`.
///
/// Reserved for extensions; the grid world always returns an empty map.
pub type Info = HashMap<String, serde_json::Value>;

/// Outcome of a single environment step
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult<S> {
    pub next_state: S,
    pub reward: f32,
    pub done: bool,
    pub info: Info,
}

/// Reset/step contract consumed by agents and training loops
pub trait Environment {
    type State;
    type Action;

    /// Start a new episode and return the initial state
    fn reset(&mut self) -> (Self::State, Info);

    /// Apply one action
    fn step(&mut self, action: Self::Action) -> Result<StepResult<Self::State>>;

    /// Size of the action set
    fn num_actions(&self) -> usize;

    /// Mask over the action set, `true` where the action may be taken
    fn legal_actions(&self) -> Array1<bool>;

    /// Whether the current episode has ended
    fn is_terminal(&self) -> bool;
}
