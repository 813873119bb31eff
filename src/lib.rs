//! # gridworld - Deterministic Grid World for Reinforcement Learning
//!
//! An agent occupies one cell of an R×C grid and moves with one of five fixed
//! actions per step (up, right, down, left, stay). Rewards follow fixed rules:
//! reaching the target, bumping into a wall or a forbidden cell, or taking an
//! ordinary step.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridworld::builders::GridConfigBuilder;
//! use gridworld::env::GridWorld;
//! use gridworld::types::{Action, Cell};
//!
//! let config = GridConfigBuilder::new()
//!     .size(3, 3)
//!     .start((1, 1))
//!     .target((2, 1))
//!     .forbidden(Vec::<Cell>::new())
//!     .build()
//!     .unwrap();
//!
//! let mut env = GridWorld::with_seed(config, 42);
//! env.reset();
//! let result = env.step(Action::RIGHT).unwrap();
//! assert_eq!(result.next_state, Cell::new(2, 1));
//! assert!(result.done);
//! ```
//!
//! ## Module Organization
//!
//! - [`builders`] - Validating builder for grid configurations
//! - [`config`] - Map and reward constants
//! - [`env`] - The environment, its reset/step contract and trajectory jitter
//! - [`error`] - Error types and result handling
//! - [`logging`] - `tracing` subscriber setup driven by `RUST_LOG`
//! - [`rollout`] - Scripted episodes and their summaries
//! - [`types`] - Cells, actions, trajectory points and the state-index mapping
//! - [`visualization`] - Text rendering, policy/value overlays and trajectory export

pub mod builders;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod rollout;
pub mod types;
pub mod visualization;

#[cfg(test)]
mod tests;
