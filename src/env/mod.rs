pub mod grid_world;
pub mod jitter;
pub mod traits;

pub use grid_world::GridWorld;
pub use jitter::{GaussianJitter, NoJitter, TrajectoryJitter, JITTER_STD_DEV};
pub use traits::{Environment, Info, StepResult};
