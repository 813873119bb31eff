pub mod text_grid;
pub mod export;

pub use text_grid::{render_grid, render_policy, render_state_values};
pub use export::{export_trajectory_csv, export_trajectory_json};
