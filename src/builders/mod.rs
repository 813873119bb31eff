pub mod grid;

pub use grid::GridConfigBuilder;
