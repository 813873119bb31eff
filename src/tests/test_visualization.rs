use ndarray::{array, Array2};

use crate::config::GridConfig;
use crate::env::{GridWorld, NoJitter};
use crate::error::GridError;
use crate::types::{Action, Cell, TrajectoryPoint};
use crate::visualization::{
    export_trajectory_csv, export_trajectory_json, render_grid, render_policy, render_state_values,
};

fn small_world() -> GridWorld<NoJitter> {
    let config = GridConfig {
        size: (3, 3),
        start: Cell::new(0, 0),
        target: Cell::new(2, 2),
        forbidden: vec![Cell::new(1, 0)],
        ..GridConfig::default()
    };
    GridWorld::with_jitter(config, NoJitter)
}

#[test]
fn test_render_grid_after_reset() {
    let mut env = small_world();
    env.reset();
    let expected = "  0 1 2\n\
                    0 A # .\n\
                    1 . . .\n\
                    2 . . T\n";
    assert_eq!(render_grid(&env), expected);
}

#[test]
fn test_render_grid_marks_visited_cells() {
    let mut env = small_world();
    env.reset();
    env.step(Action::DOWN).unwrap();
    env.step(Action::RIGHT).unwrap();

    let expected = "  0 1 2\n\
                    0 o # .\n\
                    1 o A .\n\
                    2 . . T\n";
    assert_eq!(render_grid(&env), expected);
}

#[test]
fn test_render_policy_draws_every_taken_action() {
    let config = small_world().config().clone();
    let mut policy = Array2::<f32>::zeros((9, 5));
    policy[[0, 1]] = 1.0;
    // state 4 is cell (1, 1); tie between down and stay
    policy[[4, 2]] = 0.5;
    policy[[4, 4]] = 0.5;
    // state 5 is cell (2, 1)
    policy[[5, 0]] = 0.2;
    policy[[5, 3]] = 0.8;

    let rendered = render_policy(&config, policy.view()).unwrap();
    let expected = "   0  1  2\n\
                    0  >      \n\
                    1    vo <^\n\
                    2         \n";
    assert_eq!(rendered, expected);
}

#[test]
fn test_render_policy_shape_mismatch() {
    let config = small_world().config().clone();
    let policy = Array2::<f32>::zeros((8, 5));
    let err = render_policy(&config, policy.view()).unwrap_err();
    assert!(matches!(err, GridError::DimensionMismatch { .. }));
}

#[test]
fn test_render_state_values() {
    let config = GridConfig {
        size: (2, 2),
        start: Cell::new(0, 0),
        target: Cell::new(1, 1),
        forbidden: vec![],
        ..GridConfig::default()
    };
    let values = array![0.0f32, 1.26, -3.5, 10.0];

    let rendered = render_state_values(&config, values.view(), 1).unwrap();
    let expected = "     0    1\n\
                    0  0.0  1.3\n\
                    1 -3.5 10.0\n";
    assert_eq!(rendered, expected);
}

#[test]
fn test_render_state_values_length_mismatch() {
    let config = GridConfig::default();
    let values = array![1.0f32, 2.0];
    assert!(render_state_values(&config, values.view(), 2).is_err());
}

#[test]
fn test_export_trajectory_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("traj.csv");

    let mut env = small_world();
    env.reset();
    env.step(Action::DOWN).unwrap();
    export_trajectory_csv(env.trajectory(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "index,x,y");
    assert_eq!(lines[1], "0,0,0");
    assert_eq!(lines[3], "2,0,1");
}

#[test]
fn test_export_trajectory_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("traj.json");

    let mut env = small_world();
    env.reset();
    env.step(Action::DOWN).unwrap();
    env.step(Action::RIGHT).unwrap();
    export_trajectory_json(env.trajectory(), &path).unwrap();

    let data = std::fs::read_to_string(&path).unwrap();
    let loaded: Vec<TrajectoryPoint> = serde_json::from_str(&data).unwrap();
    assert_eq!(loaded, env.trajectory());
}
