use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete grid coordinate `(x, y)`.
///
/// `x` runs over rows (`0..rows`) and `y` over columns (`0..cols`). Coordinates
/// are signed so that a candidate position one step outside the grid can be
/// represented before it is clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// Position reached by applying `action` without any clipping.
    pub fn offset(self, action: Action) -> Cell {
        Cell::new(self.x + action.dx, self.y + action.dy)
    }

    /// Whether the cell lies inside a grid of `size = (rows, cols)`.
    pub fn in_bounds(self, size: (usize, usize)) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < size.0 && (self.y as usize) < size.1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A displacement vector applied to the agent's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Action {
    pub dx: i32,
    pub dy: i32,
}

impl Action {
    pub const UP: Action = Action::new(0, -1);
    pub const RIGHT: Action = Action::new(1, 0);
    pub const DOWN: Action = Action::new(0, 1);
    pub const LEFT: Action = Action::new(-1, 0);
    pub const STAY: Action = Action::new(0, 0);

    pub const fn new(dx: i32, dy: i32) -> Self {
        Action { dx, dy }
    }

    /// Human readable name for the five canonical moves.
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Action::UP => Some("up"),
            Action::RIGHT => Some("right"),
            Action::DOWN => Some("down"),
            Action::LEFT => Some("left"),
            Action::STAY => Some("stay"),
            _ => None,
        }
    }

    /// Single character used by the text renderer.
    pub fn glyph(&self) -> char {
        match *self {
            Action::UP => '^',
            Action::RIGHT => '>',
            Action::DOWN => 'v',
            Action::LEFT => '<',
            Action::STAY => 'o',
            _ => '?',
        }
    }
}

impl From<(i32, i32)> for Action {
    fn from((dx, dy): (i32, i32)) -> Self {
        Action::new(dx, dy)
    }
}

impl From<Action> for (i32, i32) {
    fn from(action: Action) -> Self {
        (action.dx, action.dy)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.dx, self.dy)
    }
}

/// The fixed action set, in index order: up, right, down, left, stay.
pub const ACTION_SPACE: [Action; 5] = [
    Action::UP,
    Action::RIGHT,
    Action::DOWN,
    Action::LEFT,
    Action::STAY,
];

/// A point of the recorded trajectory.
///
/// Exact points sit on cell centres; in-flight points carry the cosmetic
/// offset added by the environment's jitter source.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub x: f32,
    pub y: f32,
}

impl TrajectoryPoint {
    pub fn new(x: f32, y: f32) -> Self {
        TrajectoryPoint { x, y }
    }

    /// Nearest cell, used when the renderer marks visited cells.
    pub fn nearest_cell(&self) -> Cell {
        Cell::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<Cell> for TrajectoryPoint {
    fn from(cell: Cell) -> Self {
        TrajectoryPoint::new(cell.x as f32, cell.y as f32)
    }
}

/// Flat state index of `cell` for a grid with `rows` rows.
///
/// States are enumerated with `x` varying fastest: `state = y * rows + x`.
/// Every overlay (policy tables, state values) uses this ordering.
pub fn state_index(cell: Cell, rows: usize) -> usize {
    cell.y as usize * rows + cell.x as usize
}

/// Inverse of [`state_index`]: `x = state % rows`, `y = state / rows`.
pub fn cell_from_state(state: usize, rows: usize) -> Cell {
    Cell::new((state % rows) as i32, (state / rows) as i32)
}
