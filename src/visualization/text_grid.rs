use ndarray::{ArrayView1, ArrayView2};
use std::collections::HashSet;

use crate::config::GridConfig;
use crate::env::{GridWorld, TrajectoryJitter};
use crate::error::{GridError, Result};
use crate::types::{state_index, Cell, ACTION_SPACE};

/// Draw the map, the agent and the cells visited so far as ASCII art
///
/// `x` runs left to right and `y` top to bottom. Legend: `A` agent,
/// `T` target, `#` forbidden, `o` visited, `.` free.
pub fn render_grid<J: TrajectoryJitter>(env: &GridWorld<J>) -> String {
    // Exact points sit at even indices; odd ones are jittered in-flight points.
    let visited: HashSet<Cell> = env
        .trajectory()
        .iter()
        .step_by(2)
        .map(|p| p.nearest_cell())
        .collect();
    let config = env.config();
    let agent = env.agent_position();

    layout(config.size, |cell| {
        let c = if cell == agent {
            'A'
        } else if cell == config.target {
            'T'
        } else if config.is_forbidden(cell) {
            '#'
        } else if visited.contains(&cell) {
            'o'
        } else {
            '.'
        };
        c.to_string()
    })
}

/// Draw the actions each state may take
///
/// `policy` has one row per state (see [`state_index`]) and one column per
/// action. Every action with non-zero probability is drawn, most probable
/// first and ties in action order, so `<^` reads "mostly left, sometimes up".
/// Probabilities themselves are not shown. States whose row is all zero are
/// left blank.
pub fn render_policy(config: &GridConfig, policy: ArrayView2<f32>) -> Result<String> {
    let expected = (config.num_states(), config.num_actions());
    if policy.dim() != expected {
        return Err(GridError::dimension_mismatch(
            format!("{:?}", expected),
            format!("{:?}", policy.dim()),
        ));
    }

    let rows = config.rows();
    Ok(layout(config.size, |cell| {
        let probs = policy.row(state_index(cell, rows));
        let mut taken: Vec<(usize, f32)> = probs
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, p)| p > 0.0)
            .collect();
        // Stable sort keeps action order among equal probabilities
        taken.sort_by(|a, b| b.1.total_cmp(&a.1));

        if taken.is_empty() {
            " ".to_string()
        } else {
            taken.iter().map(|&(i, _)| ACTION_SPACE[i].glyph()).collect()
        }
    }))
}

/// Print state values rounded to `precision` decimals in their cells
pub fn render_state_values(
    config: &GridConfig,
    values: ArrayView1<f32>,
    precision: usize,
) -> Result<String> {
    if values.len() != config.num_states() {
        return Err(GridError::dimension_mismatch(
            format!("{} values", config.num_states()),
            format!("{} values", values.len()),
        ));
    }

    let rows = config.rows();
    Ok(layout(config.size, |cell| {
        format!("{:.*}", precision, values[state_index(cell, rows)])
    }))
}

/// Lay out one label per cell with x across and y down, headed by indices.
fn layout<F>(size: (usize, usize), label: F) -> String
where
    F: Fn(Cell) -> String,
{
    let (rows, cols) = size;
    let labels: Vec<Vec<String>> = (0..cols)
        .map(|y| (0..rows).map(|x| label(Cell::new(x as i32, y as i32))).collect())
        .collect();

    let index_width = rows.max(cols).saturating_sub(1).to_string().len();
    let width = labels
        .iter()
        .flatten()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(1)
        .max(index_width);

    let mut output = " ".repeat(index_width);
    for x in 0..rows {
        output.push_str(&format!(" {:>width$}", x, width = width));
    }
    output.push('\n');

    for (y, line) in labels.iter().enumerate() {
        output.push_str(&format!("{:>width$}", y, width = index_width));
        for l in line {
            output.push_str(&format!(" {:>width$}", l, width = width));
        }
        output.push('\n');
    }

    output
}
