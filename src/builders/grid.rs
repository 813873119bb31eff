use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::types::Cell;

/// Builder for GridConfig
///
/// Unset fields keep the values of [`GridConfig::default`], except the
/// forbidden set which starts empty once any forbidden cell is given.
pub struct GridConfigBuilder {
    size: Option<(usize, usize)>,
    start: Option<Cell>,
    target: Option<Cell>,
    forbidden: Option<Vec<Cell>>,
    reward_target: Option<f32>,
    reward_forbidden: Option<f32>,
    reward_step: Option<f32>,
}

impl GridConfigBuilder {
    /// Create a new grid config builder
    pub fn new() -> Self {
        GridConfigBuilder {
            size: None,
            start: None,
            target: None,
            forbidden: None,
            reward_target: None,
            reward_forbidden: None,
            reward_step: None,
        }
    }

    /// Set the grid size as (rows, cols)
    pub fn size(mut self, rows: usize, cols: usize) -> Self {
        self.size = Some((rows, cols));
        self
    }

    pub fn start<C: Into<Cell>>(mut self, start: C) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn target<C: Into<Cell>>(mut self, target: C) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Replace the forbidden set
    pub fn forbidden<I, C>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.forbidden = Some(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Add one forbidden cell
    pub fn add_forbidden<C: Into<Cell>>(mut self, cell: C) -> Self {
        self.forbidden.get_or_insert_with(Vec::new).push(cell.into());
        self
    }

    pub fn reward_target(mut self, reward: f32) -> Self {
        self.reward_target = Some(reward);
        self
    }

    pub fn reward_forbidden(mut self, reward: f32) -> Self {
        self.reward_forbidden = Some(reward);
        self
    }

    pub fn reward_step(mut self, reward: f32) -> Self {
        self.reward_step = Some(reward);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<GridConfig> {
        let defaults = GridConfig::default();

        let rewards = [
            ("reward_target", self.reward_target),
            ("reward_forbidden", self.reward_forbidden),
            ("reward_step", self.reward_step),
        ];
        for (name, value) in rewards {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(GridError::invalid_parameter(
                        name.to_string(),
                        format!("reward must be finite, got {}", v),
                    ));
                }
            }
        }

        let config = GridConfig {
            size: self.size.unwrap_or(defaults.size),
            start: self.start.unwrap_or(defaults.start),
            target: self.target.unwrap_or(defaults.target),
            forbidden: self.forbidden.unwrap_or(defaults.forbidden),
            reward_target: self.reward_target.unwrap_or(defaults.reward_target),
            reward_forbidden: self.reward_forbidden.unwrap_or(defaults.reward_forbidden),
            reward_step: self.reward_step.unwrap_or(defaults.reward_step),
        };

        config.validate()?;
        Ok(config)
    }
}

impl Default for GridConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
