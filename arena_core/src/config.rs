//! Arena construction options.

use arena_env::ArenaError;
use serde::{Deserialize, Serialize};

/// Largest grid (in cells) an arena will allocate.
pub const MAX_CELLS: usize = 1 << 24;

/// Configuration for an arena instance.
///
/// Every field is optional in JSON; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArenaConfig {
    /// Grid columns
    pub width: usize,

    /// Grid rows
    pub height: usize,

    /// Episode ends (done=true) once this many steps have been taken.
    /// A limit of 0 makes the first step terminal.
    pub timestep_limit: u64,

    /// Whether the driver should allocate a text renderer
    pub render: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            timestep_limit: 100,
            render: false,
        }
    }
}

impl ArenaConfig {
    /// Parses a JSON config object, e.g. `{"width": 5, "timestep_limit": 20}`.
    pub fn from_json_str(json: &str) -> Result<Self, ArenaError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ArenaError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the grid can hold both agents on distinct start cells and stays
    /// within [`MAX_CELLS`].
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.width == 0 || self.height == 0 {
            return Err(ArenaError::invalid_config(format!(
                "Grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        let cells = self.width.checked_mul(self.height).ok_or_else(|| {
            ArenaError::invalid_config(format!("Grid {}x{} is too large", self.width, self.height))
        })?;
        if cells < 2 {
            return Err(ArenaError::invalid_config(
                "Grid needs at least two cells for two agents",
            ));
        }
        if cells > MAX_CELLS {
            return Err(ArenaError::invalid_config(format!(
                "Grid {}x{} has {} cells, limit is {}",
                self.width, self.height, cells, MAX_CELLS
            )));
        }
        Ok(())
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_timestep_limit(mut self, limit: u64) -> Self {
        self.timestep_limit = limit;
        self
    }

    pub fn with_render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ArenaConfig::default();
        assert_eq!((config.width, config.height), (10, 10));
        assert_eq!(config.timestep_limit, 100);
        assert!(!config.render);
    }

    #[test]
    fn test_json_partial_uses_defaults() {
        let config = ArenaConfig::from_json_str(r#"{"width": 5, "render": true}"#).unwrap();
        assert_eq!(config.width, 5);
        assert_eq!(config.height, 10);
        assert_eq!(config.timestep_limit, 100);
        assert!(config.render);
    }

    #[test]
    fn test_json_unknown_key_rejected() {
        let err = ArenaConfig::from_json_str(r#"{"depth": 3}"#).unwrap_err();
        assert!(matches!(err, ArenaError::InvalidConfig(_)));
    }

    #[test]
    fn test_validate_rejects_degenerate_grids() {
        assert!(ArenaConfig::default().with_size(0, 4).validate().is_err());
        assert!(ArenaConfig::default().with_size(1, 1).validate().is_err());
        assert!(ArenaConfig::default().with_size(2, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_grids() {
        let err = ArenaConfig::default().with_size(1 << 42, 1).validate().unwrap_err();
        assert!(matches!(err, ArenaError::InvalidConfig(_)));
        assert!(ArenaConfig::default().with_size(MAX_CELLS, 1).validate().is_ok());
        assert!(ArenaConfig::default().with_size(MAX_CELLS, 2).validate().is_err());
    }

    #[test]
    fn test_zero_timestep_limit_allowed() {
        assert!(ArenaConfig::default().with_timestep_limit(0).validate().is_ok());
    }
}
