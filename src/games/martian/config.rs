//! Martian Dice game configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{MartianError, Result};
use super::position::MAX_DICE;
use crate::solver::SolverConfig;

/// Settings for a solving run, loadable from JSON.
///
/// ```json
/// { "dice": 13, "max_tree_depth": 4, "solver": { "capacity": null, "seed": 7, "playouts": 10000 } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MartianConfig {
    /// Dice budget of the game.
    pub dice: u8,

    /// Depth limit for rendered game trees. `None` renders the full tree.
    #[serde(default)]
    pub max_tree_depth: Option<usize>,

    /// Solver settings.
    #[serde(default)]
    pub solver: SolverConfig,
}

impl Default for MartianConfig {
    fn default() -> Self {
        Self {
            dice: MAX_DICE,
            max_tree_depth: None,
            solver: SolverConfig::default(),
        }
    }
}

impl MartianConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| MartianError::Io(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| MartianError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.dice > MAX_DICE {
            return Err(MartianError::TooManyDice {
                dice: self.dice as usize,
                max: MAX_DICE as usize,
            });
        }
        self.solver
            .validate()
            .map_err(|e| MartianError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MartianConfig::default();
        assert_eq!(config.dice, 13);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_str() {
        let config = MartianConfig::from_json_str(r#"{ "dice": 5, "max_tree_depth": 2 }"#).unwrap();
        assert_eq!(config.dice, 5);
        assert_eq!(config.max_tree_depth, Some(2));
        assert_eq!(config.solver.playouts, 10_000);
    }

    #[test]
    fn test_rejects_too_many_dice() {
        let err = MartianConfig::from_json_str(r#"{ "dice": 20 }"#).unwrap_err();
        assert_eq!(err, MartianError::TooManyDice { dice: 20, max: 13 });
    }

    #[test]
    fn test_rejects_bad_solver_config() {
        let err = MartianConfig::from_json_str(r#"{ "dice": 2, "solver": { "capacity": null, "seed": null, "playouts": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, MartianError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = MartianConfig::from_json_file("/nonexistent/martian.json").unwrap_err();
        assert!(matches!(err, MartianError::Io(_)));
    }
}
