//! Configuration for the solver-backed layout engine

use std::path::Path;

use serde::Deserialize;

use crate::attribute::{EdgeInsets, LayoutDirection};
use crate::error::ConfigError;

/// Configuration options for [`SolverEngine`](crate::engine::SolverEngine)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Direction used to resolve `leading` and `trailing`
    pub direction: LayoutDirection,

    /// Layout margins of items that have no explicit margins
    pub margins: EdgeInsets,
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the layout direction
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the default layout margins
    pub fn with_margins(mut self, margins: EdgeInsets) -> Self {
        self.margins = margins;
        self
    }
}
