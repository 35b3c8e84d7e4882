//! Error types for the constraint builder

use thiserror::Error;

use crate::constraint::ConstraintId;
use crate::engine::EngineError;
use crate::item::ItemId;

/// Errors reported by a [`Layout`](crate::Layout) session
#[derive(Debug, Error)]
pub enum LayoutError {
    /// An operation that targets the parent was used on a root item
    #[error("'{item}' has no parent to {operation}")]
    NoParent { item: ItemId, operation: String },

    /// `close_group` without a matching `open_group`
    #[error("no constraint group is open")]
    NoOpenGroup,

    /// Pre-commit property changed after the constraint was activated
    #[error("constraint {id} is already active")]
    AlreadyActive { id: ConstraintId },

    /// The same id listed twice in one activation batch
    #[error("constraint {id} appears more than once in the batch")]
    DuplicateConstraint { id: ConstraintId },

    /// Id not issued by this session
    #[error("unknown constraint {id}")]
    UnknownConstraint { id: ConstraintId },

    /// Failure reported by the host layout engine
    #[error("layout engine error: {0}")]
    Engine(#[from] EngineError),
}

impl LayoutError {
    pub fn no_parent(item: &ItemId, operation: impl Into<String>) -> Self {
        Self::NoParent {
            item: item.clone(),
            operation: operation.into(),
        }
    }
}

/// Errors that can occur when loading a [`LayoutConfig`](crate::LayoutConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read layout config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse layout config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}
