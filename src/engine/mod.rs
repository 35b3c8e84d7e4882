//! Host layout engine boundary
//!
//! The builder never solves constraints itself. It hands normalized
//! [`Constraint`] descriptors to a [`LayoutEngine`], first installing them
//! one by one and then activating them in batches.

pub mod recording;
pub mod solver;

pub use recording::{EngineEvent, RecordingEngine};
pub use solver::{Frame, SolverEngine};

use thiserror::Error;

use crate::constraint::Constraint;
use crate::item::ItemId;

/// Errors reported by a layout engine when activating constraints
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unsatisfiable constraint: {constraint}")]
    Unsatisfiable { constraint: String },

    #[error("duplicate constraint: {constraint}")]
    Duplicate { constraint: String },

    #[error("internal engine error: {0}")]
    Internal(String),
}

/// The external system that solves installed constraints
pub trait LayoutEngine {
    /// Engine-side reference to an installed constraint
    type Handle: Clone;

    /// Mark `item` as positioned by constraints only.
    ///
    /// Called before the first constraint whose first item is `item` is
    /// installed. Must be idempotent.
    fn prepare_item(&mut self, item: &ItemId);

    /// Create the engine-side constraint without activating it.
    ///
    /// Handles from a batch that `activate` rejected are dropped. Activating
    /// the same constraints again installs them again, so an engine that
    /// keeps installed entries around should release them when a batch
    /// fails.
    fn install(&mut self, constraint: &Constraint) -> Self::Handle;

    /// Activate installed constraints, in order, as a single batch.
    fn activate(&mut self, handles: &[Self::Handle]) -> Result<(), EngineError>;
}
