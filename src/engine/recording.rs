//! An engine that records what it is asked to do

use crate::constraint::Constraint;
use crate::item::ItemId;

use super::{EngineError, LayoutEngine};

/// One call received by a [`RecordingEngine`]
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Prepared(ItemId),
    Installed(Constraint),
    /// Indices into [`RecordingEngine::installed`], in activation order
    Activated(Vec<usize>),
}

/// Records every call and activates nothing
///
/// Useful as a dry run, and for checking exactly which constraints reach
/// the engine and in which batches.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    events: Vec<EngineEvent>,
    installed: Vec<Constraint>,
    active: Vec<bool>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    /// Every constraint installed so far, active or not
    pub fn installed(&self) -> &[Constraint] {
        &self.installed
    }

    /// Constraints that have been activated, in installation order
    pub fn active(&self) -> Vec<&Constraint> {
        self.installed
            .iter()
            .zip(&self.active)
            .filter(|(_, active)| **active)
            .map(|(c, _)| c)
            .collect()
    }

    /// The activation batches, each resolved to its constraints
    pub fn batches(&self) -> Vec<Vec<&Constraint>> {
        self.events
            .iter()
            .filter_map(|event| match event {
                EngineEvent::Activated(handles) => {
                    Some(handles.iter().map(|&h| &self.installed[h]).collect())
                }
                _ => None,
            })
            .collect()
    }

    /// Items that were marked as manually positioned
    pub fn prepared(&self) -> Vec<&ItemId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                EngineEvent::Prepared(item) => Some(item),
                _ => None,
            })
            .collect()
    }
}

impl LayoutEngine for RecordingEngine {
    type Handle = usize;

    fn prepare_item(&mut self, item: &ItemId) {
        self.events.push(EngineEvent::Prepared(item.clone()));
    }

    fn install(&mut self, constraint: &Constraint) -> usize {
        self.events.push(EngineEvent::Installed(constraint.clone()));
        self.installed.push(constraint.clone());
        self.active.push(false);
        self.installed.len() - 1
    }

    fn activate(&mut self, handles: &[usize]) -> Result<(), EngineError> {
        if let Some(&bad) = handles.iter().find(|&&h| h >= self.installed.len()) {
            return Err(EngineError::Internal(format!("unknown handle {}", bad)));
        }
        for &h in handles {
            self.active[h] = true;
        }
        self.events.push(EngineEvent::Activated(handles.to_vec()));
        Ok(())
    }
}
