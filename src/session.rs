//! Constraint sessions and grouping
//!
//! A [`Layout`] owns the host engine and the bookkeeping for every
//! constraint created through its anchors. Outside a group a constraint is
//! installed and activated as soon as it is created. Inside a group it
//! stays pending, its priority and identifier may still change, and the
//! whole group is activated in one batch when it closes.
//!
//! Group metadata is strict per group: a group applies only its own
//! priority and identifier, never those of an enclosing group.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashSet;
use std::marker::PhantomData;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::attribute::Priority;
use crate::collection::Anchors;
use crate::constraint::{Constraint, ConstraintId};
use crate::engine::LayoutEngine;
use crate::error::LayoutError;
use crate::item::{ItemId, LayoutItem};

/// Where anchors send the constraints they create
pub(crate) trait ConstraintSink {
    fn add(&self, constraint: Constraint) -> ConstraintId;
}

/// Options applied to every constraint created inside a group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupOptions {
    pub priority: Option<Priority>,
    pub identifier: Option<String>,
    /// Activate the group's constraints when it closes
    pub activate: bool,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            priority: None,
            identifier: None,
            activate: true,
        }
    }
}

impl GroupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Leave the constraints pending on close; see [`Layout::activate`].
    pub fn deferred(mut self) -> Self {
        self.activate = false;
        self
    }
}

#[derive(Debug)]
struct Group {
    options: GroupOptions,
    pending: Vec<ConstraintId>,
}

#[derive(Debug)]
enum Status<H> {
    Pending,
    Active(H),
}

#[derive(Debug)]
struct Entry<H> {
    constraint: Constraint,
    status: Status<H>,
}

#[derive(Debug)]
struct State<H> {
    groups: Vec<Group>,
    entries: Vec<Entry<H>>,
    prepared: HashSet<ItemId>,
    errors: Vec<LayoutError>,
}

impl<H> Default for State<H> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            entries: Vec::new(),
            prepared: HashSet::new(),
            errors: Vec::new(),
        }
    }
}

/// A constraint-building session over a host layout engine
///
/// The session is confined to the thread that created it: it is neither
/// `Send` nor `Sync`.
///
/// ```compile_fail
/// use anchor_layout::{Layout, RecordingEngine};
///
/// fn assert_send<T: Send>() {}
/// assert_send::<Layout<RecordingEngine>>();
/// ```
///
/// ```compile_fail
/// use anchor_layout::{Layout, RecordingEngine};
///
/// fn assert_sync<T: Sync>() {}
/// assert_sync::<Layout<RecordingEngine>>();
/// ```
///
/// ```
/// use anchor_layout::{Item, Layout, RecordingEngine, Relation};
///
/// let layout = Layout::new(RecordingEngine::new());
/// let container = Item::root("container");
/// let view = Item::child("view", &container);
///
/// let ids = layout
///     .group(|| {
///         let v = layout.anchors(&view);
///         v.width().set(80.0, Relation::Equal);
///         v.center_x().align_with_superview(0.0, Relation::Equal).unwrap();
///     })
///     .unwrap();
///
/// assert_eq!(ids.len(), 2);
/// assert_eq!(layout.engine().batches().len(), 1);
/// ```
pub struct Layout<E: LayoutEngine> {
    engine: RefCell<E>,
    state: RefCell<State<E::Handle>>,
    _thread_bound: PhantomData<Rc<()>>,
}

impl<E: LayoutEngine> Layout<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine: RefCell::new(engine),
            state: RefCell::new(State::default()),
            _thread_bound: PhantomData,
        }
    }

    /// The anchors of `item`, bound to this session
    pub fn anchors(&self, item: &dyn LayoutItem) -> Anchors<'_> {
        Anchors::new(self, item)
    }

    /// Run `body` inside a group with default options.
    ///
    /// Returns the ids of the constraints created directly in this group,
    /// in creation order.
    pub fn group(&self, body: impl FnOnce()) -> Result<Vec<ConstraintId>, LayoutError> {
        self.group_with(GroupOptions::default(), body)
    }

    /// Run `body` inside a group.
    ///
    /// If `body` panics the group is discarded and its constraints are never
    /// installed.
    pub fn group_with(
        &self,
        options: GroupOptions,
        body: impl FnOnce(),
    ) -> Result<Vec<ConstraintId>, LayoutError> {
        let scope = GroupScope {
            layout: self,
            depth: self.depth(),
        };
        self.open_group(options);
        body();
        std::mem::forget(scope);
        self.close_group()
    }

    /// Push a group; constraints created until the matching
    /// [`close_group`](Self::close_group) are collected into it.
    pub fn open_group(&self, options: GroupOptions) {
        let mut state = self.state.borrow_mut();
        debug!(depth = state.groups.len() + 1, ?options, "open group");
        state.groups.push(Group {
            options,
            pending: Vec::new(),
        });
    }

    /// Pop the innermost group, activating its constraints in one batch
    /// unless it was opened with [`GroupOptions::deferred`].
    pub fn close_group(&self) -> Result<Vec<ConstraintId>, LayoutError> {
        let group = self
            .state
            .borrow_mut()
            .groups
            .pop()
            .ok_or(LayoutError::NoOpenGroup)?;

        debug!(
            count = group.pending.len(),
            activate = group.options.activate,
            "close group"
        );
        if group.options.activate {
            self.activate(&group.pending)?;
        }
        Ok(group.pending)
    }

    /// Number of open groups
    pub fn depth(&self) -> usize {
        self.state.borrow().groups.len()
    }

    /// Install and activate pending constraints as one batch.
    ///
    /// Each constraint is installed with its current priority and
    /// identifier. If the engine rejects the batch, every constraint in it
    /// stays pending. An id listed twice fails the whole batch before the
    /// engine sees any of it.
    pub fn activate(&self, ids: &[ConstraintId]) -> Result<(), LayoutError> {
        let constraints = {
            let state = self.state.borrow();
            let mut seen = HashSet::with_capacity(ids.len());
            ids.iter()
                .map(|&id| match state.entries.get(id.0) {
                    _ if !seen.insert(id) => Err(LayoutError::DuplicateConstraint { id }),
                    None => Err(LayoutError::UnknownConstraint { id }),
                    Some(Entry {
                        status: Status::Active(_),
                        ..
                    }) => Err(LayoutError::AlreadyActive { id }),
                    Some(entry) => Ok(entry.constraint.clone()),
                })
                .collect::<Result<Vec<_>, _>>()?
        };
        if constraints.is_empty() {
            return Ok(());
        }

        let handles = {
            let mut engine = self.engine.borrow_mut();
            let handles: Vec<E::Handle> = constraints.iter().map(|c| engine.install(c)).collect();
            engine.activate(&handles)?;
            handles
        };

        let mut state = self.state.borrow_mut();
        for (&id, handle) in ids.iter().zip(handles) {
            state.entries[id.0].status = Status::Active(handle);
        }
        debug!(count = ids.len(), "activated constraints");
        Ok(())
    }

    /// The current descriptor of a constraint
    pub fn constraint(&self, id: ConstraintId) -> Option<Constraint> {
        self.state
            .borrow()
            .entries
            .get(id.0)
            .map(|entry| entry.constraint.clone())
    }

    /// Descriptors for `ids`, skipping unknown ids
    pub fn descriptors(&self, ids: &[ConstraintId]) -> Vec<Constraint> {
        ids.iter().filter_map(|&id| self.constraint(id)).collect()
    }

    pub fn is_active(&self, id: ConstraintId) -> bool {
        matches!(
            self.state.borrow().entries.get(id.0),
            Some(Entry {
                status: Status::Active(_),
                ..
            })
        )
    }

    /// The engine handle of an active constraint
    pub fn handle(&self, id: ConstraintId) -> Option<E::Handle> {
        match &self.state.borrow().entries.get(id.0)?.status {
            Status::Active(handle) => Some(handle.clone()),
            Status::Pending => None,
        }
    }

    /// Change the priority of a constraint that is still pending.
    pub fn set_priority(&self, id: ConstraintId, priority: Priority) -> Result<(), LayoutError> {
        self.update_pending(id, |constraint| constraint.priority = priority)
    }

    /// Change the identifier of a constraint that is still pending.
    pub fn set_identifier(
        &self,
        id: ConstraintId,
        identifier: impl Into<String>,
    ) -> Result<(), LayoutError> {
        let identifier = identifier.into();
        self.update_pending(id, |constraint| constraint.identifier = Some(identifier))
    }

    fn update_pending(
        &self,
        id: ConstraintId,
        update: impl FnOnce(&mut Constraint),
    ) -> Result<(), LayoutError> {
        let mut state = self.state.borrow_mut();
        let entry = state
            .entries
            .get_mut(id.0)
            .ok_or(LayoutError::UnknownConstraint { id })?;
        match entry.status {
            Status::Active(_) => Err(LayoutError::AlreadyActive { id }),
            Status::Pending => {
                update(&mut entry.constraint);
                Ok(())
            }
        }
    }

    /// Engine failures from constraints activated outside any group
    pub fn take_errors(&self) -> Vec<LayoutError> {
        std::mem::take(&mut self.state.borrow_mut().errors)
    }

    /// # Panics
    ///
    /// Panics if the engine is mutably borrowed through [`engine_mut`](Self::engine_mut).
    pub fn engine(&self) -> Ref<'_, E> {
        self.engine.borrow()
    }

    pub fn engine_mut(&self) -> RefMut<'_, E> {
        self.engine.borrow_mut()
    }

    pub fn into_engine(self) -> E {
        self.engine.into_inner()
    }
}

impl<E: LayoutEngine> ConstraintSink for Layout<E> {
    fn add(&self, mut constraint: Constraint) -> ConstraintId {
        let first_use = self
            .state
            .borrow_mut()
            .prepared
            .insert(constraint.first_item.clone());
        if first_use {
            self.engine.borrow_mut().prepare_item(&constraint.first_item);
        }

        let (id, immediate) = {
            let mut state = self.state.borrow_mut();
            let id = ConstraintId(state.entries.len());
            let immediate = match state.groups.last_mut() {
                Some(group) => {
                    if let Some(priority) = group.options.priority {
                        constraint.priority = priority;
                    }
                    if let Some(identifier) = &group.options.identifier {
                        constraint.identifier = Some(identifier.clone());
                    }
                    group.pending.push(id);
                    false
                }
                None => true,
            };
            trace!(%id, %constraint, "constraint created");
            state.entries.push(Entry {
                constraint,
                status: Status::Pending,
            });
            (id, immediate)
        };

        if immediate {
            if let Err(err) = self.activate(&[id]) {
                warn!(%id, "layout engine rejected constraint: {}", err);
                self.state.borrow_mut().errors.push(err);
            }
        }
        id
    }
}

/// Drops the groups opened by `group_with` if its body unwinds
struct GroupScope<'l, E: LayoutEngine> {
    layout: &'l Layout<E>,
    depth: usize,
}

impl<E: LayoutEngine> Drop for GroupScope<'_, E> {
    fn drop(&mut self) {
        if let Ok(mut state) = self.layout.state.try_borrow_mut() {
            state.groups.truncate(self.depth);
        }
    }
}
