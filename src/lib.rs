//! Anchor Layout - a typed builder for linear layout constraints
//!
//! This library turns expressions over item anchors (edges, center lines,
//! baselines, dimensions) into normalized constraint descriptors and hands
//! them to a host layout engine, either one at a time or in atomic groups.
//!
//! # Example
//!
//! ```rust
//! use anchor_layout::{Alignment, EdgeInsets, Item, Layout, Priority, RecordingEngine, Relation, Size};
//!
//! let layout = Layout::new(RecordingEngine::new());
//! let container = Item::root("container");
//! let view = Item::child("view", &container);
//!
//! layout
//!     .group(|| {
//!         let v = layout.anchors(&view);
//!         let size = v.size().set(Size::new(80.0, 80.0), Relation::Equal);
//!         for id in size {
//!             layout.set_priority(id, Priority::new(1.0)).unwrap();
//!         }
//!         v.edges()
//!             .align_in_superview(EdgeInsets::uniform(10.0), Alignment::CENTER)
//!             .unwrap();
//!     })
//!     .unwrap();
//!
//! let engine = layout.engine();
//! assert_eq!(engine.batches().len(), 1);
//! assert_eq!(engine.active().len(), 8);
//! assert_eq!(engine.active()[0].to_string(), "view.width == 80 @1");
//! ```

pub mod anchor;
pub mod attribute;
pub mod collection;
pub mod config;
pub mod constraint;
pub mod engine;
pub mod error;
pub mod item;
pub mod session;

pub use anchor::{Anchor, Baseline, Center, Dimension, Edge, Horizontal, Vertical};
pub use attribute::{
    Attribute, Axis, Category, EdgeInsets, LayoutDirection, LayoutEdge, Priority, Relation, Size,
};
pub use collection::{Alignment, Anchors, Edges, HorizontalAlignment, SizeAnchors, VerticalAlignment};
pub use config::LayoutConfig;
pub use constraint::{Constraint, ConstraintId};
pub use engine::{EngineError, EngineEvent, Frame, LayoutEngine, RecordingEngine, SolverEngine};
pub use error::{ConfigError, LayoutError};
pub use item::{Item, ItemId, LayoutItem};
pub use session::{GroupOptions, Layout};
