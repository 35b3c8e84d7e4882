//! Layout items: anything that can be the subject of a constraint
//!
//! The library never owns items. It only reads an item's identity and its
//! parent relation, and refers to items by [`ItemId`] in the constraints it
//! produces.

use std::fmt;

/// Identity of a layout item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A view or layout guide as seen by the constraint builder
pub trait LayoutItem {
    fn id(&self) -> &ItemId;

    /// `None` for a detached or root item
    fn parent(&self) -> Option<&ItemId>;
}

/// A plain layout item: an id and an optional parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    parent: Option<ItemId>,
}

impl Item {
    /// An item without a parent
    pub fn root(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            parent: None,
        }
    }

    /// An item attached to `parent`
    pub fn child(id: impl Into<ItemId>, parent: &impl LayoutItem) -> Self {
        Self {
            id: id.into(),
            parent: Some(parent.id().clone()),
        }
    }
}

impl LayoutItem for Item {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn parent(&self) -> Option<&ItemId> {
        self.parent.as_ref()
    }
}
