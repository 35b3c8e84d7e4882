//! Constraint descriptors handed to the host layout engine

use std::fmt;

use crate::attribute::{Attribute, Priority, Relation};
use crate::item::ItemId;

/// Handle to a constraint created through a [`Layout`](crate::Layout) session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId(pub(crate) usize);

impl ConstraintId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A normalized linear relation
///
/// `first.attribute <relation> second.attribute * multiplier + constant`,
/// or `first.attribute <relation> constant` when there is no second item.
/// Offsets and multipliers accumulated on anchors are already folded into
/// `multiplier` and `constant`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub first_item: ItemId,
    pub first_attribute: Attribute,
    pub relation: Relation,
    pub second_item: Option<ItemId>,
    pub second_attribute: Option<Attribute>,
    pub multiplier: f64,
    pub constant: f64,
    pub priority: Priority,
    pub identifier: Option<String>,
}

impl Constraint {
    /// `first.attribute <relation> constant`
    pub fn constant(
        first_item: ItemId,
        first_attribute: Attribute,
        relation: Relation,
        constant: f64,
    ) -> Self {
        Self {
            first_item,
            first_attribute,
            relation,
            second_item: None,
            second_attribute: None,
            multiplier: 1.0,
            constant,
            priority: Priority::REQUIRED,
            identifier: None,
        }
    }

    /// `first.attribute <relation> second.attribute * multiplier + constant`
    pub fn between(
        (first_item, first_attribute): (ItemId, Attribute),
        relation: Relation,
        (second_item, second_attribute): (ItemId, Attribute),
        multiplier: f64,
        constant: f64,
    ) -> Self {
        Self {
            first_item,
            first_attribute,
            relation,
            second_item: Some(second_item),
            second_attribute: Some(second_attribute),
            multiplier,
            constant,
            priority: Priority::REQUIRED,
            identifier: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// The second item and attribute, if the constraint relates two items
    pub fn second(&self) -> Option<(&ItemId, Attribute)> {
        self.second_item.as_ref().zip(self.second_attribute)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = &self.identifier {
            write!(f, "{}: ", id)?;
        }
        write!(
            f,
            "{}.{} {} ",
            self.first_item, self.first_attribute, self.relation
        )?;
        match self.second() {
            Some((item, attribute)) => {
                write!(f, "{}.{}", item, attribute)?;
                if self.multiplier != 1.0 {
                    write!(f, " * {}", self.multiplier)?;
                }
                if self.constant > 0.0 {
                    write!(f, " + {}", self.constant)?;
                } else if self.constant < 0.0 {
                    write!(f, " - {}", -self.constant)?;
                }
            }
            None => write!(f, "{}", self.constant)?,
        }
        if !self.priority.is_required() {
            write!(f, " @{}", self.priority)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top(id: &str) -> (ItemId, Attribute) {
        (ItemId::new(id), Attribute::Top)
    }

    #[test]
    fn test_display_between() {
        let c = Constraint::between(top("view"), Relation::Equal, top("container"), 2.0, 10.0);
        assert_eq!(c.to_string(), "view.top == container.top * 2 + 10");

        let c = Constraint::between(
            (ItemId::new("view"), Attribute::Bottom),
            Relation::LessThanOrEqual,
            (ItemId::new("container"), Attribute::Bottom),
            1.0,
            -8.0,
        );
        assert_eq!(c.to_string(), "view.bottom <= container.bottom - 8");
    }

    #[test]
    fn test_display_constant() {
        let c = Constraint::constant(ItemId::new("view"), Attribute::Width, Relation::Equal, 80.0)
            .with_priority(Priority::new(1.0))
            .with_identifier("size");
        assert_eq!(c.to_string(), "size: view.width == 80 @1");
    }

    #[test]
    fn test_second_accessor() {
        let c = Constraint::between(top("a"), Relation::Equal, top("b"), 1.0, 0.0);
        assert_eq!(c.second(), Some((&ItemId::new("b"), Attribute::Top)));
        let c = Constraint::constant(ItemId::new("a"), Attribute::Height, Relation::Equal, 1.0);
        assert_eq!(c.second(), None);
    }
}
