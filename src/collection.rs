//! Anchor collections: per-item anchor access and multi-constraint helpers
//!
//! [`Anchors`] hands out the typed anchors of one item. [`Edges`],
//! [`Center`] and [`SizeAnchors`] act on several anchors at once and return
//! the ids of every constraint they create, in creation order.

use crate::anchor::{Anchor, AnyAxis, Baseline, Center as CenterKind, Dimension, Edge, Horizontal, Vertical};
use crate::attribute::{Attribute, Axis, EdgeInsets, LayoutEdge, Relation, Size};
use crate::constraint::{Constraint, ConstraintId};
use crate::error::LayoutError;
use crate::item::{ItemId, LayoutItem};
use crate::session::ConstraintSink;

/// How an item is placed along the horizontal axis inside its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    Fill,
    Center,
    Leading,
    Trailing,
}

/// How an item is placed along the vertical axis inside its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Fill,
    Center,
    Top,
    Bottom,
}

/// Placement of an item inside a container, one policy per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
}

impl Alignment {
    pub const FILL: Alignment = Alignment::new(HorizontalAlignment::Fill, VerticalAlignment::Fill);
    pub const CENTER: Alignment = Alignment::new(HorizontalAlignment::Center, VerticalAlignment::Center);
    pub const TOP_LEADING: Alignment = Alignment::new(HorizontalAlignment::Leading, VerticalAlignment::Top);
    pub const TOP: Alignment = Alignment::new(HorizontalAlignment::Fill, VerticalAlignment::Top);
    pub const TOP_TRAILING: Alignment = Alignment::new(HorizontalAlignment::Trailing, VerticalAlignment::Top);
    pub const LEADING: Alignment = Alignment::new(HorizontalAlignment::Leading, VerticalAlignment::Fill);
    pub const TRAILING: Alignment = Alignment::new(HorizontalAlignment::Trailing, VerticalAlignment::Fill);
    pub const BOTTOM_LEADING: Alignment = Alignment::new(HorizontalAlignment::Leading, VerticalAlignment::Bottom);
    pub const BOTTOM: Alignment = Alignment::new(HorizontalAlignment::Fill, VerticalAlignment::Bottom);
    pub const BOTTOM_TRAILING: Alignment = Alignment::new(HorizontalAlignment::Trailing, VerticalAlignment::Bottom);

    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::FILL
    }
}

/// The anchors of one item
///
/// Obtained from [`Layout::anchors`](crate::Layout::anchors). The parent is
/// captured when the proxy is created.
#[derive(Clone)]
pub struct Anchors<'a> {
    sink: &'a dyn ConstraintSink,
    item: ItemId,
    parent: Option<ItemId>,
}

impl std::fmt::Debug for Anchors<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Anchors")
            .field("item", &self.item)
            .field("parent", &self.parent)
            .finish()
    }
}

impl<'a> Anchors<'a> {
    pub(crate) fn new(sink: &'a dyn ConstraintSink, item: &dyn LayoutItem) -> Self {
        Self {
            sink,
            item: item.id().clone(),
            parent: item.parent().cloned(),
        }
    }

    pub fn item(&self) -> &ItemId {
        &self.item
    }

    fn anchor<K, A>(&self, attribute: Attribute) -> Anchor<'a, K, A> {
        Anchor::new(self.sink, self.item.clone(), self.parent.clone(), attribute)
    }

    pub fn top(&self) -> Anchor<'a, Edge, Vertical> {
        self.anchor(Attribute::Top)
    }

    pub fn bottom(&self) -> Anchor<'a, Edge, Vertical> {
        self.anchor(Attribute::Bottom)
    }

    pub fn left(&self) -> Anchor<'a, Edge, Horizontal> {
        self.anchor(Attribute::Left)
    }

    pub fn right(&self) -> Anchor<'a, Edge, Horizontal> {
        self.anchor(Attribute::Right)
    }

    pub fn leading(&self) -> Anchor<'a, Edge, Horizontal> {
        self.anchor(Attribute::Leading)
    }

    pub fn trailing(&self) -> Anchor<'a, Edge, Horizontal> {
        self.anchor(Attribute::Trailing)
    }

    pub fn center_x(&self) -> Anchor<'a, CenterKind, Horizontal> {
        self.anchor(Attribute::CenterX)
    }

    pub fn center_y(&self) -> Anchor<'a, CenterKind, Vertical> {
        self.anchor(Attribute::CenterY)
    }

    pub fn first_baseline(&self) -> Anchor<'a, Baseline, Vertical> {
        self.anchor(Attribute::FirstBaseline)
    }

    pub fn last_baseline(&self) -> Anchor<'a, Baseline, Vertical> {
        self.anchor(Attribute::LastBaseline)
    }

    pub fn width(&self) -> Anchor<'a, Dimension, Horizontal> {
        self.anchor(Attribute::Width)
    }

    pub fn height(&self) -> Anchor<'a, Dimension, Vertical> {
        self.anchor(Attribute::Height)
    }

    /// Top, leading, bottom and trailing
    pub fn edges(&self) -> Edges<'a> {
        self.edges_of(&[
            LayoutEdge::Top,
            LayoutEdge::Leading,
            LayoutEdge::Bottom,
            LayoutEdge::Trailing,
        ])
    }

    /// A custom edge list, kept in the given order
    pub fn edges_of(&self, edges: &[LayoutEdge]) -> Edges<'a> {
        Edges {
            anchors: self.clone(),
            edges: edges.to_vec(),
            axis: None,
            absolute: false,
        }
    }

    pub fn center(&self) -> Center<'a> {
        Center {
            x: self.center_x(),
            y: self.center_y(),
        }
    }

    pub fn size(&self) -> SizeAnchors<'a> {
        SizeAnchors {
            width: self.width(),
            height: self.height(),
        }
    }

    fn parent_or(&self, operation: &str) -> Result<ItemId, LayoutError> {
        self.parent
            .clone()
            .ok_or_else(|| LayoutError::no_parent(&self.item, operation))
    }
}

/// A set of edges of one item
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    anchors: Anchors<'a>,
    edges: Vec<LayoutEdge>,
    axis: Option<Axis>,
    absolute: bool,
}

impl<'a> Edges<'a> {
    /// Use `left`/`right` instead of `leading`/`trailing`.
    pub fn absolute(mut self) -> Self {
        self.absolute = true;
        for edge in &mut self.edges {
            *edge = match *edge {
                LayoutEdge::Leading => LayoutEdge::Left,
                LayoutEdge::Trailing => LayoutEdge::Right,
                other => other,
            };
        }
        self
    }

    /// Restrict every operation to one axis.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn edges(&self) -> Vec<LayoutEdge> {
        self.selected().collect()
    }

    fn selected(&self) -> impl Iterator<Item = LayoutEdge> + '_ {
        self.edges
            .iter()
            .copied()
            .filter(|edge| self.axis.map_or(true, |axis| edge.axis() == axis))
    }

    fn on_axis(&self, axis: Axis) -> bool {
        self.axis.map_or(true, |selected| selected == axis)
    }

    fn anchor(&self, attribute: Attribute) -> Anchor<'a, Edge, AnyAxis> {
        self.anchors.anchor(attribute)
    }

    fn install(&self, constraints: Vec<Constraint>) -> Vec<ConstraintId> {
        constraints
            .into_iter()
            .map(|constraint| self.anchors.sink.add(constraint))
            .collect()
    }

    fn pinned(
        &self,
        target: ItemId,
        margins: bool,
        insets: EdgeInsets,
        relation: Relation,
    ) -> Vec<Constraint> {
        self.selected()
            .map(|edge| {
                let attribute = edge.attribute();
                let target_attribute = if margins {
                    attribute.to_margin()
                } else {
                    attribute
                };
                self.anchor(attribute).pinned(
                    target.clone(),
                    target_attribute,
                    insets.inset(attribute),
                    relation,
                )
            })
            .collect()
    }

    /// Pin each edge to the same edge of the parent.
    ///
    /// The inset for each edge is read from `insets`; `bottom`, `right` and
    /// `trailing` insets move inward.
    pub fn pin_to_superview(
        &self,
        insets: EdgeInsets,
        relation: Relation,
    ) -> Result<Vec<ConstraintId>, LayoutError> {
        let parent = self.anchors.parent_or("pin edges to")?;
        Ok(self.install(self.pinned(parent, false, insets, relation)))
    }

    /// Pin each edge to the corresponding margin of the parent.
    pub fn pin_to_superview_margins(
        &self,
        insets: EdgeInsets,
        relation: Relation,
    ) -> Result<Vec<ConstraintId>, LayoutError> {
        let parent = self.anchors.parent_or("pin edges to the margins of")?;
        Ok(self.install(self.pinned(parent, true, insets, relation)))
    }

    /// Pin each edge to the same edge of `container`.
    pub fn pin_to(
        &self,
        container: &dyn LayoutItem,
        insets: EdgeInsets,
        relation: Relation,
    ) -> Vec<ConstraintId> {
        self.install(self.pinned(container.id().clone(), false, insets, relation))
    }

    /// Place the item inside the parent according to `alignment`.
    pub fn align_in_superview(
        &self,
        insets: EdgeInsets,
        alignment: Alignment,
    ) -> Result<Vec<ConstraintId>, LayoutError> {
        let parent = self.anchors.parent_or("align edges in")?;
        Ok(self.install(self.aligned(parent, false, insets, alignment)))
    }

    /// Place the item inside the parent's margins according to `alignment`.
    pub fn align_in_superview_margins(
        &self,
        insets: EdgeInsets,
        alignment: Alignment,
    ) -> Result<Vec<ConstraintId>, LayoutError> {
        let parent = self.anchors.parent_or("align edges in the margins of")?;
        Ok(self.install(self.aligned(parent, true, insets, alignment)))
    }

    /// Place the item inside `container` according to `alignment`.
    pub fn align_in(
        &self,
        container: &dyn LayoutItem,
        insets: EdgeInsets,
        alignment: Alignment,
    ) -> Vec<ConstraintId> {
        self.install(self.aligned(container.id().clone(), false, insets, alignment))
    }

    /// Horizontal axis first, then vertical. On each axis the leading edge
    /// is `==` when the policy hugs it (or fills) and `>=` otherwise, the
    /// trailing edge is `==` or `<=` likewise, and a centered policy adds a
    /// center-line equality.
    fn aligned(
        &self,
        target: ItemId,
        margins: bool,
        insets: EdgeInsets,
        alignment: Alignment,
    ) -> Vec<Constraint> {
        let mut constraints = Vec::new();
        let mut push = |attribute: Attribute, relation: Relation, constant: f64| {
            let target_attribute = if margins {
                attribute.to_margin()
            } else {
                attribute
            };
            constraints.push(Constraint::between(
                (self.anchors.item.clone(), attribute),
                relation,
                (target.clone(), target_attribute),
                1.0,
                constant,
            ));
        };

        if self.on_axis(Axis::Horizontal) {
            let (start, end) = if self.absolute {
                (Attribute::Left, Attribute::Right)
            } else {
                (Attribute::Leading, Attribute::Trailing)
            };
            let h = alignment.horizontal;
            push(
                start,
                hugs(h == HorizontalAlignment::Fill || h == HorizontalAlignment::Leading, Relation::GreaterThanOrEqual),
                insets.left,
            );
            push(
                end,
                hugs(h == HorizontalAlignment::Fill || h == HorizontalAlignment::Trailing, Relation::LessThanOrEqual),
                -insets.right,
            );
            if h == HorizontalAlignment::Center {
                push(Attribute::CenterX, Relation::Equal, 0.0);
            }
        }

        if self.on_axis(Axis::Vertical) {
            let v = alignment.vertical;
            push(
                Attribute::Top,
                hugs(v == VerticalAlignment::Fill || v == VerticalAlignment::Top, Relation::GreaterThanOrEqual),
                insets.top,
            );
            push(
                Attribute::Bottom,
                hugs(v == VerticalAlignment::Fill || v == VerticalAlignment::Bottom, Relation::LessThanOrEqual),
                -insets.bottom,
            );
            if v == VerticalAlignment::Center {
                push(Attribute::CenterY, Relation::Equal, 0.0);
            }
        }

        constraints
    }
}

fn hugs(hugged: bool, otherwise: Relation) -> Relation {
    if hugged {
        Relation::Equal
    } else {
        otherwise
    }
}

/// The two center lines of one item
#[derive(Debug, Clone)]
pub struct Center<'a> {
    pub x: Anchor<'a, CenterKind, Horizontal>,
    pub y: Anchor<'a, CenterKind, Vertical>,
}

impl<'a> Center<'a> {
    /// Center the item in its parent.
    pub fn align_with_superview(&self) -> Result<Vec<ConstraintId>, LayoutError> {
        Ok(vec![
            self.x.align_with_superview(0.0, Relation::Equal)?,
            self.y.align_with_superview(0.0, Relation::Equal)?,
        ])
    }

    /// Center the item within the margins of its parent.
    pub fn align_with_superview_margins(&self) -> Result<Vec<ConstraintId>, LayoutError> {
        Ok(vec![
            self.x.align_with_superview_margin(0.0, Relation::Equal)?,
            self.y.align_with_superview_margin(0.0, Relation::Equal)?,
        ])
    }

    /// Share both center lines with another item.
    pub fn align_with(&self, other: &Center<'_>) -> Vec<ConstraintId> {
        vec![
            self.x.align_with(other.x.clone(), Relation::Equal),
            self.y.align_with(other.y.clone(), Relation::Equal),
        ]
    }
}

/// Width and height of one item
#[derive(Debug, Clone)]
pub struct SizeAnchors<'a> {
    pub width: Anchor<'a, Dimension, Horizontal>,
    pub height: Anchor<'a, Dimension, Vertical>,
}

impl<'a> SizeAnchors<'a> {
    /// Width first, then height.
    pub fn set(&self, size: Size, relation: Relation) -> Vec<ConstraintId> {
        vec![
            self.width.set(size.width, relation),
            self.height.set(size.height, relation),
        ]
    }

    /// `width <relation> other.width * multiplier - insets.width`, and the
    /// same for height.
    ///
    /// # Panics
    ///
    /// Panics if `multiplier` is zero.
    pub fn match_to(
        &self,
        other: &SizeAnchors<'_>,
        insets: Size,
        multiplier: f64,
        relation: Relation,
    ) -> Vec<ConstraintId> {
        vec![
            self.width
                .match_to(other.width.clone() * multiplier - insets.width, relation),
            self.height
                .match_to(other.height.clone() * multiplier - insets.height, relation),
        ]
    }
}
