//! Typed anchors and the operators that combine them
//!
//! An [`Anchor`] is one attribute of one item plus an accumulated offset
//! and multiplier, i.e. the expression `multiplier * attribute + offset`.
//! Two phantom parameters classify it: a *kind* ([`Edge`], [`Center`],
//! [`Baseline`], [`Dimension`]) and an *axis* ([`Horizontal`],
//! [`Vertical`]). They carry no data; they only decide which relations
//! type-check:
//!
//! - alignment anchors (edges, centers, baselines) relate to alignment
//!   anchors on the same axis,
//! - dimension anchors relate to dimension anchors on either axis.
//!
//! ```compile_fail
//! use anchor_layout::{Item, Layout, RecordingEngine};
//!
//! let layout = Layout::new(RecordingEngine::new());
//! let container = Item::root("container");
//! let view = Item::child("view", &container);
//! let (v, c) = (layout.anchors(&view), layout.anchors(&container));
//! // an edge can't be related to a dimension
//! v.top().equal(c.height());
//! ```
//!
//! ```compile_fail
//! use anchor_layout::{Item, Layout, RecordingEngine};
//!
//! let layout = Layout::new(RecordingEngine::new());
//! let container = Item::root("container");
//! let view = Item::child("view", &container);
//! let (v, c) = (layout.anchors(&view), layout.anchors(&container));
//! // alignment anchors must share an axis
//! v.leading().equal(c.top());
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Sub};

use crate::attribute::{Attribute, Axis, Relation};
use crate::constraint::{Constraint, ConstraintId};
use crate::error::LayoutError;
use crate::item::{ItemId, LayoutItem};
use crate::session::ConstraintSink;

mod sealed {
    pub trait Sealed {}
}

/// Edge anchors: top, bottom, left, right, leading, trailing
pub enum Edge {}
/// Center anchors: center_x, center_y
pub enum Center {}
/// Baseline anchors: first_baseline, last_baseline
pub enum Baseline {}
/// Dimension anchors: width, height
pub enum Dimension {}

/// Horizontal axis marker
pub enum Horizontal {}
/// Vertical axis marker
pub enum Vertical {}

/// Untyped axis for anchors built internally by collections
pub(crate) enum AnyAxis {}

pub trait AnchorKind: sealed::Sealed {}

/// Edges, centers and baselines
pub trait AlignmentKind: AnchorKind {}

pub trait AnchorAxis: sealed::Sealed {
    const AXIS: Axis;
}

impl sealed::Sealed for Edge {}
impl sealed::Sealed for Center {}
impl sealed::Sealed for Baseline {}
impl sealed::Sealed for Dimension {}
impl sealed::Sealed for Horizontal {}
impl sealed::Sealed for Vertical {}

impl AnchorKind for Edge {}
impl AnchorKind for Center {}
impl AnchorKind for Baseline {}
impl AnchorKind for Dimension {}

impl AlignmentKind for Edge {}
impl AlignmentKind for Center {}
impl AlignmentKind for Baseline {}

impl AnchorAxis for Horizontal {
    const AXIS: Axis = Axis::Horizontal;
}

impl AnchorAxis for Vertical {
    const AXIS: Axis = Axis::Vertical;
}

/// Implemented for `(Kind, Axis)` pairs whose anchors may be related to
/// anchors of kind `K2` on axis `A2`.
pub trait Relatable<K2, A2>: sealed::Sealed {}

impl<K, A> sealed::Sealed for (K, A) {}

impl<K1: AlignmentKind, K2: AlignmentKind, A: AnchorAxis> Relatable<K2, A> for (K1, A) {}

impl<A1: AnchorAxis, A2: AnchorAxis> Relatable<Dimension, A2> for (Dimension, A1) {}

/// One layout attribute of one item, with an accumulated offset and multiplier
pub struct Anchor<'a, K, A> {
    sink: &'a dyn ConstraintSink,
    item: ItemId,
    parent: Option<ItemId>,
    attribute: Attribute,
    offset: f64,
    multiplier: f64,
    _marker: PhantomData<fn() -> (K, A)>,
}

impl<'a, K, A> Clone for Anchor<'a, K, A> {
    fn clone(&self) -> Self {
        Self {
            sink: self.sink,
            item: self.item.clone(),
            parent: self.parent.clone(),
            attribute: self.attribute,
            offset: self.offset,
            multiplier: self.multiplier,
            _marker: PhantomData,
        }
    }
}

impl<K, A> fmt::Debug for Anchor<'_, K, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Anchor")
            .field("item", &self.item)
            .field("attribute", &self.attribute)
            .field("offset", &self.offset)
            .field("multiplier", &self.multiplier)
            .finish()
    }
}

impl<'a, K, A> Anchor<'a, K, A> {
    pub(crate) fn new(
        sink: &'a dyn ConstraintSink,
        item: ItemId,
        parent: Option<ItemId>,
        attribute: Attribute,
    ) -> Self {
        Self {
            sink,
            item,
            parent,
            attribute,
            offset: 0.0,
            multiplier: 1.0,
            _marker: PhantomData,
        }
    }

    pub fn item(&self) -> &ItemId {
        &self.item
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// A new anchor offset by `offset`; the multiplier is unchanged.
    pub fn offsetting(&self, offset: f64) -> Self {
        Self {
            offset: self.offset + offset,
            ..self.clone()
        }
    }

    /// A new anchor with the whole expression scaled by `multiplier`.
    ///
    /// Both the multiplier and the accumulated offset are scaled.
    ///
    /// # Panics
    ///
    /// Panics if `multiplier` is zero.
    pub fn scaling(&self, multiplier: f64) -> Self {
        assert!(
            multiplier != 0.0,
            "cannot scale {}.{} by zero",
            self.item,
            self.attribute
        );
        Self {
            offset: self.offset * multiplier,
            multiplier: self.multiplier * multiplier,
            ..self.clone()
        }
    }

    /// The same attribute on the parent item
    fn on_parent(&self, operation: &str) -> Result<Anchor<'a, K, A>, LayoutError> {
        let parent = self
            .parent
            .clone()
            .ok_or_else(|| LayoutError::no_parent(&self.item, operation))?;
        Ok(Anchor::new(self.sink, parent, None, self.attribute))
    }

    /// Lower `self <relation> other * multiplier + constant` to a descriptor.
    fn lower_to<K2, A2>(
        &self,
        other: &Anchor<'_, K2, A2>,
        relation: Relation,
        constant: f64,
        multiplier: f64,
    ) -> Constraint {
        Constraint::between(
            (self.item.clone(), self.attribute),
            relation,
            (other.item.clone(), other.attribute),
            (multiplier / self.multiplier) * other.multiplier,
            constant - self.offset + other.offset,
        )
    }

    /// Lower `self <relation> item.attribute + constant` to a descriptor.
    fn lower_to_item(
        &self,
        item: ItemId,
        attribute: Attribute,
        relation: Relation,
        constant: f64,
    ) -> Constraint {
        Constraint::between(
            (self.item.clone(), self.attribute),
            relation,
            (item, attribute),
            1.0 / self.multiplier,
            constant - self.offset,
        )
    }

    /// Pin against `attribute` of `item`, moving inward by `inset`.
    ///
    /// For `bottom`, `right` and `trailing` (and their margins) the inset is
    /// negated and the relation inverted.
    pub(crate) fn pinned(
        &self,
        item: ItemId,
        attribute: Attribute,
        inset: f64,
        relation: Relation,
    ) -> Constraint {
        let inverted = self.attribute.is_inverted();
        self.lower_to_item(
            item,
            attribute,
            relation.inverted_if(inverted),
            if inverted { -inset } else { inset },
        )
    }

    pub(crate) fn install(&self, constraint: Constraint) -> ConstraintId {
        self.sink.add(constraint)
    }
}

impl<'a, K, A> Add<f64> for Anchor<'a, K, A> {
    type Output = Anchor<'a, K, A>;

    fn add(self, offset: f64) -> Self::Output {
        self.offsetting(offset)
    }
}

impl<'a, K, A> Sub<f64> for Anchor<'a, K, A> {
    type Output = Anchor<'a, K, A>;

    fn sub(self, offset: f64) -> Self::Output {
        self.offsetting(-offset)
    }
}

impl<'a, K, A> Mul<f64> for Anchor<'a, K, A> {
    type Output = Anchor<'a, K, A>;

    fn mul(self, multiplier: f64) -> Self::Output {
        self.scaling(multiplier)
    }
}

// Relations between compatible anchors

impl<'a, K, A> Anchor<'a, K, A> {
    /// The descriptor for `self <relation> other * multiplier + constant`,
    /// without installing it.
    ///
    /// With `self = m1 * A1 + o1` and `other = m2 * A2 + o2` the result has
    /// multiplier `(multiplier / m1) * m2` and constant `constant - o1 + o2`.
    /// Unlike `other * multiplier`, the multiplier argument leaves `o2`
    /// unscaled.
    pub fn relate<K2, A2>(
        &self,
        other: Anchor<'_, K2, A2>,
        relation: Relation,
        constant: f64,
        multiplier: f64,
    ) -> Constraint
    where
        (K, A): Relatable<K2, A2>,
    {
        self.lower_to(&other, relation, constant, multiplier)
    }

    /// Create and install `self <relation> other * multiplier + constant`.
    pub fn constrain<K2, A2>(
        &self,
        other: Anchor<'_, K2, A2>,
        relation: Relation,
        constant: f64,
        multiplier: f64,
    ) -> ConstraintId
    where
        (K, A): Relatable<K2, A2>,
    {
        self.install(self.relate(other, relation, constant, multiplier))
    }

    pub fn equal<K2, A2>(&self, other: Anchor<'_, K2, A2>) -> ConstraintId
    where
        (K, A): Relatable<K2, A2>,
    {
        self.constrain(other, Relation::Equal, 0.0, 1.0)
    }

    pub fn greater_than_or_equal<K2, A2>(&self, other: Anchor<'_, K2, A2>) -> ConstraintId
    where
        (K, A): Relatable<K2, A2>,
    {
        self.constrain(other, Relation::GreaterThanOrEqual, 0.0, 1.0)
    }

    pub fn less_than_or_equal<K2, A2>(&self, other: Anchor<'_, K2, A2>) -> ConstraintId
    where
        (K, A): Relatable<K2, A2>,
    {
        self.constrain(other, Relation::LessThanOrEqual, 0.0, 1.0)
    }
}

impl<'a, K: AlignmentKind, A: AnchorAxis> Anchor<'a, K, A> {
    /// Align with another edge, center or baseline on the same axis.
    pub fn align_with<K2: AlignmentKind>(
        &self,
        other: Anchor<'_, K2, A>,
        relation: Relation,
    ) -> ConstraintId {
        self.constrain(other, relation, 0.0, 1.0)
    }
}

impl<'a, A: AnchorAxis> Anchor<'a, Edge, A> {
    /// Pin the edge to the same edge of the parent.
    pub fn pin_to_superview(
        &self,
        inset: f64,
        relation: Relation,
    ) -> Result<ConstraintId, LayoutError> {
        let parent = self.on_parent(&format!("pin {} to", self.attribute))?;
        Ok(self.install(self.pinned(parent.item, self.attribute, inset, relation)))
    }

    /// Pin the edge to the corresponding margin of the parent.
    pub fn pin_to_superview_margin(
        &self,
        inset: f64,
        relation: Relation,
    ) -> Result<ConstraintId, LayoutError> {
        let parent = self.on_parent(&format!("pin {} to the margin of", self.attribute))?;
        Ok(self.install(self.pinned(
            parent.item,
            self.attribute.to_margin(),
            inset,
            relation,
        )))
    }

    /// Pin the edge to the same edge of `container`.
    pub fn pin_to(&self, container: &dyn LayoutItem, inset: f64, relation: Relation) -> ConstraintId {
        self.install(self.pinned(container.id().clone(), self.attribute, inset, relation))
    }

    /// Keep `spacing` between this edge and `other`.
    ///
    /// A positive spacing always separates the edges: stacking `a` above
    /// `b` with `a.bottom().spacing(8.0, b.top(), ..)` yields
    /// `a.bottom == b.top - 8`, while `b.top().spacing(8.0, a.bottom(), ..)`
    /// yields `b.top == a.bottom + 8`.
    pub fn spacing(
        &self,
        spacing: f64,
        other: Anchor<'_, Edge, A>,
        relation: Relation,
    ) -> ConstraintId {
        let inverted = self.attribute.is_inverted();
        self.constrain(
            other,
            relation.inverted_if(inverted),
            if inverted { -spacing } else { spacing },
            1.0,
        )
    }
}

impl<'a, A: AnchorAxis> Anchor<'a, Center, A> {
    /// Align the center line with the same center line of the parent.
    pub fn align_with_superview(
        &self,
        offset: f64,
        relation: Relation,
    ) -> Result<ConstraintId, LayoutError> {
        let parent = self.on_parent(&format!("align {} with", self.attribute))?;
        Ok(self.constrain(parent + offset, relation, 0.0, 1.0))
    }

    /// Align the center line with the parent's center line within its margins.
    pub fn align_with_superview_margin(
        &self,
        offset: f64,
        relation: Relation,
    ) -> Result<ConstraintId, LayoutError> {
        let parent = self.on_parent(&format!("align {} with the margins of", self.attribute))?;
        Ok(self.install(self.lower_to_item(
            parent.item,
            self.attribute.to_margin(),
            relation,
            offset,
        )))
    }
}

impl<'a, A: AnchorAxis> Anchor<'a, Dimension, A> {
    /// Set the dimension to a fixed size.
    pub fn set(&self, constant: f64, relation: Relation) -> ConstraintId {
        self.install(Constraint::constant(
            self.item.clone(),
            self.attribute,
            relation,
            (constant - self.offset) / self.multiplier,
        ))
    }

    /// Relate to another dimension, on either axis.
    pub fn match_to<A2: AnchorAxis>(
        &self,
        other: Anchor<'_, Dimension, A2>,
        relation: Relation,
    ) -> ConstraintId {
        self.constrain(other, relation, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::engine::RecordingEngine;
    use crate::item::Item;
    use crate::session::Layout;

    fn fixture() -> (Layout<RecordingEngine>, Item, Item) {
        let container = Item::root("container");
        let view = Item::child("view", &container);
        (Layout::new(RecordingEngine::new()), container, view)
    }

    fn between(
        first: (&str, Attribute),
        relation: Relation,
        second: (&str, Attribute),
        multiplier: f64,
        constant: f64,
    ) -> Constraint {
        Constraint::between(
            (ItemId::new(first.0), first.1),
            relation,
            (ItemId::new(second.0), second.1),
            multiplier,
            constant,
        )
    }

    #[test]
    fn test_offsetting_accumulates() {
        let (layout, container, _) = fixture();
        let top = layout.anchors(&container).top();
        let anchor = top.offsetting(10.0).offsetting(5.0);
        assert_eq!(anchor.offset(), 15.0);
        assert_eq!(anchor.multiplier(), 1.0);
        // the source anchor is untouched
        assert_eq!(top.offset(), 0.0);
    }

    #[test]
    fn test_scaling_scales_offset() {
        let (layout, container, _) = fixture();
        let anchor = (layout.anchors(&container).width() + 10.0) * 2.0;
        assert_eq!(anchor.offset(), 20.0);
        assert_eq!(anchor.multiplier(), 2.0);
    }

    #[test]
    #[should_panic(expected = "by zero")]
    fn test_scaling_by_zero_panics() {
        let (layout, container, _) = fixture();
        let _ = layout.anchors(&container).width().scaling(0.0);
    }

    #[test]
    fn test_relate_normalizes_both_sides() {
        let (layout, container, view) = fixture();
        let (v, c) = (layout.anchors(&view), layout.anchors(&container));

        assert_eq!(
            v.top().relate(c.top() * 2.0 + 10.0, Relation::GreaterThanOrEqual, 0.0, 1.0),
            between(
                ("view", Attribute::Top),
                Relation::GreaterThanOrEqual,
                ("container", Attribute::Top),
                2.0,
                10.0
            )
        );

        // offsets on the left-hand side move to the other side
        assert_eq!(
            c.top().offsetting(10.0).relate(v.top(), Relation::Equal, 0.0, 1.0),
            between(
                ("container", Attribute::Top),
                Relation::Equal,
                ("view", Attribute::Top),
                1.0,
                -10.0
            )
        );

        // equal offsets on both sides cancel
        let c = v.top().offsetting(10.0).relate(c.top() + 10.0, Relation::Equal, 0.0, 1.0);
        assert_eq!(c.constant, 0.0);

        // left multiplier divides
        let c = (v.width() * 2.0).relate(layout.anchors(&container).height() * 4.0, Relation::Equal, 3.0, 1.0);
        assert_eq!(c.multiplier, 2.0);
        assert_eq!(c.constant, 3.0);
    }

    #[test]
    fn test_relate_multiplier_leaves_offset_unscaled() {
        let (layout, container, view) = fixture();
        let (v, c) = (layout.anchors(&view), layout.anchors(&container));

        assert_eq!(
            v.height().relate(c.width() + 5.0, Relation::Equal, 0.0, 2.0),
            between(
                ("view", Attribute::Height),
                Relation::Equal,
                ("container", Attribute::Width),
                2.0,
                5.0
            )
        );

        // scaling the anchor instead scales its offset too
        let scaled = v.height().relate((c.width() + 5.0) * 2.0, Relation::Equal, 0.0, 1.0);
        assert_eq!(scaled.multiplier, 2.0);
        assert_eq!(scaled.constant, 10.0);

        // the argument composes with both anchor multipliers
        let composed = (v.height() * 2.0).relate(c.width() * 3.0 + 4.0, Relation::Equal, 1.0, 4.0);
        assert_eq!(composed.multiplier, 6.0);
        assert_eq!(composed.constant, 5.0);

        let id = v.height().constrain(c.width() + 5.0, Relation::LessThanOrEqual, 0.0, 0.5);
        let installed = layout.constraint(id).unwrap();
        assert_eq!(installed.multiplier, 0.5);
        assert_eq!(installed.constant, 5.0);
    }

    #[test]
    fn test_relate_does_not_install() {
        let (layout, container, view) = fixture();
        let _ = layout
            .anchors(&view)
            .top()
            .relate(layout.anchors(&container).top(), Relation::Equal, 0.0, 1.0);
        assert!(layout.engine().events().is_empty());
    }

    #[test]
    fn test_pin_inverts_trailing_edges() {
        let (layout, _container, view) = fixture();
        let v = layout.anchors(&view);

        let cases = [
            (v.top().pin_to_superview(10.0, Relation::GreaterThanOrEqual), Attribute::Top, Relation::GreaterThanOrEqual, 10.0),
            (v.bottom().pin_to_superview(10.0, Relation::GreaterThanOrEqual), Attribute::Bottom, Relation::LessThanOrEqual, -10.0),
            (v.left().pin_to_superview(10.0, Relation::GreaterThanOrEqual), Attribute::Left, Relation::GreaterThanOrEqual, 10.0),
            (v.right().pin_to_superview(10.0, Relation::GreaterThanOrEqual), Attribute::Right, Relation::LessThanOrEqual, -10.0),
            (v.leading().pin_to_superview(10.0, Relation::GreaterThanOrEqual), Attribute::Leading, Relation::GreaterThanOrEqual, 10.0),
            (v.trailing().pin_to_superview(10.0, Relation::GreaterThanOrEqual), Attribute::Trailing, Relation::LessThanOrEqual, -10.0),
        ];

        for (id, attribute, relation, constant) in cases {
            let id = id.unwrap();
            assert_eq!(
                layout.constraint(id).unwrap(),
                between(("view", attribute), relation, ("container", attribute), 1.0, constant)
            );
        }
    }

    #[test]
    fn test_pin_to_superview_margin() {
        let (layout, _container, view) = fixture();
        let id = layout
            .anchors(&view)
            .right()
            .pin_to_superview_margin(10.0, Relation::Equal)
            .unwrap();
        assert_eq!(
            layout.constraint(id).unwrap(),
            between(
                ("view", Attribute::Right),
                Relation::Equal,
                ("container", Attribute::RightMargin),
                1.0,
                -10.0
            )
        );
    }

    #[test]
    fn test_pin_to_superview_without_parent() {
        let (layout, container, _) = fixture();
        let result = layout
            .anchors(&container)
            .top()
            .pin_to_superview(0.0, Relation::Equal);
        assert!(matches!(result, Err(LayoutError::NoParent { .. })));
        assert!(layout.engine().events().is_empty());
    }

    #[test]
    fn test_pin_to_container_keeps_offset() {
        let (layout, container, view) = fixture();
        let guide = Item::child("guide", &container);
        let id = (layout.anchors(&view).leading() + 4.0).pin_to(&guide, 10.0, Relation::Equal);
        assert_eq!(
            layout.constraint(id).unwrap(),
            between(
                ("view", Attribute::Leading),
                Relation::Equal,
                ("guide", Attribute::Leading),
                1.0,
                6.0
            )
        );
    }

    #[test]
    fn test_spacing_inverts_bottom() {
        let (layout, container, _) = fixture();
        let a = Item::child("a", &container);
        let b = Item::child("b", &container);
        let (a, b) = (layout.anchors(&a), layout.anchors(&b));

        let above = a.bottom().spacing(8.0, b.top(), Relation::Equal);
        let below = b.top().spacing(8.0, a.bottom(), Relation::GreaterThanOrEqual);

        assert_eq!(
            layout.constraint(above).unwrap(),
            between(("a", Attribute::Bottom), Relation::Equal, ("b", Attribute::Top), 1.0, -8.0)
        );
        assert_eq!(
            layout.constraint(below).unwrap(),
            between(
                ("b", Attribute::Top),
                Relation::GreaterThanOrEqual,
                ("a", Attribute::Bottom),
                1.0,
                8.0
            )
        );
    }

    #[test]
    fn test_center_align_with_superview() {
        let (layout, _container, view) = fixture();
        let id = layout
            .anchors(&view)
            .center_y()
            .align_with_superview(-10.0, Relation::Equal)
            .unwrap();
        assert_eq!(
            layout.constraint(id).unwrap(),
            between(
                ("view", Attribute::CenterY),
                Relation::Equal,
                ("container", Attribute::CenterY),
                1.0,
                -10.0
            )
        );
    }

    #[test]
    fn test_alignment_across_kinds() {
        let (layout, container, view) = fixture();
        let (v, c) = (layout.anchors(&view), layout.anchors(&container));

        let ids = [
            v.top().align_with(c.center_y(), Relation::Equal),
            v.last_baseline().align_with(c.top(), Relation::Equal),
            v.center_x().align_with(c.trailing(), Relation::LessThanOrEqual),
        ];
        let rendered: Vec<_> = ids
            .iter()
            .map(|&id| layout.constraint(id).unwrap().to_string())
            .collect();
        assert_eq!(
            rendered,
            vec![
                "view.top == container.center_y",
                "view.last_baseline == container.top",
                "view.center_x <= container.trailing",
            ]
        );
    }

    #[test]
    fn test_dimension_set_and_match() {
        let (layout, container, view) = fixture();
        let (v, c) = (layout.anchors(&view), layout.anchors(&container));

        let fixed = v.width().set(10.0, Relation::GreaterThanOrEqual);
        assert_eq!(
            layout.constraint(fixed).unwrap(),
            Constraint::constant(
                ItemId::new("view"),
                Attribute::Width,
                Relation::GreaterThanOrEqual,
                10.0
            )
        );

        // dimensions mix across axes
        let ratio = v.width().match_to(c.height() * 0.5, Relation::Equal);
        assert_eq!(
            layout.constraint(ratio).unwrap(),
            between(("view", Attribute::Width), Relation::Equal, ("container", Attribute::Height), 0.5, 0.0)
        );
    }

    #[test]
    fn test_set_folds_anchor_terms() {
        let (layout, _container, view) = fixture();
        let id = ((layout.anchors(&view).height() * 2.0) + 4.0).set(24.0, Relation::Equal);
        // 2 * height + 4 == 24
        assert_eq!(layout.constraint(id).unwrap().constant, 10.0);
    }

    #[test]
    fn test_generic_relations() {
        let (layout, container, view) = fixture();
        let (v, c) = (layout.anchors(&view), layout.anchors(&container));

        let ids = [
            v.height().equal(c.width() - 10.0),
            v.leading().greater_than_or_equal(c.leading()),
            v.first_baseline().less_than_or_equal(c.bottom()),
            v.height().constrain(c.height(), Relation::Equal, 20.0, 1.0),
        ];
        let rendered: Vec<_> = ids
            .iter()
            .map(|&id| layout.constraint(id).unwrap().to_string())
            .collect();
        assert_eq!(
            rendered,
            vec![
                "view.height == container.width - 10",
                "view.leading >= container.leading",
                "view.first_baseline <= container.bottom",
                "view.height == container.height + 20",
            ]
        );
    }
}
