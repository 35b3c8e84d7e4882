//! Constraint solver engine
//!
//! A [`LayoutEngine`] backed by the kasuari Cassowary solver. Every item
//! owns four solver variables (x, y, width, height) and every attribute is
//! a linear expression over them, so installed descriptors translate
//! directly into solver constraints.

use std::collections::{HashMap, HashSet};

use kasuari::{
    Constraint as KasuariConstraint, Expression, Solver as KasuariSolver, Strength,
    Variable as KasuariVariable, WeightedRelation::*,
};

use crate::attribute::{Attribute, EdgeInsets, LayoutDirection, Priority, Relation};
use crate::config::LayoutConfig;
use crate::constraint::Constraint;
use crate::item::ItemId;

use super::{EngineError, LayoutEngine};

/// Properties the solver stores per item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutProperty {
    X,
    Y,
    Width,
    Height,
}

/// A variable in the constraint system
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutVariable {
    pub item: ItemId,
    pub property: LayoutProperty,
}

impl LayoutVariable {
    pub fn new(item: ItemId, property: LayoutProperty) -> Self {
        Self { item, property }
    }
}

/// Solved geometry of an item
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Map a priority onto a solver strength.
///
/// Required stays required; anything lower scales `STRONG` so that the
/// ordering between priorities is preserved.
fn strength(priority: Priority) -> Strength {
    if priority.is_required() {
        Strength::REQUIRED
    } else {
        Strength::STRONG.mul_f64(priority.value() / 1000.0)
    }
}

/// Wrapper around the kasuari solver
pub struct SolverEngine {
    solver: KasuariSolver,
    config: LayoutConfig,
    /// Maps our variables to kasuari variables
    variables: HashMap<LayoutVariable, KasuariVariable>,
    /// Latest solved value of every variable that has changed
    values: HashMap<KasuariVariable, f64>,
    margins: HashMap<ItemId, EdgeInsets>,
    prepared: HashSet<ItemId>,
    /// Installed constraints with a description for error reporting
    installed: Vec<(KasuariConstraint, String)>,
    /// Constraints fixing root frames, replaced by `set_frame`
    frames: HashMap<ItemId, Vec<KasuariConstraint>>,
}

impl SolverEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            solver: KasuariSolver::new(),
            config,
            variables: HashMap::new(),
            values: HashMap::new(),
            margins: HashMap::new(),
            prepared: HashSet::new(),
            installed: Vec::new(),
            frames: HashMap::new(),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Override the layout margins of one item
    pub fn set_margins(&mut self, item: &ItemId, margins: EdgeInsets) {
        self.margins.insert(item.clone(), margins);
    }

    /// Whether constraints have been installed with `item` as first item
    pub fn is_prepared(&self, item: &ItemId) -> bool {
        self.prepared.contains(item)
    }

    /// Fix the frame of an item, typically a root container.
    ///
    /// Replaces any frame previously set for the same item.
    pub fn set_frame(&mut self, item: &ItemId, frame: Frame) -> Result<(), EngineError> {
        if let Some(previous) = self.frames.remove(item) {
            for constraint in &previous {
                self.solver
                    .remove_constraint(constraint)
                    .map_err(|e| EngineError::Internal(format!("{:?}", e)))?;
            }
        }

        let values = [
            (LayoutProperty::X, frame.x),
            (LayoutProperty::Y, frame.y),
            (LayoutProperty::Width, frame.width),
            (LayoutProperty::Height, frame.height),
        ];
        let mut added = Vec::with_capacity(values.len());
        for (property, value) in values {
            let var = self.variable(item, property);
            let constraint = var | EQ(Strength::REQUIRED) | value;
            let desc = format!("{}.{:?} = {}", item, property, value);
            if let Err(e) = self.solver.add_constraint(constraint.clone()) {
                self.rollback(&added);
                return Err(convert_kasuari_error(e, &desc));
            }
            added.push(constraint);
        }
        self.frames.insert(item.clone(), added);
        self.refresh();
        Ok(())
    }

    /// Solved frame of an item, `None` if no constraint mentions it
    pub fn frame(&self, item: &ItemId) -> Option<Frame> {
        let value = |property| {
            self.variables
                .get(&LayoutVariable::new(item.clone(), property))
                .map(|var| self.values.get(var).copied().unwrap_or(0.0))
        };
        let x = value(LayoutProperty::X)?;
        Some(Frame::new(
            x,
            value(LayoutProperty::Y).unwrap_or(0.0),
            value(LayoutProperty::Width).unwrap_or(0.0),
            value(LayoutProperty::Height).unwrap_or(0.0),
        ))
    }

    /// Get or create the kasuari variable for one property of an item
    fn variable(&mut self, item: &ItemId, property: LayoutProperty) -> KasuariVariable {
        let var = LayoutVariable::new(item.clone(), property);
        if let Some(&kvar) = self.variables.get(&var) {
            kvar
        } else {
            let kvar = KasuariVariable::new();
            self.variables.insert(var, kvar);
            kvar
        }
    }

    fn margins_of(&self, item: &ItemId) -> EdgeInsets {
        self.margins.get(item).copied().unwrap_or(self.config.margins)
    }

    /// Linear expression for an attribute of an item
    fn expression(&mut self, item: &ItemId, attribute: Attribute) -> Expression {
        use Attribute::*;

        // every item gets all four variables so that `frame` can report it
        let x: Expression = self.variable(item, LayoutProperty::X).into();
        let y: Expression = self.variable(item, LayoutProperty::Y).into();
        let w: Expression = self.variable(item, LayoutProperty::Width).into();
        let h: Expression = self.variable(item, LayoutProperty::Height).into();
        let m = self.margins_of(item);

        let resolved = attribute.absolute(self.config.direction);
        match resolved {
            Left => x,
            Right => x + w,
            Top => y,
            // no text metrics here: baselines sit on the bottom edge
            Bottom | FirstBaseline | LastBaseline => y + h,
            CenterX => x + 0.5 * w,
            CenterY => y + 0.5 * h,
            Width => w,
            Height => h,
            LeftMargin => x + m.left,
            RightMargin => x + w + -m.right,
            TopMargin => y + m.top,
            BottomMargin => y + h + -m.bottom,
            CenterXWithinMargins => x + 0.5 * w + (m.left - m.right) / 2.0,
            CenterYWithinMargins => y + 0.5 * h + (m.top - m.bottom) / 2.0,
            Leading | Trailing | LeadingMargin | TrailingMargin => {
                unreachable!("{} is resolved by `absolute`", resolved)
            }
        }
    }

    /// Translate a descriptor into a kasuari constraint
    ///
    /// Right-to-left, a constraint on `leading`/`trailing` is measured along
    /// the reading direction: its constant is negated and its relation
    /// inverted once the attributes resolve to `right`/`left`.
    fn lower(&mut self, constraint: &Constraint) -> KasuariConstraint {
        let mirrored = self.config.direction == LayoutDirection::RightToLeft
            && (constraint.first_attribute.is_directional()
                || constraint.second_attribute.is_some_and(Attribute::is_directional));
        let (relation, constant) = if mirrored {
            (constraint.relation.inverted(), -constraint.constant)
        } else {
            (constraint.relation, constraint.constant)
        };

        let lhs = self.expression(&constraint.first_item, constraint.first_attribute);
        let strength = strength(constraint.priority);
        let relation = match relation {
            Relation::Equal => EQ(strength),
            Relation::GreaterThanOrEqual => GE(strength),
            Relation::LessThanOrEqual => LE(strength),
        };
        match constraint.second() {
            Some((item, attribute)) => {
                let rhs = constraint.multiplier * self.expression(item, attribute) + constant;
                lhs | relation | rhs
            }
            None => lhs | relation | constant,
        }
    }

    /// Pull changed values out of the solver
    fn refresh(&mut self) {
        for (kvar, value) in self.solver.fetch_changes() {
            self.values.insert(*kvar, *value);
        }
    }

    fn rollback(&mut self, added: &[KasuariConstraint]) {
        for constraint in added {
            if let Err(e) = self.solver.remove_constraint(constraint) {
                tracing::warn!("failed to roll back constraint: {:?}", e);
            }
        }
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

/// Convert a kasuari error to an EngineError with context
fn convert_kasuari_error(e: kasuari::AddConstraintError, constraint_desc: &str) -> EngineError {
    match e {
        kasuari::AddConstraintError::UnsatisfiableConstraint => EngineError::Unsatisfiable {
            constraint: constraint_desc.to_string(),
        },
        kasuari::AddConstraintError::DuplicateConstraint => EngineError::Duplicate {
            constraint: constraint_desc.to_string(),
        },
        kasuari::AddConstraintError::InternalSolverError(msg) => EngineError::Internal(format!(
            "Internal solver error for {}: {}",
            constraint_desc, msg
        )),
    }
}

impl LayoutEngine for SolverEngine {
    type Handle = usize;

    fn prepare_item(&mut self, item: &ItemId) {
        self.prepared.insert(item.clone());
    }

    fn install(&mut self, constraint: &Constraint) -> usize {
        let lowered = self.lower(constraint);
        self.installed.push((lowered, constraint.to_string()));
        self.installed.len() - 1
    }

    /// Adds the whole batch or nothing: on the first rejected constraint
    /// the ones already added from this batch are removed again.
    fn activate(&mut self, handles: &[usize]) -> Result<(), EngineError> {
        let mut added = Vec::with_capacity(handles.len());
        for &handle in handles {
            let Some((constraint, desc)) = self.installed.get(handle).cloned() else {
                self.rollback(&added);
                return Err(EngineError::Internal(format!("unknown handle {}", handle)));
            };
            if let Err(e) = self.solver.add_constraint(constraint.clone()) {
                self.rollback(&added);
                return Err(convert_kasuari_error(e, &desc));
            }
            added.push(constraint);
        }
        self.refresh();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.001;

    fn id(s: &str) -> ItemId {
        ItemId::new(s)
    }

    fn activate(engine: &mut SolverEngine, constraint: Constraint) -> Result<(), EngineError> {
        let handle = engine.install(&constraint);
        engine.activate(&[handle])
    }

    #[test]
    fn test_fixed_frame() {
        let mut engine = SolverEngine::default();
        engine
            .set_frame(&id("root"), Frame::new(10.0, 20.0, 200.0, 100.0))
            .unwrap();

        let frame = engine.frame(&id("root")).unwrap();
        assert!((frame.x - 10.0).abs() < EPSILON);
        assert!((frame.bottom() - 120.0).abs() < EPSILON);
    }

    #[test]
    fn test_set_frame_replaces_previous() {
        let mut engine = SolverEngine::default();
        engine
            .set_frame(&id("root"), Frame::new(0.0, 0.0, 100.0, 100.0))
            .unwrap();
        engine
            .set_frame(&id("root"), Frame::new(0.0, 0.0, 300.0, 50.0))
            .unwrap();

        let frame = engine.frame(&id("root")).unwrap();
        assert!((frame.width - 300.0).abs() < EPSILON);
        assert!((frame.height - 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_edges_and_center() {
        let mut engine = SolverEngine::default();
        engine
            .set_frame(&id("c"), Frame::new(0.0, 0.0, 200.0, 100.0))
            .unwrap();

        let pin = |attr, constant| {
            Constraint::between((id("v"), attr), Relation::Equal, (id("c"), attr), 1.0, constant)
        };
        activate(&mut engine, pin(Attribute::Leading, 10.0)).unwrap();
        activate(&mut engine, pin(Attribute::Trailing, -10.0)).unwrap();
        activate(&mut engine, pin(Attribute::CenterY, 0.0)).unwrap();
        activate(
            &mut engine,
            Constraint::constant(id("v"), Attribute::Height, Relation::Equal, 20.0),
        )
        .unwrap();

        let frame = engine.frame(&id("v")).unwrap();
        assert!((frame.x - 10.0).abs() < EPSILON);
        assert!((frame.width - 180.0).abs() < EPSILON);
        assert!((frame.y - 40.0).abs() < EPSILON);
    }

    #[test]
    fn test_right_to_left_resolves_leading() {
        let config = LayoutConfig::new().with_direction(LayoutDirection::RightToLeft);
        let mut engine = SolverEngine::new(config);
        engine
            .set_frame(&id("c"), Frame::new(0.0, 0.0, 200.0, 100.0))
            .unwrap();

        activate(
            &mut engine,
            Constraint::between(
                (id("v"), Attribute::Leading),
                Relation::Equal,
                (id("c"), Attribute::Leading),
                1.0,
                0.0,
            ),
        )
        .unwrap();
        activate(
            &mut engine,
            Constraint::constant(id("v"), Attribute::Width, Relation::Equal, 50.0),
        )
        .unwrap();

        // leading is the right edge
        let frame = engine.frame(&id("v")).unwrap();
        assert!((frame.right() - 200.0).abs() < EPSILON);
        assert!((frame.x - 150.0).abs() < EPSILON);
    }

    #[test]
    fn test_right_to_left_mirrors_insets() {
        let config = LayoutConfig::new().with_direction(LayoutDirection::RightToLeft);
        let mut engine = SolverEngine::new(config);
        engine
            .set_frame(&id("c"), Frame::new(0.0, 0.0, 200.0, 100.0))
            .unwrap();

        let pin = |attribute, relation, constant| {
            Constraint::between((id("v"), attribute), relation, (id("c"), attribute), 1.0, constant)
        };
        // v.leading >= c.leading + 10 keeps v 10 points in from the right
        activate(&mut engine, pin(Attribute::Leading, Relation::GreaterThanOrEqual, 10.0)).unwrap();
        activate(&mut engine, pin(Attribute::Trailing, Relation::Equal, -30.0)).unwrap();
        activate(
            &mut engine,
            Constraint::constant(id("v"), Attribute::Width, Relation::Equal, 100.0),
        )
        .unwrap();

        let frame = engine.frame(&id("v")).unwrap();
        assert!((frame.x - 30.0).abs() < EPSILON);
        assert!((frame.right() - 130.0).abs() < EPSILON);
    }

    #[test]
    fn test_margin_attributes() {
        let mut engine = SolverEngine::new(LayoutConfig::new().with_margins(EdgeInsets::uniform(8.0)));
        engine.set_margins(&id("c"), EdgeInsets::new(5.0, 6.0, 7.0, 8.0));
        engine
            .set_frame(&id("c"), Frame::new(0.0, 0.0, 100.0, 100.0))
            .unwrap();

        activate(
            &mut engine,
            Constraint::between(
                (id("v"), Attribute::Top),
                Relation::Equal,
                (id("c"), Attribute::TopMargin),
                1.0,
                0.0,
            ),
        )
        .unwrap();
        activate(
            &mut engine,
            Constraint::between(
                (id("v"), Attribute::Right),
                Relation::Equal,
                (id("c"), Attribute::RightMargin),
                1.0,
                0.0,
            ),
        )
        .unwrap();

        let frame = engine.frame(&id("v")).unwrap();
        assert!((frame.y - 5.0).abs() < EPSILON);
        assert!((frame.right() - 92.0).abs() < EPSILON);
    }

    #[test]
    fn test_multiplier_between_dimensions() {
        let mut engine = SolverEngine::default();
        engine
            .set_frame(&id("c"), Frame::new(0.0, 0.0, 120.0, 40.0))
            .unwrap();

        // v.height = c.width * 0.5 + 4
        activate(
            &mut engine,
            Constraint::between(
                (id("v"), Attribute::Height),
                Relation::Equal,
                (id("c"), Attribute::Width),
                0.5,
                4.0,
            ),
        )
        .unwrap();

        let frame = engine.frame(&id("v")).unwrap();
        assert!((frame.height - 64.0).abs() < EPSILON);
    }

    #[test]
    fn test_low_priority_yields() {
        let mut engine = SolverEngine::default();
        let width = |value, priority| {
            Constraint::constant(id("v"), Attribute::Width, Relation::Equal, value)
                .with_priority(priority)
        };
        activate(&mut engine, width(80.0, Priority::new(1.0))).unwrap();
        activate(&mut engine, width(30.0, Priority::DEFAULT_HIGH)).unwrap();

        let frame = engine.frame(&id("v")).unwrap();
        assert!((frame.width - 30.0).abs() < EPSILON);
    }

    #[test]
    fn test_batch_is_all_or_nothing() {
        let mut engine = SolverEngine::default();
        let width = |value| Constraint::constant(id("v"), Attribute::Width, Relation::Equal, value);
        let first = engine.install(&width(10.0));
        let conflicting = engine.install(&width(20.0));

        let result = engine.activate(&[first, conflicting]);
        assert!(matches!(result, Err(EngineError::Unsatisfiable { .. })));

        // the first constraint was rolled back, so it can be added on its own
        engine.activate(&[first]).unwrap();
        let frame = engine.frame(&id("v")).unwrap();
        assert!((frame.width - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_unknown_item_has_no_frame() {
        let engine = SolverEngine::default();
        assert_eq!(engine.frame(&id("ghost")), None);
    }
}
