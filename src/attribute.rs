//! Layout attributes and the small value types that travel with them
//!
//! Everything here is plain data plus lookup tables: which axis an
//! attribute lives on, which margin attribute it maps to, how
//! leading/trailing resolve under a layout direction, and which edges grow
//! in the opposite geometric direction.

use std::fmt;

use serde::Deserialize;

/// The two layout axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Which attributes can be related to one another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Edges, center lines and baselines (same axis only)
    Alignment,
    /// Width and height (any axis)
    Dimension,
}

/// Reading direction used to resolve `leading` and `trailing`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// A layout attribute of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Top,
    Bottom,
    Left,
    Right,
    Leading,
    Trailing,
    CenterX,
    CenterY,
    FirstBaseline,
    LastBaseline,
    Width,
    Height,
    TopMargin,
    BottomMargin,
    LeftMargin,
    RightMargin,
    LeadingMargin,
    TrailingMargin,
    CenterXWithinMargins,
    CenterYWithinMargins,
}

impl Attribute {
    pub fn axis(self) -> Axis {
        use Attribute::*;
        match self {
            Left | Right | Leading | Trailing | CenterX | Width | LeftMargin | RightMargin
            | LeadingMargin | TrailingMargin | CenterXWithinMargins => Axis::Horizontal,
            Top | Bottom | CenterY | FirstBaseline | LastBaseline | Height | TopMargin
            | BottomMargin | CenterYWithinMargins => Axis::Vertical,
        }
    }

    pub fn category(self) -> Category {
        match self {
            Attribute::Width | Attribute::Height => Category::Dimension,
            _ => Category::Alignment,
        }
    }

    /// Attributes that grow in the opposite direction from `top`/`left`/`leading`.
    ///
    /// Pinning one of these with an inset negates the inset and flips the
    /// relation so that a positive inset always moves the item inward.
    pub fn is_inverted(self) -> bool {
        use Attribute::*;
        matches!(
            self,
            Bottom | Right | Trailing | BottomMargin | RightMargin | TrailingMargin
        )
    }

    /// `leading`, `trailing` and their margins
    pub fn is_directional(self) -> bool {
        use Attribute::*;
        matches!(self, Leading | Trailing | LeadingMargin | TrailingMargin)
    }

    pub fn is_margin(self) -> bool {
        use Attribute::*;
        matches!(
            self,
            TopMargin
                | BottomMargin
                | LeftMargin
                | RightMargin
                | LeadingMargin
                | TrailingMargin
                | CenterXWithinMargins
                | CenterYWithinMargins
        )
    }

    /// The margin-qualified counterpart, or `self` when there is none.
    pub fn to_margin(self) -> Attribute {
        use Attribute::*;
        match self {
            Top => TopMargin,
            Bottom => BottomMargin,
            Left => LeftMargin,
            Right => RightMargin,
            Leading => LeadingMargin,
            Trailing => TrailingMargin,
            CenterX => CenterXWithinMargins,
            CenterY => CenterYWithinMargins,
            other => other,
        }
    }

    /// Resolve `leading`/`trailing` (and their margins) into `left`/`right`.
    pub fn absolute(self, direction: LayoutDirection) -> Attribute {
        use Attribute::*;
        let rtl = direction == LayoutDirection::RightToLeft;
        match self {
            Leading => if rtl { Right } else { Left },
            Trailing => if rtl { Left } else { Right },
            LeadingMargin => if rtl { RightMargin } else { LeftMargin },
            TrailingMargin => if rtl { LeftMargin } else { RightMargin },
            other => other,
        }
    }

    /// Resolve `left`/`right` (and their margins) into `leading`/`trailing`.
    pub fn directional(self, direction: LayoutDirection) -> Attribute {
        use Attribute::*;
        let rtl = direction == LayoutDirection::RightToLeft;
        match self {
            Left => if rtl { Trailing } else { Leading },
            Right => if rtl { Leading } else { Trailing },
            LeftMargin => if rtl { TrailingMargin } else { LeadingMargin },
            RightMargin => if rtl { LeadingMargin } else { TrailingMargin },
            other => other,
        }
    }

    pub fn name(self) -> &'static str {
        use Attribute::*;
        match self {
            Top => "top",
            Bottom => "bottom",
            Left => "left",
            Right => "right",
            Leading => "leading",
            Trailing => "trailing",
            CenterX => "center_x",
            CenterY => "center_y",
            FirstBaseline => "first_baseline",
            LastBaseline => "last_baseline",
            Width => "width",
            Height => "height",
            TopMargin => "top_margin",
            BottomMargin => "bottom_margin",
            LeftMargin => "left_margin",
            RightMargin => "right_margin",
            LeadingMargin => "leading_margin",
            TrailingMargin => "trailing_margin",
            CenterXWithinMargins => "center_x_within_margins",
            CenterYWithinMargins => "center_y_within_margins",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The relation between the two sides of a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Relation {
    #[default]
    Equal,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

impl Relation {
    pub fn inverted(self) -> Relation {
        match self {
            Relation::Equal => Relation::Equal,
            Relation::GreaterThanOrEqual => Relation::LessThanOrEqual,
            Relation::LessThanOrEqual => Relation::GreaterThanOrEqual,
        }
    }

    /// `inverted()` when `invert` is set, `self` otherwise
    pub fn inverted_if(self, invert: bool) -> Relation {
        if invert {
            self.inverted()
        } else {
            self
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Relation::Equal => "==",
            Relation::GreaterThanOrEqual => ">=",
            Relation::LessThanOrEqual => "<=",
        })
    }
}

/// Constraint priority on the conventional 1..=1000 scale
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Priority(f64);

impl Priority {
    pub const REQUIRED: Priority = Priority(1000.0);
    pub const DEFAULT_HIGH: Priority = Priority(750.0);
    pub const DEFAULT_LOW: Priority = Priority(250.0);
    pub const FITTING_SIZE: Priority = Priority(50.0);

    /// Clamps into `1..=1000`.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(1.0, 1000.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_required(self) -> bool {
        self.0 >= 1000.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::REQUIRED
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Insets for the four sides of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// The inset that applies to an edge attribute.
    ///
    /// `leading` reads `left` and `trailing` reads `right`; non-edge
    /// attributes have no inset.
    pub fn inset(&self, attribute: Attribute) -> f64 {
        use Attribute::*;
        match attribute {
            Top | TopMargin => self.top,
            Bottom | BottomMargin => self.bottom,
            Left | Leading | LeftMargin | LeadingMargin => self.left,
            Right | Trailing | RightMargin | TrailingMargin => self.right,
            _ => 0.0,
        }
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// The six edges an item can be pinned by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutEdge {
    Top,
    Bottom,
    Leading,
    Trailing,
    Left,
    Right,
}

impl LayoutEdge {
    pub fn attribute(self) -> Attribute {
        match self {
            LayoutEdge::Top => Attribute::Top,
            LayoutEdge::Bottom => Attribute::Bottom,
            LayoutEdge::Leading => Attribute::Leading,
            LayoutEdge::Trailing => Attribute::Trailing,
            LayoutEdge::Left => Attribute::Left,
            LayoutEdge::Right => Attribute::Right,
        }
    }

    pub fn axis(self) -> Axis {
        self.attribute().axis()
    }
}
