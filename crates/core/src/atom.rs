//! The layout atom model: boxes, glue and penalties.
//!
//! A paragraph is an ordered `Vec<Atom>`. Boxes carry material and measure
//! themselves, glue is flexible space, and penalties mark places where a line
//! may (or must, or must not) end.

use crate::backend::DrawingBackend;
use crate::geometry::Length;
use core::fmt::Debug;
use serde::{Deserialize, Serialize};

/// Penalty magnitude treated as infinite. `+INF` forbids a break, `-INF` forces one.
pub const PENALTY_INFINITY: f64 = 10_000.0;

/// Stretch of a `Glue::fill()`; large enough to absorb any shortfall on a closing line.
pub const FILL_STRETCH: Length = 100_000.0;

/// How a composite box derives its size from the hints passed to `calc_layout`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizePolicy {
    /// Size is fixed upon construction.
    #[default]
    Fixed,
    /// Box determines its own ideal size from its content.
    Native,
    /// Box takes the full hint.
    Expand,
    /// Stored size is a percentage of the hint (100 = full size).
    Relative,
}

/// A self-measuring piece of material that can be placed and rendered.
///
/// Geometry accessors return `0.0` until the first `calc_layout`.
pub trait LayoutBox: Debug {
    /// Width of the box.
    fn width(&self) -> Length;
    /// Height above the baseline.
    fn ascent(&self) -> Length;
    /// Depth below the baseline.
    fn descent(&self) -> Length;
    /// Total height.
    fn height(&self) -> Length {
        self.ascent() + self.descent()
    }
    /// Vertical shift of the baseline.
    fn voff(&self) -> Length;

    /// Recompute internal geometry. Boxes may ignore either hint.
    fn calc_layout(&mut self, width_hint: Length, height_hint: Length);

    /// Store coordinates relative to the enclosing box's origin.
    fn place(&mut self, x: Length, y: Length);

    /// Emit drawing calls, offset by the enclosing box's reference point.
    fn render(&self, backend: &mut dyn DrawingBackend, x_ref: Length, y_ref: Length);
}

/// Flexible inter-atom space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Glue {
    pub width: Length,
    pub stretch: Length,
    pub shrink: Length,
}

impl Glue {
    #[inline]
    pub const fn new(width: Length, stretch: Length, shrink: Length) -> Self {
        Self {
            width,
            stretch,
            shrink,
        }
    }

    /// Zero-width glue that stretches without bound in practice (closes a paragraph).
    #[inline]
    pub const fn fill() -> Self {
        Self::new(0.0, FILL_STRETCH, 0.0)
    }

    /// Width after applying an adjustment ratio linearly.
    ///
    /// Ratios below -1 are clamped to -1; a non-finite ratio yields the natural width.
    #[inline]
    pub fn adjusted_width(&self, ratio: f64) -> Length {
        if !ratio.is_finite() {
            return self.width;
        }
        if ratio >= 0.0 {
            self.width + ratio * self.stretch
        } else {
            self.width + ratio.max(-1.0) * self.shrink
        }
    }
}

/// A break candidate with an associated cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Penalty {
    pub cost: f64,
    /// Marks a visually costly break (e.g. a hyphen).
    pub flagged: bool,
    /// Width of material inserted only when the break is taken.
    pub width: Length,
}

impl Penalty {
    #[inline]
    pub const fn new(cost: f64, flagged: bool) -> Self {
        Self {
            cost,
            flagged,
            width: 0.0,
        }
    }

    /// A break that must be taken.
    #[inline]
    pub const fn forced() -> Self {
        Self::new(-PENALTY_INFINITY, false)
    }

    /// A position where a break is never allowed.
    #[inline]
    pub const fn forbidden() -> Self {
        Self::new(PENALTY_INFINITY, false)
    }

    /// Copy with a break-only width (such as a hyphen's advance).
    #[inline]
    #[must_use]
    pub const fn with_width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    #[inline]
    pub fn is_forced(&self) -> bool {
        self.cost <= -PENALTY_INFINITY
    }

    #[inline]
    pub fn is_forbidden(&self) -> bool {
        self.cost >= PENALTY_INFINITY
    }
}

/// One unit of layout content.
#[derive(Debug)]
pub enum Atom {
    Box(Box<dyn LayoutBox>),
    Glue(Glue),
    Penalty(Penalty),
}

impl Atom {
    /// Wrap a concrete box.
    #[inline]
    pub fn boxed<B: LayoutBox + 'static>(layout_box: B) -> Self {
        Self::Box(Box::new(layout_box))
    }

    #[inline]
    pub fn width(&self) -> Length {
        match self {
            Self::Box(layout_box) => layout_box.width(),
            Self::Glue(glue) => glue.width,
            Self::Penalty(penalty) => penalty.width,
        }
    }

    #[inline]
    pub fn ascent(&self) -> Length {
        match self {
            Self::Box(layout_box) => layout_box.ascent(),
            Self::Glue(_) | Self::Penalty(_) => 0.0,
        }
    }

    #[inline]
    pub fn descent(&self) -> Length {
        match self {
            Self::Box(layout_box) => layout_box.descent(),
            Self::Glue(_) | Self::Penalty(_) => 0.0,
        }
    }

    #[inline]
    pub fn height(&self) -> Length {
        self.ascent() + self.descent()
    }

    #[inline]
    pub fn voff(&self) -> Length {
        match self {
            Self::Box(layout_box) => layout_box.voff(),
            Self::Glue(_) | Self::Penalty(_) => 0.0,
        }
    }

    /// Stretch capacity; non-zero only for glue.
    #[inline]
    pub fn stretch(&self) -> Length {
        match self {
            Self::Glue(glue) => glue.stretch,
            Self::Box(_) | Self::Penalty(_) => 0.0,
        }
    }

    /// Shrink capacity; non-zero only for glue.
    #[inline]
    pub fn shrink(&self) -> Length {
        match self {
            Self::Glue(glue) => glue.shrink,
            Self::Box(_) | Self::Penalty(_) => 0.0,
        }
    }

    #[inline]
    pub const fn is_box(&self) -> bool {
        matches!(self, Self::Box(_))
    }

    #[inline]
    pub const fn is_glue(&self) -> bool {
        matches!(self, Self::Glue(_))
    }

    #[inline]
    pub const fn is_penalty(&self) -> bool {
        matches!(self, Self::Penalty(_))
    }

    #[inline]
    pub fn as_box(&self) -> Option<&dyn LayoutBox> {
        match self {
            Self::Box(layout_box) => Some(layout_box.as_ref()),
            Self::Glue(_) | Self::Penalty(_) => None,
        }
    }

    #[inline]
    pub fn as_box_mut(&mut self) -> Option<&mut (dyn LayoutBox + 'static)> {
        match self {
            Self::Box(layout_box) => Some(layout_box.as_mut()),
            Self::Glue(_) | Self::Penalty(_) => None,
        }
    }

    /// Lay out the atom; glue and penalties have no internal layout.
    #[inline]
    pub fn calc_layout(&mut self, width_hint: Length, height_hint: Length) {
        if let Self::Box(layout_box) = self {
            layout_box.calc_layout(width_hint, height_hint);
        }
    }

    #[inline]
    pub fn place(&mut self, x: Length, y: Length) {
        if let Self::Box(layout_box) = self {
            layout_box.place(x, y);
        }
    }

    #[inline]
    pub fn render(&self, backend: &mut dyn DrawingBackend, x_ref: Length, y_ref: Length) {
        if let Self::Box(layout_box) = self {
            layout_box.render(backend, x_ref, y_ref);
        }
    }
}

impl From<Glue> for Atom {
    #[inline]
    fn from(glue: Glue) -> Self {
        Self::Glue(glue)
    }
}

impl From<Penalty> for Atom {
    #[inline]
    fn from(penalty: Penalty) -> Self {
        Self::Penalty(penalty)
    }
}
