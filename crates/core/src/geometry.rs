//! Lengths, margins and measured text extents.

use serde::{Deserialize, Serialize};

/// A length in typographic points. The y axis points up.
pub type Length = f64;

/// Extents of a measured text label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TextDetails {
    /// Advance width of the label.
    pub width: Length,
    /// Height above the baseline.
    pub ascent: Length,
    /// Depth below the baseline (positive).
    pub descent: Length,
    /// Width of an inter-word space in the same style.
    pub space: Length,
}

impl TextDetails {
    /// Create text details from the four measured values.
    #[inline]
    pub const fn new(width: Length, ascent: Length, descent: Length, space: Length) -> Self {
        Self {
            width,
            ascent,
            descent,
            space,
        }
    }

    /// Total height of the label (ascent + descent).
    #[inline]
    pub fn height(&self) -> Length {
        self.ascent + self.descent
    }
}

/// Edge insets in the order top, right, bottom, left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl Margin {
    /// Create a margin from explicit edges.
    #[inline]
    pub const fn new(top: Length, right: Length, bottom: Length, left: Length) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same inset on all four edges.
    #[inline]
    pub const fn uniform(inset: Length) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Sum of the left and right insets.
    #[inline]
    pub fn horizontal(&self) -> Length {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    #[inline]
    pub fn vertical(&self) -> Length {
        self.top + self.bottom
    }
}
