//! Capabilities the host supplies to layout and rendering.

use crate::geometry::{Length, TextDetails};
use crate::style::Style;

/// Drawing surface that receives primitives during `render`.
///
/// Coordinates are absolute points with the y axis pointing up. Text is drawn
/// with its baseline origin at `(x, y)`, rectangles from their bottom-left
/// corner.
pub trait DrawingBackend {
    /// Draw a text label with its left baseline point at `(x, y)`.
    fn draw_text(&mut self, label: &str, x: Length, y: Length, style: &Style);

    /// Draw a rectangle, optionally with rounded corners.
    fn draw_rect(
        &mut self,
        x: Length,
        y: Length,
        width: Length,
        height: Length,
        style: &Style,
        corner_radius: Length,
    );
}

/// Text metrics provider (shaping and glyph metrics live outside the core).
pub trait TextMeasure {
    /// Measure a label set in the given style.
    fn measure(&self, label: &str, style: &Style) -> TextDetails;
}
