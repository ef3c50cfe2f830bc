//! Drawing properties passed through layout to the drawing backend.
//!
//! The layout core never interprets these beyond handing them to
//! `TextMeasure` and `DrawingBackend`; parsing style sheets is the host's job.

use serde::{Deserialize, Serialize};

/// Style properties for text and rectangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Stroke/text colour, RGBA in [0,1].
    pub color: [f32; 4],
    /// Optional fill colour for rectangles.
    pub fill: Option<[f32; 4]>,
    /// Font family name (e.g. "serif", "Helvetica").
    pub font_family: Option<String>,
    /// Font size in points.
    pub font_size: f32,
    /// CSS-style font weight (100-900, 400 = normal).
    pub font_weight: u16,
    /// Outline width for rectangles, in points.
    pub line_width: f32,
}

impl Default for Style {
    #[inline]
    fn default() -> Self {
        Self {
            color: [0.0, 0.0, 0.0, 1.0],
            fill: None,
            font_family: None,
            font_size: 12.0,
            font_weight: 400,
            line_width: 1.0,
        }
    }
}

impl Style {
    /// Default style at the given font size.
    #[inline]
    #[must_use]
    pub fn with_font_size(font_size: f32) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }

    /// Copy of this style with a fill colour.
    #[inline]
    #[must_use]
    pub fn filled(mut self, fill: [f32; 4]) -> Self {
        self.fill = Some(fill);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Missing fields fall back to the defaults when deserializing.
    ///
    /// # Panics
    /// Panics if deserialization fails or defaults are not applied.
    #[test]
    fn partial_style_uses_defaults() {
        let style: Style = serde_json::from_str(r#"{ "font_size": 9.0 }"#).unwrap();
        assert!((style.font_size - 9.0).abs() < f32::EPSILON);
        assert_eq!(style.font_weight, 400);
        assert_eq!(style.fill, None);
    }
}
