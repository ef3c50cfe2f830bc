//! Deterministic text measurement.

use serde::{Deserialize, Serialize};
use typeset_core::{Length, Style, TextDetails, TextMeasure};

/// Measures every character with the same advance, scaled by font size.
///
/// Widths are `chars × advance × font_size`, ascent and descent are fixed
/// fractions of the font size. Useful for tests and headless hosts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedAdvanceMeasure {
    /// Advance of one character, as a fraction of the font size.
    pub advance: f64,
    pub ascent: f64,
    pub descent: f64,
    /// Inter-word space, as a fraction of the font size.
    pub space: f64,
}

impl Default for FixedAdvanceMeasure {
    #[inline]
    fn default() -> Self {
        Self {
            advance: 0.5,
            ascent: 0.75,
            descent: 0.25,
            space: 0.25,
        }
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn measure(&self, label: &str, style: &Style) -> TextDetails {
        let size = Length::from(style.font_size);
        let chars = label.chars().count() as Length;
        TextDetails::new(
            chars * self.advance * size,
            self.ascent * size,
            self.descent * size,
            self.space * size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Widths scale with the character count and the font size.
    ///
    /// # Panics
    /// Panics if a measured value is wrong.
    #[test]
    fn measures_scale_with_font_size() {
        let measure = FixedAdvanceMeasure::default();
        let details = measure.measure("four", &Style::with_font_size(10.0));
        assert!((details.width - 20.0).abs() < f64::EPSILON);
        assert!((details.ascent - 7.5).abs() < f64::EPSILON);
        assert!((details.descent - 2.5).abs() < f64::EPSILON);
        assert!((details.space - 2.5).abs() < f64::EPSILON);

        let empty = measure.measure("", &Style::default());
        assert!(empty.width.abs() < f64::EPSILON);
    }
}
