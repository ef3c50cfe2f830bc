//! A single measured text label.

use typeset_core::{DrawingBackend, LayoutBox, Length, Style, TextDetails, TextMeasure};

/// A text label measured once at construction.
///
/// The measured extents become the box geometry on the first `calc_layout`;
/// until then every accessor returns `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    label: String,
    style: Style,
    details: TextDetails,
    laid_out: bool,
    voff: Length,
    x: Length,
    y: Length,
}

impl TextBox {
    /// Measure `label` in `style` and wrap it in a box.
    pub fn new(label: impl Into<String>, style: Style, measure: &dyn TextMeasure) -> Self {
        let label = label.into();
        let details = measure.measure(&label, &style);
        Self {
            label,
            style,
            details,
            laid_out: false,
            voff: 0.0,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Shift the baseline vertically (positive is up), e.g. for superscripts.
    #[inline]
    #[must_use]
    pub const fn with_voff(mut self, voff: Length) -> Self {
        self.voff = voff;
        self
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub const fn style(&self) -> &Style {
        &self.style
    }

    /// Extents reported by the measurer.
    #[inline]
    pub const fn details(&self) -> &TextDetails {
        &self.details
    }
}

impl LayoutBox for TextBox {
    fn width(&self) -> Length {
        if self.laid_out { self.details.width } else { 0.0 }
    }

    fn ascent(&self) -> Length {
        if self.laid_out { self.details.ascent } else { 0.0 }
    }

    fn descent(&self) -> Length {
        if self.laid_out { self.details.descent } else { 0.0 }
    }

    fn voff(&self) -> Length {
        self.voff
    }

    fn calc_layout(&mut self, _width_hint: Length, _height_hint: Length) {
        self.laid_out = true;
    }

    fn place(&mut self, x: Length, y: Length) {
        self.x = x;
        self.y = y;
    }

    fn render(&self, backend: &mut dyn DrawingBackend, x_ref: Length, y_ref: Length) {
        backend.draw_text(
            &self.label,
            x_ref + self.x,
            y_ref + self.y + self.voff,
            &self.style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedAdvanceMeasure;
    use typeset_renderer::{DisplayItem, DisplayListRecorder};

    /// Geometry stays zero until the box is laid out.
    ///
    /// # Panics
    /// Panics if geometry leaks before layout or is wrong after it.
    #[test]
    fn geometry_published_by_layout() {
        let mut text = TextBox::new("word", Style::default(), &FixedAdvanceMeasure::default());
        assert!(text.width().abs() < f64::EPSILON);
        assert!(text.height().abs() < f64::EPSILON);

        text.calc_layout(0.0, 0.0);
        assert!((text.width() - 24.0).abs() < f64::EPSILON);
        assert!((text.ascent() - 9.0).abs() < f64::EPSILON);
        assert!((text.descent() - 3.0).abs() < f64::EPSILON);
    }

    /// Rendering offsets the label by the reference point, placement and voff.
    ///
    /// # Panics
    /// Panics if the recorded text call is wrong.
    #[test]
    fn render_translates_by_reference_and_voff() {
        let mut text = TextBox::new("x", Style::default(), &FixedAdvanceMeasure::default())
            .with_voff(2.0);
        text.calc_layout(0.0, 0.0);
        text.place(5.0, -14.0);

        let mut recorder = DisplayListRecorder::new();
        text.render(&mut recorder, 100.0, 50.0);
        let list = recorder.collect();
        assert_eq!(list.items.len(), 1);
        assert!(matches!(
            &list.items[0],
            DisplayItem::Text { label, x, y, .. }
                if label == "x" && (x - 105.0).abs() < f64::EPSILON && (y - 38.0).abs() < f64::EPSILON
        ));
    }
}
