//! Paragraph box: lays a run of atoms out into lines.
//!
//! The reference point of a paragraph is the left end of the baseline of its
//! *last* line. Every line above it is folded into the ascent through the
//! multiline shift, so a paragraph sits on a baseline like any other box.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tracing::info_span;
use typeset_breaks::{BreakError, BreakParams, Breaks, LineBreaker, LineSpan};
use typeset_core::{Atom, DrawingBackend, LayoutBox, Length};

/// How a paragraph decides where lines end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakMode {
    /// Fill each line greedily; glue and penalties are ignored.
    #[default]
    Wrap,
    /// Choose breaks over the whole paragraph with the breakpoint search.
    Optimal(BreakParams),
}

/// Per-pass line bookkeeping shared by both break modes.
#[derive(Debug, Default)]
struct LineMetrics {
    lines: usize,
    /// Largest ascent on the first line.
    first_ascent: Length,
    /// Largest descent on the current line.
    descent: Length,
    /// Baseline of the current line relative to the first.
    y: Length,
}

impl LineMetrics {
    fn record(&mut self, ascent: Length, descent: Length) {
        if self.lines == 0 {
            self.first_ascent = self.first_ascent.max(ascent);
        }
        self.descent = self.descent.max(descent);
    }

    fn new_line(&mut self, line_pitch: Length) {
        self.lines += 1;
        self.descent = 0.0;
        self.y -= line_pitch;
    }
}

/// A composite box that owns an atom sequence and breaks it into lines.
#[derive(Debug, Default)]
pub struct ParBox {
    atoms: Vec<Atom>,
    line_pitch: Length,
    hspacing: Length,
    mode: BreakMode,
    width: Length,
    ascent: Length,
    descent: Length,
    voff: Length,
    multiline_shift: Length,
    x: Length,
    y: Length,
    breaks: Vec<usize>,
    lines: usize,
}

impl ParBox {
    /// A wrapping paragraph with the given line pitch and inter-box spacing.
    pub fn new(atoms: Vec<Atom>, line_pitch: Length, hspacing: Length) -> Self {
        Self {
            atoms,
            line_pitch,
            hspacing,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: BreakMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    pub const fn mode(&self) -> BreakMode {
        self.mode
    }

    #[inline]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Break positions chosen by the last `calc_layout`.
    ///
    /// In wrap mode these are the indices of the boxes that started a new line.
    #[inline]
    pub fn breaks(&self) -> &[usize] {
        &self.breaks
    }

    /// Number of lines produced by the last `calc_layout`.
    #[inline]
    pub const fn line_count(&self) -> usize {
        self.lines
    }

    /// Vertical distance from the first line's baseline to the last one's.
    #[inline]
    pub const fn multiline_shift(&self) -> Length {
        self.multiline_shift
    }

    /// Lay the paragraph out, reporting a failed breakpoint search instead of
    /// falling back to wrapping as `calc_layout` does.
    ///
    /// # Errors
    /// Returns the search error in `BreakMode::Optimal` when the overflow
    /// policy is `Fail` and no feasible set of breaks exists.
    pub fn try_calc_layout(
        &mut self,
        width_hint: Length,
        height_hint: Length,
    ) -> Result<(), BreakError> {
        let _span = info_span!("parbox.calc_layout", atoms = self.atoms.len()).entered();
        let metrics = match self.mode {
            BreakMode::Wrap => self.wrap(width_hint, height_hint),
            BreakMode::Optimal(params) => self.optimal(params, width_hint, height_hint)?,
        };
        self.publish(&metrics, width_hint);
        Ok(())
    }

    /// Turn per-line bookkeeping into the box geometry.
    fn publish(&mut self, metrics: &LineMetrics, width_hint: Length) {
        self.multiline_shift = metrics.lines as Length * self.line_pitch;
        self.ascent = metrics.first_ascent + self.multiline_shift;
        self.descent = metrics.descent;
        if self.atoms.is_empty() {
            self.width = 0.0;
            self.lines = 0;
        } else {
            self.width = width_hint.max(0.0);
            self.lines = metrics.lines + 1;
        }
        debug!(
            target: "typeset_boxes",
            "paragraph of {} atoms: {} lines, width {:.1}, ascent {:.1}, descent {:.1}",
            self.atoms.len(),
            self.lines,
            self.width,
            self.ascent,
            self.descent
        );
    }

    /// Greedy fill. Unlike the classic box-and-glue wrap, a box that overflows an
    /// empty line stays on it instead of leaving an empty line above.
    fn wrap(&mut self, width_hint: Length, height_hint: Length) -> LineMetrics {
        let bounded = width_hint > 0.0;
        let mut metrics = LineMetrics::default();
        let mut breaks = Vec::new();
        let mut x_off = 0.0;
        let mut line_has_box = false;

        for (index, atom) in self.atoms.iter_mut().enumerate() {
            let Atom::Box(child) = atom else {
                continue;
            };
            child.calc_layout(width_hint, height_hint);
            if bounded && line_has_box && x_off + child.width() > width_hint {
                x_off = 0.0;
                metrics.new_line(self.line_pitch);
                breaks.push(index);
            }
            child.place(x_off, metrics.y);
            x_off += child.width() + self.hspacing;
            line_has_box = true;
            metrics.record(child.ascent(), child.descent());
        }

        self.breaks = breaks;
        metrics
    }

    /// Lay out with the breakpoint search.
    fn optimal(
        &mut self,
        params: BreakParams,
        width_hint: Length,
        height_hint: Length,
    ) -> Result<LineMetrics, BreakError> {
        for atom in &mut self.atoms {
            atom.calc_layout(width_hint, height_hint);
        }

        if width_hint <= 0.0 {
            let single = LineSpan {
                start: 0,
                end: self.atoms.len(),
                ratio: 0.0,
                fitness: 1,
                demerits: 0.0,
            };
            let breaks = Breaks {
                lines: vec![single],
                ..Breaks::default()
            };
            let metrics = self.set_lines(&breaks);
            self.breaks.clear();
            return Ok(metrics);
        }

        let breaks = LineBreaker::new(&self.atoms, params)
            .closed()
            .compute_lines(&[width_hint])?;
        let metrics = self.set_lines(&breaks);
        self.breaks = breaks.positions;
        Ok(metrics)
    }

    /// Place atoms line by line, adjusting glue by each line's ratio.
    fn set_lines(&mut self, breaks: &Breaks) -> LineMetrics {
        let mut metrics = LineMetrics::default();
        for (line_index, line) in breaks.lines.iter().enumerate() {
            if line_index > 0 {
                metrics.new_line(self.line_pitch);
            }
            let Some(atoms) = self.atoms.get_mut(line.start..line.end) else {
                continue;
            };
            let mut x_off = 0.0;
            let mut leading = true;
            for atom in atoms {
                match atom {
                    Atom::Box(child) => {
                        leading = false;
                        child.place(x_off, metrics.y);
                        x_off += child.width();
                        metrics.record(child.ascent(), child.descent());
                    }
                    Atom::Glue(glue) if !leading => x_off += glue.adjusted_width(line.ratio),
                    Atom::Glue(_) | Atom::Penalty(_) => {}
                }
            }
        }
        metrics
    }
}

impl LayoutBox for ParBox {
    fn width(&self) -> Length {
        self.width
    }

    fn ascent(&self) -> Length {
        self.ascent
    }

    fn descent(&self) -> Length {
        self.descent
    }

    fn voff(&self) -> Length {
        self.voff
    }

    fn calc_layout(&mut self, width_hint: Length, height_hint: Length) {
        if let Err(err) = self.try_calc_layout(width_hint, height_hint) {
            warn!(
                target: "typeset_boxes",
                "breakpoint search failed ({err}); wrapping paragraph instead"
            );
            let metrics = self.wrap(width_hint, height_hint);
            self.publish(&metrics, width_hint);
        }
    }

    fn place(&mut self, x: Length, y: Length) {
        self.x = x;
        self.y = y;
    }

    fn render(&self, backend: &mut dyn DrawingBackend, x_ref: Length, y_ref: Length) {
        let x = x_ref + self.x;
        let y = y_ref + self.voff + self.y + self.multiline_shift;
        for atom in &self.atoms {
            atom.render(backend, x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::null_box::NullBox;
    use typeset_core::{Glue, Penalty};

    fn boxes_with_glue(count: usize, width: Length) -> Vec<Atom> {
        let mut atoms = Vec::new();
        for index in 0..count {
            if index > 0 {
                atoms.push(Atom::Glue(Glue::new(2.0, 1.0, 1.0)));
            }
            atoms.push(Atom::boxed(NullBox::new(width, 8.0, 2.0)));
        }
        atoms
    }

    /// Line metrics keep the first line's ascent and the current line's descent.
    ///
    /// # Panics
    /// Panics if the bookkeeping is wrong.
    #[test]
    fn line_metrics_bookkeeping() {
        let mut metrics = LineMetrics::default();
        metrics.record(5.0, 1.0);
        metrics.record(7.0, 3.0);
        metrics.new_line(10.0);
        metrics.record(20.0, 2.0);
        assert!((metrics.first_ascent - 7.0).abs() < f64::EPSILON);
        assert!((metrics.descent - 2.0).abs() < f64::EPSILON);
        assert!((metrics.y + 10.0).abs() < f64::EPSILON);
        assert_eq!(metrics.lines, 1);
    }

    /// Wrapping skips glue and penalties entirely.
    ///
    /// # Panics
    /// Panics if glue contributes to the wrapped widths.
    #[test]
    fn wrap_ignores_glue_and_penalties() {
        let mut atoms = boxes_with_glue(3, 10.0);
        atoms.insert(1, Atom::Penalty(Penalty::forced()));
        let mut paragraph = ParBox::new(atoms, 12.0, 0.0);
        paragraph.calc_layout(30.0, 0.0);
        assert!(paragraph.breaks().is_empty());
        assert_eq!(paragraph.line_count(), 1);
    }

    /// Boxes wider than the hint each get their own line, with no empty first line.
    ///
    /// # Panics
    /// Panics if a break is placed before the first box.
    #[test]
    fn wrap_keeps_oversized_box_on_its_line() {
        let mut paragraph = ParBox::new(boxes_with_glue(3, 40.0), 12.0, 0.0);
        paragraph.calc_layout(30.0, 0.0);
        assert_eq!(paragraph.breaks(), &[2, 4]);
        assert_eq!(paragraph.line_count(), 3);
        assert!((paragraph.multiline_shift() - 24.0).abs() < f64::EPSILON);
    }

    /// Optimal mode lays glue out at its adjusted width.
    ///
    /// # Panics
    /// Panics if the chosen lines or shift are wrong.
    #[test]
    fn optimal_mode_sets_two_lines() {
        let mut paragraph = ParBox::new(boxes_with_glue(3, 10.0), 12.0, 0.0)
            .with_mode(BreakMode::Optimal(BreakParams::default()));
        paragraph.calc_layout(22.0, 0.0);
        assert_eq!(paragraph.breaks(), &[3]);
        assert_eq!(paragraph.line_count(), 2);
        assert!((paragraph.multiline_shift() - 12.0).abs() < f64::EPSILON);
        assert!((paragraph.ascent() - 20.0).abs() < f64::EPSILON);
        assert!((paragraph.descent() - 2.0).abs() < f64::EPSILON);
    }

    /// Break modes read from configuration by their lowercase names.
    ///
    /// # Panics
    /// Panics if either mode is rejected or loses its parameters.
    #[test]
    fn break_mode_from_json() {
        let wrap: BreakMode = serde_json::from_str(r#""wrap""#).unwrap();
        assert_eq!(wrap, BreakMode::Wrap);

        let optimal: BreakMode =
            serde_json::from_str(r#"{ "optimal": { "tolerance": 2.0 } }"#).unwrap();
        assert_eq!(
            optimal,
            BreakMode::Optimal(BreakParams {
                tolerance: 2.0,
                ..BreakParams::default()
            })
        );
    }
}
