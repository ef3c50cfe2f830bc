//! Text in, display list out.

use crate::config::TypesetConfig;
use anyhow::{Context as _, Result};
use log::debug;
use tracing::info_span;
use typeset_boxes::{ParBox, words_to_atoms};
use typeset_core::{LayoutBox as _, TextMeasure};
use typeset_renderer::{DisplayList, DisplayListRecorder};

/// Build and lay out a paragraph of `text` without rendering it.
///
/// # Errors
/// Returns an error when the breakpoint search fails under
/// `OverflowPolicy::Fail`.
pub fn layout_text(
    text: &str,
    config: &TypesetConfig,
    measure: &dyn TextMeasure,
) -> Result<ParBox> {
    let atoms = words_to_atoms(text, &config.style(), measure);
    let mut paragraph =
        ParBox::new(atoms, config.line_pitch, config.hspacing).with_mode(config.break_mode());
    paragraph
        .try_calc_layout(config.line_width, 0.0)
        .with_context(|| format!("laying out paragraph at width {}", config.line_width))?;
    Ok(paragraph)
}

/// Typeset `text` as one paragraph and record the drawing calls.
///
/// The paragraph is rendered with its bottom edge at `y = 0` and its left
/// edge at `x = 0`, so every line has a non-negative baseline.
///
/// # Errors
/// Returns an error when the breakpoint search fails under
/// `OverflowPolicy::Fail`.
pub fn typeset_text(
    text: &str,
    config: &TypesetConfig,
    measure: &dyn TextMeasure,
) -> Result<DisplayList> {
    let _span = info_span!("typeset.pipeline", chars = text.len()).entered();

    let mut paragraph = layout_text(text, config, measure)?;
    paragraph.place(0.0, 0.0);

    let mut recorder = DisplayListRecorder::new();
    paragraph.render(&mut recorder, 0.0, paragraph.descent());
    let list = recorder.collect();
    debug!(
        target: "typeset",
        "typeset {} words into {} lines ({} display items)",
        list.text_labels().len(),
        paragraph.line_count(),
        list.len()
    );
    Ok(list)
}
