//! Optimal paragraph breaking over nested layout boxes.
//!
//! This crate ties the workspace together:
//! - Re-exports the atom model, the breakpoint search, the boxes and the
//!   display list
//! - `TypesetConfig` for environment or programmatic configuration
//! - `typeset_text`, the end-to-end text to display list pipeline

pub mod config;
pub mod pipeline;

pub use config::TypesetConfig;
pub use pipeline::{layout_text, typeset_text};

pub use typeset_boxes::{
    BreakMode, FixedAdvanceMeasure, NullBox, ParBox, RectBox, TextBox, words_to_atoms,
};
pub use typeset_breaks::{
    BreakError, BreakParams, Breaks, LineBreaker, LineSpan, OverflowPolicy, compute_breaks,
};
pub use typeset_core::{
    Atom, DrawingBackend, Glue, LayoutBox, Length, Margin, Penalty, SizePolicy, Style,
    TextDetails, TextMeasure,
};
pub use typeset_renderer::{
    DisplayItem, DisplayList, DisplayListRecorder, deserialize_display_list,
    serialize_display_list,
};
