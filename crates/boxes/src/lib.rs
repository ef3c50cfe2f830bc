//! Concrete layout boxes.
//!
//! - `ParBox` lays a run of atoms out into lines, either by simple wrapping
//!   or by the optimal breakpoint search
//! - `TextBox`, `RectBox` and `NullBox` are the leaf and frame boxes a
//!   paragraph is usually built from
//! - `words_to_atoms` turns plain text into a box/glue sequence
//! - `FixedAdvanceMeasure` is a deterministic `TextMeasure` for hosts without a shaper

pub mod builder;
pub mod measure;
pub mod null_box;
pub mod par_box;
pub mod rect_box;
pub mod text_box;

pub use builder::words_to_atoms;
pub use measure::FixedAdvanceMeasure;
pub use null_box::NullBox;
pub use par_box::{BreakMode, ParBox};
pub use rect_box::RectBox;
pub use text_box::TextBox;
