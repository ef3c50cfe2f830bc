//! Core types shared by every layout crate.
//!
//! This crate defines:
//! - Units and small geometry values (`Length`, `Margin`, `TextDetails`)
//! - Drawing properties handed through to backends (`Style`)
//! - The layout atom model (`Atom`, `Glue`, `Penalty`, `LayoutBox`)
//! - The capabilities a host must supply (`DrawingBackend`, `TextMeasure`)

pub mod atom;
pub mod backend;
pub mod geometry;
pub mod style;

pub use atom::{Atom, FILL_STRETCH, Glue, LayoutBox, PENALTY_INFINITY, Penalty, SizePolicy};
pub use backend::{DrawingBackend, TextMeasure};
pub use geometry::{Length, Margin, TextDetails};
pub use style::Style;
