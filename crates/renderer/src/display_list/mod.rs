//! Retained display list (DL) primitives and utilities.
//!
//! This module provides:
//! - Core display list types (`core`)
//! - A recording `DrawingBackend` with collect/flush semantics (`recorder`)
//! - Binary serialization for recording and replay (`serialization`)

pub mod core;
pub mod recorder;
pub mod serialization;

pub use self::core::{DisplayItem, DisplayList};
pub use recorder::DisplayListRecorder;
pub use serialization::{deserialize_display_list, serialize_display_list};
