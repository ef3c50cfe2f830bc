//! Backend-agnostic rendering output: a display list recorded from layout.

pub mod display_list;

pub use display_list::{
    DisplayItem, DisplayList, DisplayListRecorder, deserialize_display_list,
    serialize_display_list,
};
