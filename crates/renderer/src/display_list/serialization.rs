//! Display list serialization for recording and replay.
//!
//! Display lists are encoded with bincode. Useful for:
//! - Recording a layout pass and replaying it on another surface
//! - Saving display lists for regression testing

use super::DisplayList;
use anyhow::{Error as AnyhowError, Result as AnyResult};
use bincode::{deserialize, serialize};

/// Serialize a display list to binary format using bincode.
///
/// # Errors
/// Returns an error if serialization fails.
///
/// # Example
/// ```
/// use typeset_core::Style;
/// use typeset_renderer::{DisplayItem, DisplayList, serialize_display_list};
///
/// let mut list = DisplayList::new();
/// list.push(DisplayItem::Text {
///     label: "word".to_owned(),
///     x: 0.0,
///     y: 0.0,
///     style: Style::default(),
/// });
/// let bytes = serialize_display_list(&list).unwrap();
/// assert!(!bytes.is_empty());
/// ```
pub fn serialize_display_list(list: &DisplayList) -> AnyResult<Vec<u8>> {
    serialize(list).map_err(|err| AnyhowError::msg(format!("Serialization failed: {err}")))
}

/// Deserialize a display list from binary format.
///
/// # Errors
/// Returns an error if deserialization fails or the data is corrupted.
///
/// # Example
/// ```
/// use typeset_core::Style;
/// use typeset_renderer::{DisplayItem, DisplayList, deserialize_display_list, serialize_display_list};
///
/// let mut list = DisplayList::new();
/// list.push(DisplayItem::Rect {
///     x: 0.0,
///     y: 0.0,
///     width: 100.0,
///     height: 100.0,
///     style: Style::default(),
///     corner_radius: 4.0,
/// });
/// let bytes = serialize_display_list(&list).unwrap();
/// let replayed = deserialize_display_list(&bytes).unwrap();
/// assert_eq!(list, replayed);
/// ```
pub fn deserialize_display_list(bytes: &[u8]) -> AnyResult<DisplayList> {
    deserialize(bytes).map_err(|err| AnyhowError::msg(format!("Deserialization failed: {err}")))
}
