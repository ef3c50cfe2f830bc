//! Recording a drawing pass, shipping it as bytes and replaying it.
#![allow(clippy::unwrap_used, reason = "fixtures are known to be well formed")]

use typeset_core::{DrawingBackend as _, Style};
use typeset_renderer::{
    DisplayItem, DisplayListRecorder, deserialize_display_list, serialize_display_list,
};

/// A replayed list issues the same calls as the original pass.
///
/// # Panics
/// Panics if any item changes across serialization and replay.
#[test]
fn bincode_replay_reproduces_calls() {
    let mut recorder = DisplayListRecorder::new();
    let accent = Style::with_font_size(9.0).filled([0.9, 0.9, 1.0, 1.0]);
    recorder.draw_rect(2.0, -3.0, 40.0, 12.0, &accent, 2.5);
    recorder.draw_text("hello", 4.0, 0.0, &Style::default());
    recorder.draw_text("world", 34.0, 0.0, &Style::default());
    let original = recorder.collect();

    let bytes = serialize_display_list(&original).unwrap();
    let restored = deserialize_display_list(&bytes).unwrap();
    assert_eq!(restored, original);

    let mut surface = DisplayListRecorder::new();
    restored.replay(&mut surface);
    assert_eq!(surface.items(), original.items.as_slice());
    assert_eq!(restored.text_labels(), vec!["hello", "world"]);
    assert!(matches!(
        &restored.items[0],
        DisplayItem::Rect { style, .. } if style.fill == Some([0.9, 0.9, 1.0, 1.0])
    ));
}

/// Garbage bytes are rejected.
///
/// # Panics
/// Panics if garbage decodes successfully.
#[test]
fn garbage_is_rejected() {
    let result = deserialize_display_list(&[0xff; 7]);
    assert!(result.is_err());
}
