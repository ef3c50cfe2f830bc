//! A drawing backend that records calls into a display list.

use super::{DisplayItem, DisplayList};
use core::mem::take;
use log::debug;
use typeset_core::{DrawingBackend, Length, Style};

/// Records every drawing call; `collect` hands the recorded list to the host.
#[derive(Debug, Default)]
pub struct DisplayListRecorder {
    pending: Vec<DisplayItem>,
    generation: u64,
}

impl DisplayListRecorder {
    #[inline]
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
            generation: 0,
        }
    }

    /// Items recorded since the last `collect`.
    #[inline]
    pub fn items(&self) -> &[DisplayItem] {
        &self.pending
    }

    /// Number of lists collected so far.
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Take the recorded items as a new display list and start over.
    pub fn collect(&mut self) -> DisplayList {
        let mut list = DisplayList::from_items(take(&mut self.pending));
        list.generation = self.generation;
        self.generation = list.bump_generation();
        debug!(
            target: "typeset_renderer",
            "collected {} display items (generation {})",
            list.len(),
            list.generation
        );
        list
    }
}

impl DrawingBackend for DisplayListRecorder {
    fn draw_text(&mut self, label: &str, x: Length, y: Length, style: &Style) {
        self.pending.push(DisplayItem::Text {
            label: label.to_owned(),
            x,
            y,
            style: style.clone(),
        });
    }

    fn draw_rect(
        &mut self,
        x: Length,
        y: Length,
        width: Length,
        height: Length,
        style: &Style,
        corner_radius: Length,
    ) {
        self.pending.push(DisplayItem::Rect {
            x,
            y,
            width,
            height,
            style: style.clone(),
            corner_radius,
        });
    }
}
