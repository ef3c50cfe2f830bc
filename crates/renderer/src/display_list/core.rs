//! Retained display list primitives.
//!
//! A display list is the flat, ordered record of every drawing call a layout
//! tree emitted during `render`. Hosts replay it onto their own surface.

use serde::{Deserialize, Serialize};
use typeset_core::{DrawingBackend, Length, Style};

/// A single recorded drawing call, in points with the y axis pointing up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisplayItem {
    /// Text label with its left baseline point at `(x, y)`.
    Text {
        label: String,
        x: Length,
        y: Length,
        style: Style,
    },
    /// Rectangle from its bottom-left corner.
    Rect {
        x: Length,
        y: Length,
        width: Length,
        height: Length,
        style: Style,
        /// Zero for square corners.
        corner_radius: Length,
    },
}

impl DisplayItem {
    /// Axis-aligned bounds `(left, bottom, right, top)` for rects; `None` for text,
    /// whose extent depends on the host's font metrics.
    #[inline]
    pub fn rect_bounds(&self) -> Option<(Length, Length, Length, Length)> {
        match self {
            Self::Rect {
                x,
                y,
                width,
                height,
                ..
            } => Some((*x, *y, x + width, y + height)),
            Self::Text { .. } => None,
        }
    }
}

impl Default for DisplayList {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// A retained display list with a monotonically increasing generation counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    /// Linear sequence of display items to be drawn in order.
    pub items: Vec<DisplayItem>,
    /// Generation tag for debugging and quick equality checks across passes.
    pub generation: u64,
}

impl DisplayList {
    /// Create a new empty display list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            generation: 0,
        }
    }

    /// Create a display list from an iterator of items.
    #[inline]
    pub fn from_items<I: IntoIterator<Item = DisplayItem>>(items: I) -> Self {
        let mut list = Self::new();
        list.items.extend(items);
        list
    }

    /// Bump the generation counter and return the new value.
    #[inline]
    pub const fn bump_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Append an item to the end of the list.
    #[inline]
    pub fn push(&mut self, item: DisplayItem) {
        self.items.push(item);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Issue every item, in order, against a drawing backend.
    pub fn replay(&self, backend: &mut dyn DrawingBackend) {
        for item in &self.items {
            match item {
                DisplayItem::Text { label, x, y, style } => backend.draw_text(label, *x, *y, style),
                DisplayItem::Rect {
                    x,
                    y,
                    width,
                    height,
                    style,
                    corner_radius,
                } => backend.draw_rect(*x, *y, *width, *height, style, *corner_radius),
            }
        }
    }

    /// Labels of all text items, in drawing order.
    pub fn text_labels(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| match item {
                DisplayItem::Text { label, .. } => Some(label.as_str()),
                DisplayItem::Rect { .. } => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generations wrap instead of overflowing.
    ///
    /// # Panics
    /// Panics if the counter does not wrap.
    #[test]
    fn generation_wraps() {
        let mut list = DisplayList::new();
        list.generation = u64::MAX;
        assert_eq!(list.bump_generation(), 0);
        assert_eq!(list.bump_generation(), 1);
    }

    /// Text labels are listed in order and rects report their bounds.
    ///
    /// # Panics
    /// Panics if labels or bounds are wrong.
    #[test]
    fn labels_and_bounds() {
        let list = DisplayList::from_items([
            DisplayItem::Text {
                label: "one".to_owned(),
                x: 0.0,
                y: 0.0,
                style: Style::default(),
            },
            DisplayItem::Rect {
                x: 1.0,
                y: 2.0,
                width: 3.0,
                height: 4.0,
                style: Style::default(),
                corner_radius: 0.0,
            },
            DisplayItem::Text {
                label: "two".to_owned(),
                x: 5.0,
                y: 0.0,
                style: Style::default(),
            },
        ]);
        assert_eq!(list.text_labels(), vec!["one", "two"]);
        assert_eq!(list.items[1].rect_bounds(), Some((1.0, 2.0, 4.0, 6.0)));
        assert_eq!(list.items[0].rect_bounds(), None);
        assert_eq!(list.len(), 3);
    }

    /// Items keep readable field names in JSON snapshots.
    ///
    /// # Panics
    /// Panics if serialization fails or a field is missing.
    #[test]
    fn json_snapshot_fields() {
        let item = DisplayItem::Rect {
            x: 1.0,
            y: 2.0,
            width: 3.0,
            height: 4.0,
            style: Style::default(),
            corner_radius: 2.0,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["Rect"]["corner_radius"], 2.0);
        assert_eq!(json["Rect"]["style"]["font_weight"], 400);
    }
}
