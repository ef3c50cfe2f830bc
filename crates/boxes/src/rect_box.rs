//! A framed box with optional content, margin and padding.

use typeset_core::{DrawingBackend, LayoutBox, Length, Margin, SizePolicy, Style};

/// Outer extent along one axis, or `None` when the content decides.
fn outer_extent(policy: SizePolicy, stored: Length, hint: Length) -> Option<Length> {
    match policy {
        SizePolicy::Fixed => Some(stored),
        SizePolicy::Expand => Some(hint),
        SizePolicy::Relative => Some(hint * stored / 100.0),
        SizePolicy::Native => None,
    }
}

/// A rectangle drawn inside its margin, holding an optional content box.
///
/// The content's baseline is the rect box's baseline: the descent is the
/// content descent plus bottom padding and margin.
#[derive(Debug)]
pub struct RectBox {
    content: Option<Box<dyn LayoutBox>>,
    style: Style,
    margin: Margin,
    padding: Margin,
    corner_radius: Length,
    width: Length,
    height: Length,
    width_policy: SizePolicy,
    height_policy: SizePolicy,
    // Derived by calc_layout.
    box_width: Length,
    box_height: Length,
    descent: Length,
    x: Length,
    y: Length,
}

impl RectBox {
    /// An empty rect of fixed size.
    pub fn new(width: Length, height: Length, style: Style) -> Self {
        Self {
            content: None,
            style,
            margin: Margin::default(),
            padding: Margin::default(),
            corner_radius: 0.0,
            width,
            height,
            width_policy: SizePolicy::Fixed,
            height_policy: SizePolicy::Fixed,
            box_width: 0.0,
            box_height: 0.0,
            descent: 0.0,
            x: 0.0,
            y: 0.0,
        }
    }

    #[must_use]
    pub fn with_content<B: LayoutBox + 'static>(mut self, content: B) -> Self {
        self.content = Some(Box::new(content));
        self
    }

    #[must_use]
    pub const fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub const fn with_padding(mut self, padding: Margin) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: Length) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    /// Set how width and height respond to the layout hints.
    ///
    /// For `Relative`, the stored width/height are percentages of the hint.
    #[must_use]
    pub const fn with_policy(mut self, width_policy: SizePolicy, height_policy: SizePolicy) -> Self {
        self.width_policy = width_policy;
        self.height_policy = height_policy;
        self
    }

    #[inline]
    pub fn content(&self) -> Option<&dyn LayoutBox> {
        self.content.as_deref()
    }

    fn insets(&self) -> (Length, Length) {
        (
            self.margin.horizontal() + self.padding.horizontal(),
            self.margin.vertical() + self.padding.vertical(),
        )
    }
}

impl LayoutBox for RectBox {
    fn width(&self) -> Length {
        self.box_width
    }

    fn ascent(&self) -> Length {
        self.box_height - self.descent
    }

    fn descent(&self) -> Length {
        self.descent
    }

    fn voff(&self) -> Length {
        0.0
    }

    fn calc_layout(&mut self, width_hint: Length, height_hint: Length) {
        let (inset_width, inset_height) = self.insets();
        let outer_width = outer_extent(self.width_policy, self.width, width_hint);
        let outer_height = outer_extent(self.height_policy, self.height, height_hint);
        let inner_width_hint = outer_width.map_or(width_hint, |outer| (outer - inset_width).max(0.0));
        let inner_height_hint =
            outer_height.map_or(height_hint, |outer| (outer - inset_height).max(0.0));

        let offset_x = self.margin.left + self.padding.left;
        let (content_width, content_height, content_descent) = match self.content.as_mut() {
            Some(content) => {
                content.calc_layout(inner_width_hint, inner_height_hint);
                content.place(offset_x, 0.0);
                (content.width(), content.height(), content.descent())
            }
            None => (0.0, 0.0, 0.0),
        };

        self.box_width = outer_width.unwrap_or(content_width + inset_width);
        self.box_height = outer_height.unwrap_or(content_height + inset_height);
        self.descent = content_descent + self.padding.bottom + self.margin.bottom;
    }

    fn place(&mut self, x: Length, y: Length) {
        self.x = x;
        self.y = y;
    }

    fn render(&self, backend: &mut dyn DrawingBackend, x_ref: Length, y_ref: Length) {
        let left = x_ref + self.x;
        let baseline = y_ref + self.y;
        backend.draw_rect(
            left + self.margin.left,
            baseline - self.descent + self.margin.bottom,
            self.box_width - self.margin.horizontal(),
            self.box_height - self.margin.vertical(),
            &self.style,
            self.corner_radius,
        );
        if let Some(content) = &self.content {
            content.render(backend, left, baseline);
        }
    }
}
