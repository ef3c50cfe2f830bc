use typeset_core::{DrawingBackend, LayoutBox, Length};

/// Invisible box of fixed size, for struts and fixed spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NullBox {
    width: Length,
    ascent: Length,
    descent: Length,
}

impl NullBox {
    #[inline]
    pub const fn new(width: Length, ascent: Length, descent: Length) -> Self {
        Self {
            width,
            ascent,
            descent,
        }
    }
}

impl LayoutBox for NullBox {
    fn width(&self) -> Length {
        self.width
    }

    fn ascent(&self) -> Length {
        self.ascent
    }

    fn descent(&self) -> Length {
        self.descent
    }

    fn voff(&self) -> Length {
        0.0
    }

    fn calc_layout(&mut self, _width_hint: Length, _height_hint: Length) {}

    fn place(&mut self, _x: Length, _y: Length) {}

    fn render(&self, _backend: &mut dyn DrawingBackend, _x_ref: Length, _y_ref: Length) {}
}
