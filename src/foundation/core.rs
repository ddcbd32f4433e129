pub use kurbo::{Point, Rect, Size, Vec2};

/// Padding edges in logical units.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Insets {
    /// Left padding.
    #[serde(default)]
    pub left: f64,
    /// Right padding.
    #[serde(default)]
    pub right: f64,
    /// Top padding.
    #[serde(default)]
    pub top: f64,
    /// Bottom padding.
    #[serde(default)]
    pub bottom: f64,
}

impl Insets {
    /// Same padding on every edge.
    pub const fn uniform(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    /// Horizontal padding `h` on the left/right edges, vertical `v` on top/bottom.
    pub const fn symmetric(h: f64, v: f64) -> Self {
        Self {
            left: h,
            right: h,
            top: v,
            bottom: v,
        }
    }

    /// Offset of the padded content from the outer top-left corner.
    pub fn top_left(self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Grow `size` by this padding.
    pub fn pad_size(self, size: Size) -> Size {
        Size::new(
            size.width + self.left + self.right,
            size.height + self.top + self.bottom,
        )
    }

    /// Grow `rect` outward by this padding.
    pub fn pad_rect(self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 - self.left,
            rect.y0 - self.top,
            rect.x1 + self.right,
            rect.y1 + self.bottom,
        )
    }
}

/// Straight-alpha RGBA8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Colour {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Colour {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque colour from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Colour from all four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packed `0xRRGGBBAA` value, handy for hashing.
    pub fn to_u32(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }
}

/// Area of `rect`, clamped to zero for degenerate rectangles.
pub fn rect_area(rect: Rect) -> f64 {
    rect.width().max(0.0) * rect.height().max(0.0)
}

/// Length of the overlap of the closed intervals `[a0, a1]` and `[b0, b1]`, or zero.
pub fn span_overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    (a1.min(b1) - a0.max(b0)).max(0.0)
}
