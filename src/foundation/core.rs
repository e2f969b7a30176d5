pub use kurbo::{Point, Rect, Vec2};

/// Straight-alpha RGBA8 interchange pixel (channels are *not* premultiplied).
///
/// Every pixel codec decodes into and encodes from this layout; narrower
/// channels (5/6 bit) expand by bit replication so that full-intensity values
/// map to 255.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Straight (non-premultiplied) alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Build a pixel from explicit channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}
