#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Pixel memory layouts the compositor understands.
///
/// The format tag is authoritative: two formats with the same byte width but
/// different channel naming are distinct, and channels are never reordered
/// outside a kernel built for that exact pair. For the 32/24-bit formats the
/// name spells the channel order by increasing byte address; for the 16-bit
/// formats it spells the field order from the least significant bit of a
/// little-endian `u16`.
pub enum PixelFormat {
    /// 32-bit `[b, g, r, a]`, 8 bits per channel, straight alpha.
    Bgra8888,
    /// 32-bit `[r, g, b, a]`, 8 bits per channel, straight alpha.
    Rgba8888,
    /// 16-bit little-endian: red in bits 0..5, green 5..11, blue 11..16.
    Rgb565,
    /// 16-bit little-endian: blue in bits 0..5, green 5..11, red 11..16.
    Bgr565,
    /// 24-bit `[r, g, b]`, no alpha channel.
    Rgb888,
    /// 24-bit `[b, g, r]`, no alpha channel.
    Bgr888,
}

impl PixelFormat {
    /// Every supported format, in declaration order.
    pub const ALL: [PixelFormat; 6] = [
        PixelFormat::Bgra8888,
        PixelFormat::Rgba8888,
        PixelFormat::Rgb565,
        PixelFormat::Bgr565,
        PixelFormat::Rgb888,
        PixelFormat::Bgr888,
    ];

    /// Bytes occupied by one pixel.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Bgra8888 | PixelFormat::Rgba8888 => 4,
            PixelFormat::Rgb565 | PixelFormat::Bgr565 => 2,
            PixelFormat::Rgb888 | PixelFormat::Bgr888 => 3,
        }
    }

    /// Whether the layout stores an alpha channel.
    pub const fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Bgra8888 | PixelFormat::Rgba8888)
    }
}
