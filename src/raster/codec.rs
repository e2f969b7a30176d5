use crate::foundation::core::Rgba8;
use crate::foundation::math::blend_channel;
use crate::raster::format::PixelFormat;

/// Channel layout of a single pixel format.
///
/// A codec decodes one pixel into the canonical straight-alpha [`Rgba8`] and
/// encodes it back; `blend` composites one source pixel over one destination
/// pixel in place at the given effective alpha. All slices are exactly
/// [`PixelCodec::BPP`] bytes, as produced by `chunks_exact`.
pub(crate) trait PixelCodec {
    const FORMAT: PixelFormat;
    const BPP: usize;

    fn read(px: &[u8]) -> Rgba8;
    fn write(px: &mut [u8], c: Rgba8);

    /// In-place over-composite at effective alpha `eff_a`.
    ///
    /// One rounding per channel, so `eff_a == 255` stores the source exactly.
    /// Alpha-less layouts drop the composited alpha at encode time.
    fn blend(px: &mut [u8], src: Rgba8, eff_a: u8) {
        let d = Self::read(px);
        Self::write(
            px,
            Rgba8 {
                r: blend_channel(src.r, d.r, eff_a),
                g: blend_channel(src.g, d.g, eff_a),
                b: blend_channel(src.b, d.b, eff_a),
                a: blend_channel(255, d.a, eff_a),
            },
        );
    }
}

fn expand5(v: u8) -> u8 {
    (v << 3) | (v >> 2)
}

fn expand6(v: u8) -> u8 {
    (v << 2) | (v >> 4)
}

pub(crate) struct Bgra8888;

impl PixelCodec for Bgra8888 {
    const FORMAT: PixelFormat = PixelFormat::Bgra8888;
    const BPP: usize = 4;

    fn read(px: &[u8]) -> Rgba8 {
        Rgba8::new(px[2], px[1], px[0], px[3])
    }

    fn write(px: &mut [u8], c: Rgba8) {
        px.copy_from_slice(&[c.b, c.g, c.r, c.a]);
    }
}

pub(crate) struct Rgba8888;

impl PixelCodec for Rgba8888 {
    const FORMAT: PixelFormat = PixelFormat::Rgba8888;
    const BPP: usize = 4;

    fn read(px: &[u8]) -> Rgba8 {
        Rgba8::new(px[0], px[1], px[2], px[3])
    }

    fn write(px: &mut [u8], c: Rgba8) {
        px.copy_from_slice(&[c.r, c.g, c.b, c.a]);
    }
}

pub(crate) struct Rgb565;

impl PixelCodec for Rgb565 {
    const FORMAT: PixelFormat = PixelFormat::Rgb565;
    const BPP: usize = 2;

    fn read(px: &[u8]) -> Rgba8 {
        let v = u16::from_le_bytes([px[0], px[1]]);
        Rgba8::opaque(
            expand5((v & 0x1f) as u8),
            expand6(((v >> 5) & 0x3f) as u8),
            expand5(((v >> 11) & 0x1f) as u8),
        )
    }

    fn write(px: &mut [u8], c: Rgba8) {
        let v = u16::from(c.r >> 3) | (u16::from(c.g >> 2) << 5) | (u16::from(c.b >> 3) << 11);
        px.copy_from_slice(&v.to_le_bytes());
    }
}

pub(crate) struct Bgr565;

impl PixelCodec for Bgr565 {
    const FORMAT: PixelFormat = PixelFormat::Bgr565;
    const BPP: usize = 2;

    fn read(px: &[u8]) -> Rgba8 {
        let v = u16::from_le_bytes([px[0], px[1]]);
        Rgba8::opaque(
            expand5(((v >> 11) & 0x1f) as u8),
            expand6(((v >> 5) & 0x3f) as u8),
            expand5((v & 0x1f) as u8),
        )
    }

    fn write(px: &mut [u8], c: Rgba8) {
        let v = u16::from(c.b >> 3) | (u16::from(c.g >> 2) << 5) | (u16::from(c.r >> 3) << 11);
        px.copy_from_slice(&v.to_le_bytes());
    }
}

pub(crate) struct Rgb888;

impl PixelCodec for Rgb888 {
    const FORMAT: PixelFormat = PixelFormat::Rgb888;
    const BPP: usize = 3;

    fn read(px: &[u8]) -> Rgba8 {
        Rgba8::opaque(px[0], px[1], px[2])
    }

    fn write(px: &mut [u8], c: Rgba8) {
        px.copy_from_slice(&[c.r, c.g, c.b]);
    }
}

pub(crate) struct Bgr888;

impl PixelCodec for Bgr888 {
    const FORMAT: PixelFormat = PixelFormat::Bgr888;
    const BPP: usize = 3;

    fn read(px: &[u8]) -> Rgba8 {
        Rgba8::opaque(px[2], px[1], px[0])
    }

    fn write(px: &mut [u8], c: Rgba8) {
        px.copy_from_slice(&[c.b, c.g, c.r]);
    }
}

pub(crate) fn read_dyn(format: PixelFormat, px: &[u8]) -> Rgba8 {
    match format {
        PixelFormat::Bgra8888 => Bgra8888::read(px),
        PixelFormat::Rgba8888 => Rgba8888::read(px),
        PixelFormat::Rgb565 => Rgb565::read(px),
        PixelFormat::Bgr565 => Bgr565::read(px),
        PixelFormat::Rgb888 => Rgb888::read(px),
        PixelFormat::Bgr888 => Bgr888::read(px),
    }
}

pub(crate) fn write_dyn(format: PixelFormat, px: &mut [u8], c: Rgba8) {
    match format {
        PixelFormat::Bgra8888 => Bgra8888::write(px, c),
        PixelFormat::Rgba8888 => Rgba8888::write(px, c),
        PixelFormat::Rgb565 => Rgb565::write(px, c),
        PixelFormat::Bgr565 => Bgr565::write(px, c),
        PixelFormat::Rgb888 => Rgb888::write(px, c),
        PixelFormat::Bgr888 => Bgr888::write(px, c),
    }
}

pub(crate) fn blend_dyn(format: PixelFormat, px: &mut [u8], src: Rgba8, eff_a: u8) {
    match format {
        PixelFormat::Bgra8888 => Bgra8888::blend(px, src, eff_a),
        PixelFormat::Rgba8888 => Rgba8888::blend(px, src, eff_a),
        PixelFormat::Rgb565 => Rgb565::blend(px, src, eff_a),
        PixelFormat::Bgr565 => Bgr565::blend(px, src, eff_a),
        PixelFormat::Rgb888 => Rgb888::blend(px, src, eff_a),
        PixelFormat::Bgr888 => Bgr888::blend(px, src, eff_a),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/codec.rs"]
mod tests;
