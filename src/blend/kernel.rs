use crate::foundation::math::mul_div255_u8;
use crate::raster::bitmap::{BitmapMut, BitmapRef};
use crate::raster::clip::BlendClip;
use crate::raster::codec::{self, PixelCodec};

/// Monomorphized blend loop for one (source, destination) codec pair.
///
/// Per pixel: effective alpha is `src.a * global_alpha / 255` rounded to
/// nearest; 0 skips the write, 255 stores the converted source, anything else
/// over-composites through the codec. The clip guarantees every touched index
/// is in bounds, so the loops slice whole rows instead of going through the
/// checked accessors.
pub(crate) fn blend_typed<S: PixelCodec, D: PixelCodec>(
    dst: &mut BitmapMut<'_>,
    src: &BitmapRef<'_>,
    clip: &BlendClip,
    global_alpha: u8,
) {
    debug_assert_eq!(src.format(), S::FORMAT);
    debug_assert_eq!(dst.format(), D::FORMAT);

    if let Some(sx0) = clip.unit_x_span() {
        blend_rows::<S, D>(dst, src, clip, sx0, global_alpha);
    } else {
        blend_scaled::<S, D>(dst, src, clip, global_alpha);
    }
}

/// Unscaled-x path: each destination row maps onto one contiguous source span.
fn blend_rows<S: PixelCodec, D: PixelCodec>(
    dst: &mut BitmapMut<'_>,
    src: &BitmapRef<'_>,
    clip: &BlendClip,
    sx0: u32,
    global_alpha: u8,
) {
    let dst_start = clip.dst_x0 as usize * D::BPP;
    let dst_end = clip.dst_x1 as usize * D::BPP;
    let src_start = sx0 as usize * S::BPP;
    let src_end = src_start + clip.width() as usize * S::BPP;

    for dy in clip.dst_y0..clip.dst_y1 {
        let src_row = &src.row(clip.src_y(dy))[src_start..src_end];
        let dst_row = &mut dst.row_mut(dy)[dst_start..dst_end];
        for (d, s) in dst_row
            .chunks_exact_mut(D::BPP)
            .zip(src_row.chunks_exact(S::BPP))
        {
            let c = S::read(s);
            let eff_a = mul_div255_u8(u16::from(c.a), u16::from(global_alpha));
            if eff_a == 0 {
                continue;
            }
            if eff_a == 255 {
                D::write(d, c);
            } else {
                D::blend(d, c, eff_a);
            }
        }
    }
}

/// Scaled path: nearest-neighbor source lookup per destination pixel.
fn blend_scaled<S: PixelCodec, D: PixelCodec>(
    dst: &mut BitmapMut<'_>,
    src: &BitmapRef<'_>,
    clip: &BlendClip,
    global_alpha: u8,
) {
    for dy in clip.dst_y0..clip.dst_y1 {
        let src_row = src.row(clip.src_y(dy));
        let dst_row = dst.row_mut(dy);
        for dx in clip.dst_x0..clip.dst_x1 {
            let s_off = clip.src_x(dx) as usize * S::BPP;
            let c = S::read(&src_row[s_off..s_off + S::BPP]);
            let eff_a = mul_div255_u8(u16::from(c.a), u16::from(global_alpha));
            if eff_a == 0 {
                continue;
            }
            let d_off = dx as usize * D::BPP;
            let d = &mut dst_row[d_off..d_off + D::BPP];
            if eff_a == 255 {
                D::write(d, c);
            } else {
                D::blend(d, c, eff_a);
            }
        }
    }
}

/// Generic fallback for format pairs without a monomorphized kernel: converts
/// every sample through the canonical straight-alpha pixel using the
/// format-tag-matched codec calls. Same per-pixel semantics as [`blend_typed`].
pub(crate) fn blend_dynamic(
    dst: &mut BitmapMut<'_>,
    src: &BitmapRef<'_>,
    clip: &BlendClip,
    global_alpha: u8,
) {
    let src_format = src.format();
    let dst_format = dst.format();
    let s_bpp = src_format.bytes_per_pixel();
    let d_bpp = dst_format.bytes_per_pixel();

    for dy in clip.dst_y0..clip.dst_y1 {
        let src_row = src.row(clip.src_y(dy));
        let dst_row = dst.row_mut(dy);
        for dx in clip.dst_x0..clip.dst_x1 {
            let s_off = clip.src_x(dx) as usize * s_bpp;
            let c = codec::read_dyn(src_format, &src_row[s_off..s_off + s_bpp]);
            let eff_a = mul_div255_u8(u16::from(c.a), u16::from(global_alpha));
            if eff_a == 0 {
                continue;
            }
            let d_off = dx as usize * d_bpp;
            let d = &mut dst_row[d_off..d_off + d_bpp];
            if eff_a == 255 {
                codec::write_dyn(dst_format, d, c);
            } else {
                codec::blend_dyn(dst_format, d, c, eff_a);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blend/kernel.rs"]
mod tests;
