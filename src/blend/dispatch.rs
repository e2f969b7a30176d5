use crate::blend::kernel::{blend_dynamic, blend_typed};
use crate::foundation::core::Rect;
use crate::foundation::error::MixelResult;
use crate::raster::bitmap::{BitmapMut, BitmapRef};
use crate::raster::clip::clip_blend_rects;
use crate::raster::codec;
use crate::raster::format::PixelFormat;

#[tracing::instrument(skip(dst, src))]
/// Alpha-blend a region of `src` into a region of `dst`.
///
/// The single compositing entry point: a stateless, total dispatch over the
/// (source format, destination format) pair. Alpha-capable sources get a
/// monomorphized kernel per destination format; every remaining pair runs the
/// generic fallback through the canonical straight-alpha pixel, so no pair
/// fails to dispatch.
///
/// `None` regions mean the whole respective bitmap. Regions are float rects in
/// each bitmap's own pixel space and may differ in size; the source is then
/// scaled by nearest-neighbor sampling. `global_alpha` scales every source
/// pixel's alpha on top of the per-pixel values; `0` is a no-op and `255` is
/// neutral. Degenerate or fully clipped regions succeed without writing.
pub fn blend_image(
    dst: &mut BitmapMut<'_>,
    src: &BitmapRef<'_>,
    dst_region: Option<Rect>,
    src_region: Option<Rect>,
    global_alpha: u8,
) -> MixelResult<()> {
    // Every effective alpha would round to zero.
    if global_alpha == 0 {
        return Ok(());
    }

    let Some(clip) = clip_blend_rects(
        dst_region,
        dst.width(),
        dst.height(),
        src_region,
        src.width(),
        src.height(),
    )?
    else {
        return Ok(());
    };

    match (src.format(), dst.format()) {
        (PixelFormat::Bgra8888, PixelFormat::Bgra8888) => {
            blend_typed::<codec::Bgra8888, codec::Bgra8888>(dst, src, &clip, global_alpha);
        }
        (PixelFormat::Bgra8888, PixelFormat::Rgba8888) => {
            blend_typed::<codec::Bgra8888, codec::Rgba8888>(dst, src, &clip, global_alpha);
        }
        (PixelFormat::Bgra8888, PixelFormat::Rgb565) => {
            blend_typed::<codec::Bgra8888, codec::Rgb565>(dst, src, &clip, global_alpha);
        }
        (PixelFormat::Bgra8888, PixelFormat::Bgr565) => {
            blend_typed::<codec::Bgra8888, codec::Bgr565>(dst, src, &clip, global_alpha);
        }
        (PixelFormat::Bgra8888, PixelFormat::Rgb888) => {
            blend_typed::<codec::Bgra8888, codec::Rgb888>(dst, src, &clip, global_alpha);
        }
        (PixelFormat::Bgra8888, PixelFormat::Bgr888) => {
            blend_typed::<codec::Bgra8888, codec::Bgr888>(dst, src, &clip, global_alpha);
        }
        (PixelFormat::Rgba8888, PixelFormat::Bgra8888) => {
            blend_typed::<codec::Rgba8888, codec::Bgra8888>(dst, src, &clip, global_alpha);
        }
        (PixelFormat::Rgba8888, PixelFormat::Rgba8888) => {
            blend_typed::<codec::Rgba8888, codec::Rgba8888>(dst, src, &clip, global_alpha);
        }
        (PixelFormat::Rgba8888, PixelFormat::Rgb565) => {
            blend_typed::<codec::Rgba8888, codec::Rgb565>(dst, src, &clip, global_alpha);
        }
        (PixelFormat::Rgba8888, PixelFormat::Bgr565) => {
            blend_typed::<codec::Rgba8888, codec::Bgr565>(dst, src, &clip, global_alpha);
        }
        (PixelFormat::Rgba8888, PixelFormat::Rgb888) => {
            blend_typed::<codec::Rgba8888, codec::Rgb888>(dst, src, &clip, global_alpha);
        }
        (PixelFormat::Rgba8888, PixelFormat::Bgr888) => {
            blend_typed::<codec::Rgba8888, codec::Bgr888>(dst, src, &clip, global_alpha);
        }
        // Alpha-less sources carry no per-pixel alpha worth specializing for.
        _ => blend_dynamic(dst, src, &clip, global_alpha),
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/blend/dispatch.rs"]
mod tests;
