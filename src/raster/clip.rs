use crate::foundation::core::{Point, Rect, Vec2};
use crate::foundation::error::{MixelError, MixelResult};

fn region_or_full(region: Option<Rect>, w: u32, h: u32) -> MixelResult<Rect> {
    let Some(r) = region else {
        return Ok(Rect::new(0.0, 0.0, f64::from(w), f64::from(h)));
    };
    if ![r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite()) {
        return Err(MixelError::bad_params(format!(
            "blend region must be finite, got {r:?}"
        )));
    }
    if r.x1 < r.x0 || r.y1 < r.y0 {
        return Err(MixelError::bad_params(format!(
            "blend region has negative size: {r:?}"
        )));
    }
    Ok(r)
}

/// Containing integer bounds of `[min, max)` clamped to `[0, limit]`:
/// floor of the min edge, ceil of the max edge.
fn containing_axis(min: f64, max: f64, limit: u32) -> (u32, u32) {
    let lo = min.max(0.0).floor() as u32;
    let hi = max.min(f64::from(limit)).ceil().max(0.0) as u32;
    (lo, hi)
}

#[derive(Clone, Copy, Debug)]
/// Resolved geometry for one blend: the integer destination window to write,
/// plus the mapping from destination pixels back into source pixels.
///
/// Produced by [`clip_blend_rects`]; all coordinates are in the respective
/// bitmap's own pixel space.
pub struct BlendClip {
    /// First destination column (inclusive).
    pub dst_x0: u32,
    /// First destination row (inclusive).
    pub dst_y0: u32,
    /// Past-the-end destination column.
    pub dst_x1: u32,
    /// Past-the-end destination row.
    pub dst_y1: u32,

    dst_origin: Point,
    src_origin: Point,
    scale: Vec2,

    src_x0: u32,
    src_y0: u32,
    src_x1: u32,
    src_y1: u32,
}

impl BlendClip {
    /// Destination window width in pixels.
    pub fn width(&self) -> u32 {
        self.dst_x1 - self.dst_x0
    }

    /// Destination window height in pixels.
    pub fn height(&self) -> u32 {
        self.dst_y1 - self.dst_y0
    }

    /// Source-per-destination scale factors
    /// (`src_rect.width / dst_rect.width`, likewise for y).
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Source column sampled for destination column `dx`: nearest-neighbor
    /// truncation of the float mapping, clamped to the source window edges.
    pub fn src_x(&self, dx: u32) -> u32 {
        let sx = self.src_origin.x + (f64::from(dx) - self.dst_origin.x) * self.scale.x;
        (sx as u32).clamp(self.src_x0, self.src_x1 - 1)
    }

    /// Source row sampled for destination row `dy`; same policy as [`Self::src_x`].
    pub fn src_y(&self, dy: u32) -> u32 {
        let sy = self.src_origin.y + (f64::from(dy) - self.dst_origin.y) * self.scale.y;
        (sy as u32).clamp(self.src_y0, self.src_y1 - 1)
    }

    /// When the x mapping is an exact 1:1 column copy across the whole window
    /// (unit x scale, no edge clamping anywhere inside), returns the source
    /// column for `dst_x0`. Kernels use this to blend whole row spans.
    pub(crate) fn unit_x_span(&self) -> Option<u32> {
        if self.scale.x != 1.0 {
            return None;
        }
        let f = self.src_origin.x + (f64::from(self.dst_x0) - self.dst_origin.x);
        if f < 0.0 {
            return None;
        }
        let sx0 = f.floor() as u32;
        if sx0 < self.src_x0 {
            return None;
        }
        if u64::from(sx0) + u64::from(self.width()) > u64::from(self.src_x1) {
            return None;
        }
        Some(sx0)
    }
}

/// Resolve the destination/source regions of a blend into a [`BlendClip`].
///
/// `None` regions default to the whole respective bitmap. Regions are float
/// rectangles in each bitmap's own pixel space; the destination iterates the
/// containing integer bounds of its rect clamped to the bitmap (floor of the
/// min edge, ceil of the max edge).
///
/// Returns `Ok(None)` when there is nothing to do: a zero-size destination or
/// source rect, or an intersection with either bitmap that is empty. Malformed
/// regions (negative size, non-finite coordinates) are `BadParams`.
pub fn clip_blend_rects(
    dst_region: Option<Rect>,
    dst_w: u32,
    dst_h: u32,
    src_region: Option<Rect>,
    src_w: u32,
    src_h: u32,
) -> MixelResult<Option<BlendClip>> {
    let dst_rect = region_or_full(dst_region, dst_w, dst_h)?;
    let src_rect = region_or_full(src_region, src_w, src_h)?;

    // Zero-size rects cannot produce scale factors; treat as an empty blend.
    if dst_rect.width() == 0.0 || dst_rect.height() == 0.0 {
        return Ok(None);
    }
    if src_rect.width() == 0.0 || src_rect.height() == 0.0 {
        return Ok(None);
    }

    let (dst_x0, dst_x1) = containing_axis(dst_rect.x0, dst_rect.x1, dst_w);
    let (dst_y0, dst_y1) = containing_axis(dst_rect.y0, dst_rect.y1, dst_h);
    if dst_x1 <= dst_x0 || dst_y1 <= dst_y0 {
        return Ok(None);
    }

    let (src_x0, src_x1) = containing_axis(src_rect.x0, src_rect.x1, src_w);
    let (src_y0, src_y1) = containing_axis(src_rect.y0, src_rect.y1, src_h);
    if src_x1 <= src_x0 || src_y1 <= src_y0 {
        return Ok(None);
    }

    Ok(Some(BlendClip {
        dst_x0,
        dst_y0,
        dst_x1,
        dst_y1,
        dst_origin: Point::new(dst_rect.x0, dst_rect.y0),
        src_origin: Point::new(src_rect.x0, src_rect.y0),
        scale: Vec2::new(
            src_rect.width() / dst_rect.width(),
            src_rect.height() / dst_rect.height(),
        ),
        src_x0,
        src_y0,
        src_x1,
        src_y1,
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/clip.rs"]
mod tests;
