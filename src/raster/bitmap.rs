use crate::foundation::core::{Rect, Rgba8};
use crate::foundation::error::{MixelError, MixelResult};
use crate::raster::codec::{read_dyn, write_dyn};
use crate::raster::format::PixelFormat;

fn validate_geometry(
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
    data_len: usize,
) -> MixelResult<()> {
    if width == 0 || height == 0 {
        return Err(MixelError::bad_params(format!(
            "bitmap dimensions must be non-zero, got {width}x{height}"
        )));
    }
    let row_bytes = (width as usize)
        .checked_mul(format.bytes_per_pixel())
        .ok_or_else(|| MixelError::bad_params("bitmap row size overflow"))?;
    if stride < row_bytes {
        return Err(MixelError::bad_params(format!(
            "stride {stride} shorter than one row ({row_bytes} bytes)"
        )));
    }
    let min_len = stride
        .checked_mul(height as usize)
        .ok_or_else(|| MixelError::bad_params("bitmap buffer size overflow"))?;
    if data_len < min_len {
        return Err(MixelError::bad_params(format!(
            "buffer holds {data_len} bytes, geometry needs {min_len}"
        )));
    }
    Ok(())
}

fn offset_checked(
    width: u32,
    height: u32,
    stride: usize,
    bpp: usize,
    x: u32,
    y: u32,
) -> MixelResult<usize> {
    if x >= width || y >= height {
        return Err(MixelError::out_of_bounds(format!(
            "pixel ({x}, {y}) outside {width}x{height} bitmap"
        )));
    }
    Ok(y as usize * stride + x as usize * bpp)
}

#[derive(Clone, Debug)]
/// Owned pixel storage with explicit geometry.
///
/// Invariants, checked at construction and preserved thereafter: non-zero
/// dimensions, `stride >= width * bytes_per_pixel`, and a buffer of at least
/// `stride * height` bytes. Rows may carry trailing padding; blends never
/// touch it.
pub struct Bitmap {
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Bitmap {
    /// Allocate a zero-filled bitmap with a tight stride.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> MixelResult<Self> {
        let stride = (width as usize)
            .checked_mul(format.bytes_per_pixel())
            .ok_or_else(|| MixelError::bad_params("bitmap row size overflow"))?;
        Self::with_stride(width, height, stride, format)
    }

    /// Allocate a zero-filled bitmap with an explicit row stride in bytes.
    pub fn with_stride(
        width: u32,
        height: u32,
        stride: usize,
        format: PixelFormat,
    ) -> MixelResult<Self> {
        let len = stride
            .checked_mul(height as usize)
            .ok_or_else(|| MixelError::bad_params("bitmap buffer size overflow"))?;
        Self::from_vec(width, height, stride, format, vec![0; len])
    }

    /// Wrap an existing buffer, validating it against the geometry.
    pub fn from_vec(
        width: u32,
        height: u32,
        stride: usize,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> MixelResult<Self> {
        validate_geometry(width, height, stride, format, data.len())?;
        Ok(Self {
            width,
            height,
            stride,
            format,
            data,
        })
    }

    /// Allocate a bitmap with every pixel set to `color`.
    pub fn filled(
        width: u32,
        height: u32,
        format: PixelFormat,
        color: Rgba8,
    ) -> MixelResult<Self> {
        let mut bitmap = Self::new(width, height, format)?;
        let bpp = format.bytes_per_pixel();
        for row in bitmap.data.chunks_exact_mut(bitmap.stride) {
            for px in row[..width as usize * bpp].chunks_exact_mut(bpp) {
                write_dyn(format, px, color);
            }
        }
        Ok(bitmap)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel layout of the buffer.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// The raw backing bytes, including any row padding.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw backing bytes, including any row padding.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Borrow a read-only view of the whole bitmap.
    pub fn as_ref(&self) -> BitmapRef<'_> {
        BitmapRef {
            width: self.width,
            height: self.height,
            stride: self.stride,
            format: self.format,
            data: &self.data,
        }
    }

    /// Borrow a writable view of the whole bitmap.
    pub fn as_mut(&mut self) -> BitmapMut<'_> {
        BitmapMut {
            width: self.width,
            height: self.height,
            stride: self.stride,
            format: self.format,
            data: &mut self.data,
        }
    }

    /// Decode the pixel at `(x, y)`; out-of-bounds coordinates are an error,
    /// never a clamp.
    pub fn get_pixel(&self, x: u32, y: u32) -> MixelResult<Rgba8> {
        self.as_ref().get_pixel(x, y)
    }

    /// Encode `color` at `(x, y)`; out-of-bounds coordinates are an error.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8) -> MixelResult<()> {
        self.as_mut().set_pixel(x, y, color)
    }

    /// Alpha-blend a region of `src` into a region of this bitmap.
    ///
    /// Delegates to [`blend_image`](crate::blend_image); `None` regions mean
    /// the whole respective bitmap.
    pub fn blend_from(
        &mut self,
        src: &Bitmap,
        dst_region: Option<Rect>,
        src_region: Option<Rect>,
        global_alpha: u8,
    ) -> MixelResult<()> {
        crate::blend::dispatch::blend_image(
            &mut self.as_mut(),
            &src.as_ref(),
            dst_region,
            src_region,
            global_alpha,
        )
    }
}

#[derive(Clone, Copy, Debug)]
/// Read-only view over caller-owned pixels, carrying the same invariants as
/// [`Bitmap`].
pub struct BitmapRef<'a> {
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
    data: &'a [u8],
}

impl<'a> BitmapRef<'a> {
    /// Wrap a borrowed buffer, validating it against the geometry.
    pub fn new(
        data: &'a [u8],
        width: u32,
        height: u32,
        stride: usize,
        format: PixelFormat,
    ) -> MixelResult<Self> {
        validate_geometry(width, height, stride, format, data.len())?;
        Ok(Self {
            width,
            height,
            stride,
            format,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel layout of the buffer.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// The raw borrowed bytes, including any row padding.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Decode the pixel at `(x, y)`; out-of-bounds coordinates are an error.
    pub fn get_pixel(&self, x: u32, y: u32) -> MixelResult<Rgba8> {
        let bpp = self.format.bytes_per_pixel();
        let off = offset_checked(self.width, self.height, self.stride, bpp, x, y)?;
        Ok(read_dyn(self.format, &self.data[off..off + bpp]))
    }

    /// One row's pixel bytes, without the trailing padding.
    pub(crate) fn row(&self, y: u32) -> &'a [u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize * self.format.bytes_per_pixel()]
    }
}

#[derive(Debug)]
/// Writable view over caller-owned pixels, carrying the same invariants as
/// [`Bitmap`].
pub struct BitmapMut<'a> {
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
    data: &'a mut [u8],
}

impl<'a> BitmapMut<'a> {
    /// Wrap a mutably borrowed buffer, validating it against the geometry.
    pub fn new(
        data: &'a mut [u8],
        width: u32,
        height: u32,
        stride: usize,
        format: PixelFormat,
    ) -> MixelResult<Self> {
        validate_geometry(width, height, stride, format, data.len())?;
        Ok(Self {
            width,
            height,
            stride,
            format,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel layout of the buffer.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// The raw borrowed bytes, including any row padding.
    pub fn data(&self) -> &[u8] {
        self.data
    }

    /// Mutable raw bytes, including any row padding.
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data
    }

    /// Re-borrow as a read-only view.
    pub fn as_ref(&self) -> BitmapRef<'_> {
        BitmapRef {
            width: self.width,
            height: self.height,
            stride: self.stride,
            format: self.format,
            data: self.data,
        }
    }

    /// Decode the pixel at `(x, y)`; out-of-bounds coordinates are an error.
    pub fn get_pixel(&self, x: u32, y: u32) -> MixelResult<Rgba8> {
        let bpp = self.format.bytes_per_pixel();
        let off = offset_checked(self.width, self.height, self.stride, bpp, x, y)?;
        Ok(read_dyn(self.format, &self.data[off..off + bpp]))
    }

    /// Encode `color` at `(x, y)`; out-of-bounds coordinates are an error.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8) -> MixelResult<()> {
        let bpp = self.format.bytes_per_pixel();
        let off = offset_checked(self.width, self.height, self.stride, bpp, x, y)?;
        write_dyn(self.format, &mut self.data[off..off + bpp], color);
        Ok(())
    }

    /// One row's pixel bytes, without the trailing padding.
    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.stride;
        let end = start + self.width as usize * self.format.bytes_per_pixel();
        &mut self.data[start..end]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/bitmap.rs"]
mod tests;
