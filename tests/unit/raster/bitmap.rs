use super::*;

#[test]
fn new_allocates_tight_zeroed_storage() {
    let b = Bitmap::new(3, 2, PixelFormat::Rgb888).unwrap();
    assert_eq!(b.stride(), 9);
    assert_eq!(b.data().len(), 18);
    assert!(b.data().iter().all(|&v| v == 0));
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(Bitmap::new(0, 4, PixelFormat::Rgba8888).is_err());
    assert!(Bitmap::new(4, 0, PixelFormat::Rgba8888).is_err());
}

#[test]
fn stride_shorter_than_a_row_is_rejected() {
    assert!(Bitmap::with_stride(4, 4, 15, PixelFormat::Rgba8888).is_err());
    assert!(Bitmap::with_stride(4, 4, 16, PixelFormat::Rgba8888).is_ok());
}

#[test]
fn from_vec_validates_buffer_length() {
    assert!(Bitmap::from_vec(2, 2, 8, PixelFormat::Rgba8888, vec![0; 31]).is_err());
    assert!(Bitmap::from_vec(2, 2, 8, PixelFormat::Rgba8888, vec![0; 32]).is_ok());
}

#[test]
fn filled_writes_every_pixel_in_format_order() {
    let b = Bitmap::filled(2, 1, PixelFormat::Bgra8888, Rgba8::new(1, 2, 3, 4)).unwrap();
    assert_eq!(b.data(), &[3, 2, 1, 4, 3, 2, 1, 4]);
}

#[test]
fn pixel_roundtrip_through_views() {
    let mut b = Bitmap::new(4, 3, PixelFormat::Rgb565).unwrap();
    b.set_pixel(2, 1, Rgba8::opaque(255, 0, 0)).unwrap();
    assert_eq!(b.get_pixel(2, 1).unwrap(), Rgba8::opaque(255, 0, 0));
    assert_eq!(b.get_pixel(0, 0).unwrap(), Rgba8::opaque(0, 0, 0));
}

#[test]
fn out_of_bounds_pixel_access_is_an_error() {
    let mut b = Bitmap::new(2, 2, PixelFormat::Rgba8888).unwrap();
    let err = b.get_pixel(2, 0).unwrap_err();
    assert!(err.to_string().contains("out of bounds"));
    assert!(b.set_pixel(0, 2, Rgba8::transparent()).is_err());
}

#[test]
fn rows_exclude_stride_padding() {
    let b = Bitmap::with_stride(2, 2, 12, PixelFormat::Rgba8888).unwrap();
    let view = b.as_ref();
    assert_eq!(view.row(0).len(), 8);
    assert_eq!(view.row(1).len(), 8);
}

#[test]
fn views_share_geometry_with_the_owner() {
    let mut b = Bitmap::new(5, 4, PixelFormat::Bgr888).unwrap();
    {
        let mut m = b.as_mut();
        assert_eq!((m.width(), m.height(), m.stride()), (5, 4, 15));
        m.set_pixel(4, 3, Rgba8::opaque(1, 2, 3)).unwrap();
        assert_eq!(m.as_ref().get_pixel(4, 3).unwrap(), Rgba8::opaque(1, 2, 3));
    }
    assert_eq!(b.get_pixel(4, 3).unwrap(), Rgba8::opaque(1, 2, 3));
}

#[test]
fn borrowed_views_validate_like_owned_bitmaps() {
    let buf = vec![0u8; 16];
    assert!(BitmapRef::new(&buf, 2, 2, 8, PixelFormat::Rgba8888).is_ok());
    assert!(BitmapRef::new(&buf, 3, 2, 8, PixelFormat::Rgba8888).is_err());

    let mut buf = vec![0u8; 15];
    assert!(BitmapMut::new(&mut buf, 2, 2, 8, PixelFormat::Rgba8888).is_err());
}
