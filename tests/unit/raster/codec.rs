use super::*;

#[test]
fn rgba8888_roundtrips_exactly() {
    let mut px = [0u8; 4];
    let c = Rgba8::new(1, 2, 3, 4);
    Rgba8888::write(&mut px, c);
    assert_eq!(px, [1, 2, 3, 4]);
    assert_eq!(Rgba8888::read(&px), c);
}

#[test]
fn bgra8888_stores_blue_first() {
    let mut px = [0u8; 4];
    let c = Rgba8::new(10, 20, 30, 40);
    Bgra8888::write(&mut px, c);
    assert_eq!(px, [30, 20, 10, 40]);
    assert_eq!(Bgra8888::read(&px), c);
}

#[test]
fn rgb565_packs_red_into_low_bits() {
    let mut px = [0u8; 2];
    Rgb565::write(&mut px, Rgba8::opaque(255, 0, 0));
    assert_eq!(u16::from_le_bytes(px), 0x001f);
    assert_eq!(Rgb565::read(&px), Rgba8::opaque(255, 0, 0));
}

#[test]
fn bgr565_packs_blue_into_low_bits() {
    let mut px = [0u8; 2];
    Bgr565::write(&mut px, Rgba8::opaque(0, 0, 255));
    assert_eq!(u16::from_le_bytes(px), 0x001f);
    assert_eq!(Bgr565::read(&px), Rgba8::opaque(0, 0, 255));
}

#[test]
fn expand_565_replicates_high_bits() {
    let mut px = [0u8; 2];
    Rgb565::write(&mut px, Rgba8::opaque(200, 100, 50));
    assert_eq!(Rgb565::read(&px), Rgba8::opaque(206, 101, 49));
}

#[test]
fn opaque_formats_read_full_alpha_and_drop_written_alpha() {
    let c = Rgba8::new(9, 8, 7, 13);
    let mut rgb = [0u8; 3];
    Rgb888::write(&mut rgb, c);
    assert_eq!(rgb, [9, 8, 7]);
    assert_eq!(Rgb888::read(&rgb).a, 255);

    let mut bgr = [0u8; 3];
    Bgr888::write(&mut bgr, c);
    assert_eq!(bgr, [7, 8, 9]);
    assert_eq!(Bgr888::read(&bgr), Rgba8::opaque(9, 8, 7));
}

#[test]
fn dyn_calls_cover_every_format() {
    let c = Rgba8::new(180, 90, 45, 200);
    for format in PixelFormat::ALL {
        let mut px = vec![0u8; format.bytes_per_pixel()];
        write_dyn(format, &mut px, c);
        let back = read_dyn(format, &px);
        assert_eq!(back.a, if format.has_alpha() { 200 } else { 255 });

        // Re-encoding what was read is stable.
        let mut again = vec![0u8; format.bytes_per_pixel()];
        write_dyn(format, &mut again, back);
        assert_eq!(again, px);
    }
}

#[test]
fn blend_at_full_alpha_stores_source_exactly() {
    let mut px = [0u8; 4];
    Rgba8888::write(&mut px, Rgba8::new(5, 5, 5, 5));
    Rgba8888::blend(&mut px, Rgba8::new(9, 8, 7, 255), 255);
    assert_eq!(px, [9, 8, 7, 255]);
}

#[test]
fn blend_half_alpha_of_black_over_white() {
    let mut px = [0u8; 4];
    Rgba8888::write(&mut px, Rgba8::opaque(255, 255, 255));
    Rgba8888::blend(&mut px, Rgba8::opaque(0, 0, 0), 128);
    assert_eq!(px, [127, 127, 127, 255]);
}
