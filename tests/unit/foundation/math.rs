use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(255, 128), 128);
    // 127/255 is just under one half, 128/255 just over.
    assert_eq!(mul_div255_u16(1, 127), 0);
    assert_eq!(mul_div255_u16(1, 128), 1);
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 128, 255] {
        for y in [0u16, 1, 127, 128, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn blend_channel_endpoints_are_exact() {
    for s in [0u8, 1, 127, 200, 255] {
        for d in [0u8, 3, 128, 255] {
            assert_eq!(blend_channel(s, d, 255), s);
            assert_eq!(blend_channel(s, d, 0), d);
        }
    }
}

#[test]
fn blend_channel_midpoint_rounds_to_nearest() {
    assert_eq!(blend_channel(255, 0, 128), 128);
    assert_eq!(blend_channel(0, 255, 128), 127);
}
