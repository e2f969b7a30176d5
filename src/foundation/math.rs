pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    ((u32::from(x) * u32::from(y) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Linear blend of one 8-bit channel with a single final rounding:
/// `a == 255` yields `src` exactly and `a == 0` yields `dst` exactly.
pub(crate) fn blend_channel(src: u8, dst: u8, a: u8) -> u8 {
    let a = u32::from(a);
    ((u32::from(src) * a + u32::from(dst) * (255 - a) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
