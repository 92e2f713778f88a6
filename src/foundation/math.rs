pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// `dst * (1 - a/255) + src * (a/255)`, rounded to nearest.
pub(crate) fn lerp_u8(dst: u8, src: u8, a: u8) -> u8 {
    let a = u32::from(a);
    let inv = 255 - a;
    ((u32::from(dst) * inv + u32::from(src) * a + 127) / 255) as u8
}

/// Round a unit-interval fraction of `max` to the nearest integer.
pub(crate) fn scale_round(max: u32, t: f64) -> u32 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    (f64::from(max) * t).round() as u32
}
