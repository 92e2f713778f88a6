use crate::foundation::{
    core::{Canvas, Rgba8},
    error::MockshotResult,
};

/// Share of the blend contributed by the horizontal position.
const HORIZONTAL_BIAS: f64 = 0.35;
/// Share of the blend contributed by the vertical position.
const VERTICAL_WEIGHT: f64 = 0.65;

/// Blend factor `u` for pixel `(x, y)` of a `w`×`h` gradient.
///
/// `u` is 0 at the top-left corner, reaches 1 at the bottom-right corner (for `w, h >= 2`), and
/// never decreases as `x` or `y` grows.
pub fn gradient_mix(x: u32, y: u32, w: u32, h: u32) -> f64 {
    let t = f64::from(y) / f64::from(h.saturating_sub(1).max(1));
    let s = (f64::from(x) / f64::from(w.saturating_sub(1).max(1))) * HORIZONTAL_BIAS;
    (t * VERTICAL_WEIGHT + s).min(1.0)
}

/// Diagonal two-color gradient from `c1` (top-left) to `c2` (bottom-right).
///
/// Each channel is `floor(c1 * (1 - u) + c2 * u)`. The result is always opaque; alpha on the
/// inputs is ignored.
pub fn gradient(w: u32, h: u32, c1: Rgba8, c2: Rgba8) -> MockshotResult<Canvas> {
    Canvas::from_fn(w, h, |x, y| {
        let u = gradient_mix(x, y, w, h);
        let mix = |a: u8, b: u8| (f64::from(a) * (1.0 - u) + f64::from(b) * u).floor() as u8;
        Rgba8::rgb(mix(c1.r, c2.r), mix(c1.g, c2.g), mix(c1.b, c2.b))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
