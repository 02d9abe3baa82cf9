/// Clamp scalar value to normalized range `[0, 1]`.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linearly remap `x` from `from` onto `to`, clamping to the endpoints of `to`.
///
/// A zero-width (or inverted) `from` range behaves as a step at `from.1`.
pub fn remap_clamped(x: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let (a, b) = from;
    let (c, d) = to;
    if b - a <= 0.0 {
        return if x >= b { d } else { c };
    }
    if x <= a {
        return c;
    }
    if x >= b {
        return d;
    }
    lerp(c, d, (x - a) / (b - a))
}

#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
