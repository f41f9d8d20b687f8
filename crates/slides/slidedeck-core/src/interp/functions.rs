//! Scalar interpolation helpers:
//! - lerp_f32
//! - power curves (in / out / in-out)
//! - back-out overshoot

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn in_pow(t: f32, p: i32) -> f32 {
    t.powi(p)
}

#[inline]
pub fn out_pow(t: f32, p: i32) -> f32 {
    1.0 - (1.0 - t).powi(p)
}

#[inline]
pub fn in_out_pow(t: f32, p: i32) -> f32 {
    if t < 0.5 {
        in_pow(2.0 * t, p) / 2.0
    } else {
        1.0 - in_pow(2.0 - 2.0 * t, p) / 2.0
    }
}

/// Back-out: cubic approach with an overshoot term.
#[inline]
pub fn back_out(t: f32, overshoot: f32) -> f32 {
    let u = t - 1.0;
    1.0 + (overshoot + 1.0) * u * u * u + overshoot * u * u
}
