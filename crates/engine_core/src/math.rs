//! Angle helpers. Orientation is authored in degrees, trig runs in radians.

/// Wrap an angle in degrees into `[-180, 180)`.
///
/// Sine and cosine are periodic, so wrapping never changes the heading
/// derived from the angle; it only keeps long sessions from accumulating
/// large magnitudes. Angles already in range are returned untouched.
#[inline]
pub fn wrap_degrees(degrees: f32) -> f32 {
    if (-180.0..180.0).contains(&degrees) {
        return degrees;
    }
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round up to the modulus for inputs just below -180.
    if wrapped >= 180.0 {
        -180.0
    } else {
        wrapped
    }
}

/// Clamp a scalar into the closed unit interval.
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
