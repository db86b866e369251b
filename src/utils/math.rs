/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// `f32` twin of [`wrap_degrees`] for render-side angles.
#[inline]
pub fn wrap_degrees_f32(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Signed smallest difference `a - b` between two headings, in `(-180, 180]`.
pub fn angle_difference_deg(a: f64, b: f64) -> f64 {
    let diff = wrap_degrees(a - b);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Planar unit heading for a yaw in degrees. Yaw 0 points along +Z, yaw 90 along +X.
#[inline]
pub fn heading_vector(yaw_deg: f64) -> (f64, f64) {
    let yaw = yaw_deg.to_radians();
    (yaw.sin(), yaw.cos())
}

/// Bearing in degrees of the planar offset `(dx, dz)` using the same convention
/// as [`heading_vector`].
#[inline]
pub fn bearing_deg(dx: f64, dz: f64) -> f64 {
    wrap_degrees(dx.atan2(dz).to_degrees())
}
