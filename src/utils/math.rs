use std::f64::consts::{PI, TAU};

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap an angle into `[0, 2π)`.
pub fn wrap_two_pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Convert a simulator yaw (counter-clockwise about +z) into a compass
/// heading (clockwise), in `[0, 2π)`.
pub fn yaw_to_compass_heading(yaw: f64) -> f64 {
    if yaw == 0.0 {
        return 0.0;
    }
    wrap_two_pi(TAU - yaw)
}
