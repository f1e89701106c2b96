//! Earth rotation model: time-of-day to yaw angle.
//!
//! The sun is kept stationary in world space (on the +X axis) and realism
//! comes from rotating the planet instead, so this mapping is the entire
//! day/night geometry: local solar noon must face the sun.

use crate::types::DEG_TO_RAD;

/// Earth rotates 360 degrees in 24 hours.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Normalize an hour value into [0, 24).
///
/// Guards against accumulated floating-point drift producing values like
/// 24.0001 or -0.0003 before they reach the angle formulas.
pub fn normalize_hours(hours: f64) -> f64 {
    hours.rem_euclid(24.0)
}

/// Earth's Y-axis rotation angle in radians for a given time-of-day.
///
/// Zero at 12:00 (noon faces the sun on +X) and pi at 00:00 (the far side
/// of the planet faces the sun). Total and pure: any finite input maps to
/// an angle.
pub fn earth_rotation_angle(hours: f64) -> f64 {
    let hours = normalize_hours(hours);
    let degrees = (12.0 - hours) * DEGREES_PER_HOUR;
    degrees * DEG_TO_RAD
}
