//! Circular-orbit position model.
//!
//! All orbits are treated as circles traversed at uniform angular rate:
//! the true anomaly equals the mean anomaly, with no eccentricity
//! correction. Positions repeat exactly after one orbital period and the
//! orbital radius never varies, which keeps every derived angle a pure
//! function of absolute simulation time.

use bevy::math::DVec2;
use std::f64::consts::TAU;

/// A circular heliocentric orbit in the XZ plane.
///
/// Distances in AU, periods in days. By construction every body sits at
/// angle zero, position `(a, 0)`, at the epoch.
#[derive(Clone, Copy, Debug)]
pub struct CircularOrbit {
    /// Orbital radius (the semi-major axis of the real orbit) in AU.
    pub semi_major_axis_au: f64,
    /// Orbital period in days.
    pub period_days: f64,
}

impl CircularOrbit {
    /// Mean anomaly in radians at the given time, normalized to [0, 2pi).
    pub fn mean_anomaly(&self, days_since_epoch: f64) -> f64 {
        (TAU * days_since_epoch / self.period_days).rem_euclid(TAU)
    }

    /// Heliocentric position in AU at the given time.
    ///
    /// Returned as `(x, z)`: the orbit plane maps onto the renderer's
    /// ground plane.
    pub fn position_au(&self, days_since_epoch: f64) -> DVec2 {
        let anomaly = self.mean_anomaly(days_since_epoch);
        DVec2::new(
            self.semi_major_axis_au * anomaly.cos(),
            self.semi_major_axis_au * anomaly.sin(),
        )
    }
}

/// Axial spin increment in radians for one frame.
///
/// `rotation_period_days` is signed: a negative period encodes retrograde
/// rotation and naturally yields a negative increment. This is a
/// finite-difference integration of angular velocity, so rounding
/// accumulates additively with frame count; orbital positions, by
/// contrast, are always assigned from absolute time.
pub fn spin_increment(
    rotation_period_days: f64,
    delta_seconds: f64,
    days_per_second: f64,
) -> f64 {
    TAU / rotation_period_days * days_per_second * delta_seconds
}
