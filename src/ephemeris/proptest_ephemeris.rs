//! Property-based tests for the orbital model using proptest.
//!
//! These tests verify that the circular-orbit computations maintain
//! expected properties across a wide range of inputs.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::circular::{CircularOrbit, spin_increment};
use crate::types::SECONDS_PER_DAY;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The orbital radius never varies: |position(t)| == a for all t.
    #[test]
    fn prop_radius_is_constant(
        semi_major_axis_au in 0.3f64..50.0,
        period_days in 80.0f64..100_000.0,
        time_days in -50_000.0f64..50_000.0,
    ) {
        let orbit = CircularOrbit { semi_major_axis_au, period_days };
        let r = orbit.position_au(time_days).length();
        let error = (r - semi_major_axis_au).abs() / semi_major_axis_au;
        prop_assert!(
            error < 1e-9,
            "radius drifted: a={}, |pos|={}, t={} days",
            semi_major_axis_au, r, time_days
        );
    }

    /// The mean anomaly is always normalized into [0, 2pi).
    #[test]
    fn prop_mean_anomaly_normalized(
        period_days in 80.0f64..100_000.0,
        time_days in -50_000.0f64..50_000.0,
    ) {
        let orbit = CircularOrbit { semi_major_axis_au: 1.0, period_days };
        let anomaly = orbit.mean_anomaly(time_days);
        prop_assert!(
            (0.0..TAU).contains(&anomaly),
            "anomaly {} out of range for t={} days, P={} days",
            anomaly, time_days, period_days
        );
    }

    /// Position returns to start after one period, from any starting time.
    #[test]
    fn prop_position_periodic(
        semi_major_axis_au in 0.3f64..50.0,
        period_days in 80.0f64..100_000.0,
        start_days in 0.0f64..36_500.0,
    ) {
        let orbit = CircularOrbit { semi_major_axis_au, period_days };
        let a = orbit.position_au(start_days);
        let b = orbit.position_au(start_days + period_days);
        let distance = (a - b).length();
        prop_assert!(
            distance < 1e-6 * semi_major_axis_au,
            "position not periodic: drift {} AU after one period",
            distance
        );
    }

    /// Position changes smoothly: adjacent hourly samples stay close.
    #[test]
    fn prop_position_continuity(
        period_days in 80.0f64..100_000.0,
        start_days in 0.0f64..36_500.0,
    ) {
        let orbit = CircularOrbit { semi_major_axis_au: 1.0, period_days };
        let dt_days = 3600.0 / SECONDS_PER_DAY;
        let a = orbit.position_au(start_days);
        let b = orbit.position_au(start_days + dt_days);
        // Chord length is bounded by arc length = r * omega * dt.
        let max_step = TAU / period_days * dt_days * 1.01;
        prop_assert!(
            (a - b).length() <= max_step,
            "position jumped {} AU in one hour (limit {})",
            (a - b).length(), max_step
        );
    }

    /// Spin increments scale linearly and carry the sign of the period.
    #[test]
    fn prop_spin_increment_linear_and_signed(
        rotation_period_days in prop::sample::select(vec![-243.025, -0.71833, 0.41354, 0.99727, 58.646]),
        delta_seconds in 0.001f64..0.1,
        days_per_second in 0.01f64..10.0,
    ) {
        let one = spin_increment(rotation_period_days, delta_seconds, days_per_second);
        let double = spin_increment(rotation_period_days, delta_seconds * 2.0, days_per_second);
        prop_assert!((double - 2.0 * one).abs() < 1e-12);
        prop_assert_eq!(
            one.is_sign_negative(),
            rotation_period_days.is_sign_negative(),
            "increment sign must match rotation direction"
        );
    }
}

#[cfg(test)]
mod deterministic_tests {
    use crate::ephemeris::data::all_planets;

    #[test]
    fn test_all_planet_constants_usable() {
        for planet in all_planets() {
            assert!(
                planet.orbit.period_days > 0.0,
                "{:?} has non-positive orbital period",
                planet.id
            );
            assert!(
                planet.orbit.semi_major_axis_au > 0.0,
                "{:?} has non-positive semi-major axis",
                planet.id
            );
            assert!(
                planet.rotation_period_days != 0.0,
                "{:?} has zero rotation period",
                planet.id
            );
            assert!(planet.visual_radius > 0.0);
        }
    }
}
