//! Lighting derivation: time-of-day to sun light and atmosphere parameters.

use bevy::prelude::*;

use crate::rotation::normalize_hours;

/// Which lighting model drives the sun light and atmosphere.
///
/// `Constant` is the canonical default: day/night contrast comes entirely
/// from planet rotation, and the light itself never changes.
/// `TimeReactive` additionally dims and warms the light toward midnight.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightingMode {
    /// Fixed daylight values, independent of time.
    #[default]
    Constant,
    /// Intensity, color temperature and atmosphere follow time-of-day.
    TimeReactive,
}

impl LightingMode {
    /// The other mode, for toggle controls.
    pub fn toggled(self) -> Self {
        match self {
            LightingMode::Constant => LightingMode::TimeReactive,
            LightingMode::TimeReactive => LightingMode::Constant,
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            LightingMode::Constant => "Constant",
            LightingMode::TimeReactive => "Time-reactive",
        }
    }
}

/// Derived per-frame lighting values, recomputed each frame and applied to
/// the scene by the renderer. No independent identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightingParameters {
    /// Sun light intensity multiplier.
    pub intensity: f32,
    /// Sun light color as linear RGB components.
    pub color: Vec3,
    /// Atmosphere rim-glow falloff coefficient (larger = tighter, dimmer).
    pub atmosphere_coefficient: f32,
    /// Opacity of the glow halo around the sun.
    pub glow_opacity: f32,
}

/// Fixed daylight values used by [`LightingMode::Constant`].
pub const CONSTANT_LIGHTING: LightingParameters = LightingParameters {
    intensity: 1.5,
    color: Vec3::ONE,
    atmosphere_coefficient: 0.8,
    glow_opacity: 0.3,
};

/// Derive lighting parameters for the given mode and time-of-day.
///
/// The time-reactive curve peaks at noon and bottoms out at midnight:
/// `time_phase = |hours - 12| / 12` is 0 at noon and 1 at midnight, then
/// intensity, color temperature and atmosphere follow linear or quadratic
/// ramps of that phase.
pub fn derive_lighting(mode: LightingMode, hours: f64) -> LightingParameters {
    match mode {
        LightingMode::Constant => CONSTANT_LIGHTING,
        LightingMode::TimeReactive => {
            let hours = normalize_hours(hours);
            let time_phase = ((hours - 12.0).abs() / 12.0) as f32;

            let intensity = (1.5 - time_phase * 1.4).max(0.1);
            let color_temp = 1.0 - time_phase * time_phase * 0.3;
            let color = Vec3::new(1.0, color_temp, color_temp * 0.8);
            let atmosphere_coefficient = 0.6 + time_phase * 0.4;
            let glow_opacity = 0.2 + (1.0 - time_phase) * 0.3;

            LightingParameters {
                intensity,
                color,
                atmosphere_coefficient,
                glow_opacity,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_mode_ignores_time() {
        for h in [0.0, 3.7, 12.0, 18.0, 23.5] {
            assert_eq!(derive_lighting(LightingMode::Constant, h), CONSTANT_LIGHTING);
        }
    }

    #[test]
    fn test_time_reactive_noon() {
        let p = derive_lighting(LightingMode::TimeReactive, 12.0);
        assert_relative_eq!(p.intensity, 1.5);
        assert_relative_eq!(p.color.x, 1.0);
        assert_relative_eq!(p.color.y, 1.0);
        assert_relative_eq!(p.color.z, 0.8);
        assert_relative_eq!(p.atmosphere_coefficient, 0.6);
        assert_relative_eq!(p.glow_opacity, 0.5);
    }

    #[test]
    fn test_time_reactive_midnight() {
        let p = derive_lighting(LightingMode::TimeReactive, 0.0);
        assert_relative_eq!(p.intensity, 0.1, epsilon = 1e-6);
        assert_relative_eq!(p.color.y, 0.7, epsilon = 1e-6);
        assert_relative_eq!(p.color.z, 0.56, epsilon = 1e-6);
        assert_relative_eq!(p.atmosphere_coefficient, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.glow_opacity, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_time_reactive_is_symmetric_around_noon() {
        let morning = derive_lighting(LightingMode::TimeReactive, 9.0);
        let evening = derive_lighting(LightingMode::TimeReactive, 15.0);
        assert_eq!(morning, evening);
    }

    #[test]
    fn test_intensity_floor_near_midnight() {
        // The 0.1 floor kicks in for the darkest hours.
        let p = derive_lighting(LightingMode::TimeReactive, 23.9);
        assert!(p.intensity >= 0.1);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(LightingMode::Constant.toggled(), LightingMode::TimeReactive);
        assert_eq!(
            LightingMode::TimeReactive.toggled(),
            LightingMode::Constant
        );
    }
}
