//! Orbital and rotation constants for the nine classical planets.
//! Semi-major axes and periods from NASA planetary fact sheets, rounded
//! for a visualization (circular-orbit model, 2D ecliptic plane).

use super::circular::CircularOrbit;

/// Identifier for the orbiting bodies in the visualization.
///
/// The Sun is not part of this set: it is stationary at the origin and
/// special-cased wherever positions are queried. Earth appears here so the
/// solar-system view can orbit it, and is additionally special-cased as
/// the rotating reference body of the earth view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanetId {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl PlanetId {
    /// All planets in orbital order.
    pub const ALL: &'static [PlanetId] = &[
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Earth,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
        PlanetId::Pluto,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            PlanetId::Mercury => "Mercury",
            PlanetId::Venus => "Venus",
            PlanetId::Earth => "Earth",
            PlanetId::Mars => "Mars",
            PlanetId::Jupiter => "Jupiter",
            PlanetId::Saturn => "Saturn",
            PlanetId::Uranus => "Uranus",
            PlanetId::Neptune => "Neptune",
            PlanetId::Pluto => "Pluto",
        }
    }
}

/// Static data for a planet. Constants are fixed at initialization; only
/// the derived position and rotation angles change per frame.
#[derive(Clone, Debug)]
pub struct PlanetData {
    pub id: PlanetId,
    /// Heliocentric circular orbit (AU, days).
    pub orbit: CircularOrbit,
    /// Sidereal rotation period in days; negative means retrograde.
    pub rotation_period_days: f64,
    /// Sphere radius in scene units for rendering (not to physical scale).
    pub visual_radius: f32,
}

/// Get orbital and rotation data for a planet.
pub fn get_planet_data(id: PlanetId) -> PlanetData {
    match id {
        PlanetId::Mercury => PlanetData {
            id,
            orbit: CircularOrbit {
                semi_major_axis_au: 0.387,
                period_days: 87.969,
            },
            rotation_period_days: 58.646,
            visual_radius: 0.8,
        },
        PlanetId::Venus => PlanetData {
            id,
            orbit: CircularOrbit {
                semi_major_axis_au: 0.723,
                period_days: 224.701,
            },
            // Retrograde: Venus spins backwards, very slowly.
            rotation_period_days: -243.025,
            visual_radius: 1.45,
        },
        PlanetId::Earth => PlanetData {
            id,
            orbit: CircularOrbit {
                semi_major_axis_au: 1.0,
                period_days: 365.256,
            },
            rotation_period_days: 0.99727,
            visual_radius: 1.5,
        },
        PlanetId::Mars => PlanetData {
            id,
            orbit: CircularOrbit {
                semi_major_axis_au: 1.524,
                period_days: 686.98,
            },
            rotation_period_days: 1.02596,
            visual_radius: 1.0,
        },
        PlanetId::Jupiter => PlanetData {
            id,
            orbit: CircularOrbit {
                semi_major_axis_au: 5.203,
                period_days: 4332.59,
            },
            rotation_period_days: 0.41354,
            visual_radius: 3.0,
        },
        PlanetId::Saturn => PlanetData {
            id,
            orbit: CircularOrbit {
                semi_major_axis_au: 9.537,
                period_days: 10759.22,
            },
            rotation_period_days: 0.44401,
            visual_radius: 2.4,
        },
        PlanetId::Uranus => PlanetData {
            id,
            orbit: CircularOrbit {
                semi_major_axis_au: 19.191,
                period_days: 30688.5,
            },
            // Retrograde (strictly a ~98 degree axial tilt, modeled as
            // backwards spin in this single-axis visualization).
            rotation_period_days: -0.71833,
            visual_radius: 1.75,
        },
        PlanetId::Neptune => PlanetData {
            id,
            orbit: CircularOrbit {
                semi_major_axis_au: 30.069,
                period_days: 60182.0,
            },
            rotation_period_days: 0.67125,
            visual_radius: 1.75,
        },
        PlanetId::Pluto => PlanetData {
            id,
            orbit: CircularOrbit {
                semi_major_axis_au: 39.482,
                period_days: 90560.0,
            },
            // Retrograde.
            rotation_period_days: -6.38723,
            visual_radius: 0.7,
        },
    }
}

/// Get data for all planets.
pub fn all_planets() -> Vec<PlanetData> {
    PlanetId::ALL.iter().map(|&id| get_planet_data(id)).collect()
}
