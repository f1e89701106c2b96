//! Ephemeris module for computing planet positions and spin rates.
//!
//! All positions come from the analytic circular-orbit model: every query
//! is a pure function of absolute simulation time, so there is no
//! per-frame drift to accumulate.
//!
//! Coordinate frame:
//! - 2D heliocentric (Sun at origin), orbit plane mapped to the renderer's
//!   XZ ground plane.

pub mod circular;
pub mod data;

#[cfg(test)]
mod proptest_ephemeris;

pub use circular::{CircularOrbit, spin_increment};
pub use data::{PlanetData, PlanetId, all_planets, get_planet_data};

use bevy::math::DVec2;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::types::SECONDS_PER_DAY;

/// Configuration error in the planet constant table.
///
/// The table is fixed at compile time, so any of these is fatal at
/// startup rather than a per-frame condition.
#[derive(thiserror::Error, Debug)]
pub enum EphemerisError {
    #[error("{0:?}: orbital period must be positive and finite, got {1}")]
    InvalidOrbitalPeriod(PlanetId, f64),

    #[error("{0:?}: rotation period must be non-zero and finite, got {1}")]
    InvalidRotationPeriod(PlanetId, f64),

    #[error("{0:?}: semi-major axis must be positive and finite, got {1}")]
    InvalidSemiMajorAxis(PlanetId, f64),
}

/// Resource providing orbital state for all planets.
#[derive(Resource)]
pub struct Ephemeris {
    /// Mapping from entity to planet ID
    entity_to_id: HashMap<Entity, PlanetId>,
    /// Mapping from planet ID to entity
    id_to_entity: HashMap<PlanetId, Entity>,
    /// Cached constant table
    body_data: HashMap<PlanetId, PlanetData>,
}

impl Ephemeris {
    /// Create a new ephemeris with the constant table loaded and checked.
    ///
    /// Divisions by orbital and rotation periods happen every frame, so a
    /// zero or non-finite period in the table is rejected here, once.
    pub fn new() -> Result<Self, EphemerisError> {
        let mut body_data = HashMap::new();
        for data in all_planets() {
            validate(&data)?;
            body_data.insert(data.id, data);
        }

        Ok(Self {
            entity_to_id: HashMap::new(),
            id_to_entity: HashMap::new(),
            body_data,
        })
    }

    /// Register an entity as a planet.
    pub fn register(&mut self, entity: Entity, id: PlanetId) {
        self.entity_to_id.insert(entity, id);
        self.id_to_entity.insert(id, entity);
    }

    /// Get the entity for a planet ID.
    pub fn get_entity(&self, id: PlanetId) -> Option<Entity> {
        self.id_to_entity.get(&id).copied()
    }

    /// Get the planet ID for an entity.
    pub fn get_id(&self, entity: Entity) -> Option<PlanetId> {
        self.entity_to_id.get(&entity).copied()
    }

    /// Get the constant data for a planet.
    pub fn get_data(&self, id: PlanetId) -> &PlanetData {
        // Every PlanetId is inserted in `new`, so the lookup cannot miss.
        &self.body_data[&id]
    }

    /// Heliocentric position in AU at the given simulation instant.
    ///
    /// Returned as `(x, z)` components of the renderer's ground plane.
    pub fn position_au(&self, id: PlanetId, date_seconds: f64) -> DVec2 {
        self.get_data(id)
            .orbit
            .position_au(date_seconds / SECONDS_PER_DAY)
    }

    /// Orbital angle (mean anomaly) in radians at the given instant.
    pub fn orbital_angle(&self, id: PlanetId, date_seconds: f64) -> f64 {
        self.get_data(id)
            .orbit
            .mean_anomaly(date_seconds / SECONDS_PER_DAY)
    }

    /// Axial spin increment in radians for one frame of `delta_seconds`
    /// wall time at `days_per_second` simulation rate. Negative for
    /// retrograde rotators.
    pub fn spin_increment(&self, id: PlanetId, delta_seconds: f64, days_per_second: f64) -> f64 {
        spin_increment(
            self.get_data(id).rotation_period_days,
            delta_seconds,
            days_per_second,
        )
    }

    /// All registered entity-ID pairs.
    pub fn all_registered(&self) -> impl Iterator<Item = (Entity, PlanetId)> + '_ {
        self.entity_to_id.iter().map(|(&e, &id)| (e, id))
    }
}

fn validate(data: &PlanetData) -> Result<(), EphemerisError> {
    let orbit = &data.orbit;
    if !orbit.period_days.is_finite() || orbit.period_days <= 0.0 {
        return Err(EphemerisError::InvalidOrbitalPeriod(
            data.id,
            orbit.period_days,
        ));
    }
    if !orbit.semi_major_axis_au.is_finite() || orbit.semi_major_axis_au <= 0.0 {
        return Err(EphemerisError::InvalidSemiMajorAxis(
            data.id,
            orbit.semi_major_axis_au,
        ));
    }
    if !data.rotation_period_days.is_finite() || data.rotation_period_days == 0.0 {
        return Err(EphemerisError::InvalidRotationPeriod(
            data.id,
            data.rotation_period_days,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ephemeris_creation() {
        let eph = Ephemeris::new().unwrap();
        assert!(eph.body_data.contains_key(&PlanetId::Mercury));
        assert!(eph.body_data.contains_key(&PlanetId::Earth));
        assert!(eph.body_data.contains_key(&PlanetId::Pluto));
    }

    #[test]
    fn test_all_planets_aligned_at_epoch() {
        // A property of the circular model, not of the real sky: at the
        // epoch every mean anomaly is zero, so every planet sits at (a, 0).
        let eph = Ephemeris::new().unwrap();
        for &id in PlanetId::ALL {
            let pos = eph.position_au(id, 0.0);
            let a = eph.get_data(id).orbit.semi_major_axis_au;
            assert_relative_eq!(pos.x, a, epsilon = 1e-12);
            assert_relative_eq!(pos.y, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_earth_opposite_after_half_year() {
        let eph = Ephemeris::new().unwrap();
        let pos_0 = eph.position_au(PlanetId::Earth, 0.0);
        let half_year = 365.256 / 2.0 * SECONDS_PER_DAY;
        let pos_half = eph.position_au(PlanetId::Earth, half_year);
        let dot = pos_0.normalize().dot(pos_half.normalize());
        assert!(
            dot < -0.999,
            "Earth after half a period should be on the opposite side, dot = {}",
            dot
        );
    }

    #[test]
    fn test_positions_periodic_per_body() {
        let eph = Ephemeris::new().unwrap();
        for &id in PlanetId::ALL {
            let period_seconds = eph.get_data(id).orbit.period_days * SECONDS_PER_DAY;
            let a = eph.position_au(id, 123.0 * SECONDS_PER_DAY);
            let b = eph.position_au(id, 123.0 * SECONDS_PER_DAY + period_seconds);
            assert_relative_eq!(a.x, b.x, epsilon = 1e-6);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_spin_increment_signs() {
        let eph = Ephemeris::new().unwrap();
        assert!(eph.spin_increment(PlanetId::Earth, 1.0, 1.0) > 0.0);
        assert!(eph.spin_increment(PlanetId::Venus, 1.0, 1.0) < 0.0);
        assert!(eph.spin_increment(PlanetId::Uranus, 1.0, 1.0) < 0.0);
    }

    #[test]
    fn test_entity_registration() {
        let mut eph = Ephemeris::new().unwrap();

        // Mint a real entity id (in real usage these come from spawning)
        let mut world = World::new();
        let entity = world.spawn_empty().id();

        eph.register(entity, PlanetId::Earth);

        assert_eq!(eph.get_id(entity), Some(PlanetId::Earth));
        assert_eq!(eph.get_entity(PlanetId::Earth), Some(entity));
    }

    #[test]
    fn test_validation_rejects_zero_periods() {
        let mut data = get_planet_data(PlanetId::Mars);
        data.orbit.period_days = 0.0;
        assert!(matches!(
            validate(&data),
            Err(EphemerisError::InvalidOrbitalPeriod(PlanetId::Mars, _))
        ));

        let mut data = get_planet_data(PlanetId::Mars);
        data.rotation_period_days = 0.0;
        assert!(matches!(
            validate(&data),
            Err(EphemerisError::InvalidRotationPeriod(PlanetId::Mars, _))
        ));

        let mut data = get_planet_data(PlanetId::Mars);
        data.orbit.semi_major_axis_au = f64::NAN;
        assert!(matches!(
            validate(&data),
            Err(EphemerisError::InvalidSemiMajorAxis(PlanetId::Mars, _))
        ));
    }
}
