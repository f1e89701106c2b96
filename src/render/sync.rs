//! Transform synchronization between the time model and the scene graph.
//!
//! Orbital positions and the globe yaw are assigned absolutely from the
//! current simulation instant every frame, so they carry no drift. Axial
//! spin is the one deliberate exception: it accumulates per-frame
//! increments.

use bevy::prelude::*;

use crate::camera::UNITS_PER_AU;
use crate::ephemeris::Ephemeris;
use crate::render::bodies::PlanetBody;
use crate::render::globe::EarthGlobe;
use crate::rotation::earth_rotation_angle;
use crate::types::{SimulationClock, now_epoch_seconds};

/// Sync planet render positions from the orbital model.
pub fn sync_planet_positions(
    mut query: Query<(&mut Transform, &PlanetBody)>,
    ephemeris: Res<Ephemeris>,
    clock: Res<SimulationClock>,
) {
    for (mut transform, body) in query.iter_mut() {
        let pos = ephemeris.position_au(body.id, clock.date_seconds);

        // Orbit plane (x, z) maps onto the ground plane; f64 AU to f32
        // render units at the boundary.
        transform.translation.x = (pos.x * UNITS_PER_AU) as f32;
        transform.translation.z = (pos.y * UNITS_PER_AU) as f32;
    }
}

/// Apply per-frame axial spin increments to the planets.
///
/// Retrograde rotators get negative increments straight from their signed
/// rotation periods.
pub fn spin_planets(
    mut query: Query<(&mut Transform, &PlanetBody)>,
    ephemeris: Res<Ephemeris>,
    clock: Res<SimulationClock>,
    time: Res<Time>,
) {
    let rate = clock.effective_days_per_second();
    if rate == 0.0 {
        return;
    }
    for (mut transform, body) in query.iter_mut() {
        let increment = ephemeris.spin_increment(body.id, time.delta_secs_f64(), rate);
        transform.rotate_y(increment as f32);
    }
}

/// Assign the globe yaw from the current time-of-day.
pub fn rotate_earth_globe(
    mut query: Query<&mut Transform, With<EarthGlobe>>,
    clock: Res<SimulationClock>,
) {
    let hours = clock.current_hours(now_epoch_seconds());
    let angle = earth_rotation_angle(hours);
    for mut transform in query.iter_mut() {
        transform.rotation = Quat::from_rotation_y(angle as f32);
    }
}
