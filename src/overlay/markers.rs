//! Surface markers for natural events.
//!
//! Markers are children of the rotating globe group, so they ride along
//! with the day/night rotation, and pulse gently so they read as live
//! data rather than terrain.

use bevy::prelude::*;

use crate::overlay::events::{EventCategory, bundled_events};
use crate::render::{EarthGlobe, GLOBE_RADIUS};

/// Component marking a natural-event marker.
#[derive(Component)]
pub struct EventMarker {
    pub category: EventCategory,
    /// Base sphere radius before the pulse scale.
    pub base_size: f32,
    /// Per-marker pulse phase offset, so markers don't throb in unison.
    pub phase: f32,
}

/// Active category filter: `None` shows every marker.
#[derive(Resource, Default, Clone, Copy, PartialEq, Eq)]
pub struct EventFilter(pub Option<EventCategory>);

/// Markers sit just above the surface.
const MARKER_ALTITUDE: f32 = 0.5;

/// Convert latitude/longitude (degrees) to a point on a sphere of the
/// given radius, in the globe's local frame.
pub fn lat_lon_to_point(lat: f64, lon: f64, radius: f32) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();

    let x = -(f64::from(radius) * phi.sin() * theta.cos());
    let z = f64::from(radius) * phi.sin() * theta.sin();
    let y = f64::from(radius) * phi.cos();

    Vec3::new(x as f32, y as f32, z as f32)
}

/// Spawn one marker per bundled event, parented to the globe group.
pub fn spawn_event_markers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    globe_query: Query<Entity, With<EarthGlobe>>,
) {
    let Ok(globe) = globe_query.single() else {
        warn!("No globe to attach event markers to");
        return;
    };

    let mut count = 0;
    commands.entity(globe).with_children(|globe| {
        for (index, event) in bundled_events().iter().enumerate() {
            let category = event.category();
            let base_size = category.marker_size();

            let mesh = meshes.add(Sphere::new(base_size));
            let material = materials.add(StandardMaterial {
                base_color: category.color().with_alpha(0.9),
                emissive: category.color().to_linear() * 0.3,
                alpha_mode: AlphaMode::Blend,
                ..default()
            });

            let position =
                lat_lon_to_point(event.lat, event.lon, GLOBE_RADIUS + MARKER_ALTITUDE);

            globe.spawn((
                EventMarker {
                    category,
                    base_size,
                    // Deterministic phase spread; no randomness needed.
                    phase: index as f32 * 0.7,
                },
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::from_translation(position),
            ));
            count += 1;
        }
    });

    info!("Created {count} event markers on the globe");
}

/// Pulse marker scale over wall time.
pub fn animate_event_markers(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &EventMarker)>,
) {
    let t = time.elapsed_secs();
    for (mut transform, marker) in query.iter_mut() {
        let pulse = 1.0 + 0.4 * (t * 2.0 + marker.phase).sin();
        transform.scale = Vec3::splat(pulse.max(0.2));
    }
}

/// Show or hide markers when the category filter changes.
pub fn apply_event_filter(
    filter: Res<EventFilter>,
    mut query: Query<(&mut Visibility, &EventMarker)>,
) {
    if !filter.is_changed() {
        return;
    }
    for (mut visibility, marker) in query.iter_mut() {
        *visibility = match filter.0 {
            None => Visibility::Inherited,
            Some(category) if category == marker.category => Visibility::Inherited,
            Some(_) => Visibility::Hidden,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_poles_and_equator() {
        let north = lat_lon_to_point(90.0, 0.0, 10.0);
        assert_relative_eq!(north.y, 10.0, epsilon = 1e-5);
        assert_relative_eq!(north.x, 0.0, epsilon = 1e-5);

        let south = lat_lon_to_point(-90.0, 0.0, 10.0);
        assert_relative_eq!(south.y, -10.0, epsilon = 1e-5);

        let equator = lat_lon_to_point(0.0, 45.0, 10.0);
        assert_relative_eq!(equator.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_points_lie_on_the_sphere() {
        for (lat, lon) in [(38.5, -121.5), (-37.0, 145.0), (64.0, -19.0), (0.0, 0.0)] {
            let p = lat_lon_to_point(lat, lon, 10.5);
            assert_relative_eq!(p.length(), 10.5, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_antipodal_longitudes_mirror() {
        let a = lat_lon_to_point(0.0, 90.0, 10.0);
        let b = lat_lon_to_point(0.0, -90.0, 10.0);
        assert_relative_eq!(a.x, -b.x, epsilon = 1e-4);
        assert_relative_eq!(a.z, -b.z, epsilon = 1e-4);
    }
}
