//! User location marker derived from the machine's timezone.
//!
//! The mapping from timezone to coordinates is a static lookup over the
//! common zone names, keyed by the `TZ` environment variable when set.
//! When the zone is unknown the longitude is estimated from the UTC
//! offset (15 degrees per hour) and the marker lands on the equator;
//! approximate by design.

use bevy::prelude::*;

use crate::overlay::markers::lat_lon_to_point;
use crate::render::{EarthGlobe, GLOBE_RADIUS};
use crate::types::SimulationClock;

/// Component marking the user's location marker.
#[derive(Component)]
pub struct UserMarker;

/// Approximate (lat, lon) for well-known timezone names.
fn timezone_coordinates(timezone: &str) -> Option<(f64, f64)> {
    let coords = match timezone {
        // Americas
        "America/New_York" => (40.7128, -74.006),
        "America/Los_Angeles" => (34.0522, -118.2437),
        "America/Chicago" => (41.8781, -87.6298),
        "America/Denver" => (39.7392, -104.9903),
        "America/Toronto" => (43.6532, -79.3832),
        "America/Mexico_City" => (19.4326, -99.1332),
        "America/Sao_Paulo" => (-23.5505, -46.6333),
        "America/Buenos_Aires" => (-34.6118, -58.396),
        // Europe
        "Europe/London" => (51.5074, -0.1278),
        "Europe/Paris" => (48.8566, 2.3522),
        "Europe/Berlin" => (52.52, 13.405),
        "Europe/Rome" => (41.9028, 12.4964),
        "Europe/Madrid" => (40.4168, -3.7038),
        "Europe/Amsterdam" => (52.3676, 4.9041),
        "Europe/Stockholm" => (59.3293, 18.0686),
        "Europe/Moscow" => (55.7558, 37.6176),
        // Asia
        "Asia/Tokyo" => (35.6762, 139.6503),
        "Asia/Shanghai" => (31.2304, 121.4737),
        "Asia/Hong_Kong" => (22.3193, 114.1694),
        "Asia/Singapore" => (1.3521, 103.8198),
        "Asia/Mumbai" | "Asia/Kolkata" => (19.076, 72.8777),
        "Asia/Dubai" => (25.2048, 55.2708),
        "Asia/Seoul" => (37.5665, 126.978),
        "Asia/Bangkok" => (13.7563, 100.5018),
        // Oceania
        "Australia/Sydney" => (-33.8688, 151.2093),
        "Australia/Melbourne" => (-37.8136, 144.9631),
        "Pacific/Auckland" => (-36.8485, 174.7633),
        // Africa
        "Africa/Cairo" => (30.0444, 31.2357),
        "Africa/Johannesburg" => (-26.2041, 28.0473),
        "Africa/Lagos" => (6.5244, 3.3792),
        _ => return None,
    };
    Some(coords)
}

/// Equatorial fallback: estimate longitude from the UTC offset.
fn fallback_coordinates(utc_offset_seconds: i32) -> (f64, f64) {
    let offset_hours = f64::from(utc_offset_seconds) / 3600.0;
    (0.0, offset_hours * 15.0)
}

/// Resolve the user's approximate coordinates.
pub fn user_coordinates(timezone: Option<&str>, utc_offset_seconds: i32) -> (f64, f64) {
    timezone
        .and_then(timezone_coordinates)
        .unwrap_or_else(|| fallback_coordinates(utc_offset_seconds))
}

/// Spawn the green "you are here" marker on the globe.
pub fn spawn_user_marker(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    clock: Res<SimulationClock>,
    globe_query: Query<Entity, With<EarthGlobe>>,
) {
    let Ok(globe) = globe_query.single() else {
        warn!("No globe to attach the user marker to");
        return;
    };

    let timezone = std::env::var("TZ").ok();
    let (lat, lon) = user_coordinates(timezone.as_deref(), clock.utc_offset_seconds);

    let mesh = meshes.add(Sphere::new(0.35));
    let color = Color::srgb(0.0, 1.0, 0.0);
    let material = materials.add(StandardMaterial {
        base_color: color.with_alpha(0.9),
        emissive: color.to_linear() * 0.45,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    let position = lat_lon_to_point(lat, lon, GLOBE_RADIUS + 0.45);

    commands.entity(globe).with_children(|globe| {
        globe.spawn((
            UserMarker,
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(position),
        ));
    });

    info!(
        "User location marker at {:.1}, {:.1} ({})",
        lat,
        lon,
        timezone.as_deref().unwrap_or("offset estimate")
    );
}
