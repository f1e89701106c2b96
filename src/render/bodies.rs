//! Solar-system view: spawning of the sun and the nine planets.

use bevy::prelude::*;

use crate::camera::UNITS_PER_AU;
use crate::ephemeris::{Ephemeris, PlanetId, all_planets};
use crate::types::SimulationClock;

/// Root entity of the solar-system view; visibility switches with the
/// active view.
#[derive(Component)]
pub struct SolarSystemRoot;

/// Component marking an entity as a renderable planet.
#[derive(Component)]
pub struct PlanetBody {
    /// Identifier for this planet.
    pub id: PlanetId,
    /// Human-readable name.
    pub name: String,
}

/// Visual radius of the sun sphere in scene units.
const SUN_VISUAL_RADIUS: f32 = 4.0;

/// Plugin providing solar-system spawning functionality.
pub struct SolarSystemPlugin;

impl Plugin for SolarSystemPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_solar_system);
    }
}

/// Get the approximate visual color for a planet.
pub fn planet_color(id: PlanetId) -> Color {
    match id {
        PlanetId::Mercury => Color::srgb(0.6, 0.6, 0.6),
        PlanetId::Venus => Color::srgb(0.9, 0.85, 0.7),
        PlanetId::Earth => Color::srgb(0.2, 0.5, 0.8),
        PlanetId::Mars => Color::srgb(0.8, 0.4, 0.2),
        PlanetId::Jupiter => Color::srgb(0.8, 0.7, 0.6),
        PlanetId::Saturn => Color::srgb(0.9, 0.85, 0.6),
        PlanetId::Uranus => Color::srgb(0.6, 0.8, 0.9),
        PlanetId::Neptune => Color::srgb(0.3, 0.5, 0.9),
        PlanetId::Pluto => Color::srgb(0.7, 0.65, 0.6),
    }
}

/// Ring proportions (radius multiplier, tube multiplier) for the ringed
/// planets.
fn ring_proportions(id: PlanetId) -> Option<(f32, f32)> {
    match id {
        PlanetId::Saturn => Some((1.7, 0.1)),
        PlanetId::Uranus => Some((1.5, 0.04)),
        _ => None,
    }
}

/// Spawn the sun and all planets of the solar-system view.
fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut ephemeris: ResMut<Ephemeris>,
    clock: Res<SimulationClock>,
) {
    let sun_color = Color::srgb(1.0, 0.95, 0.4);
    let sun_mesh = meshes.add(Sphere::new(SUN_VISUAL_RADIUS));
    let sun_material = materials.add(StandardMaterial {
        base_color: sun_color,
        emissive: sun_color.to_linear() * 2.0,
        ..default()
    });

    let mut registrations: Vec<(Entity, PlanetId)> = Vec::new();

    commands
        .spawn((SolarSystemRoot, Transform::default(), Visibility::Hidden))
        .with_children(|root| {
            // Stationary sun at the origin, lighting the whole system.
            root.spawn((
                Mesh3d(sun_mesh),
                MeshMaterial3d(sun_material),
                Transform::default(),
            ));
            root.spawn((
                PointLight {
                    color: Color::WHITE,
                    intensity: 5e9,
                    range: 1200.0,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::default(),
            ));

            for planet in all_planets() {
                let id = planet.id;
                let pos = planet.orbit.position_au(clock.days_since_epoch());
                let translation = Vec3::new(
                    (pos.x * UNITS_PER_AU) as f32,
                    0.0,
                    (pos.y * UNITS_PER_AU) as f32,
                );

                let mesh = meshes.add(Sphere::new(planet.visual_radius));
                let material = materials.add(StandardMaterial {
                    base_color: planet_color(id),
                    ..default()
                });

                let mut planet_commands = root.spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(material),
                    Transform::from_translation(translation),
                    PlanetBody {
                        id,
                        name: id.name().to_string(),
                    },
                ));

                if let Some((ring_scale, tube_scale)) = ring_proportions(id) {
                    let ring_mesh = meshes.add(Torus {
                        minor_radius: planet.visual_radius * tube_scale,
                        major_radius: planet.visual_radius * ring_scale,
                    });
                    let ring_material = materials.add(StandardMaterial {
                        base_color: Color::srgba(0.85, 0.8, 0.65, 0.8),
                        alpha_mode: AlphaMode::Blend,
                        ..default()
                    });
                    planet_commands.with_children(|planet_entity| {
                        planet_entity.spawn((
                            Mesh3d(ring_mesh),
                            MeshMaterial3d(ring_material),
                            Transform::default(),
                        ));
                    });
                }

                registrations.push((planet_commands.id(), id));
            }
        });

    // Register entities for later position lookups.
    for (entity, id) in registrations {
        ephemeris.register(entity, id);
    }

    info!("Spawned the sun and {} planets", PlanetId::ALL.len());
}
