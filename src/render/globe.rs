//! Earth view: the rotating globe, its atmosphere shell, and the
//! stationary sun.
//!
//! The sun never moves in this view. Day and night come from yawing the
//! globe group so that local solar noon faces the sun on the +X axis;
//! markers parented to the group rotate with the planet.

use bevy::prelude::*;

/// Root entity of the earth view; visibility switches with the active view.
#[derive(Component)]
pub struct EarthViewRoot;

/// The rotating globe group. Earth mesh, atmosphere and surface markers
/// all hang off this entity; its yaw is assigned absolutely every frame.
#[derive(Component)]
pub struct EarthGlobe;

/// Translucent shell around the globe standing in for atmospheric glow.
#[derive(Component)]
pub struct AtmosphereShell;

/// Halo sphere around the sun disc.
#[derive(Component)]
pub struct SunGlow;

/// The directional sun light of the earth view.
#[derive(Component)]
pub struct SunLight;

/// Globe radius in scene units. Marker placement builds on this.
pub const GLOBE_RADIUS: f32 = 10.0;

/// Atmosphere shell radius, slightly above the surface.
pub const ATMOSPHERE_RADIUS: f32 = 10.5;

/// Fixed sun position on the +X axis.
pub const SUN_POSITION: Vec3 = Vec3::new(100.0, 0.0, 0.0);

/// Sun disc and halo radii.
const SUN_RADIUS: f32 = 2.0;
const GLOW_RADIUS: f32 = 3.0;

/// Illuminance (lux) corresponding to a lighting intensity of 1.0.
pub const LUX_PER_INTENSITY: f32 = 10_000.0;

/// Plugin providing earth-view spawning functionality.
pub struct EarthViewPlugin;

impl Plugin for EarthViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_earth_view);
    }
}

/// Spawn the globe, atmosphere, sun and sun light.
fn spawn_earth_view(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let earth_mesh = meshes.add(Sphere::new(GLOBE_RADIUS));
    let earth_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.5, 0.8),
        perceptual_roughness: 0.7,
        ..default()
    });

    let atmosphere_mesh = meshes.add(Sphere::new(ATMOSPHERE_RADIUS));
    let atmosphere_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.0, 0.67, 1.0, 0.35),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let sun_color = Color::srgb(1.0, 1.0, 0.67);
    let sun_mesh = meshes.add(Sphere::new(SUN_RADIUS));
    let sun_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: sun_color.to_linear() * 4.0,
        ..default()
    });

    let glow_mesh = meshes.add(Sphere::new(GLOW_RADIUS));
    let glow_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 0.67, 0.3),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    commands
        .spawn((EarthViewRoot, Transform::default(), Visibility::Inherited))
        .with_children(|root| {
            // Rotating globe group: the earth mesh and atmosphere here,
            // surface markers attached later by the overlay.
            root.spawn((EarthGlobe, Transform::default(), Visibility::Inherited))
                .with_children(|globe| {
                    globe.spawn((
                        Mesh3d(earth_mesh),
                        MeshMaterial3d(earth_material),
                        Transform::default(),
                    ));
                    globe.spawn((
                        AtmosphereShell,
                        Mesh3d(atmosphere_mesh),
                        MeshMaterial3d(atmosphere_material),
                        Transform::default(),
                    ));
                });

            // Stationary sun disc with halo.
            root.spawn((
                Mesh3d(sun_mesh),
                MeshMaterial3d(sun_material),
                Transform::from_translation(SUN_POSITION),
            ))
            .with_children(|sun| {
                sun.spawn((
                    SunGlow,
                    Mesh3d(glow_mesh),
                    MeshMaterial3d(glow_material),
                    Transform::default(),
                ));
            });

            // Main sunlight, always pointing at the globe center.
            root.spawn((
                SunLight,
                DirectionalLight {
                    color: Color::WHITE,
                    illuminance: 1.5 * LUX_PER_INTENSITY,
                    shadows_enabled: true,
                    ..default()
                },
                Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
            ));
        });

    info!("Spawned earth view");
}
