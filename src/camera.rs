//! Camera system for the day/night visualizer.
//!
//! Provides an orbiting perspective camera: drag to rotate around the
//! scene center, scroll to change distance. The two views share one
//! camera and only differ in their distance presets.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

/// Render scale: scene units per astronomical unit.
/// Keeps the full planet set within comfortable f32 coordinates
/// (Pluto orbits at ~395 units).
pub const UNITS_PER_AU: f64 = 10.0;

/// Closest allowed camera distance (just outside the earth globe).
pub const MIN_DISTANCE: f32 = 14.0;

/// Furthest allowed camera distance (whole planet set in frame).
pub const MAX_DISTANCE: f32 = 900.0;

/// Default camera distance for the earth view.
pub const EARTH_VIEW_DISTANCE: f32 = 35.0;

/// Default camera distance for the solar-system view.
pub const SOLAR_VIEW_DISTANCE: f32 = 260.0;

/// Dolly speed multiplier for the scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Rotation speed in radians per pixel of drag.
pub const ROTATE_SPEED: f32 = 0.005;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Resource tracking the orbit rig state.
#[derive(Resource)]
pub struct CameraState {
    /// Rotation around the vertical axis, radians.
    pub yaw: f32,
    /// Elevation above the orbit plane, radians.
    pub pitch: f32,
    /// Distance from the scene center.
    pub distance: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            yaw: -0.6,
            pitch: 0.45,
            distance: EARTH_VIEW_DISTANCE,
        }
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraState>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (orbit_camera_input, apply_camera_state).chain());
    }
}

/// Spawn the main camera.
fn setup_camera(mut commands: Commands, state: Res<CameraState>) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(rig_translation(&state)).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Orbit rig position for the current state.
fn rig_translation(state: &CameraState) -> Vec3 {
    let rotation = Quat::from_euler(EulerRot::YXZ, state.yaw, -state.pitch, 0.0);
    rotation * Vec3::new(0.0, 0.0, state.distance)
}

/// Handle mouse drag (rotate) and scroll wheel (dolly).
fn orbit_camera_input(
    mut contexts: EguiContexts,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut state: ResMut<CameraState>,
) {
    // Don't fight the UI panel for pointer input.
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }

    if mouse_buttons.pressed(MouseButton::Left) && mouse_motion.delta != Vec2::ZERO {
        state.yaw -= mouse_motion.delta.x * ROTATE_SPEED;
        state.pitch = (state.pitch + mouse_motion.delta.y * ROTATE_SPEED)
            .clamp(-1.54, 1.54);
    }

    if mouse_scroll.delta.y != 0.0 {
        let zoom_factor = 1.0 - mouse_scroll.delta.y * ZOOM_SPEED;
        state.distance = (state.distance * zoom_factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// Apply the rig state to the camera transform.
fn apply_camera_state(
    state: Res<CameraState>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform =
        Transform::from_translation(rig_translation(&state)).looking_at(Vec3::ZERO, Vec3::Y);
}
