//! Keyboard shortcuts for clock, view and lighting control.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::lighting::LightingMode;
use crate::render::ViewMode;
use crate::types::{SPEED_PRESETS, SimulationClock, now_epoch_seconds};

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts);
    }
}

/// Handle keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    mut contexts: EguiContexts,
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SimulationClock>,
    mut view: ResMut<ViewMode>,
    mut lighting_mode: ResMut<LightingMode>,
) {
    // Don't steal keys from a focused text field.
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }

    let now = now_epoch_seconds();

    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        clock.toggle_pause(now);
        info!(
            "Simulation {}",
            if clock.mode == crate::types::ClockMode::Paused {
                "paused"
            } else {
                "running"
            }
        );
    }

    // R: back to live wall-clock time
    if keys.just_pressed(KeyCode::KeyR) {
        clock.enable_real_time(now);
        info!("Real time");
    }

    // Quick rate selection with number keys (manual mode only applies it)
    for (i, key) in [
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
    ]
    .iter()
    .enumerate()
    {
        if keys.just_pressed(*key) {
            clock.set_time_speed(SPEED_PRESETS[i]);
            info!("Time rate: {} days/s", SPEED_PRESETS[i]);
        }
    }

    // [ and ]: halve / double the rate
    if keys.just_pressed(KeyCode::BracketLeft) {
        let rate = (clock.speed_days_per_second * 0.5).max(0.001);
        clock.set_time_speed(rate);
        info!("Time rate: {} days/s", rate);
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        let rate = (clock.speed_days_per_second * 2.0).min(100.0);
        clock.set_time_speed(rate);
        info!("Time rate: {} days/s", rate);
    }

    // Arrows: jump by days (hold shift for weeks)
    let week = keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight);
    let step = if week { 7.0 } else { 1.0 };
    if keys.just_pressed(KeyCode::ArrowLeft) {
        clock.jump_days(-step);
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        clock.jump_days(step);
    }

    // V: switch between earth and solar-system views
    if keys.just_pressed(KeyCode::KeyV) {
        *view = view.toggled();
    }

    // L: switch lighting model
    if keys.just_pressed(KeyCode::KeyL) {
        *lighting_mode = lighting_mode.toggled();
        info!("Lighting: {}", lighting_mode.label());
    }
}
