//! UI module providing the egui-based control panel.

pub mod icons;
mod time_controls;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use time_controls::UiState;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI that uses icons.
            .add_systems(
                EguiPrimaryContextPass,
                (icons::setup_fonts, time_controls::time_controls_panel).chain(),
            );
    }
}
