//! Phosphor icon definitions for the UI.
//!
//! Provides icon constants using the Phosphor icon font.
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Re-export commonly used icons with semantic names for our app.

/// Play icon (triangle pointing right)
pub const PLAY: &str = egui_phosphor::regular::PLAY;
/// Pause icon (two vertical bars)
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Live/real-time icon (circular arrows)
pub const REAL_TIME: &str = egui_phosphor::regular::ARROWS_CLOCKWISE;
/// Clock icon
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;
/// Calendar icon
pub const CALENDAR: &str = egui_phosphor::regular::CALENDAR_BLANK;
/// Globe icon (earth view)
pub const GLOBE: &str = egui_phosphor::regular::GLOBE_HEMISPHERE_WEST;
/// Planet/orbit icon (solar-system view)
pub const PLANET: &str = egui_phosphor::regular::PLANET;
/// Sun icon (lighting mode)
pub const SUN: &str = egui_phosphor::regular::SUN;
/// Step-back icon
pub const BACK: &str = egui_phosphor::regular::CARET_DOUBLE_LEFT;
/// Step-forward icon
pub const FORWARD: &str = egui_phosphor::regular::CARET_DOUBLE_RIGHT;
