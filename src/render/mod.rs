//! Rendering systems for the day/night visualizer.
//!
//! This module owns the scene graph. It consumes pure values from the
//! clock, rotation, orbital and lighting models and applies them to
//! Transforms, lights and materials; nothing in the core holds a
//! reference back into these entities.

pub mod bodies;
pub mod globe;
mod lighting;
mod orbits;
mod sync;
pub mod view;

use bevy::prelude::*;

use self::bodies::SolarSystemPlugin;
use self::globe::EarthViewPlugin;
use self::lighting::apply_lighting;
use self::orbits::OrbitPathPlugin;
use self::sync::{rotate_earth_globe, spin_planets, sync_planet_positions};
use self::view::apply_view_mode;

// Re-export for use in other modules
pub use self::bodies::{PlanetBody, SolarSystemRoot};
pub use self::globe::{EarthGlobe, EarthViewRoot, GLOBE_RADIUS};
pub use self::view::ViewMode;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewMode>()
            .init_resource::<crate::lighting::LightingMode>()
            .insert_resource(GlobalAmbientLight {
                color: Color::WHITE,
                brightness: 60.0,
                ..default()
            })
            .add_plugins((SolarSystemPlugin, EarthViewPlugin, OrbitPathPlugin))
            // Positions and angles first, then lighting, then view
            // switching; all read the clock advanced earlier this frame.
            .add_systems(
                Update,
                (
                    (sync_planet_positions, spin_planets, rotate_earth_globe).chain(),
                    apply_lighting,
                    apply_view_mode,
                )
                    .chain()
                    .after(crate::clock::advance_clock),
            );
    }
}
