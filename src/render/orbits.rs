//! Orbit path rendering using Bevy Gizmos.
//!
//! Orbits are exact circles in this model, so the paths are drawn as
//! dashed circular polylines in the ground plane. Only visible in the
//! solar-system view.

use bevy::prelude::*;

use crate::camera::UNITS_PER_AU;
use crate::ephemeris::{Ephemeris, PlanetId};
use crate::render::bodies::planet_color;
use crate::render::view::ViewMode;

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .add_systems(Update, draw_orbit_paths);
    }
}

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Number of segments for drawing each circle (higher = smoother).
    pub segments: u32,
    /// Alpha value for orbit path color.
    pub alpha: f32,
    /// Dash pattern: draw N segments, then skip M segments, repeating.
    ///
    /// Set to (1, 0) for a solid line.
    pub dash_on: u32,
    pub dash_off: u32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 192,
            alpha: 0.3,
            dash_on: 2,
            dash_off: 3,
        }
    }
}

/// Draw the circular orbit path of every planet.
fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    ephemeris: Res<Ephemeris>,
    view: Res<ViewMode>,
) {
    if !settings.visible || *view != ViewMode::SolarSystem {
        return;
    }

    let segments = settings.segments.max(64);
    let on = settings.dash_on.max(1);
    let period = on + settings.dash_off;

    for &id in PlanetId::ALL {
        let radius = (ephemeris.get_data(id).orbit.semi_major_axis_au * UNITS_PER_AU) as f32;
        let color = planet_color(id).with_alpha(settings.alpha);

        let mut prev: Option<Vec3> = None;
        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
            let pt = Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin());

            if let Some(p0) = prev {
                // Stable dash pattern keyed by segment index so it doesn't
                // crawl as the camera moves.
                if i.saturating_sub(1) % period < on {
                    gizmos.line(p0, pt, color);
                }
            }
            prev = Some(pt);
        }
    }
}
