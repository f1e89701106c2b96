//! View switching between the earth close-up and the solar-system overview.

use bevy::prelude::*;

use crate::camera::{CameraState, EARTH_VIEW_DISTANCE, SOLAR_VIEW_DISTANCE};
use crate::render::bodies::SolarSystemRoot;
use crate::render::globe::EarthViewRoot;

/// Which scene is on screen. Both scenes exist at all times; switching
/// only toggles root visibility and moves the camera to a sensible
/// distance.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Rotating globe with day/night terminator and event markers.
    #[default]
    EarthView,
    /// The sun and all nine planets on their orbits.
    SolarSystem,
}

impl ViewMode {
    /// The other view, for toggle controls.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::EarthView => ViewMode::SolarSystem,
            ViewMode::SolarSystem => ViewMode::EarthView,
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::EarthView => "Earth view",
            ViewMode::SolarSystem => "Solar system",
        }
    }
}

/// Apply the active view: root visibility plus a camera distance preset.
/// Runs whenever the mode changes (including the first frame).
pub fn apply_view_mode(
    view: Res<ViewMode>,
    mut camera_state: ResMut<CameraState>,
    mut earth_query: Query<&mut Visibility, (With<EarthViewRoot>, Without<SolarSystemRoot>)>,
    mut solar_query: Query<&mut Visibility, (With<SolarSystemRoot>, Without<EarthViewRoot>)>,
) {
    if !view.is_changed() {
        return;
    }

    let (earth_visibility, solar_visibility, distance) = match *view {
        ViewMode::EarthView => (Visibility::Inherited, Visibility::Hidden, EARTH_VIEW_DISTANCE),
        ViewMode::SolarSystem => (Visibility::Hidden, Visibility::Inherited, SOLAR_VIEW_DISTANCE),
    };

    for mut visibility in earth_query.iter_mut() {
        *visibility = earth_visibility;
    }
    for mut visibility in solar_query.iter_mut() {
        *visibility = solar_visibility;
    }
    camera_state.distance = distance;

    info!("Switched to {}", view.label());
}
