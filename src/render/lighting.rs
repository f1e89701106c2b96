//! Applies derived lighting parameters to the earth-view scene.

use bevy::prelude::*;

use crate::lighting::{LightingMode, derive_lighting};
use crate::render::globe::{AtmosphereShell, LUX_PER_INTENSITY, SunGlow, SunLight};
use crate::types::{SimulationClock, now_epoch_seconds};

/// Recompute lighting from the current time-of-day and push it into the
/// sun light and the atmosphere/glow materials.
pub fn apply_lighting(
    clock: Res<SimulationClock>,
    mode: Res<LightingMode>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut light_query: Query<&mut DirectionalLight, With<SunLight>>,
    atmosphere_query: Query<&MeshMaterial3d<StandardMaterial>, With<AtmosphereShell>>,
    glow_query: Query<&MeshMaterial3d<StandardMaterial>, With<SunGlow>>,
) {
    let hours = clock.current_hours(now_epoch_seconds());
    let params = derive_lighting(*mode, hours);

    for mut light in light_query.iter_mut() {
        light.illuminance = params.intensity * LUX_PER_INTENSITY;
        light.color = Color::srgb(params.color.x, params.color.y, params.color.z);
    }

    // The rim-glow coefficient runs 0.6 (day, wide soft glow) to 1.0
    // (night, tight dim glow); the shell renders it as opacity.
    let atmosphere_alpha =
        0.45 - 0.25 * ((params.atmosphere_coefficient - 0.6) / 0.4).clamp(0.0, 1.0);
    for material_handle in atmosphere_query.iter() {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color.set_alpha(atmosphere_alpha);
        }
    }

    for material_handle in glow_query.iter() {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color.set_alpha(params.glow_opacity);
        }
    }
}
