//! Sunlit - interactive Earth day/night and solar-system visualizer
//!
//! A desktop application rendering a rotating globe with live day/night
//! lighting, natural-event markers, and a simplified solar system view.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use sunlit::camera::CameraPlugin;
use sunlit::clock::ClockPlugin;
use sunlit::ephemeris::Ephemeris;
use sunlit::input::InputPlugin;
use sunlit::overlay::OverlayPlugin;
use sunlit::render::RenderPlugin;
use sunlit::types::SimulationClock;
use sunlit::ui::UiPlugin;

fn main() {
    // A bad constant table is a build defect; refuse to start on one.
    let ephemeris = match Ephemeris::new() {
        Ok(ephemeris) => ephemeris,
        Err(err) => {
            eprintln!("invalid planet constant table: {err}");
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(ephemeris)
        .insert_resource(SimulationClock::default())
        // Add simulation plugins
        .add_plugins((
            ClockPlugin,
            CameraPlugin,
            RenderPlugin,
            OverlayPlugin,
            InputPlugin,
            UiPlugin,
        ))
        .run();
}
