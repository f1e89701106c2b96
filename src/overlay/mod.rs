//! Globe overlay: natural-event markers and the user location marker.

pub mod events;
pub mod markers;
pub mod timezone;

use bevy::prelude::*;

pub use events::{EventCategory, EventRecord, bundled_events};
pub use markers::{EventFilter, EventMarker, lat_lon_to_point};
pub use timezone::UserMarker;

use self::markers::{animate_event_markers, apply_event_filter, spawn_event_markers};
use self::timezone::spawn_user_marker;

/// Plugin that adds all overlay functionality.
pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EventFilter>()
            // The globe is spawned during Startup; markers attach to it
            // one schedule later.
            .add_systems(PostStartup, (spawn_event_markers, spawn_user_marker))
            .add_systems(Update, (animate_event_markers, apply_event_filter));
    }
}
