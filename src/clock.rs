//! Time advancement system for the day/night visualizer.
//!
//! Handles progression of simulation time based on clock mode, rate and
//! pause state.

use bevy::prelude::*;

use crate::types::{SimulationClock, now_epoch_seconds};

/// Plugin providing clock advancement functionality.
pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, advance_clock);
    }
}

/// Advance the simulation clock once per frame.
///
/// Real-time mode re-reads the wall clock (authoritative); manual mode
/// integrates the configured days-per-second rate over the frame delta.
pub fn advance_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta_secs_f64(), now_epoch_seconds());
}
