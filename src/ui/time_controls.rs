//! Time controls panel at the bottom of the screen.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::lighting::LightingMode;
use crate::overlay::{EventCategory, EventFilter};
use crate::render::ViewMode;
use crate::types::{
    ClockMode, SPEED_PRESETS, SimulationClock, TimeReference, now_epoch_seconds,
};
use crate::ui::icons;

/// Transient UI state (text entry buffers).
#[derive(Resource, Default)]
pub struct UiState {
    /// Absolute date entry buffer, `YYYY-MM-DD`.
    pub date_input: String,
}

/// System that renders the time controls panel.
pub fn time_controls_panel(
    mut contexts: EguiContexts,
    mut clock: ResMut<SimulationClock>,
    mut view: ResMut<ViewMode>,
    mut lighting_mode: ResMut<LightingMode>,
    mut filter: ResMut<EventFilter>,
    mut state: ResMut<UiState>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let now = now_epoch_seconds();

    egui::TopBottomPanel::bottom("time_controls").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // Play/Pause button
            let icon = if clock.mode == ClockMode::Paused {
                icons::PLAY
            } else {
                icons::PAUSE
            };
            if ui
                .button(icon)
                .on_hover_text(if clock.mode == ClockMode::Paused {
                    "Play (Space)"
                } else {
                    "Pause (Space)"
                })
                .clicked()
            {
                clock.toggle_pause(now);
            }

            // Back to the live wall clock
            let live = clock.mode == ClockMode::RealTime;
            if ui
                .selectable_label(live, format!("{} Live", icons::REAL_TIME))
                .on_hover_text("Follow the wall clock (R)")
                .clicked()
                && !live
            {
                clock.enable_real_time(now);
            }

            ui.separator();

            // Time/date/zone readout
            ui.label(
                egui::RichText::new(format!(
                    "{} {}  {} {}  {}",
                    icons::CLOCK,
                    clock.format_time(now),
                    icons::CALENDAR,
                    clock.format_date(),
                    clock.timezone_label(),
                ))
                .monospace(),
            );
            ui.label(
                egui::RichText::new(format!("elapsed {}", clock.elapsed_label()))
                    .small()
                    .weak(),
            );

            ui.separator();

            // Reference frame (switchable independently at any time)
            let local = clock.reference == TimeReference::Local;
            if ui.selectable_label(local, "Local").clicked() && !local {
                clock.set_reference(TimeReference::Local);
            }
            if ui.selectable_label(!local, "UTC").clicked() && local {
                clock.set_reference(TimeReference::Utc);
            }
        });

        ui.horizontal(|ui| {
            // Manual hour slider; dragging decouples from the wall clock
            let mut hours = clock.current_hours(now);
            if ui
                .add(
                    egui::Slider::new(&mut hours, 0.0..=24.0)
                        .fixed_decimals(1)
                        .text("h"),
                )
                .changed()
            {
                clock.set_manual_time(hours);
            }

            // Time-of-day presets
            for (label, preset) in [("00", 0.0), ("06", 6.0), ("12", 12.0), ("18", 18.0)] {
                if ui
                    .small_button(label)
                    .on_hover_text(format!("Set time to {label}:00"))
                    .clicked()
                {
                    clock.set_manual_time(preset);
                }
            }

            ui.separator();

            // Rate buttons (mutually exclusive, manual mode only)
            ui.label("Rate:");
            for (i, rate) in SPEED_PRESETS.iter().enumerate() {
                let label = format!("{rate}d/s");
                let is_selected = (clock.speed_days_per_second - rate).abs() < 1e-9;
                if ui
                    .selectable_label(is_selected, label)
                    .on_hover_text(format!("Set time rate ({})", i + 1))
                    .clicked()
                {
                    clock.set_time_speed(*rate);
                }
            }

            ui.separator();

            // Day jumps
            if ui.button(format!("{} 7d", icons::BACK)).clicked() {
                clock.jump_days(-7.0);
            }
            if ui.button("-1d").clicked() {
                clock.jump_days(-1.0);
            }
            if ui.button("+1d").clicked() {
                clock.jump_days(1.0);
            }
            if ui.button(format!("7d {}", icons::FORWARD)).clicked() {
                clock.jump_days(7.0);
            }

            // Absolute date entry; invalid input is simply ignored
            let entry = ui.add(
                egui::TextEdit::singleline(&mut state.date_input)
                    .desired_width(90.0)
                    .hint_text("YYYY-MM-DD"),
            );
            let submitted =
                entry.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if (submitted || ui.small_button("Set").clicked())
                && !state.date_input.is_empty()
                && clock.set_date(&state.date_input)
            {
                state.date_input.clear();
            }
        });

        ui.horizontal(|ui| {
            // View toggle
            let view_icon = match *view {
                ViewMode::EarthView => icons::PLANET,
                ViewMode::SolarSystem => icons::GLOBE,
            };
            if ui
                .button(format!("{} {}", view_icon, view.toggled().label()))
                .on_hover_text("Switch view (V)")
                .clicked()
            {
                *view = view.toggled();
            }

            // Lighting mode toggle
            if ui
                .button(format!("{} {}", icons::SUN, lighting_mode.label()))
                .on_hover_text("Switch lighting model (L)")
                .clicked()
            {
                *lighting_mode = lighting_mode.toggled();
            }

            ui.separator();

            // Event category filter
            ui.label("Events:");
            let selected_label = match filter.0 {
                None => "All",
                Some(category) => category.label(),
            };
            egui::ComboBox::from_id_salt("event_filter")
                .selected_text(selected_label)
                .show_ui(ui, |ui| {
                    let mut selection = filter.0;
                    ui.selectable_value(&mut selection, None, "All");
                    for &category in EventCategory::ALL {
                        ui.selectable_value(&mut selection, Some(category), category.label());
                    }
                    if selection != filter.0 {
                        filter.0 = selection;
                    }
                });
        });
    });
}
