//! Integration tests for the simulation clock state machine.
//!
//! All wall-clock-dependent operations take the current wall time as an
//! explicit argument, so these tests pin it and walk the clock through
//! every transition: pause/resume must never jump, real time must always
//! resynchronize, and jumps must compose additively.
//!
//! Run with: cargo test --test clock_transitions

use approx::assert_relative_eq;
use sunlit::types::{
    ClockMode, SECONDS_PER_DAY, SECONDS_PER_HOUR, SimulationClock, TimeReference,
};

/// Wall instant used throughout: 100 days past the epoch, 09:00 UTC.
const NOW: f64 = 100.0 * SECONDS_PER_DAY + 9.0 * SECONDS_PER_HOUR;

fn utc_clock() -> SimulationClock {
    let mut clock = SimulationClock::new(NOW, 0);
    clock.set_reference(TimeReference::Utc);
    clock
}

#[test]
fn fresh_session_runs_real_time_at_the_wall_clock() {
    let clock = utc_clock();
    assert_eq!(clock.mode, ClockMode::RealTime);
    assert_relative_eq!(clock.current_hours(NOW), 9.0);
    assert_relative_eq!(clock.date_seconds, NOW);
}

#[test]
fn pause_freezes_and_resume_resynchronizes() {
    let mut clock = utc_clock();

    clock.pause(NOW);
    assert_eq!(clock.mode, ClockMode::Paused);

    // Frozen: neither ticking nor a later wall clock moves the hour.
    clock.tick(5.0, NOW + 5.0);
    clock.tick(5.0, NOW + 10.0);
    assert_relative_eq!(clock.current_hours(NOW + 10.0), 9.0);

    // Resuming with zero elapsed wall time leaves the hour unchanged.
    clock.resume(NOW);
    assert_eq!(clock.mode, ClockMode::RealTime);
    assert_relative_eq!(clock.current_hours(NOW), 9.0);
}

#[test]
fn resume_after_elapsed_wall_time_follows_the_wall_clock() {
    let mut clock = utc_clock();
    clock.pause(NOW);

    // Two wall hours pass while paused; resuming snaps to the live clock.
    let later = NOW + 2.0 * SECONDS_PER_HOUR;
    clock.resume(later);
    assert_relative_eq!(clock.current_hours(later), 11.0);
    assert_relative_eq!(clock.date_seconds, later);
}

#[test]
fn manual_mode_decouples_from_the_wall_clock() {
    let mut clock = utc_clock();
    clock.set_manual_time(22.0);
    assert_eq!(clock.mode, ClockMode::Manual);

    // The wall clock no longer matters; only ticking advances time.
    assert_relative_eq!(clock.current_hours(NOW + 999.0), 22.0);

    // 2 days/s for 1.5s of wall time = 3 simulated days.
    clock.set_time_speed(2.0);
    let before = clock.date_seconds;
    clock.tick(1.5, NOW);
    assert_relative_eq!(clock.date_seconds - before, 3.0 * SECONDS_PER_DAY);
}

#[test]
fn manual_ticking_wraps_the_hour_through_midnight() {
    let mut clock = utc_clock();
    clock.set_manual_time(23.0);
    clock.set_time_speed(2.0 / 24.0); // two simulated hours per second

    clock.tick(1.0, NOW);
    assert_relative_eq!(clock.current_hours(NOW), 1.0, epsilon = 1e-9);
}

#[test]
fn speed_changes_do_not_affect_real_time() {
    let mut clock = utc_clock();
    clock.set_time_speed(50.0);

    // Real time still tracks the wall clock 1:1.
    clock.tick(1.0, NOW + 1.0);
    assert_relative_eq!(clock.date_seconds, NOW + 1.0);

    // The stored rate applies once manual mode starts.
    clock.set_manual_time(12.0);
    let before = clock.date_seconds;
    clock.tick(1.0, NOW + 2.0);
    assert_relative_eq!(clock.date_seconds - before, 50.0 * SECONDS_PER_DAY);
}

#[test]
fn jumps_compose_additively() {
    let mut stepwise = utc_clock();
    let mut direct = utc_clock();
    stepwise.pause(NOW);
    direct.pause(NOW);

    stepwise.jump_days(1.0);
    stepwise.jump_days(2.0);
    direct.jump_days(3.0);

    assert_relative_eq!(stepwise.date_seconds, direct.date_seconds);
    // Whole-day jumps preserve the frozen hour.
    assert_relative_eq!(stepwise.current_hours(NOW), 9.0);
}

#[test]
fn jump_preserves_run_state() {
    let mut clock = utc_clock();

    clock.jump_days(5.0);
    assert_eq!(clock.mode, ClockMode::RealTime);

    clock.pause(NOW);
    clock.jump_days(-2.5);
    assert_eq!(clock.mode, ClockMode::Paused);

    clock.set_manual_time(4.0);
    clock.jump_days(0.5);
    assert_eq!(clock.mode, ClockMode::Manual);
    // A half-day jump moves the manual hour by twelve.
    assert_relative_eq!(clock.current_hours(NOW), 16.0, epsilon = 1e-9);
}

#[test]
fn reference_switch_relabels_the_same_instant() {
    let mut clock = SimulationClock::new(NOW, 2 * 3600);

    // Local (UTC+2) reads 11:00 for the 09:00 UTC instant.
    assert_relative_eq!(clock.current_hours(NOW), 11.0);

    clock.set_reference(TimeReference::Utc);
    assert_relative_eq!(clock.current_hours(NOW), 9.0);

    // The underlying instant never moved.
    assert_relative_eq!(clock.date_seconds, NOW);
}

#[test]
fn pause_in_local_reference_freezes_local_hour() {
    let mut clock = SimulationClock::new(NOW, 2 * 3600);
    clock.pause(NOW);
    assert_relative_eq!(clock.current_hours(NOW), 11.0);

    // Relabeling while paused keeps date and mirror consistent.
    clock.set_reference(TimeReference::Utc);
    assert_relative_eq!(clock.current_hours(NOW), 9.0);
}

#[test]
fn date_entry_switches_to_manual_and_keeps_the_hour() {
    let mut clock = utc_clock();
    assert!(clock.set_date("2001-06-15"));
    assert_eq!(clock.mode, ClockMode::Manual);
    assert_eq!(clock.format_date(), "2001-06-15");
    assert_relative_eq!(clock.current_hours(NOW), 9.0, epsilon = 1e-9);

    // Garbage input is rejected without touching anything.
    let snapshot = clock.date_seconds;
    assert!(!clock.set_date("15/06/2001"));
    assert!(!clock.set_date(""));
    assert_relative_eq!(clock.date_seconds, snapshot);
}

#[test]
fn formatted_outputs_follow_the_clock() {
    let mut clock = utc_clock();
    assert_eq!(clock.format_time(NOW), "09:00:00");
    assert_eq!(clock.format_date(), "2000-04-10");
    assert_eq!(clock.timezone_label(), "UTC");

    clock.set_manual_time(18.25);
    assert_eq!(clock.format_time(NOW), "18:15:00");

    clock.pause(NOW);
    clock.jump_days(2.0);
    assert_eq!(clock.elapsed_label(), "2d 09:15");
}
