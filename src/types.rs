//! Core simulation clock and time constants for the day/night visualizer.

use bevy::prelude::*;
use chrono::{DateTime, Local, NaiveDate};

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Simulation epoch as a Unix timestamp (January 1, 2000, 00:00:00 UTC).
/// All simulation dates are stored as f64 seconds relative to this instant.
pub const EPOCH_UNIX: i64 = 946_684_800;

/// Simulated-days-per-second presets offered by the UI and number keys.
pub const SPEED_PRESETS: [f64; 4] = [0.05, 0.25, 1.0, 5.0];

/// How the clock derives the current simulation instant each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockMode {
    /// Frozen; `tick` is a no-op and the manual hour mirror is authoritative.
    Paused,
    /// The wall clock is re-read every frame and is authoritative.
    RealTime,
    /// The date advances by `speed_days_per_second` per wall-clock second.
    Manual,
}

/// Which wall-clock fields time-of-day is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeReference {
    /// The machine's local calendar time.
    Local,
    /// Coordinated universal time.
    Utc,
}

/// Simulation clock resource tracking the current simulated instant.
///
/// The date and the manual hour mirror never disagree: every operation that
/// moves one re-derives the other, so pausing and resuming never produces a
/// visible jump in time-of-day.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Current simulated instant in seconds since [`EPOCH_UNIX`].
    pub date_seconds: f64,
    /// Run state.
    pub mode: ClockMode,
    /// Reference frame for time-of-day derivation.
    pub reference: TimeReference,
    /// Hour-of-day mirror in [0, 24): frozen value while paused, manually
    /// set or ticked value in manual mode.
    pub manual_hours: f64,
    /// Rate multiplier applied while in manual mode (simulated days per
    /// wall-clock second). Real-time mode always advances 1:1.
    pub speed_days_per_second: f64,
    /// Local offset from UTC in seconds, captured at startup.
    pub utc_offset_seconds: i32,
    /// Simulated instant at session start, for the elapsed readout.
    pub session_start_seconds: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(now_epoch_seconds(), local_utc_offset_seconds())
    }
}

impl SimulationClock {
    /// Create a clock running in real time at the given wall instant.
    pub fn new(now_seconds: f64, utc_offset_seconds: i32) -> Self {
        let mut clock = Self {
            date_seconds: now_seconds,
            mode: ClockMode::RealTime,
            reference: TimeReference::Local,
            manual_hours: 0.0,
            speed_days_per_second: 1.0,
            utc_offset_seconds,
            session_start_seconds: now_seconds,
        };
        clock.manual_hours = clock.hour_of_day(now_seconds);
        clock
    }

    /// Current simulated date in days since the epoch.
    pub fn days_since_epoch(&self) -> f64 {
        self.date_seconds / SECONDS_PER_DAY
    }

    /// Effective simulation rate in days per wall-clock second: zero while
    /// paused, 1:1 with the wall clock in real time, the configured rate in
    /// manual mode. Used for per-frame spin integration.
    pub fn effective_days_per_second(&self) -> f64 {
        match self.mode {
            ClockMode::Paused => 0.0,
            ClockMode::RealTime => 1.0 / SECONDS_PER_DAY,
            ClockMode::Manual => self.speed_days_per_second,
        }
    }

    /// Hour-of-day in [0, 24) of an epoch-relative instant, expressed in the
    /// active reference frame.
    pub fn hour_of_day(&self, date_seconds: f64) -> f64 {
        let offset = match self.reference {
            TimeReference::Local => f64::from(self.utc_offset_seconds),
            TimeReference::Utc => 0.0,
        };
        ((date_seconds + offset) / SECONDS_PER_HOUR).rem_euclid(24.0)
    }

    /// Resolve the current time-of-day in [0, 24).
    ///
    /// Paused: the frozen manual value. Real time: the wall clock passed in
    /// by the caller. Manual: the stored manual hour, advanced by `tick`.
    pub fn current_hours(&self, now_seconds: f64) -> f64 {
        match self.mode {
            ClockMode::Paused | ClockMode::Manual => self.manual_hours.rem_euclid(24.0),
            ClockMode::RealTime => self.hour_of_day(now_seconds),
        }
    }

    /// Advance the simulated date by one frame.
    ///
    /// Real time re-reads the wall clock rather than integrating deltas, so
    /// rounding never accumulates in that mode. Manual mode integrates
    /// `speed_days_per_second`; hour wrap-around at 24 falls out of the
    /// normalization in [`hour_of_day`](Self::hour_of_day).
    pub fn tick(&mut self, delta_seconds: f64, now_seconds: f64) {
        match self.mode {
            ClockMode::Paused => {}
            ClockMode::RealTime => {
                self.date_seconds = now_seconds;
            }
            ClockMode::Manual => {
                self.date_seconds += self.speed_days_per_second * delta_seconds * SECONDS_PER_DAY;
                self.manual_hours = self.hour_of_day(self.date_seconds);
            }
        }
    }

    /// Freeze the clock, capturing the current time-of-day as the manual
    /// reference point.
    pub fn pause(&mut self, now_seconds: f64) {
        if self.mode != ClockMode::Paused {
            self.manual_hours = self.current_hours(now_seconds);
            self.mode = ClockMode::Paused;
        }
    }

    /// Switch to real-time mode, resynchronizing the manual hour mirror to
    /// the live wall clock so a later pause freezes the right value.
    pub fn enable_real_time(&mut self, now_seconds: f64) {
        self.date_seconds = now_seconds;
        self.manual_hours = self.hour_of_day(now_seconds);
        self.mode = ClockMode::RealTime;
    }

    /// Resume from pause into real-time mode.
    pub fn resume(&mut self, now_seconds: f64) {
        self.enable_real_time(now_seconds);
    }

    /// Toggle between paused and running.
    pub fn toggle_pause(&mut self, now_seconds: f64) {
        if self.mode == ClockMode::Paused {
            self.resume(now_seconds);
        } else {
            self.pause(now_seconds);
        }
    }

    /// Force manual mode at the given hour-of-day, decoupling from the wall
    /// clock. The absolute date shifts so date and mirror stay consistent.
    /// Non-finite input is rejected and leaves the clock unchanged.
    pub fn set_manual_time(&mut self, hours: f64) {
        if !hours.is_finite() {
            return;
        }
        let hours = hours.rem_euclid(24.0);
        let delta = hours - self.hour_of_day(self.date_seconds);
        self.date_seconds += delta * SECONDS_PER_HOUR;
        self.manual_hours = hours;
        self.mode = ClockMode::Manual;
    }

    /// Shift the simulated date by a signed number of days. Valid in any
    /// state and never changes the run state. Non-finite input is rejected.
    pub fn jump_days(&mut self, days: f64) {
        if !days.is_finite() {
            return;
        }
        self.date_seconds += days * SECONDS_PER_DAY;
        if self.mode != ClockMode::RealTime {
            self.manual_hours = self.hour_of_day(self.date_seconds);
        }
    }

    /// Set the manual-mode rate multiplier. Has no effect on real-time
    /// advancement. Non-finite or non-positive input is rejected.
    pub fn set_time_speed(&mut self, days_per_second: f64) {
        if days_per_second.is_finite() && days_per_second > 0.0 {
            self.speed_days_per_second = days_per_second;
        }
    }

    /// Switch the time-of-day reference frame. The manual mirror is
    /// re-derived so the displayed hour matches the new reference.
    pub fn set_reference(&mut self, reference: TimeReference) {
        self.reference = reference;
        if self.mode != ClockMode::RealTime {
            self.manual_hours = self.hour_of_day(self.date_seconds);
        }
    }

    /// Set the simulated calendar date from a `YYYY-MM-DD` string,
    /// preserving the current time-of-day. A date entry decouples the clock
    /// from the wall clock, so it forces manual mode. Returns false (state
    /// unchanged) on unparseable input.
    pub fn set_date(&mut self, input: &str) -> bool {
        let Ok(date) = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") else {
            return false;
        };
        let Some(midnight) = date.and_hms_opt(0, 0, 0) else {
            return false;
        };
        let offset = match self.reference {
            TimeReference::Local => f64::from(self.utc_offset_seconds),
            TimeReference::Utc => 0.0,
        };
        let seconds_into_day = self.hour_of_day(self.date_seconds) * SECONDS_PER_HOUR;
        // Start of the requested day in the active reference, epoch-relative.
        let day_start = (midnight.and_utc().timestamp() - EPOCH_UNIX) as f64 - offset;
        self.date_seconds = day_start + seconds_into_day;
        self.manual_hours = self.hour_of_day(self.date_seconds);
        self.mode = ClockMode::Manual;
        true
    }

    /// Current time formatted as `HH:MM:SS`.
    pub fn format_time(&self, now_seconds: f64) -> String {
        format_hours_hms(self.current_hours(now_seconds))
    }

    /// Current simulated date formatted as `YYYY-MM-DD` in the active
    /// reference frame.
    pub fn format_date(&self) -> String {
        let offset = match self.reference {
            TimeReference::Local => i64::from(self.utc_offset_seconds),
            TimeReference::Utc => 0,
        };
        let unix = EPOCH_UNIX + self.date_seconds as i64 + offset;
        match DateTime::from_timestamp(unix, 0) {
            Some(dt) => dt.format("%Y-%m-%d").to_string(),
            None => "----------".to_string(),
        }
    }

    /// Active reference frame label, e.g. `UTC` or `UTC+02:00`.
    pub fn timezone_label(&self) -> String {
        match self.reference {
            TimeReference::Utc => "UTC".to_string(),
            TimeReference::Local => {
                let sign = if self.utc_offset_seconds < 0 { '-' } else { '+' };
                let minutes = self.utc_offset_seconds.abs() / 60;
                format!("UTC{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
            }
        }
    }

    /// Simulated time elapsed since session start, e.g. `12d 04:30`.
    pub fn elapsed_label(&self) -> String {
        let total = self.date_seconds - self.session_start_seconds;
        let sign = if total < 0.0 { "-" } else { "" };
        let total = total.abs();
        let days = (total / SECONDS_PER_DAY).floor();
        let remainder = total - days * SECONDS_PER_DAY;
        let hours = (remainder / SECONDS_PER_HOUR).floor();
        let minutes = ((remainder - hours * SECONDS_PER_HOUR) / 60.0).floor();
        format!(
            "{}{}d {:02}:{:02}",
            sign, days as i64, hours as u32, minutes as u32
        )
    }
}

/// Format a fractional hour-of-day as `HH:MM:SS`.
pub fn format_hours_hms(hours: f64) -> String {
    let hours = hours.rem_euclid(24.0);
    let h = hours.floor();
    let m = ((hours - h) * 60.0).floor();
    let s = (((hours - h) * 60.0 - m) * 60.0).floor();
    format!("{:02}:{:02}:{:02}", h as u32, m as u32, s as u32)
}

/// Current wall-clock instant in seconds since [`EPOCH_UNIX`].
pub fn now_epoch_seconds() -> f64 {
    let now = chrono::Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) * 1e-6
        - EPOCH_UNIX as f64
}

/// Local offset from UTC in seconds, read from the system timezone.
pub fn local_utc_offset_seconds() -> i32 {
    Local::now().offset().local_minus_utc()
}
