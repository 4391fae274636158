use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const ALWAYS_BLOCKED: &str = "Always blocked";

pub const WINDOW_SEPARATOR: &str = "; ";

/// Recurring weekly interval in local time, half-open `[start_hour, end_hour)`.
///
/// `days` uses 0 for Sunday through 6 for Saturday. Hours are fractional, so
/// `8.5` is 08:30.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub days: Vec<u8>,
    pub start_hour: f64,
    pub end_hour: f64,
}

impl TimeWindow {
    pub fn new(days: Vec<u8>, start_hour: f64, end_hour: f64) -> Self {
        Self {
            days,
            start_hour,
            end_hour,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.days.is_empty() {
            return Err("Time window must include at least one day".to_string());
        }
        if let Some(day) = self.days.iter().find(|d| **d > 6) {
            return Err(format!("Invalid day {} (expected 0-6, 0 = Sunday)", day));
        }
        if !self.start_hour.is_finite() || !self.end_hour.is_finite() {
            return Err("Start and end hours must be numbers".to_string());
        }
        if !(0.0..24.0).contains(&self.start_hour) {
            return Err(format!(
                "Start hour {} out of range [0, 24)",
                self.start_hour
            ));
        }
        if self.end_hour <= 0.0 || self.end_hour > 24.0 {
            return Err(format!("End hour {} out of range (0, 24]", self.end_hour));
        }
        if self.start_hour >= self.end_hour {
            return Err(format!(
                "Start hour {} must be before end hour {}",
                self.start_hour, self.end_hour
            ));
        }
        Ok(())
    }

    /// Malformed windows never contain any instant.
    #[inline]
    pub fn contains(&self, now: LocalInstant) -> bool {
        self.validate().is_ok()
            && self.days.contains(&now.day_of_week)
            && self.start_hour <= now.hour_of_day
            && now.hour_of_day < self.end_hour
    }
}

/// Day of week and fractional hour of the local wall clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalInstant {
    pub day_of_week: u8,
    pub hour_of_day: f64,
}

impl LocalInstant {
    pub fn new(day_of_week: u8, hour_of_day: f64) -> Self {
        Self {
            day_of_week,
            hour_of_day,
        }
    }

    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            day_of_week: dt.weekday().num_days_from_sunday() as u8,
            hour_of_day: dt.hour() as f64 + dt.minute() as f64 / 60.0,
        }
    }

    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }
}

/// `true` when no windows are configured, otherwise `true` iff any window
/// contains `now`.
pub fn is_within_window(windows: &[TimeWindow], now: LocalInstant) -> bool {
    windows.is_empty() || windows.iter().any(|w| w.contains(now))
}

pub fn day_name(day: u8) -> String {
    match DAY_NAMES.get(day as usize) {
        Some(name) => (*name).to_string(),
        None => day.to_string(),
    }
}

/// Renders a fractional hour as `H:MM`, rounding to the nearest minute.
pub fn format_hour(hour: f64) -> String {
    let total_minutes = (hour * 60.0).round().max(0.0) as u32;
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

pub fn format_time_window(window: &TimeWindow) -> String {
    let days = window
        .days
        .iter()
        .map(|d| day_name(*d))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} from {} to {}",
        days,
        format_hour(window.start_hour),
        format_hour(window.end_hour)
    )
}

pub fn format_time_windows(windows: &[TimeWindow]) -> String {
    if windows.is_empty() {
        return ALWAYS_BLOCKED.to_string();
    }

    windows
        .iter()
        .map(format_time_window)
        .collect::<Vec<_>>()
        .join(WINDOW_SEPARATOR)
}
