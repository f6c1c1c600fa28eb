use chrono::{DateTime, NaiveDateTime, Timelike};

use crate::model::{HourlyRow, HourlySeries};

/// Number of hourly samples shown, roughly the next day.
pub const FORECAST_HOURS: usize = 24;

/// Turn the first [`FORECAST_HOURS`] samples of `series` into display rows.
///
/// Short series yield as many rows as they have complete samples.
pub fn format_hourly(series: &HourlySeries) -> Vec<HourlyRow> {
    series
        .time
        .iter()
        .zip(&series.temperature_2m)
        .zip(&series.precipitation_probability)
        .take(FORECAST_HOURS)
        .map(|((time, temperature), precipitation)| HourlyRow {
            hour_label: hour_label(time),
            temperature: *temperature,
            precipitation_probability: *precipitation,
        })
        .collect()
}

/// `HH:00` for an ISO-8601 timestamp, read in the timestamp's own offset.
///
/// Unparsable input is returned unchanged.
pub fn hour_label(timestamp: &str) -> String {
    match parse_hour(timestamp) {
        Some(hour) => format!("{hour:02}:00"),
        None => {
            tracing::warn!(timestamp, "Unrecognised forecast timestamp");
            timestamp.to_string()
        }
    }
}

fn parse_hour(timestamp: &str) -> Option<u32> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.hour());
    }

    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(timestamp, fmt).ok())
        .map(|dt| dt.hour())
}
