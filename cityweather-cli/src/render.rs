use chrono::{DateTime, Local};
use cityweather_core::{GeocodeError, QueryResult, Report};
use std::fmt::{self, Write};

pub const NOT_FOUND_MESSAGE: &str =
    "Could not find the specified city. Please check the spelling and try again.";

/// Human-readable report: metrics, map link, and the hourly table.
pub fn write_report(
    out: &mut impl Write,
    report: &Report,
    fetched_at: &DateTime<Local>,
) -> fmt::Result {
    let current = &report.current;

    writeln!(out, "Current Weather in {}", report.city)?;
    writeln!(out, "(fetched at {})", fetched_at.format("%Y-%m-%d %H:%M"))?;
    writeln!(out)?;
    writeln!(
        out,
        "  {:<16}{:<14}{:<16}{}",
        "Temperature",
        format!("{:.1}°C", current.temperature),
        "Weather",
        report.description,
    )?;
    writeln!(
        out,
        "  {:<16}{:<14}{:<16}{}",
        "Wind Speed",
        format!("{:.1} km/h", current.windspeed),
        "Wind Direction",
        format!("{:.0}°", current.winddirection),
    )?;

    writeln!(out)?;
    writeln!(out, "Location Map")?;
    writeln!(
        out,
        "  {} ({:.4}, {:.4})",
        report.map.marker, report.map.center.latitude, report.map.center.longitude
    )?;
    writeln!(out, "  {}", report.map.osm_url())?;

    writeln!(out)?;
    writeln!(out, "Hourly Forecast")?;
    writeln!(
        out,
        "  {:<8}{:>18}{:>32}",
        "Time", "Temperature (°C)", "Precipitation Probability (%)"
    )?;
    for row in &report.hourly {
        let precipitation = row
            .precipitation_probability
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());

        writeln!(
            out,
            "  {:<8}{:>18.1}{:>32}",
            row.hour_label, row.temperature, precipitation
        )?;
    }

    Ok(())
}

/// The message shown for a failed query, or `None` on success.
pub fn failure_message(result: &QueryResult) -> Option<String> {
    match result {
        QueryResult::Success(_) => None,
        QueryResult::GeocodeFailure(GeocodeError::NotFound(_)) => {
            Some(NOT_FOUND_MESSAGE.to_string())
        }
        QueryResult::GeocodeFailure(err) => Some(err.to_string()),
        QueryResult::WeatherFetchFailure(err) => Some(err.to_string()),
    }
}
