//! WMO weather interpretation codes as reported by Open-Meteo.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

/// Description returned for any code not present in [`WEATHER_CODES`].
pub const UNKNOWN: &str = "Unknown";

/// Every code the provider documents, paired with its human-readable description.
pub static WEATHER_CODES: &[(i32, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Foggy"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (71, "Slight snow fall"),
    (73, "Moderate snow fall"),
    (75, "Heavy snow fall"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// Describe a weather code. Total over `i32`: unknown codes yield [`UNKNOWN`].
pub fn describe(code: i32) -> &'static str {
    WEATHER_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, description)| *description)
        .unwrap_or(UNKNOWN)
}

pub fn known_codes() -> impl Iterator<Item = i32> {
    WEATHER_CODES.iter().map(|(code, _)| *code)
}
