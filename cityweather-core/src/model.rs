use serde::{Deserialize, Serialize};

/// A resolved location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Conditions at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
    pub weathercode: i32,
}

/// Index-aligned hourly samples, starting at the provider's series start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub precipitation_probability: Vec<Option<u8>>,
    pub weathercode: Vec<i32>,
}

impl HourlySeries {
    /// Number of complete samples; the shortest of the arrays the forecast table uses.
    pub fn len(&self) -> usize {
        self.time
            .len()
            .min(self.temperature_2m.len())
            .min(self.precipitation_probability.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The subset of the forecast response this application reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPayload {
    pub current_weather: CurrentWeather,
    pub hourly: HourlySeries,
}

/// One display row of the hourly forecast table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyRow {
    pub hour_label: String,
    pub temperature: f64,
    pub precipitation_probability: Option<u8>,
}
