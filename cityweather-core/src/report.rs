use serde::Serialize;

use crate::{
    codes, forecast,
    map::MapView,
    model::{Coordinates, CurrentWeather, HourlyRow, WeatherPayload},
};

/// Everything the presentation layer needs for one successful query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub city: String,
    pub coordinates: Coordinates,
    pub current: CurrentWeather,
    pub description: &'static str,
    pub hourly: Vec<HourlyRow>,
    pub map: MapView,
}

impl Report {
    pub fn build(city: &str, coordinates: Coordinates, payload: WeatherPayload, zoom: u8) -> Self {
        let description = codes::describe(payload.current_weather.weathercode);
        let hourly = forecast::format_hourly(&payload.hourly);

        Self {
            city: city.to_string(),
            coordinates,
            current: payload.current_weather,
            description,
            hourly,
            map: MapView::new(coordinates, city, zoom),
        }
    }
}
