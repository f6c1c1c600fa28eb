use async_trait::async_trait;
use reqwest::Client;

use crate::{
    error::{TransportError, WeatherError},
    http,
    model::WeatherPayload,
};

use super::WeatherSource;

pub const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const HOURLY_FIELDS: &str = "temperature_2m,precipitation_probability,weathercode";

#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    endpoint: String,
    http: Client,
}

impl OpenMeteoClient {
    pub fn new(endpoint: impl Into<String>, user_agent: &str) -> Result<Self, TransportError> {
        Ok(Self {
            endpoint: endpoint.into(),
            http: http::client(user_agent)?,
        })
    }

    fn query(latitude: f64, longitude: f64) -> [(&'static str, String); 4] {
        [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
        ]
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherPayload, WeatherError> {
        tracing::debug!(latitude, longitude, endpoint = %self.endpoint, "Fetching forecast");

        let payload: WeatherPayload = http::get_json(
            &self.http,
            &self.endpoint,
            &Self::query(latitude, longitude),
        )
        .await?;

        tracing::debug!(samples = payload.hourly.len(), "Forecast received");
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_carries_fixed_parameters() {
        let query = OpenMeteoClient::query(51.5074, -0.1278);

        assert_eq!(query[0], ("latitude", "51.5074".to_string()));
        assert_eq!(query[1], ("longitude", "-0.1278".to_string()));
        assert_eq!(query[2], ("current_weather", "true".to_string()));
        assert_eq!(
            query[3],
            ("hourly", "temperature_2m,precipitation_probability,weathercode".to_string())
        );
    }

    #[tokio::test]
    #[ignore] // Run with: cargo test -p cityweather-core -- --ignored
    async fn fetches_london_live() {
        let client = OpenMeteoClient::new(OPEN_METEO_FORECAST_URL, "weather_app").unwrap();
        let payload = client.fetch(51.5074, -0.1278).await.unwrap();

        assert!(!payload.hourly.is_empty());
        assert!(payload.current_weather.temperature.is_finite());
    }
}
