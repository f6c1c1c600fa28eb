use async_trait::async_trait;
use std::fmt::Debug;

use crate::{error::WeatherError, model::WeatherPayload};

pub mod open_meteo;

pub use open_meteo::OpenMeteoClient;

#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Fetch current conditions and the hourly series for a location.
    ///
    /// A single attempt; any failure is returned, never a partial payload.
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherPayload, WeatherError>;
}
