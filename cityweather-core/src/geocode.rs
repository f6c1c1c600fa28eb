//! Forward geocoding: convert a free-text place name to coordinates.
//! Uses Nominatim (OpenStreetMap) - free, no API key required.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;

use crate::{
    error::{GeocodeError, TransportError},
    http,
    model::Coordinates,
};

pub const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = "weather_app";

#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// Resolve `city` to the provider's best match.
    ///
    /// Same-named places are not disambiguated; the first match wins.
    async fn resolve(&self, city: &str) -> Result<Coordinates, GeocodeError>;
}

#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    endpoint: String,
    http: Client,
}

impl NominatimGeocoder {
    pub fn new(endpoint: impl Into<String>, user_agent: &str) -> Result<Self, TransportError> {
        Ok(Self {
            endpoint: endpoint.into(),
            http: http::client(user_agent)?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, city: &str) -> Result<Coordinates, GeocodeError> {
        let places: Vec<NominatimPlace> = http::get_json(
            &self.http,
            &self.endpoint,
            &[
                ("q", city.to_string()),
                ("format", "json".to_string()),
                ("limit", "1".to_string()),
            ],
        )
        .await?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NotFound(city.to_string()))?;

        let coordinates = Coordinates {
            latitude: parse_degrees(&place.lat)?,
            longitude: parse_degrees(&place.lon)?,
        };

        tracing::info!(
            city,
            place = place.display_name.as_deref().unwrap_or(city),
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "Resolved location"
        );

        Ok(coordinates)
    }
}

fn parse_degrees(raw: &str) -> Result<f64, TransportError> {
    raw.trim()
        .parse()
        .map_err(|_| TransportError::Decode(format!("invalid coordinate '{raw}'")))
}
