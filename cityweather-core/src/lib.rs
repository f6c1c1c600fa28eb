//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - Forward geocoding of city names (Nominatim)
//! - Forecast retrieval (Open-Meteo)
//! - Weather code descriptions and hourly forecast formatting
//! - The query controller that chains the above
//! - Configuration handling
//!
//! It is used by `cityweather-cli`, but the controller has no terminal dependency and can be
//! driven by any front end.

pub mod codes;
pub mod config;
pub mod controller;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod http;
pub mod map;
pub mod model;
pub mod provider;
pub mod report;

pub use codes::describe;
pub use config::Config;
pub use controller::{AppController, QueryResult, QueryState};
pub use error::{GeocodeError, TransportError, WeatherError};
pub use forecast::format_hourly;
pub use geocode::{Geocoder, NominatimGeocoder};
pub use map::MapView;
pub use model::{Coordinates, CurrentWeather, HourlyRow, HourlySeries, WeatherPayload};
pub use provider::{OpenMeteoClient, WeatherSource};
pub use report::Report;
