//! Query pipeline: geocode, then fetch, then format.
//!
//! Each [`AppController`] owns its state; nothing is shared between controllers,
//! so one per session keeps sessions isolated.

use crate::{
    error::{GeocodeError, WeatherError},
    geocode::Geocoder,
    map::DEFAULT_ZOOM,
    provider::WeatherSource,
    report::Report,
};

/// Terminal outcome of one submitted city name.
#[derive(Debug)]
pub enum QueryResult {
    Success(Box<Report>),
    GeocodeFailure(GeocodeError),
    WeatherFetchFailure(WeatherError),
}

#[derive(Debug, Default)]
pub enum QueryState {
    #[default]
    Idle,
    AwaitingGeocode,
    AwaitingWeather,
    Displaying(Box<Report>),
    GeocodeFailed(GeocodeError),
    WeatherFetchFailed(WeatherError),
}

impl From<QueryResult> for QueryState {
    fn from(result: QueryResult) -> Self {
        match result {
            QueryResult::Success(report) => QueryState::Displaying(report),
            QueryResult::GeocodeFailure(err) => QueryState::GeocodeFailed(err),
            QueryResult::WeatherFetchFailure(err) => QueryState::WeatherFetchFailed(err),
        }
    }
}

impl QueryState {
    pub fn name(&self) -> &'static str {
        match self {
            QueryState::Idle => "idle",
            QueryState::AwaitingGeocode => "awaiting_geocode",
            QueryState::AwaitingWeather => "awaiting_weather",
            QueryState::Displaying(_) => "displaying",
            QueryState::GeocodeFailed(_) => "geocode_failed",
            QueryState::WeatherFetchFailed(_) => "weather_fetch_failed",
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            QueryState::Displaying(report) => Some(&**report),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct AppController {
    geocoder: Box<dyn Geocoder>,
    weather: Box<dyn WeatherSource>,
    zoom: u8,
    state: QueryState,
}

impl AppController {
    pub fn new(geocoder: Box<dyn Geocoder>, weather: Box<dyn WeatherSource>) -> Self {
        Self {
            geocoder,
            weather,
            zoom: DEFAULT_ZOOM,
            state: QueryState::Idle,
        }
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Run one query from scratch. A blank name issues no request and leaves the controller idle.
    pub async fn submit(&mut self, city: &str) -> &QueryState {
        self.transition(QueryState::Idle);

        let city = city.trim();
        if city.is_empty() {
            return &self.state;
        }

        self.transition(QueryState::AwaitingGeocode);
        let resolved = self.geocoder.resolve(city).await;
        let coordinates = match resolved {
            Ok(coordinates) => coordinates,
            Err(err) => {
                self.transition(QueryState::GeocodeFailed(err));
                return &self.state;
            }
        };

        self.transition(QueryState::AwaitingWeather);
        let fetched = self
            .weather
            .fetch(coordinates.latitude, coordinates.longitude)
            .await;
        let next = match fetched {
            Ok(payload) => QueryState::Displaying(Box::new(Report::build(
                city,
                coordinates,
                payload,
                self.zoom,
            ))),
            Err(err) => QueryState::WeatherFetchFailed(err),
        };

        self.transition(next);
        &self.state
    }

    /// Run one query and hand back its outcome, leaving the controller idle.
    ///
    /// Returns `None` for a blank name.
    pub async fn run_query(&mut self, city: &str) -> Option<QueryResult> {
        self.submit(city).await;

        match std::mem::take(&mut self.state) {
            QueryState::Displaying(report) => Some(QueryResult::Success(report)),
            QueryState::GeocodeFailed(err) => Some(QueryResult::GeocodeFailure(err)),
            QueryState::WeatherFetchFailed(err) => Some(QueryResult::WeatherFetchFailure(err)),
            QueryState::Idle | QueryState::AwaitingGeocode | QueryState::AwaitingWeather => None,
        }
    }

    fn transition(&mut self, next: QueryState) {
        tracing::debug!(from = self.state.name(), to = next.name(), "Query state change");
        self.state = next;
    }
}
