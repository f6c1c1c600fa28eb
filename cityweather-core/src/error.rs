use thiserror::Error;

/// Failure talking to an external HTTP service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Failure resolving a city name to coordinates.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("no location found for '{0}'")]
    NotFound(String),

    #[error("Error getting coordinates: {0}")]
    Transport(#[from] TransportError),
}

/// Failure fetching the forecast for resolved coordinates.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Error fetching weather data: {0}")]
    Transport(#[from] TransportError),
}

impl GeocodeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GeocodeError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocode_transport_message_carries_detail() {
        let err = GeocodeError::from(TransportError::Status {
            status: 503,
            body: "maintenance".into(),
        });

        assert_eq!(
            err.to_string(),
            "Error getting coordinates: service returned status 503: maintenance"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn weather_transport_message_carries_detail() {
        let err = WeatherError::from(TransportError::Decode("missing field `hourly`".into()));

        assert_eq!(
            err.to_string(),
            "Error fetching weather data: could not decode response: missing field `hourly`"
        );
    }

    #[test]
    fn not_found_names_the_query() {
        let err = GeocodeError::NotFound("Atlantis".into());
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Atlantis"));
    }
}
