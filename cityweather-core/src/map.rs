use serde::Serialize;

use crate::model::Coordinates;

pub const DEFAULT_ZOOM: u8 = 10;

/// A map centred on a location with a single labelled marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub marker: String,
}

impl MapView {
    pub fn new(center: Coordinates, marker: impl Into<String>, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            marker: marker.into(),
        }
    }

    /// OpenStreetMap link with the marker placed on the centre.
    pub fn osm_url(&self) -> String {
        let Coordinates {
            latitude,
            longitude,
        } = self.center;

        format!(
            "https://www.openstreetmap.org/?mlat={latitude:.4}&mlon={longitude:.4}#map={}/{latitude:.4}/{longitude:.4}",
            self.zoom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osm_url_centres_marker() {
        let view = MapView::new(
            Coordinates {
                latitude: 51.5073219,
                longitude: -0.1276474,
            },
            "London",
            DEFAULT_ZOOM,
        );

        assert_eq!(
            view.osm_url(),
            "https://www.openstreetmap.org/?mlat=51.5073&mlon=-0.1276#map=10/51.5073/-0.1276"
        );
        assert_eq!(view.marker, "London");
    }
}
