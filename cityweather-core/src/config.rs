use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    controller::AppController,
    geocode::{DEFAULT_USER_AGENT, NOMINATIM_SEARCH_URL, NominatimGeocoder},
    map::DEFAULT_ZOOM,
    provider::{OpenMeteoClient, open_meteo::OPEN_METEO_FORECAST_URL},
};

/// Geocoding service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    pub endpoint: String,
    /// Client identifier sent with every request; Nominatim requires one.
    pub user_agent: String,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: NOMINATIM_SEARCH_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Forecast service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub endpoint: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: OPEN_METEO_FORECAST_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { zoom: DEFAULT_ZOOM }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// [geocoder]
/// user_agent = "my_weather_app"
///
/// [map]
/// zoom = 12
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub geocoder: GeocoderConfig,
    pub weather: WeatherConfig,
    pub map: MapConfig,
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, everything defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "cityweather", "cityweather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Build a controller wired to the configured services.
    pub fn controller(&self) -> Result<AppController> {
        let geocoder = NominatimGeocoder::new(&self.geocoder.endpoint, &self.geocoder.user_agent)
            .context("Failed to build geocoding client")?;
        let weather = OpenMeteoClient::new(&self.weather.endpoint, &self.geocoder.user_agent)
            .context("Failed to build weather client")?;

        Ok(AppController::new(Box::new(geocoder), Box::new(weather)).with_zoom(self.map.zoom))
    }
}
