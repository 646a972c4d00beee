//! Simulation configuration. Loaded from `faultline.ron` at startup.

use physics::FlightParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::terrain_cache::TerrainSettings;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "faultline.ron";

/// Largest accepted chunk half-extent.
pub const MAX_CHUNK_SIZE: u32 = 1_000_000;
/// Largest accepted grid resolution along one chunk side.
pub const MAX_POINTS_PER_SIDE: u64 = 1025;
/// Largest accepted Chebyshev retention radius (a 17x17 window).
pub const MAX_RETENTION_RADIUS: i32 = 8;
/// Slowest accepted tick rate, one tick every 1000 seconds.
pub const MIN_FIXED_RATE_HZ: f64 = 1e-3;
pub const MAX_FIXED_RATE_HZ: f64 = 10_000.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config syntax: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("could not serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Tuning variant of the flight loop. The variants differ only in pitch
/// control sign, lift and chase camera distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum FlightProfile {
    /// Pitch-up lowers the pitch angle, lift 0.008, camera 10 units back.
    #[default]
    Standard,
    /// Pitch-up raises the pitch angle, lift 0.01, camera 15 units back.
    Inverted,
    Custom {
        pitch_sign: f32,
        lift_coefficient: f32,
        camera_distance: f32,
    },
}

impl FlightProfile {
    pub fn pitch_sign(&self) -> f32 {
        match *self {
            FlightProfile::Standard => -1.0,
            FlightProfile::Inverted => 1.0,
            FlightProfile::Custom { pitch_sign, .. } => pitch_sign,
        }
    }

    pub fn lift_coefficient(&self) -> f32 {
        match *self {
            FlightProfile::Standard => 0.008,
            FlightProfile::Inverted => 0.01,
            FlightProfile::Custom {
                lift_coefficient, ..
            } => lift_coefficient,
        }
    }

    pub fn camera_distance(&self) -> f32 {
        match *self {
            FlightProfile::Standard => 10.0,
            FlightProfile::Inverted => 15.0,
            FlightProfile::Custom {
                camera_distance, ..
            } => camera_distance,
        }
    }

    /// Flight constants for this profile.
    pub fn flight_params(&self) -> FlightParams {
        FlightParams {
            pitch_sign: self.pitch_sign(),
            lift_coefficient: self.lift_coefficient(),
            ..Default::default()
        }
    }
}

/// Simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub profile: FlightProfile,
    #[serde(default)]
    pub terrain: TerrainSettings,
    /// Chase camera height above the aircraft.
    #[serde(default = "default_camera_height")]
    pub camera_height: f32,
    /// Simulation tick rate.
    #[serde(default = "default_fixed_rate")]
    pub fixed_rate_hz: f64,
    /// How long the headless driver flies.
    #[serde(default = "default_run_seconds")]
    pub run_seconds: f32,
    /// Frames between telemetry log lines.
    #[serde(default = "default_telemetry_interval")]
    pub telemetry_interval: u64,
}

fn default_camera_height() -> f32 {
    1.5
}
fn default_fixed_rate() -> f64 {
    60.0
}
fn default_run_seconds() -> f32 {
    90.0
}
fn default_telemetry_interval() -> u64 {
    60
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            profile: FlightProfile::default(),
            terrain: TerrainSettings::default(),
            camera_height: default_camera_height(),
            fixed_rate_hz: default_fixed_rate(),
            run_seconds: default_run_seconds(),
            telemetry_interval: default_telemetry_interval(),
        }
    }
}

impl SimConfig {
    /// Load `faultline.ron` from the working directory. Missing or invalid
    /// files fall back to defaults.
    pub fn load() -> Self {
        Self::load_or_default(&config_path())
    }

    /// Load `path`, logging and falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(c) => c,
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                log::info!("No config at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                log::warn!("Invalid config at {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&data)
    }

    /// Parse and validate.
    pub fn from_ron_str(data: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Save to `faultline.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Err(e) = self.save_to(&path) {
            log::warn!("Could not write config to {:?}: {}", path, e);
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let s = self.to_ron_string()?;
        std::fs::write(path, s).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject values the generator, cache or clock cannot represent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.terrain;
        if t.chunk_size == 0 || t.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::Invalid(format!(
                "terrain.chunk_size must be in 1..={}, got {}",
                MAX_CHUNK_SIZE, t.chunk_size
            )));
        }
        if t.grid_spacing == 0 {
            return Err(ConfigError::Invalid("terrain.grid_spacing must be positive".into()));
        }
        let points_per_side = 2 * u64::from(t.chunk_size) / u64::from(t.grid_spacing) + 1;
        if points_per_side > MAX_POINTS_PER_SIDE {
            return Err(ConfigError::Invalid(format!(
                "terrain grid has {} points per side, at most {} allowed",
                points_per_side, MAX_POINTS_PER_SIDE
            )));
        }
        if !(0..=MAX_RETENTION_RADIUS).contains(&t.retention_radius) {
            return Err(ConfigError::Invalid(format!(
                "terrain.retention_radius must be in 0..={}, got {}",
                MAX_RETENTION_RADIUS, t.retention_radius
            )));
        }
        // NaN fails the range check too.
        if !(MIN_FIXED_RATE_HZ..=MAX_FIXED_RATE_HZ).contains(&self.fixed_rate_hz) {
            return Err(ConfigError::Invalid(format!(
                "fixed_rate_hz must be in {}..={}, got {}",
                MIN_FIXED_RATE_HZ, MAX_FIXED_RATE_HZ, self.fixed_rate_hz
            )));
        }
        if !(self.run_seconds.is_finite() && self.run_seconds >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "run_seconds must not be negative, got {}",
                self.run_seconds
            )));
        }
        Ok(())
    }

    pub fn flight_params(&self) -> FlightParams {
        self.profile.flight_params()
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(CONFIG_FILE)
}
