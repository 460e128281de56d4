use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{array::ValueRange, Result, SortVizError};

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 100;

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub array: ArrayConfig,
    pub playback: PlaybackConfig,
}

impl AppConfig {
    /// Loads a JSON configuration file. Missing fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: AppConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.array.validate()?;
        self.playback.validate()
    }
}

/// Configuration for the generated input arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    pub size: usize,
    pub min_size: usize,
    pub max_size: usize,
    pub min_value: i32,
    pub max_value: i32,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            size: 20,
            min_size: 10,
            max_size: 100,
            min_value: ValueRange::DEFAULT.min,
            max_value: ValueRange::DEFAULT.max,
        }
    }
}

impl ArrayConfig {
    pub fn value_range(&self) -> Result<ValueRange> {
        ValueRange::new(self.min_value, self.max_value)
    }

    /// Checks `size` against the configured bounds.
    pub fn check_size(&self, size: usize) -> Result<()> {
        if size == 0 || size < self.min_size || size > self.max_size {
            return Err(SortVizError::InvalidSize {
                size,
                min: self.min_size.max(1),
                max: self.max_size,
            });
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.value_range()?;
        self.check_size(self.size)
    }
}

/// Configuration for timer-driven playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// 1 (slowest) to 100 (fastest).
    pub speed: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { speed: 50 }
    }
}

impl PlaybackConfig {
    pub fn validate(&self) -> Result<()> {
        check_speed(self.speed)
    }
}

pub(crate) fn check_speed(speed: u32) -> Result<()> {
    if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
        return Err(SortVizError::InvalidSpeed {
            speed,
            min: MIN_SPEED,
            max: MAX_SPEED,
        });
    }
    Ok(())
}
