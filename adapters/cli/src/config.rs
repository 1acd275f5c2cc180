use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use flood_it_core::Palette;
use flood_it_system_ticker::DEFAULT_TICK_INTERVAL;
use flood_it_world::{WorldConfig, DEFAULT_SIZE};
use serde::Deserialize;

/// Settings read from an optional TOML file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub(crate) size: Option<u32>,
    pub(crate) seed: Option<u64>,
    pub(crate) tick_ms: Option<u64>,
    pub(crate) palette: Option<Palette>,
}

impl FileConfig {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub(crate) fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Values given on the command line; each one overrides the file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Overrides {
    pub(crate) size: Option<u32>,
    pub(crate) seed: Option<u64>,
    pub(crate) colors: Option<usize>,
    pub(crate) tick_ms: Option<u64>,
}

/// Fully resolved game settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) world: WorldConfig,
    pub(crate) tick_interval: Duration,
}

impl Settings {
    /// Layers flags over the file and falls back to defaults.
    ///
    /// `random_seed` is only called when neither source supplies a seed.
    pub(crate) fn resolve<F>(file: FileConfig, overrides: Overrides, random_seed: F) -> Self
    where
        F: FnOnce() -> u64,
    {
        let size = overrides.size.or(file.size).unwrap_or(DEFAULT_SIZE);
        let palette = match overrides.colors {
            Some(count) => Palette::classic_prefix(count),
            None => file.palette.unwrap_or_default(),
        };
        let seed = overrides.seed.or(file.seed).unwrap_or_else(random_seed);
        let tick_interval = overrides
            .tick_ms
            .or(file.tick_ms)
            .map_or(DEFAULT_TICK_INTERVAL, Duration::from_millis);

        Self {
            world: WorldConfig::new(size, palette, seed),
            tick_interval,
        }
    }
}
