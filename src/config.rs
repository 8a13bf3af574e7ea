use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::caption::time::parse_time;

const CONFIG_HEADER: &str = "# Caption Editor TUI configuration\n\n";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    /// Sample videos offered on the start screen
    pub examples: Vec<ExampleVideo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Rewind / fast-forward step in seconds
    pub seek_step_secs: f64,
    /// How often the screen redraws and the clock advances
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleVideo {
    pub name: String,
    pub url: String,
    /// Length as `HH:MM:SS`, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl ExampleVideo {
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration
            .as_deref()
            .and_then(|d| parse_time(d).ok())
            .filter(|d| *d > 0)
            .map(|d| d as f64)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            seek_step_secs: 10.0,
            tick_rate_ms: 100,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let example = |name: &str, file: &str, duration: &str| ExampleVideo {
            name: name.to_string(),
            url: format!(
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/{}",
                file
            ),
            duration: Some(duration.to_string()),
        };

        Self {
            playback: PlaybackConfig::default(),
            examples: vec![
                example("Big Buck Bunny", "BigBuckBunny.mp4", "00:09:56"),
                example("Elephants Dream", "ElephantsDream.mp4", "00:10:53"),
                example("For Bigger Blazes", "ForBiggerBlazes.mp4", "00:00:15"),
            ],
        }
    }
}

impl Config {
    /// Default location: `<config dir>/caption-editor-tui/config.toml`
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("caption-editor-tui").join("config.toml")
        } else {
            PathBuf::from("config.toml")
        }
    }

    /// Load from `path`, or from the default location when `None`.
    /// A missing file at the default location yields the defaults; a
    /// missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !path.exists() {
            if explicit {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse TOML")?;
        if !(config.playback.seek_step_secs.is_finite() && config.playback.seek_step_secs > 0.0) {
            anyhow::bail!(
                "playback.seek_step_secs must be positive, got {}",
                config.playback.seek_step_secs
            );
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        let body = toml::to_string_pretty(self).context("Failed to serialize config")?;
        Ok(format!("{}{}", CONFIG_HEADER, body))
    }

    /// Write the default configuration, creating parent directories.
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, Self::default().to_toml()?)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.playback.tick_rate_ms.max(1))
    }
}
