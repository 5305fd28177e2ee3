use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use termlife_core::Variant;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub variant: Variant,
    /// Scheduling pulses per second; drives both redraws and auto-run.
    pub fps: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Life,
            fps: 25,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub live_color: String,
    pub show_status: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            live_color: "green".to_string(),
            show_status: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: PathBuf,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("termlife.log"),
            level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HeadlessConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    pub headless: HeadlessConfig,
}

impl AppConfig {
    /// Reads `path`. A missing file yields the defaults; anything else that
    /// goes wrong is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content)
                .with_context(|| format!("Invalid config file {}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            (1..=120).contains(&self.simulation.fps),
            "simulation.fps must be between 1 and 120, got {}",
            self.simulation.fps
        );
        self.live_color()?;
        anyhow::ensure!(
            !self.logging.level.trim().is_empty(),
            "logging.level must not be empty"
        );
        anyhow::ensure!(
            self.headless.width > 0 && self.headless.height > 0,
            "headless grid must be at least 1x1"
        );
        Ok(())
    }

    pub fn live_color(&self) -> Result<Color> {
        Color::from_str(&self.display.live_color).map_err(|_| {
            anyhow::anyhow!("Unknown display.live_color `{}`", self.display.live_color)
        })
    }

    /// Rows reserved below the grid.
    pub fn status_rows(&self) -> u16 {
        u16::from(self.display.show_status)
    }
}
