use crate::error::{Error, Result};
use crate::graph::CONTAINER_FILL;
use crate::model::palette::{is_hex_color, PALETTE};
use crate::model::ColorAllocator;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub graph: GraphConfig,
    pub palette: PaletteConfig,
}

/// Graph rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Layout engine binary
    pub engine: String,
    /// Spline edge routing
    pub splines: bool,
    /// Fill color for container nodes
    pub container_fill: String,
}

/// Network color settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Colors assigned to networks in order
    pub colors: Vec<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            engine: "sfdp".to_string(),
            splines: true,
            container_fill: CONTAINER_FILL.to_string(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(&mut self, engine: Option<String>) {
        if let Some(engine) = engine {
            self.graph.engine = engine;
        }
    }

    /// Build the per-snapshot color allocator from the configured palette
    pub fn allocator(&self) -> ColorAllocator {
        ColorAllocator::with_palette(self.palette.colors.clone())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.graph.engine.trim().is_empty() {
            return Err(Error::config_validation("graph engine must not be empty"));
        }

        if !is_hex_color(&self.graph.container_fill) {
            return Err(Error::config_validation(format!(
                "container_fill must be a #RRGGBB color, got {}",
                self.graph.container_fill
            )));
        }

        if self.palette.colors.is_empty() {
            return Err(Error::config_validation("palette must have at least one color"));
        }

        for color in &self.palette.colors {
            if !is_hex_color(color) {
                return Err(Error::config_validation(format!(
                    "palette colors must be #RRGGBB, got {}",
                    color
                )));
            }
        }

        Ok(())
    }
}
