use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::query::LayerPrecedence;

/// Layer precedence used by the agent index page.
pub const DEFAULT_LAYER_PRECEDENCE: [&str; 5] = ["SOUL", "MIND", "META", "BODY", "SOUL/BODY"];

const DEFAULT_CONFIG_FILE: &str = "gridlore.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gridlore: GridloreConfig,
    #[serde(default)]
    pub ordering: OrderingConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub cards: CardsConfig,
    /// File this configuration was read from; `None` for built-in defaults
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Process-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct GridloreConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GridloreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Where records whose layer is missing from the precedence list are placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownLayerPlacement {
    /// Before every recognized layer (legacy index-page behavior)
    Start,
    #[default]
    End,
}

/// Category ordering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OrderingConfig {
    #[serde(default = "default_layer_precedence")]
    pub layer_precedence: Vec<String>,
    #[serde(default)]
    pub unknown_layer: UnknownLayerPlacement,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            layer_precedence: default_layer_precedence(),
            unknown_layer: UnknownLayerPlacement::default(),
        }
    }
}

impl OrderingConfig {
    pub fn precedence(&self) -> LayerPrecedence {
        LayerPrecedence::new(self.layer_precedence.clone(), self.unknown_layer)
    }
}

/// How dangling relation ids are treated when the store is built
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingPolicy {
    /// Log a warning and skip the id at query time
    #[default]
    Warn,
    /// Refuse to build the store
    Deny,
}

/// Dataset validation configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub dangling_references: DanglingPolicy,
}

impl ValidationConfig {
    pub fn strict() -> Self {
        Self {
            dangling_references: DanglingPolicy::Deny,
        }
    }
}

/// Index card rendering
#[derive(Debug, Clone, Deserialize)]
pub struct CardsConfig {
    /// Number of soulprint traits shown on agent cards
    #[serde(default = "default_preview_len")]
    pub preview_len: usize,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            preview_len: default_preview_len(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_layer_precedence() -> Vec<String> {
    DEFAULT_LAYER_PRECEDENCE.iter().map(|s| s.to_string()).collect()
}

fn default_preview_len() -> usize {
    2
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in GRIDLORE_CONFIG environment variable
    /// 2. ./gridlore.toml in current directory
    ///
    /// Falls back to built-in defaults when neither is present.
    pub fn load() -> Result<Self> {
        let _ = dotenv::dotenv();

        match std::env::var("GRIDLORE_CONFIG") {
            Ok(path) => Self::from_path(Path::new(&path)),
            Err(_) => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_path(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate configuration from an explicit path
    pub fn from_path(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config = Self::parse(&config_str)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.ordering.layer_precedence.is_empty() {
            anyhow::bail!("ordering.layer_precedence must list at least one layer");
        }

        let mut seen = HashSet::new();
        for layer in &self.ordering.layer_precedence {
            if layer.trim().is_empty() {
                anyhow::bail!("ordering.layer_precedence contains an empty layer name");
            }
            if !seen.insert(layer.as_str()) {
                anyhow::bail!("ordering.layer_precedence lists '{}' more than once", layer);
            }
        }

        if self.cards.preview_len == 0 {
            anyhow::bail!("cards.preview_len must be greater than 0");
        }

        Ok(())
    }

    pub fn precedence(&self) -> LayerPrecedence {
        self.ordering.precedence()
    }

    /// Human-readable origin of this configuration, for startup logging
    pub fn describe_source(&self) -> String {
        match &self.source {
            Some(path) => path.display().to_string(),
            None => "built-in defaults".to_string(),
        }
    }
}
