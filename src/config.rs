//! Application configuration and seed loading
//!
//! Preferences live in `~/.config/sourcefilter/config.yaml`. A seed file
//! supplies the initial source hierarchy; it is read once at startup and
//! never written back.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{SourceConfig, DEFAULT_MAX_SOURCES};

/// Default horizontal offset per nesting level, in pixels
pub const DEFAULT_INDENT_PX: u32 = 20;

/// User preferences read at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Cap on top-level sources, used when the seed does not set one
    #[serde(default = "default_max_sources")]
    pub max_sources: u32,
    /// Optional seed file with the initial hierarchy (YAML or JSON)
    #[serde(default)]
    pub seed: Option<PathBuf>,
    /// Horizontal offset per nesting level in rendered rows
    #[serde(default = "default_indent_px")]
    pub indent_px: u32,
}

fn default_max_sources() -> u32 {
    DEFAULT_MAX_SOURCES
}

fn default_indent_px() -> u32 {
    DEFAULT_INDENT_PX
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_sources: default_max_sources(),
            seed: None,
            indent_px: default_indent_px(),
        }
    }
}

impl AppConfig {
    /// Load config from the user config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit path, falling back to defaults on error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Seed file formats, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Yaml,
    Json,
}

impl SeedFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase());

        match extension.as_deref() {
            Some("yaml" | "yml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse seed text and check the hierarchy invariants
pub fn parse_seed(content: &str, format: SeedFormat) -> Result<SourceConfig> {
    let config: SourceConfig = match format {
        SeedFormat::Yaml => serde_yaml::from_str(content).context("invalid YAML seed")?,
        SeedFormat::Json => serde_json::from_str(content).context("invalid JSON seed")?,
    };
    config
        .sources
        .validate()
        .context("seed hierarchy is inconsistent")?;
    Ok(config)
}

/// Read and validate a seed file
pub fn load_seed(path: &Path) -> Result<SourceConfig> {
    let Some(format) = SeedFormat::from_path(path) else {
        bail!(
            "unsupported seed file {} (expected .yaml, .yml or .json)",
            path.display()
        );
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed {}", path.display()))?;
    let config = parse_seed(&content, format)
        .with_context(|| format!("failed to load seed {}", path.display()))?;
    tracing::info!(
        roots = config.sources.root_count(),
        nodes = config.sources.node_count(),
        "Loaded seed from {}",
        path.display()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_format_from_extension() {
        assert_eq!(
            SeedFormat::from_path(Path::new("seed.YAML")),
            Some(SeedFormat::Yaml)
        );
        assert_eq!(
            SeedFormat::from_path(Path::new("seed.yml")),
            Some(SeedFormat::Yaml)
        );
        assert_eq!(
            SeedFormat::from_path(Path::new("seed.json")),
            Some(SeedFormat::Json)
        );
        assert_eq!(SeedFormat::from_path(Path::new("seed.toml")), None);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("max_sources: 4\n").unwrap();
        assert_eq!(config.max_sources, 4);
        assert_eq!(config.indent_px, DEFAULT_INDENT_PX);
        assert_eq!(config.seed, None);
    }
}
