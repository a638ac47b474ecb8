use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::layout::{OutputLayout, DEFAULT_DIRECTORY, DEFAULT_EXTENSION};

/// Configuration file structure for gadk.
///
/// Lets a repository move the generated workflows without touching its
/// definitions. Configuration files are loaded from the current directory or
/// a specified path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Where generated workflows are written
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Directory holding the generated workflow files
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Extension of the generated workflow files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(DEFAULT_DIRECTORY)
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Config {
    /// Load configuration from a file.
    ///
    /// Searches for configuration files in this order:
    /// 1. Specified path
    /// 2. ./gadk.toml
    /// 3. ./gadk.json
    /// 4. ./gadk.yaml
    /// 5. ./gadk.yml
    ///
    /// Returns default configuration if no file is found.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }

        let candidates = ["gadk.toml", "gadk.json", "gadk.yaml", "gadk.yml"];

        for candidate in &candidates {
            let path = Path::new(candidate);
            if path.exists() {
                return Self::load_from_path(path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file path.
    fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match extension {
            "toml" => {
                toml::from_str(&contents)
                    .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
            }
            "json" => {
                serde_json::from_str(&contents)
                    .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
            }
            "yaml" | "yml" => {
                serde_yaml::from_str(&contents)
                    .with_context(|| format!("Failed to parse YAML config: {}", path.display()))
            }
            _ => {
                // Try TOML first, then JSON, then YAML
                toml::from_str(&contents)
                    .or_else(|_| serde_json::from_str(&contents))
                    .or_else(|_| serde_yaml::from_str(&contents))
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))
            }
        }
    }

    /// Output layout, with `directory` taking precedence over the configured one.
    pub fn layout(&self, directory: Option<&Path>) -> Result<OutputLayout> {
        let directory = directory.unwrap_or(self.output.directory.as_path());
        OutputLayout::new(directory, self.output.extension.clone())
            .context("Invalid [output] configuration")
    }
}
