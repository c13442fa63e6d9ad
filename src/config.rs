use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::decode::DecodeMode;
use crate::models::FsRiver;
use crate::units::secs_to_millis;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub decode: DecodeConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub schema: SchemaConfig,
    #[serde(default)]
    pub rivers: BTreeMap<String, RiverConfig>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DecodeConfig {
    #[serde(default)]
    pub mode: DecodeMode,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct SchemaConfig {
    #[serde(default = "default_analyzer")]
    pub analyzer: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            analyzer: default_analyzer(),
        }
    }
}

fn default_analyzer() -> String {
    "standard".to_string()
}

/// A river defined under `[rivers.<name>]`. The table name is the river id.
#[derive(Debug, Deserialize, Clone)]
pub struct RiverConfig {
    pub url: String,
    /// Seconds between crawls.
    #[serde(default = "default_update_rate")]
    pub update_rate: u64,
    #[serde(default)]
    pub includes: Option<String>,
    #[serde(default)]
    pub excludes: Option<String>,
    #[serde(default)]
    pub analyzer: Option<String>,
    #[serde(default)]
    pub index: Option<String>,
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
}

fn default_update_rate() -> u64 {
    900
}

impl RiverConfig {
    pub fn to_river(&self, name: &str) -> FsRiver {
        FsRiver {
            id: Some(name.to_string()),
            name: Some(name.to_string()),
            url: Some(self.url.clone()),
            update_rate: Some(self.update_rate),
            includes: self.includes.clone(),
            excludes: self.excludes.clone(),
            analyzer: self.analyzer.clone(),
            index_name: self.index.clone(),
            type_name: self.type_name.clone(),
        }
    }
}

impl Config {
    /// Looks up a configured river by name.
    pub fn river(&self, name: &str) -> Result<FsRiver> {
        let river = self.rivers.get(name).with_context(|| {
            format!(
                "Unknown river '{}'. Configured rivers: {}",
                name,
                self.rivers.keys().cloned().collect::<Vec<_>>().join(", ")
            )
        })?;
        Ok(river.to_river(name))
    }
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    if config.schema.analyzer.trim().is_empty() {
        anyhow::bail!("schema.analyzer must not be empty");
    }

    for (name, river) in &config.rivers {
        if name.trim().is_empty() {
            anyhow::bail!("river names must not be empty");
        }
        if river.url.trim().is_empty() {
            anyhow::bail!("rivers.{}.url must not be empty", name);
        }
        if secs_to_millis(river.update_rate).is_none() {
            anyhow::bail!("rivers.{}.update_rate is too large", name);
        }
    }

    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
}
