//! Generator configuration.
//!
//! Handles loading, validating, and merging `casino-gen.toml`. The layout
//! theme itself is never configured here: it is sampled fresh every run.
//! This file only covers the collaborators around it (content API,
//! thumbnail downloads, an optional site name).
//!
//! ## Config File Location
//!
//! `--config PATH` if given, else `casino-gen.toml` in the working directory
//! if present, else the stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [api]
//! endpoint = "https://slotslaunch.com/api/games"
//! per_page = 150            # 1-500
//! timeout_secs = 15
//! # token = "..."           # or CASINO_GEN_API_TOKEN / --api-token
//! embed_base = "https://slotslaunch.com/iframe"
//!
//! [thumbnails]
//! download = true
//! timeout_secs = 10
//!
//! [site]
//! # name = "Golden Jackpot Arena"
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Looked up in the working directory when `--config` isn't given.
pub const DEFAULT_CONFIG_FILE: &str = "casino-gen.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Generator configuration loaded from `casino-gen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Content API connection settings.
    pub api: ApiConfig,
    /// Thumbnail download settings.
    pub thumbnails: ThumbnailsConfig,
    /// Site identity overrides.
    pub site: SiteSection,
}

impl GeneratorConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.endpoint.trim().is_empty() {
            return Err(ConfigError::Validation("api.endpoint must not be empty".into()));
        }
        if !(1..=500).contains(&self.api.per_page) {
            return Err(ConfigError::Validation("api.per_page must be 1-500".into()));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Validation("api.timeout_secs must be non-zero".into()));
        }
        if self.thumbnails.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "thumbnails.timeout_secs must be non-zero".into(),
            ));
        }
        if self.site.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ConfigError::Validation("site.name must not be blank".into()));
        }
        Ok(())
    }
}

/// Content API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Game listing endpoint.
    pub endpoint: String,
    /// Records requested per call.
    pub per_page: u32,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Bearer token. Sent only when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Base URL for game iframes; the game id is appended.
    pub embed_base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://slotslaunch.com/api/games".to_string(),
            per_page: 150,
            timeout_secs: 15,
            token: None,
            embed_base: "https://slotslaunch.com/iframe".to_string(),
        }
    }
}

/// Thumbnail download settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailsConfig {
    /// Fetch each game's thumbnail into `images/games/`.
    pub download: bool,
    /// Per-download timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ThumbnailsConfig {
    fn default() -> Self {
        Self {
            download: true,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Fixed site name instead of a generated one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GeneratorConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GeneratorConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GeneratorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the effective configuration.
///
/// An explicit path must exist; the implicit `casino-gen.toml` is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<GeneratorConfig, ConfigError> {
    let overlay = match explicit {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            Some(toml::from_str(&content)?)
        }
        None => load_raw_config(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `casino-gen.toml`.
///
/// Used by `casino-gen --gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# casino-gen configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# The site theme (layouts, colors, naming) is sampled fresh on every run and
# cannot be set here. Use --seed to reproduce a run.
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Content API
# ---------------------------------------------------------------------------
[api]
# Game listing endpoint. Queried with ?published=1&per_page=N.
endpoint = "https://slotslaunch.com/api/games"

# Records requested per call (1-500).
per_page = 150

# Request timeout in seconds. On timeout the built-in game list is used.
timeout_secs = 15

# Bearer token for the API. Prefer the CASINO_GEN_API_TOKEN environment
# variable or --api-token over storing it here.
# token = ""

# Base URL for game iframes. The game id is appended: {embed_base}/{id}
embed_base = "https://slotslaunch.com/iframe"

# ---------------------------------------------------------------------------
# Thumbnails
# ---------------------------------------------------------------------------
[thumbnails]
# Download each game's thumbnail to images/games/{slug}-{id}.jpg.
# Pages reference these paths whether or not the download succeeds.
download = true

# Per-download timeout in seconds.
timeout_secs = 10

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Fixed display name. Omit to generate one ("Golden Jackpot Arena").
# name = "My Casino"
"##
}
