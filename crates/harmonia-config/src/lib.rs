// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::Path;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutotagConfig {
    /// When true, a strong catalog-ID match still competes against search
    /// results instead of short-circuiting the album tagger (see
    /// `harmonia_autotag::tagger::AutotagConfig`).
    pub interactive_autotag: bool,
}

impl Default for AutotagConfig {
    fn default() -> Self {
        Self {
            interactive_autotag: false,
        }
    }
}

impl harmonia_autotag::AutotagConfig for AutotagConfig {
    fn interactive_autotag(&self) -> bool {
        self.interactive_autotag
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicBrainzConfig {
    pub base_url: String,
    pub rate_limit_interval_ms: u64,
    pub timeout_secs: u64,
}

impl Default for MusicBrainzConfig {
    fn default() -> Self {
        Self {
            base_url: "https://musicbrainz.org/ws/2".to_string(),
            rate_limit_interval_ms: 1000,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub autotag: AutotagConfig,
    pub musicbrainz: MusicBrainzConfig,
    pub telemetry: TelemetryConfig,
}

/// Load configuration from defaults, optional TOML file, and environment
/// overrides (prefix: `HARMONIA_`, nested fields separated by `__`, e.g.
/// `HARMONIA_AUTOTAG__INTERACTIVE_AUTOTAG=true`).
pub fn load(config_path: Option<&Path>) -> Result<AppConfig> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("HARMONIA_").split("__"));

    let config: AppConfig = figment.extract()?;
    info!(target: "config", "configuration loaded");
    Ok(config)
}
