use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level boreas configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BoreasConfig {
    /// Download settings.
    #[serde(default)]
    pub fetch: FetchToml,

    /// Geosphere hub settings.
    #[serde(default)]
    pub geosphere: GeosphereToml,

    /// Observation writer settings.
    #[serde(default)]
    pub obs: ObsToml,
}

impl BoreasConfig {
    /// Loads the configuration from `path`, or falls back to defaults
    /// when the file does not exist. The object is constructed here and
    /// passed down explicitly; nothing reads it globally.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&text).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchToml {
    #[serde(default = "default_savefolder")]
    pub savefolder: PathBuf,
    #[serde(default = "default_max_sleep")]
    pub max_sleep_secs: f64,
    #[serde(default = "default_grid")]
    pub grid: String,
    #[serde(default = "default_bottom")]
    pub bottom: i32,
    #[serde(default = "default_top")]
    pub top: i32,
    #[serde(default = "default_left")]
    pub left: i32,
    #[serde(default = "default_right")]
    pub right: i32,
}

impl Default for FetchToml {
    fn default() -> Self {
        Self {
            savefolder: default_savefolder(),
            max_sleep_secs: default_max_sleep(),
            grid: default_grid(),
            bottom: default_bottom(),
            top: default_top(),
            left: default_left(),
            right: default_right(),
        }
    }
}

fn default_savefolder() -> PathBuf {
    PathBuf::from("download_wrf")
}
fn default_max_sleep() -> f64 {
    2.0
}
fn default_grid() -> String {
    "1p00".to_string()
}
fn default_bottom() -> i32 {
    10
}
fn default_top() -> i32 {
    70
}
fn default_left() -> i32 {
    0
}
fn default_right() -> i32 {
    360
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeosphereToml {
    #[serde(default = "default_resource")]
    pub resource: String,
    #[serde(default = "default_dataset_type")]
    pub dataset_type: String,
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Parameters to request; defaults to the set WRF nudging consumes.
    #[serde(default = "default_parameters")]
    pub parameters: Vec<String>,
}

impl Default for GeosphereToml {
    fn default() -> Self {
        Self {
            resource: default_resource(),
            dataset_type: default_dataset_type(),
            mode: default_mode(),
            parameters: default_parameters(),
        }
    }
}

fn default_resource() -> String {
    "klima-v2-10min".to_string()
}
fn default_dataset_type() -> String {
    "station".to_string()
}
fn default_mode() -> String {
    "historical".to_string()
}
fn default_parameters() -> Vec<String> {
    boreas_fetch::geosphere::WRF_FDDA_PARAMETERS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObsToml {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for ObsToml {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            source: default_source(),
        }
    }
}

fn default_prefix() -> String {
    "OBS_DOMAIN".to_string()
}
fn default_source() -> String {
    "Geosphere Austria".to_string()
}
