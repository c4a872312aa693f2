// src/config.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

const ENV_CONFIG_PATH: &str = "HOT_TOPICS_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config/hot-topics.toml";

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Client-side settings. The base URL and timeout feed the fetch client; the
/// weather and map keys are declared surface for sibling widgets of the same
/// frontend and are not read by the hot-topics path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub qweather_api_key: String,
    pub amap_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            qweather_api_key: String::new(),
            amap_key: String::new(),
        }
    }
}

impl Settings {
    /// Load settings using env var + fallbacks:
    /// 1) TOML file at $HOT_TOPICS_CONFIG_PATH (error if it points nowhere)
    /// 2) config/hot-topics.toml
    /// 3) built-in defaults
    /// then apply env overrides (API_BASE_URL, API_TIMEOUT_SECS,
    /// QWEATHER_API_KEY, AMAP_KEY), which win over file values.
    pub fn load() -> Result<Self> {
        // Pick up .env in local/dev; no-op when absent.
        let _ = dotenvy::dotenv();

        let mut settings = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
            }
            Self::load_from(&pb)?
        } else {
            let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
            if default_p.exists() {
                Self::load_from(&default_p)?
            } else {
                Self::default()
            }
        };

        if let Ok(v) = std::env::var("API_BASE_URL") {
            settings.api_base_url = v;
        }
        if let Ok(v) = std::env::var("API_TIMEOUT_SECS") {
            settings.request_timeout_secs = v
                .parse()
                .with_context(|| format!("parsing API_TIMEOUT_SECS={v}"))?;
        }
        if let Ok(v) = std::env::var("QWEATHER_API_KEY") {
            settings.qweather_api_key = v;
        }
        if let Ok(v) = std::env::var("AMAP_KEY") {
            settings.amap_key = v;
        }
        Ok(settings)
    }

    /// Load settings from an explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("parsing settings from {}", path.display()))
    }
}
