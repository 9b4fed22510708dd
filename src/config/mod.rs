// src/config/mod.rs
//! Service configuration: defaults, then an optional TOML file, then env.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ingest::providers::{ftc, ic3, ssa_oig};

pub const ENV_CONFIG_PATH: &str = "SCAM_FEED_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config/scam_feed.toml";
pub const ENV_PORT: &str = "PORT";
pub const ENV_CACHE_TTL_SECS: &str = "FEED_CACHE_TTL_SECS";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Listing page per source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListingUrls {
    pub ftc: String,
    pub ic3: String,
    pub ssa_oig: String,
}

impl Default for ListingUrls {
    fn default() -> Self {
        Self {
            ftc: ftc::LISTING_URL.to_string(),
            ic3: ic3::LISTING_URL.to_string(),
            ssa_oig: ssa_oig::LISTING_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub port: u16,
    pub cache_ttl_secs: u64,
    pub listing_urls: ListingUrls,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            listing_urls: ListingUrls::default(),
        }
    }
}

impl AppConfig {
    /// Resolve the full configuration:
    /// 1) $SCAM_FEED_CONFIG_PATH (must exist)
    /// 2) config/scam_feed.toml (if present)
    /// 3) built-in defaults
    ///
    /// `PORT` and `FEED_CACHE_TTL_SECS` override whatever the file says.
    pub fn load() -> Result<Self> {
        let base = match std::env::var(ENV_CONFIG_PATH) {
            Ok(p) => {
                let pb = PathBuf::from(p);
                if !pb.exists() {
                    return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
                }
                Self::load_from(&pb)?
            }
            Err(_) => {
                let pb = PathBuf::from(DEFAULT_CONFIG_PATH);
                if pb.exists() {
                    Self::load_from(&pb)?
                } else {
                    Self::default()
                }
            }
        };
        Ok(base.with_env_overrides(|k| std::env::var(k).ok()))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Apply env overrides; unparseable values are ignored with a warning.
    pub fn with_env_overrides<F>(mut self, get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = get(ENV_PORT) {
            match raw.trim().parse::<u16>() {
                Ok(p) => self.port = p,
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid {ENV_PORT}"),
            }
        }
        if let Some(raw) = get(ENV_CACHE_TTL_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(s) => self.cache_ttl_secs = s,
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid {ENV_CACHE_TTL_SECS}"),
            }
        }
        self
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
