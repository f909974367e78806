//! Configuration
//!
//! Defaults, overridable from `<meta name="beer-catalog:...">` tags of the host page.

use log::LevelFilter;
use std::str::FromStr;

pub const DEFAULT_API_BASE: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

const META_API_BASE: &str = "beer-catalog:api-base";
const META_TIMEOUT_MS: &str = "beer-catalog:timeout-ms";
const META_LOG_LEVEL: &str = "beer-catalog:log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend root, without trailing slash
    pub api_base: String,
    pub request_timeout_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build from a key lookup; missing or invalid values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = lookup(META_API_BASE) {
            let base = base.trim().trim_end_matches('/');
            if base.is_empty() {
                log::warn!("ignoring empty {}", META_API_BASE);
            } else {
                config.api_base = base.to_string();
            }
        }
        if let Some(raw) = lookup(META_TIMEOUT_MS) {
            match raw.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => config.request_timeout_ms = ms,
                _ => log::warn!("ignoring invalid {}: {:?}", META_TIMEOUT_MS, raw),
            }
        }
        if let Some(raw) = lookup(META_LOG_LEVEL) {
            match LevelFilter::from_str(raw.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("ignoring invalid {}: {:?}", META_LOG_LEVEL, raw),
            }
        }

        config
    }

    /// Read overrides from the current document
    pub fn from_document() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        Self::from_lookup(|name| {
            let document = document.as_ref()?;
            let selector = format!("meta[name=\"{}\"]", name);
            document
                .query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"))
        })
    }

    pub fn beers_url(&self) -> String {
        format!("{}/beers", self.api_base)
    }

    pub fn beer_url(&self, id: u32) -> String {
        format!("{}/beers/{}", self.api_base, id)
    }
}
