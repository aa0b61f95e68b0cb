//! Configuration: `~/.longshot/config.toml` plus environment overrides.
//!
//! Everything is optional. Without an analytics endpoint the tracker runs
//! disabled; without an `[app]` table sound starts on.

use std::path::PathBuf;
use std::{env, fs};

use serde::Deserialize;

use longshot_tracker::TrackerConfig;

const ANALYTICS_URL_VAR: &str = "LONGSHOT_ANALYTICS_URL";
const ANALYTICS_KEY_VAR: &str = "LONGSHOT_ANALYTICS_KEY";

#[derive(Debug, Default, Deserialize)]
pub struct LongshotConfig {
    pub app: Option<AppConfig>,
    pub analytics: Option<AnalyticsConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Start with sound on? Defaults to true.
    pub sound: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsConfig {
    pub url: Option<String>,
    pub key: Option<String>,
}

impl LongshotConfig {
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".longshot").join("config.toml"))
    }

    /// Read the config file if present. A malformed file is logged and
    /// treated as absent rather than stopping the show.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        let Ok(raw) = fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), "ignoring malformed config: {err}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.app
            .as_ref()
            .and_then(|app| app.sound)
            .unwrap_or(true)
    }

    /// Endpoint and key for the tracker, environment winning over file.
    /// `None` unless both are present.
    #[must_use]
    pub fn resolve_analytics(&self) -> Option<TrackerConfig> {
        let file = self.analytics.as_ref();
        let url = env::var(ANALYTICS_URL_VAR)
            .ok()
            .or_else(|| file.and_then(|a| a.url.clone()))?;
        let key = env::var(ANALYTICS_KEY_VAR)
            .ok()
            .or_else(|| file.and_then(|a| a.key.clone()))?;
        if url.trim().is_empty() || key.trim().is_empty() {
            return None;
        }
        Some(TrackerConfig { url, key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let config: LongshotConfig = toml::from_str(
            r#"
            [app]
            sound = false

            [analytics]
            url = "https://records.example"
            key = "anon"
            "#,
        )
        .expect("config parses");

        assert!(!config.sound_enabled());
        let analytics = config.resolve_analytics().expect("analytics configured");
        assert_eq!(analytics.url, "https://records.example");
        assert_eq!(analytics.key, "anon");
    }

    #[test]
    fn defaults_apply_with_an_empty_config() {
        let config = LongshotConfig::default();
        assert!(config.sound_enabled());
    }

    #[test]
    fn analytics_needs_both_url_and_key() {
        let config: LongshotConfig = toml::from_str(
            r#"
            [analytics]
            url = "https://records.example"
            "#,
        )
        .expect("config parses");
        assert!(config.resolve_analytics().is_none());
    }
}
