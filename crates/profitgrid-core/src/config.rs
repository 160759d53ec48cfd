//! Client configuration resolved from defaults and `PROFITGRID_*` environment variables.

use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;

pub const ENV_API_BASE_URL: &str = "PROFITGRID_API_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "PROFITGRID_TIMEOUT_MS";
pub const ENV_SESSION_FILE: &str = "PROFITGRID_SESSION_FILE";

/// Settings shared by the API client and the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub timeout_ms: u64,
    pub session_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            session_path: default_session_path(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by whichever `PROFITGRID_*` variables are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_BASE_URL).filter(|value| !value.trim().is_empty()) {
            config.api_base_url = url;
        }
        if let Some(timeout_ms) = lookup(ENV_TIMEOUT_MS).and_then(|value| value.trim().parse().ok()) {
            config.timeout_ms = timeout_ms;
        }
        if let Some(path) = lookup(ENV_SESSION_FILE).filter(|value| !value.trim().is_empty()) {
            config.session_path = PathBuf::from(path);
        }

        config.api_base_url = normalize_base_url(&config.api_base_url);
        config
    }

    pub fn with_api_base_url(mut self, url: impl AsRef<str>) -> Self {
        self.api_base_url = normalize_base_url(url.as_ref());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = path.into();
        self
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

fn default_session_path() -> PathBuf {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(".profitgrid").join("session.json")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.timeout_ms, 3_000);
        assert!(config.session_path.ends_with(".profitgrid/session.json"));
    }

    #[test]
    fn environment_overrides_defaults() {
        let env = HashMap::from([
            (ENV_API_BASE_URL, "https://grid.example.com/"),
            (ENV_TIMEOUT_MS, "9000"),
            (ENV_SESSION_FILE, "/tmp/pg.json"),
        ]);
        let config = ClientConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_base_url, "https://grid.example.com");
        assert_eq!(config.timeout_ms, 9_000);
        assert_eq!(config.session_path, PathBuf::from("/tmp/pg.json"));
    }

    #[test]
    fn unparsable_timeout_keeps_default() {
        let config = ClientConfig::from_lookup(|key| {
            (key == ENV_TIMEOUT_MS).then(|| String::from("soon"))
        });
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }
}
