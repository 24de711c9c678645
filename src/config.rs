use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::ConfigError;
use crate::external::gemini::GeminiConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Settings for the analysis proxy, resolved once in `main`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub gemini: GeminiConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. `from_env` is the only
    /// caller outside tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let api_key = lookup("GOOGLE_GEMINI_AI")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("GOOGLE_GEMINI_AI"))?;

        let mut gemini = GeminiConfig::new(api_key);
        if let Some(model) = lookup("GEMINI_MODEL") {
            gemini.model = model;
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            gemini.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = lookup("GEMINI_TIMEOUT_SECS") {
            let secs = raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "GEMINI_TIMEOUT_SECS",
                value: raw.clone(),
            })?;
            gemini.timeout = Some(Duration::from_secs(secs));
        }

        Ok(Self { bind_addr, gemini })
    }
}

/// Settings for the terminal dashboard.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub api_url: String,
    /// Log destination; the terminal itself is reserved for the UI.
    pub log_file: Option<PathBuf>,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("DASHBOARD_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            log_file: lookup("DASHBOARD_LOG_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_with_only_api_key() {
        let config = ServerConfig::from_lookup(lookup_from(&[("GOOGLE_GEMINI_AI", "k")])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.gemini.api_key, "k");
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert!(config.gemini.timeout.is_none());
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let result = ServerConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(ConfigError::Missing("GOOGLE_GEMINI_AI"))));

        let result = ServerConfig::from_lookup(lookup_from(&[("GOOGLE_GEMINI_AI", "  ")]));
        assert!(matches!(result, Err(ConfigError::Missing(_))));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("GOOGLE_GEMINI_AI", "k"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("GEMINI_BASE_URL", "http://localhost:9999/v1beta/"),
            ("GEMINI_TIMEOUT_SECS", "45"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.gemini.base_url, "http://localhost:9999/v1beta");
        assert_eq!(config.gemini.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = ServerConfig::from_lookup(lookup_from(&[
            ("GOOGLE_GEMINI_AI", "k"),
            ("BIND_ADDR", "not-an-addr"),
        ]));
        assert!(matches!(result, Err(ConfigError::Invalid { name: "BIND_ADDR", .. })));

        let result = ServerConfig::from_lookup(lookup_from(&[
            ("GOOGLE_GEMINI_AI", "k"),
            ("GEMINI_TIMEOUT_SECS", "soon"),
        ]));
        assert!(matches!(result, Err(ConfigError::Invalid { name: "GEMINI_TIMEOUT_SECS", .. })));
    }

    #[test]
    fn test_dashboard_defaults() {
        let config = DashboardConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_url, "http://localhost:3000");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_dashboard_overrides_trim_trailing_slash() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            ("DASHBOARD_API_URL", "http://10.0.0.5:8080///"),
            ("DASHBOARD_LOG_FILE", "/tmp/fx-dashboard.log"),
        ]));
        assert_eq!(config.api_url, "http://10.0.0.5:8080");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/fx-dashboard.log")));

        let config = DashboardConfig::from_lookup(lookup_from(&[("DASHBOARD_API_URL", "")]));
        assert_eq!(config.api_url, "http://localhost:3000");
    }
}
