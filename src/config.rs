//! Build-time configuration for the backend connection.
//!
//! Values are baked in with `option_env!` when the binary is compiled:
//! - `FILEBOX_BACKEND_URL`: base URL of the file backend
//! - `FILEBOX_REQUEST_TIMEOUT_SECS`: optional per-request timeout
//! - `FILEBOX_VIEW`: `grid` (default) or `list`

use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid backend URL '{0}': {1}")]
    InvalidUrl(String, String),
    #[error("Backend URL '{0}' cannot be used as a base for endpoints")]
    NotABase(String),
    #[error("Invalid request timeout '{0}'")]
    InvalidTimeout(String),
    #[error("Unknown view '{0}', expected 'grid' or 'list'")]
    UnknownView(String),
}

/// Which rendering strategy the file list uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    #[default]
    Grid,
    List,
}

impl ViewKind {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_lowercase().as_str() {
            "" | "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            _ => Err(ConfigError::UnknownView(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: Url,
    pub request_timeout: Option<Duration>,
    pub view: ViewKind,
}

impl BackendConfig {
    /// Reads the values captured at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("FILEBOX_BACKEND_URL"),
            option_env!("FILEBOX_REQUEST_TIMEOUT_SECS"),
            option_env!("FILEBOX_VIEW"),
        )
    }

    pub fn from_values(
        base_url: Option<&str>,
        timeout_secs: Option<&str>,
        view: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let raw_url = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL);

        let base_url = Url::parse(raw_url)
            .map_err(|e| ConfigError::InvalidUrl(raw_url.to_string(), e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(raw_url.to_string()));
        }

        let request_timeout = match timeout_secs.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.to_string()))?;
                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout(raw.to_string()));
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let view = match view {
            Some(raw) => ViewKind::parse(raw)?,
            None => ViewKind::default(),
        };

        Ok(Self {
            base_url,
            request_timeout,
            view,
        })
    }

    /// Joins path segments onto the base URL, escaping each one.
    ///
    /// A trailing slash on the base is dropped so `http://x/api/` and
    /// `http://x/api` produce the same endpoints.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = BackendConfig::from_values(None, None, None).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:5000/");
        assert_eq!(config.request_timeout, None);
        assert_eq!(config.view, ViewKind::Grid);
    }

    #[test]
    fn test_blank_url_falls_back_to_default() {
        let config = BackendConfig::from_values(Some("  "), None, None).unwrap();
        assert_eq!(config.base_url.host_str(), Some("localhost"));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = BackendConfig::from_values(Some("not a url"), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(..)));

        let err = BackendConfig::from_values(Some("mailto:me@example.com"), None, None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::NotABase(_)));
    }

    #[test]
    fn test_timeout_and_view() {
        let config =
            BackendConfig::from_values(Some("http://files.local"), Some("15"), Some("LIST"))
                .unwrap();
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.view, ViewKind::List);

        assert!(matches!(
            BackendConfig::from_values(None, Some("0"), None),
            Err(ConfigError::InvalidTimeout(_))
        ));
        assert!(matches!(
            BackendConfig::from_values(None, None, Some("table")),
            Err(ConfigError::UnknownView(_))
        ));
    }

    #[test]
    fn test_endpoint_escapes_segments() {
        let config = BackendConfig::from_values(Some("http://x/api/"), None, None).unwrap();
        assert_eq!(config.endpoint(&["files"]).as_str(), "http://x/api/files");
        assert_eq!(
            config.endpoint(&["delete", "my file#1?.txt"]).as_str(),
            "http://x/api/delete/my%20file%231%3F.txt"
        );
        assert_eq!(
            config.endpoint(&["delete", "a/b.png"]).as_str(),
            "http://x/api/delete/a%2Fb.png"
        );
    }

    #[test]
    fn test_endpoint_on_bare_host() {
        let config = BackendConfig::from_values(Some("http://x"), None, None).unwrap();
        assert_eq!(config.endpoint(&["upload"]).as_str(), "http://x/upload");
    }
}
