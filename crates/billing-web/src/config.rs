//! Frontend Configuration
//!
//! A WASM bundle has no process environment, so overrides are read from the
//! build environment with `option_env!`.

use billing_core::{BillingError, Result};

const DEFAULT_ACCOUNT_PATH: &str = "/api/v1/me";
const DEFAULT_FALLBACK_ORIGIN: &str = "http://localhost:3000";
pub(crate) const DEFAULT_LOG_FILTER: &str = "info,billing_core=debug,billing_web=debug";

/// Settings baked into the bundle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebConfig {
    /// Path of the current-account endpoint
    pub account_path: String,

    /// Origin used when the page origin is unavailable
    pub fallback_origin: String,

    /// `tracing` filter directives for the browser console
    pub log_filter: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            account_path: DEFAULT_ACCOUNT_PATH.into(),
            fallback_origin: DEFAULT_FALLBACK_ORIGIN.into(),
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

impl WebConfig {
    /// Defaults, overridden by `BILLING_ACCOUNT_PATH`, `BILLING_FALLBACK_ORIGIN`
    /// and `BILLING_LOG` at build time
    pub fn from_build_env() -> Self {
        let defaults = Self::default();
        Self {
            account_path: option_env!("BILLING_ACCOUNT_PATH")
                .map_or(defaults.account_path, Into::into),
            fallback_origin: option_env!("BILLING_FALLBACK_ORIGIN")
                .map_or(defaults.fallback_origin, Into::into),
            log_filter: option_env!("BILLING_LOG").map_or(defaults.log_filter, Into::into),
        }
    }

    /// Absolute URL of the account endpoint
    pub fn account_url(&self, origin: Option<&str>) -> Result<String> {
        let origin = origin.unwrap_or(&self.fallback_origin).trim_end_matches('/');

        if !(origin.starts_with("http://") || origin.starts_with("https://")) {
            return Err(BillingError::Config(format!(
                "origin \"{origin}\" is not an http(s) URL"
            )));
        }

        Ok(format!("{}/{}", origin, self.account_path.trim_start_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn test_default_account_url() {
        let config = WebConfig::default();
        assert_eq!(
            config.account_url(Some("https://app.example.com")).unwrap(),
            "https://app.example.com/api/v1/me"
        );
    }

    #[test]
    fn test_falls_back_without_origin() {
        let config = WebConfig::default();
        assert_eq!(
            config.account_url(None).unwrap(),
            "http://localhost:3000/api/v1/me"
        );
    }

    #[test]
    fn test_joins_slashes_once() {
        let config = WebConfig {
            account_path: "api/me".into(),
            ..Default::default()
        };
        assert_eq!(
            config.account_url(Some("https://a.io/")).unwrap(),
            "https://a.io/api/me"
        );
    }

    #[test]
    fn test_rejects_non_http_origin() {
        let config = WebConfig {
            fallback_origin: "localhost:3000".into(),
            ..Default::default()
        };
        assert!(matches!(config.account_url(None), Err(BillingError::Config(_))));
        assert!(matches!(
            config.account_url(Some("file://")),
            Err(BillingError::Config(_))
        ));
    }

    #[test]
    fn test_default_log_filter_parses() {
        let config = WebConfig::default();
        assert!(EnvFilter::try_new(&config.log_filter).is_ok());
    }
}
