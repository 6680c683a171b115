//! Client configuration.
//!
//! Everything the client needs to know about where and how to talk to the
//! Web Modeler API is captured in a [`ModelerConfig`] value that is handed to
//! the client at construction. Environment variables are only consulted when
//! the caller asks for it through [`ModelerConfig::from_env`].

use crate::{Error, ErrorContext, Result};
use std::env;
use std::time::Duration;

/// Production API root.
pub const DEFAULT_API_ROOT: &str = "https://modeler.cloud.camunda.io/api";

/// API version segment appended to the root.
pub const API_VERSION: &str = "v1";

/// Client identity used in the `user-agent` header.
pub const CLIENT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Overrides [`ModelerConfig::api_root`].
pub const ENV_API_ROOT: &str = "CAMUNDA_MODELER_BASE_URL";
/// Overrides [`ModelerConfig::timeout`] (whole seconds).
pub const ENV_TIMEOUT_SECS: &str = "MODELER_HTTP_TIMEOUT_SECS";
/// Sets [`ModelerConfig::proxy`].
pub const ENV_PROXY_URL: &str = "MODELER_PROXY_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelerConfig {
    /// Server root without the version segment, e.g. `https://modeler.example.com/api`.
    pub api_root: String,
    /// Appended to the user agent after a single space.
    pub user_agent_suffix: Option<String>,
    /// Per-request timeout applied by the default transport.
    pub timeout: Duration,
    /// Proxy for all requests made by the default transport.
    pub proxy: Option<String>,
}

impl Default for ModelerConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            user_agent_suffix: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            proxy: None,
        }
    }
}

impl ModelerConfig {
    /// Defaults, with overrides read once from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(root) = lookup(ENV_API_ROOT).filter(|s| !s.trim().is_empty()) {
            config.api_root = root;
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).and_then(|s| s.trim().parse::<u64>().ok()) {
            config.timeout = Duration::from_secs(secs.max(1));
        }

        config.proxy = lookup(ENV_PROXY_URL).filter(|s| !s.trim().is_empty());
        config
    }

    pub fn with_api_root(mut self, root: impl Into<String>) -> Self {
        self.api_root = root.into();
        self
    }

    pub fn with_user_agent_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// `<api_root>/v1`.
    pub fn base_url(&self) -> String {
        format!("{}/{}", self.api_root.trim_end_matches('/'), API_VERSION)
    }

    /// `<client-name>/<version>[ <suffix>]`.
    pub fn user_agent(&self) -> String {
        match self.user_agent_suffix.as_deref() {
            Some(suffix) if !suffix.is_empty() => {
                format!("{}/{} {}", CLIENT_NAME, CLIENT_VERSION, suffix)
            }
            _ => format!("{}/{}", CLIENT_NAME, CLIENT_VERSION),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api_root).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid API root: {}", e),
                ErrorContext::new()
                    .with_field_path("api_root")
                    .with_details(self.api_root.clone())
                    .with_source("config"),
            )
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("Unsupported API root scheme: {}", parsed.scheme()),
                ErrorContext::new()
                    .with_field_path("api_root")
                    .with_details("expected http or https")
                    .with_source("config"),
            ));
        }

        if self.timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "Timeout must be greater than zero",
                ErrorContext::new()
                    .with_field_path("timeout")
                    .with_source("config"),
            ));
        }

        Ok(())
    }
}
