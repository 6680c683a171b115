use crate::auth::CredentialProvider;
use crate::client::core::ModelerClient;
use crate::config::ModelerConfig;
use crate::transport::{ReqwestTransport, Transport};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Builder for [`ModelerClient`].
///
/// Without an explicit [`config`](Self::config) the builder starts from
/// [`ModelerConfig::from_env`]; individual setters override on top of that.
pub struct ModelerClientBuilder {
    config: Option<ModelerConfig>,
    api_root: Option<String>,
    user_agent_suffix: Option<String>,
    timeout: Option<Duration>,
    proxy: Option<String>,
    credentials: Option<Arc<dyn CredentialProvider>>,
    /// Replace the HTTP layer (primarily for tests)
    transport: Option<Arc<dyn Transport>>,
}

impl ModelerClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            api_root: None,
            user_agent_suffix: None,
            timeout: None,
            proxy: None,
            credentials: None,
            transport: None,
        }
    }

    /// Start from an explicit configuration instead of the environment.
    pub fn config(mut self, config: ModelerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// API root without the version segment.
    pub fn api_root(mut self, root: impl Into<String>) -> Self {
        self.api_root = Some(root.into());
        self
    }

    /// Extra identification appended to the user agent.
    pub fn user_agent(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn credentials(mut self, provider: Arc<dyn CredentialProvider>) -> Self {
        self.credentials = Some(provider);
        self
    }

    /// Use a custom transport. Timeout and proxy settings are then the
    /// transport's own concern.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<ModelerClient> {
        let mut config = self.config.unwrap_or_else(ModelerConfig::from_env);
        if let Some(root) = self.api_root {
            config.api_root = root;
        }
        if let Some(suffix) = self.user_agent_suffix {
            config.user_agent_suffix = Some(suffix);
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }
        if let Some(proxy) = self.proxy {
            config.proxy = Some(proxy);
        }
        config.validate()?;

        let credentials = self.credentials.ok_or_else(|| {
            Error::configuration_with_context(
                "A credential provider is required",
                ErrorContext::new()
                    .with_field_path("credentials")
                    .with_source("builder"),
            )
        })?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(&config)?),
        };

        let base_url = config.base_url();
        debug!(base_url = %base_url, "modeler client configured");

        Ok(ModelerClient {
            transport,
            credentials,
            base_url,
            user_agent: config.user_agent(),
        })
    }
}

impl Default for ModelerClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
