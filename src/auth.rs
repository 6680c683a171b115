//! Bearer token acquisition.
//!
//! The client asks a [`CredentialProvider`] for a token before every request,
//! passing its own user-agent string as the client identifier. How the token
//! is obtained (OAuth exchange, cache, vault) is the provider's business;
//! whatever error it returns reaches the caller unchanged.

use async_trait::async_trait;
use keyring::Entry;
use std::env;

/// Error type produced by credential providers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Keyring service name consulted by [`EnvTokenProvider`].
pub const KEYRING_SERVICE: &str = "modeler-client";

/// Environment variable consulted by [`EnvTokenProvider`].
pub const ENV_TOKEN: &str = "CAMUNDA_MODELER_TOKEN";

#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Produce a bearer token for `client_id`.
    async fn token(&self, client_id: &str) -> Result<String, BoxError>;
}

/// Always returns the same token.
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl CredentialProvider for StaticTokenProvider {
    async fn token(&self, _client_id: &str) -> Result<String, BoxError> {
        Ok(self.token.clone())
    }
}

/// Looks a token up in the OS keyring, then in the environment.
///
/// 1. keyring entry `modeler-client` / `<account>`
/// 2. `CAMUNDA_MODELER_TOKEN` (or the variable given to [`with_env_var`](Self::with_env_var))
#[derive(Debug, Clone)]
pub struct EnvTokenProvider {
    account: String,
    env_var: String,
}

impl EnvTokenProvider {
    pub fn new() -> Self {
        Self {
            account: "default".to_string(),
            env_var: ENV_TOKEN.to_string(),
        }
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    fn keyring_token(&self) -> Option<String> {
        let entry = Entry::new(KEYRING_SERVICE, &self.account).ok()?;
        entry.get_password().ok().filter(|t| !t.is_empty())
    }
}

impl Default for EnvTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialProvider for EnvTokenProvider {
    async fn token(&self, client_id: &str) -> Result<String, BoxError> {
        if let Some(token) = self.keyring_token() {
            return Ok(token);
        }

        match env::var(&self.env_var) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(format!(
                "No token for {}: set {} or store one in the '{}' keyring entry",
                client_id, self.env_var, KEYRING_SERVICE
            )
            .into()),
        }
    }
}
