use crate::auth::CredentialProvider;
use crate::client::builder::ModelerClientBuilder;
use crate::config::ModelerConfig;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Web Modeler API client.
///
/// Stateless apart from the base URL and user agent fixed at construction.
/// Clones share the transport and credential provider, and any number of
/// calls may run concurrently on the same instance.
#[derive(Clone)]
pub struct ModelerClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) credentials: Arc<dyn CredentialProvider>,
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
}

impl std::fmt::Debug for ModelerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelerClient")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl ModelerClient {
    /// Client for `config` using the default reqwest transport.
    pub fn new(config: ModelerConfig, credentials: Arc<dyn CredentialProvider>) -> Result<Self> {
        ModelerClientBuilder::new()
            .config(config)
            .credentials(credentials)
            .build()
    }

    pub fn builder() -> ModelerClientBuilder {
        ModelerClientBuilder::new()
    }

    /// `<api root>/v1`, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Standard headers for one request. The token is fetched fresh each
    /// time, with the user agent as the client identifier.
    pub(crate) async fn headers(&self) -> Result<Vec<(String, String)>> {
        let token = self
            .credentials
            .token(&self.user_agent)
            .await
            .map_err(Error::Credential)?;

        Ok(vec![
            ("content-type".to_string(), "application/json".to_string()),
            ("authorization".to_string(), format!("Bearer {}", token)),
            ("user-agent".to_string(), self.user_agent.clone()),
            ("accept".to_string(), "*/*".to_string()),
        ])
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<HttpResponse> {
        let headers = self.headers().await?;
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, path, "sending request");

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await?;

        debug!(%method, path, status = response.status, "received response");
        Ok(response)
    }

    /// Bodyless request, JSON response.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<Option<T>> {
        let response = self.send(method, path, None).await?;
        decode_response(response)
    }

    /// JSON request, JSON response.
    pub(crate) async fn execute_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body)?;
        let response = self.send(method, path, Some(body)).await?;
        decode_response(response)
    }

    /// Bodyless request whose response body is returned as text whatever the status.
    pub(crate) async fn execute_text(&self, method: Method, path: &str) -> Result<String> {
        let response = self.send(method, path, None).await?;
        Ok(response.text())
    }
}

/// 200 parses the body, 204 yields `None`, anything else is an
/// [`Error::Http`] carrying the status code and status text.
pub(crate) fn decode_response<T: DeserializeOwned>(response: HttpResponse) -> Result<Option<T>> {
    match response.status {
        200 => Ok(Some(response.json()?)),
        204 => Ok(None),
        code => {
            warn!(status = code, status_text = %response.status_text, "request rejected");
            Err(Error::Http {
                code,
                message: response.status_text,
            })
        }
    }
}
