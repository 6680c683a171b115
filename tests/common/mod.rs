//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use modeler_client::{
    BoxError, CredentialProvider, HttpRequest, HttpResponse, ModelerClient, ModelerConfig,
    Transport, TransportError,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const API_ROOT: &str = "https://modeler.test/api";
pub const BASE_URL: &str = "https://modeler.test/api/v1";

type Responder = dyn Fn(&HttpRequest) -> HttpResponse + Send + Sync;

/// Records every request and answers through a closure.
pub struct StubTransport {
    responder: Box<Responder>,
    calls: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new(responder: impl Fn(&HttpRequest) -> HttpResponse + Send + Sync + 'static) -> Self {
        Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with the same status and body.
    pub fn fixed(status: u16, status_text: &str, body: &str) -> Self {
        let status_text = status_text.to_string();
        let body = body.to_string();
        Self::new(move |_| HttpResponse::new(status, status_text.clone(), body.clone()))
    }

    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last(&self) -> HttpRequest {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.lock().unwrap().push(request.clone());
        // let other in-flight calls interleave with this one
        tokio::task::yield_now().await;
        Ok((self.responder)(&request))
    }
}

/// Hands out `token-1`, `token-2`, ... and remembers the client ids it was asked for.
#[derive(Default)]
pub struct CountingTokens {
    issued: AtomicUsize,
    pub client_ids: Mutex<Vec<String>>,
}

#[async_trait]
impl CredentialProvider for CountingTokens {
    async fn token(&self, client_id: &str) -> Result<String, BoxError> {
        self.client_ids.lock().unwrap().push(client_id.to_string());
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("token-{}", n))
    }
}

/// Always fails, like an unreachable token endpoint.
pub struct FailingTokens;

#[async_trait]
impl CredentialProvider for FailingTokens {
    async fn token(&self, _client_id: &str) -> Result<String, BoxError> {
        Err("token endpoint unreachable".into())
    }
}

pub fn client_with(
    transport: Arc<StubTransport>,
    credentials: Arc<dyn CredentialProvider>,
) -> ModelerClient {
    ModelerClient::builder()
        .config(ModelerConfig::default().with_api_root(API_ROOT))
        .user_agent("it-tests")
        .credentials(credentials)
        .transport(transport)
        .build()
        .expect("client builds")
}

pub fn client(transport: Arc<StubTransport>) -> ModelerClient {
    client_with(transport, Arc::new(modeler_client::StaticTokenProvider::new("t0k3n")))
}

pub fn body_json(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_str(request.body.as_deref().expect("request has a body"))
        .expect("body is JSON")
}
