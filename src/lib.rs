//! # modeler-client
//!
//! Camunda Web Modeler REST API 的类型化异步客户端。
//!
//! Typed async client for the Camunda Web Modeler REST API (`/api/v1`):
//! projects, folders, files, milestones and collaborators.
//!
//! ## Overview
//!
//! Every method on [`ModelerClient`] maps to exactly one HTTP request:
//!
//! - the bearer token comes from a [`CredentialProvider`], asked afresh for each call
//! - the request goes out through a [`Transport`] (reqwest by default)
//! - `200` is decoded as JSON, `204` yields `None`, anything else is
//!   [`Error::Http`] with the status code and status text
//!
//! There are no retries, no rate limiting and no caching. Callers decide
//! what a 409 (stale file revision, non-empty folder) or a 404 means for them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modeler_client::{ModelerClient, StaticTokenProvider};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> modeler_client::Result<()> {
//!     let client = ModelerClient::builder()
//!         .api_root("https://modeler.cloud.camunda.io/api")
//!         .user_agent("release-bot/1.0")
//!         .credentials(Arc::new(StaticTokenProvider::new("eyJhbGciOi...")))
//!         .build()?;
//!
//!     if let Some(project) = client.create_project("Invoices").await? {
//!         println!("created {}", project.id);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | The client, its builder and one submodule per resource |
//! | [`config`] | Explicit configuration and environment overrides |
//! | [`auth`] | Credential provider trait and stock providers |
//! | [`transport`] | HTTP seam and the reqwest implementation |
//! | [`types`] | Request/response bodies |
//! | [`path`] | `simplePath` escaping |

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod path;
pub mod transport;
pub mod types;

pub use auth::{BoxError, CredentialProvider, EnvTokenProvider, StaticTokenProvider};
pub use client::{ModelerClient, ModelerClientBuilder};
pub use config::ModelerConfig;
pub use error::{Error, ErrorContext};
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport, TransportError};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
