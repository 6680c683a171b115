//! Web Modeler API client.
//!
//! One request per call: build the path, attach the standard headers, send,
//! decode. Operations are grouped by resource under `src/client/`.

pub mod builder;
mod collaborators;
pub mod core;
mod files;
mod folders;
mod info;
mod milestones;
mod projects;

pub use builder::ModelerClientBuilder;
pub use self::core::ModelerClient;
