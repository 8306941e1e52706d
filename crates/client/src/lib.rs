//! SkillStack REST API client.
//!
//! Typed access to every backend endpoint, with the session redirect
//! contract: any 401 or 403 clears the signed-in user and surfaces as
//! [`ApiError::Unauthorized`] carrying the login path.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use api::SkillStackApi;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{classify, validation_message, ApiError, Result};
pub use http::HttpApi;
pub use session::{MemorySessionStore, SessionStore};
