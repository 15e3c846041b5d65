//! # Client Module
//!
//! The HTTP implementation of [`crate::engine::transport::Transport`].
//!
//! Every request carries a fixed timeout; a request that exceeds it fails as a
//! no-response error. The endpoint base defaults to a local development server and can
//! be overridden through [`ClientConfig`] or the `RESMAP_API_URL` environment variable.

pub mod config;
pub mod http;

pub use config::ClientConfig;
pub use http::HttpTransport;
