//! Infrastructure layer for uni-assist
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the HTTP chat gateway, the token-file credential
//! store, and configuration file loading.

pub mod auth;
pub mod config;
pub mod http;

// Re-export commonly used types
pub use auth::TokenFileCredentials;
pub use config::{ConfigLoader, FileAuthConfig, FileConfig, FileGatewayConfig, FileReplConfig};
pub use http::HttpChatGateway;
