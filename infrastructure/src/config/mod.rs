//! Configuration loading.

pub mod file_config;
pub mod loader;

pub use file_config::{FileAuthConfig, FileConfig, FileGatewayConfig, FileReplConfig};
pub use loader::ConfigLoader;
