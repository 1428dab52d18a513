//! Credential storage adapters.

pub mod token_file;

pub use token_file::TokenFileCredentials;
