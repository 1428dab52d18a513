//! HTTP adapter for the chat gateway port.

pub mod gateway;
pub mod protocol;

pub use gateway::HttpChatGateway;
