//! Port definitions (interfaces to the outside world)
//!
//! Adapters implementing these live in the infrastructure layer.

pub mod chat_gateway;
pub mod credentials;
