//! Use cases orchestrating the domain stores against the gateway.

pub mod open_conversation;
pub mod refresh_index;
pub mod send_message;
