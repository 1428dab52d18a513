//! Domain layer for uni-assist
//!
//! This crate contains the client-side conversation state model: entities,
//! value objects, and the three single-writer stores that back the chat UI.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation state
//!
//! - **Conversation Cache**: keyed store of loaded message histories; the
//!   single source of truth for what is rendered.
//! - **Conversation Index**: ordered summary list backing the sidebar,
//!   refreshed wholesale from the gateway.
//! - **Active Session**: which conversation is being viewed, where `None`
//!   means "composing a new, not-yet-created conversation".
//!
//! ## Sidebar projection
//!
//! A pure function grouping index snapshots by calendar day for display.

pub mod conversation;
pub mod core;
pub mod session;
pub mod sidebar;
pub mod util;

// Re-export commonly used types
pub use conversation::{
    cache::ConversationCache,
    entities::{Conversation, ConversationSummary, Message, Role},
    index::ConversationIndex,
    value_objects::ConversationId,
};
pub use crate::core::question::Question;
pub use session::selector::ActiveSession;
pub use sidebar::projector::{SidebarGroup, project, project_at};
