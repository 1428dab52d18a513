//! Refresh Index use case.
//!
//! Pulls the summary list from the gateway and replaces the index
//! wholesale. Used at startup, on explicit `/list`, and by the send
//! coordinator after a send that created a conversation. Only the index is
//! written, never the session or the cache, so a refresh racing a user
//! selection cannot clobber it.

use crate::Shared;
use crate::ports::chat_gateway::{ChatGateway, GatewayError};
use assist_domain::ConversationIndex;
use std::sync::Arc;
use tracing::debug;

pub struct RefreshIndexUseCase {
    gateway: Arc<dyn ChatGateway>,
    index: Shared<ConversationIndex>,
}

impl RefreshIndexUseCase {
    pub fn new(gateway: Arc<dyn ChatGateway>, index: Shared<ConversationIndex>) -> Self {
        Self { gateway, index }
    }

    /// Fetch and replace; returns the number of conversations listed.
    pub async fn execute(&self) -> Result<usize, GatewayError> {
        let list = self.gateway.list_conversations().await?;
        let count = list.len();
        self.index.lock().await.replace(list);
        debug!(count, "conversation index refreshed");
        Ok(count)
    }
}
