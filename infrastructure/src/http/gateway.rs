//! HTTP chat gateway adapter
//!
//! Implements the [`ChatGateway`] port against the assistant backend.
//! Transport and status errors are converted into the closed
//! [`GatewayError`] taxonomy here; nothing reqwest-shaped leaves this
//! module. A bearer token from the credential provider is attached to every
//! request when present.

use crate::http::protocol::{
    AskRequest, AskResponse, ChatDetailDto, ChatListEnvelope, ErrorBody,
};
use assist_application::ports::chat_gateway::{
    ChatGateway, GatewayError, SendMessageReply, SendMessageRequest,
};
use assist_application::ports::credentials::CredentialProvider;
use assist_domain::{Conversation, ConversationId, ConversationSummary, Message};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub struct HttpChatGateway {
    client: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpChatGateway {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(transport)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!(%base_url, "HttpChatGateway initialized");
        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.credentials.bearer_token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Convert a non-success response into the error taxonomy, pulling the
    /// backend's `detail` string when there is one.
    async fn fail(response: Response, subject: Option<&ConversationId>) -> GatewayError {
        let status = response.status();
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| status.to_string());
        classify(status, detail, subject)
    }
}

fn transport(error: reqwest::Error) -> GatewayError {
    GatewayError::Network(error.to_string())
}

fn classify(status: StatusCode, detail: String, subject: Option<&ConversationId>) -> GatewayError {
    match status.as_u16() {
        400 | 422 => GatewayError::Validation(detail),
        401 | 403 => GatewayError::Auth(detail),
        404 => match subject {
            Some(id) => GatewayError::NotFound(id.clone()),
            None => GatewayError::Network(detail),
        },
        500..=599 => GatewayError::Server(detail),
        _ => GatewayError::Network(detail),
    }
}

#[async_trait]
impl ChatGateway for HttpChatGateway {
    async fn list_conversations(&self) -> Result<Vec<ConversationSummary>, GatewayError> {
        let response = self
            .request(Method::GET, "/chats")
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(Self::fail(response, None).await);
        }
        let envelope: ChatListEnvelope = response.json().await.map_err(transport)?;
        debug!(count = envelope.chats.len(), "listed conversations");
        Ok(envelope
            .chats
            .into_iter()
            .map(ConversationSummary::from)
            .collect())
    }

    async fn get_conversation(&self, id: &ConversationId) -> Result<Conversation, GatewayError> {
        let response = self
            .request(Method::GET, &format!("/chats/{id}"))
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(Self::fail(response, Some(id)).await);
        }
        let detail: ChatDetailDto = response.json().await.map_err(transport)?;
        Ok(detail.into())
    }

    async fn send_message(
        &self,
        request: SendMessageRequest,
    ) -> Result<SendMessageReply, GatewayError> {
        let chat_id = request.conversation_id.as_ref().map(ConversationId::as_str);
        let body = AskRequest {
            chat_id,
            user_question: request.question.content(),
            return_with_history: true,
        };

        let response = self
            .request(Method::POST, "/get_ai_response")
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        if !response.status().is_success() {
            return Err(Self::fail(response, request.conversation_id.as_ref()).await);
        }

        let reply: AskResponse = response.json().await.map_err(transport)?;
        let messages = reply
            .messages
            .ok_or_else(|| GatewayError::Server("reply carried no message history".to_string()))?;
        Ok(SendMessageReply {
            conversation_id: reply.chat_id.into(),
            messages: messages.into_iter().map(Message::from).collect(),
        })
    }
}
