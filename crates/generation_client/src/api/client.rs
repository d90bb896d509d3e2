use async_trait::async_trait;
use log::{info, warn};
use reqwest::header::HeaderMap;
use reqwest::Client;

use chat_core::config::AssistantConfig;

use crate::api::models::{
    AnswerResponse, ComposeResponse, ComposedHandoff, TurnReply, UserQueryRequest,
};
use crate::client_trait::GenerationBackend;
use crate::error::GenerationError;
use crate::fallback;

const ANSWER_QUERY_PATH: &str = "/flows/interactive-chat";
const COMPOSE_MESSAGE_PATH: &str = "/flows/compose-message";

/// HTTP client for the two generation services.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    client: Client,
    api_base: Option<String>,
    org_name: String,
}

impl GenerationClient {
    pub fn new(config: &AssistantConfig) -> Self {
        let client = Client::builder()
            .default_headers(Self::default_headers())
            .build()
            .expect("generation client");

        GenerationClient {
            client,
            api_base: config.api_base.clone(),
            org_name: config.org_name.clone(),
        }
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("accept", "application/json".parse().unwrap());
        headers.insert("content-type", "application/json".parse().unwrap());
        headers
    }

    fn endpoint(&self, path: &str) -> Result<String, GenerationError> {
        let base = self
            .api_base
            .as_deref()
            .ok_or(GenerationError::MissingApiBase)?;
        Ok(format!("{}{}", base.trim_end_matches('/'), path))
    }

    async fn post_query(&self, path: &str, query: &str) -> Result<reqwest::Response, GenerationError> {
        let url = self.endpoint(path)?;
        let request = UserQueryRequest {
            user_query: query.to_string(),
        };
        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Status(status.as_u16()));
        }
        Ok(response)
    }

    /// Fallible variant of [`GenerationBackend::answer_query`], for callers
    /// that want the typed error instead of the fallback payload.
    pub async fn try_answer_query(&self, query: &str) -> Result<TurnReply, GenerationError> {
        let response = self.post_query(ANSWER_QUERY_PATH, query).await?;
        let body: AnswerResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        if body.ai_answer.trim().is_empty() {
            return Err(GenerationError::EmptyPayload("aiAnswer"));
        }
        if body.suggested_whatsapp_message.trim().is_empty() {
            return Err(GenerationError::EmptyPayload("suggestedWhatsappMessage"));
        }
        Ok(TurnReply {
            answer: body.ai_answer,
            suggested_handoff: body.suggested_whatsapp_message,
        })
    }

    /// Fallible variant of [`GenerationBackend::compose_handoff_message`].
    pub async fn try_compose_handoff_message(
        &self,
        query: &str,
    ) -> Result<ComposedHandoff, GenerationError> {
        let response = self.post_query(COMPOSE_MESSAGE_PATH, query).await?;
        let body: ComposeResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        if body.composed_message.trim().is_empty() {
            return Err(GenerationError::EmptyPayload("composedMessage"));
        }
        Ok(ComposedHandoff {
            message: body.composed_message,
        })
    }
}

#[async_trait]
impl GenerationBackend for GenerationClient {
    async fn answer_query(&self, query: &str) -> TurnReply {
        match self.try_answer_query(query).await {
            Ok(reply) => {
                info!("answer_query succeeded");
                reply
            }
            Err(err) => {
                warn!("answer_query failed, using fallback payload: {err}");
                fallback::turn_reply(&self.org_name, query)
            }
        }
    }

    async fn compose_handoff_message(&self, query: &str) -> ComposedHandoff {
        match self.try_compose_handoff_message(query).await {
            Ok(composed) => composed,
            Err(err) => {
                warn!("compose_handoff_message failed, using fallback payload: {err}");
                fallback::composed_handoff(&self.org_name, query)
            }
        }
    }
}
