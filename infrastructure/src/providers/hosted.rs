//! Hosted API adapter
//!
//! Serves the credentialed hosted backends (Groq, Mistral) over their
//! OpenAI-compatible chat completions endpoint. One adapter instance per
//! provider; the base URL, model, and credential come from configuration.

use super::{ProviderAdapter, clip};
use async_trait::async_trait;
use panel_application::ports::completion::{CompletionRequest, GatewayError};
use panel_domain::{ProviderId, ProviderKind};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Adapter for hosted, API-key backed providers.
pub struct HostedApiAdapter {
    id: ProviderId,
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl HostedApiAdapter {
    pub fn new(
        id: ProviderId,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            id,
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            temperature,
            timeout,
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout(self.timeout.as_secs())
        } else if e.is_connect() {
            GatewayError::ConnectionFailed(e.to_string())
        } else {
            GatewayError::RequestFailed(e.to_string())
        }
    }
}

#[async_trait]
impl ProviderAdapter for HostedApiAdapter {
    fn id(&self) -> &ProviderId {
        &self.id
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::HostedApi
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: &request.prompt,
        });

        let body = ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        debug!("{}: POST {}/chat/completions", self.id, self.base_url);
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GatewayError::AuthFailed(format!(
                "{} rejected the API key ({})",
                self.id, status
            )));
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status,
                clip(&detail, 200)
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;

    fn adapter(server: &ServerGuard) -> HostedApiAdapter {
        HostedApiAdapter::new(
            ProviderId::Groq,
            server.url(),
            "test-key",
            "test-model",
            0.7,
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_returns_first_choice_content() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"Paris"}}]}"#)
            .create_async()
            .await;

        let result = adapter(&server)
            .complete(CompletionRequest::new("capital?"))
            .await
            .unwrap();

        assert_eq!(result, "Paris");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_sends_model_and_both_messages() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::PartialJson(json!({
                "model": "test-model",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "capital?"}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"Paris"}}]}"#)
            .create_async()
            .await;

        adapter(&server)
            .complete(CompletionRequest::new("capital?").with_system("be brief"))
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_auth_failed() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error":{"message":"invalid api key"}}"#)
            .create_async()
            .await;

        let result = adapter(&server)
            .complete(CompletionRequest::new("q"))
            .await;

        assert!(matches!(result, Err(GatewayError::AuthFailed(_))));
    }

    #[tokio::test]
    async fn test_server_error_maps_to_request_failed() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(503)
            .with_body("overloaded")
            .create_async()
            .await;

        let result = adapter(&server)
            .complete(CompletionRequest::new("q"))
            .await;

        match result {
            Err(GatewayError::RequestFailed(message)) => {
                assert!(message.contains("503"));
                assert!(message.contains("overloaded"));
            }
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed_response() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json at all")
            .create_async()
            .await;

        let result = adapter(&server)
            .complete(CompletionRequest::new("q"))
            .await;

        assert!(matches!(result, Err(GatewayError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_blank_content_is_empty_response() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"  "}}]}"#)
            .create_async()
            .await;

        let result = adapter(&server)
            .complete(CompletionRequest::new("q"))
            .await;

        assert!(matches!(result, Err(GatewayError::EmptyResponse)));
    }

    #[tokio::test]
    async fn test_no_choices_is_empty_response() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let result = adapter(&server)
            .complete(CompletionRequest::new("q"))
            .await;

        assert!(matches!(result, Err(GatewayError::EmptyResponse)));
    }
}
