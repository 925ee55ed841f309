//! Ollama adapter
//!
//! Serves a local Ollama server over its `/api/chat` endpoint. No
//! credentials; the server either answers or it is not running.

use super::{ProviderAdapter, clip};
use async_trait::async_trait;
use panel_application::ports::completion::{CompletionRequest, GatewayError};
use panel_domain::{ProviderId, ProviderKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage<'a>>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct OllamaChatResponse {
    message: OllamaResponseMessage,
}

#[derive(Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

/// Adapter for a local Ollama server.
pub struct OllamaAdapter {
    id: ProviderId,
    client: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl OllamaAdapter {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            id: ProviderId::Ollama,
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            temperature,
            timeout,
        })
    }
}

#[async_trait]
impl ProviderAdapter for OllamaAdapter {
    fn id(&self) -> &ProviderId {
        &self.id
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::LocalServer
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(OllamaMessage {
                role: "system",
                content: system,
            });
        }
        messages.push(OllamaMessage {
            role: "user",
            content: &request.prompt,
        });

        let body = OllamaChatRequest {
            model: &self.model,
            messages,
            stream: false,
            options: OllamaOptions {
                temperature: self.temperature,
            },
        };

        debug!("ollama: POST {}/api/chat", self.base_url);
        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout(self.timeout.as_secs())
                } else if e.is_connect() {
                    GatewayError::ConnectionFailed(format!(
                        "cannot reach Ollama at {} (is the server running?)",
                        self.base_url
                    ))
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // Ollama reports problems like a missing model as {"error": "..."}
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status,
                clip(&detail, 200)
            )));
        }

        let parsed: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        if parsed.message.content.trim().is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        Ok(parsed.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;

    fn adapter(server: &ServerGuard) -> OllamaAdapter {
        OllamaAdapter::new(server.url(), "llama3.1", 0.7, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_returns_message_content() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":{"role":"assistant","content":"Paris"},"done":true}"#)
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
    async fn test_requests_non_streaming_chat() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/chat")
            .match_body(Matcher::PartialJson(json!({
                "model": "llama3.1",
                "stream": false,
                "messages": [{"role": "user", "content": "capital?"}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":{"role":"assistant","content":"Paris"}}"#)
            .create_async()
            .await;

        adapter(&server)
            .complete(CompletionRequest::new("capital?"))
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_model_error_surfaces_detail() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/chat")
            .with_status(404)
            .with_body(r#"{"error":"model 'llama3.1' not found, try pulling it first"}"#)
            .create_async()
            .await;

        let result = adapter(&server)
            .complete(CompletionRequest::new("q"))
            .await;

        match result {
            Err(GatewayError::RequestFailed(message)) => {
                assert!(message.contains("404"));
                assert!(message.contains("not found"));
            }
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed_response() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/chat")
            .with_status(200)
            .with_body("<!doctype html>")
            .create_async()
            .await;

        let result = adapter(&server)
            .complete(CompletionRequest::new("q"))
            .await;

        assert!(matches!(result, Err(GatewayError::MalformedResponse(_))));
    }
}
