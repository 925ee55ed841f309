//! Provider adapters
//!
//! Adapters implement the application's [`CompletionGateway`] port. Each
//! adapter serves exactly one provider; [`PanelGateway`] routes completion
//! calls to the adapter registered for the requested seat.

pub mod hosted;
pub mod ollama;

use crate::config::FileConfig;
use async_trait::async_trait;
use hosted::HostedApiAdapter;
use ollama::OllamaAdapter;
use panel_application::ports::completion::{CompletionGateway, CompletionRequest, GatewayError};
use panel_domain::{ProviderId, ProviderKind};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// One reachable LLM backend.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// The seat this adapter serves.
    fn id(&self) -> &ProviderId;

    /// How the backend is reached.
    fn kind(&self) -> ProviderKind;

    /// Perform one completion call.
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}

/// Routes each completion call to the adapter registered for that provider.
///
/// A seat without a registered adapter (usually a missing credential) fails
/// with `ProviderNotAvailable`; the panel records that like any other
/// per-seat failure instead of dropping the seat.
pub struct PanelGateway {
    adapters: Vec<Arc<dyn ProviderAdapter>>,
}

impl PanelGateway {
    pub fn new(adapters: Vec<Arc<dyn ProviderAdapter>>) -> Self {
        Self { adapters }
    }

    fn resolve(&self, provider: &ProviderId) -> Option<&dyn ProviderAdapter> {
        self.adapters
            .iter()
            .find(|a| a.id() == provider)
            .map(|a| a.as_ref())
    }
}

#[async_trait]
impl CompletionGateway for PanelGateway {
    async fn complete(
        &self,
        provider: &ProviderId,
        request: CompletionRequest,
    ) -> Result<String, GatewayError> {
        match self.resolve(provider) {
            Some(adapter) => {
                debug!("Routing completion for {} ({:?})", provider, adapter.kind());
                adapter.complete(request).await
            }
            None => Err(GatewayError::ProviderNotAvailable(format!(
                "{} is not configured",
                provider
            ))),
        }
    }

    fn available_providers(&self) -> Vec<ProviderId> {
        self.adapters.iter().map(|a| a.id().clone()).collect()
    }
}

/// Build a gateway from configuration.
///
/// Hosted adapters are only registered when a credential resolves; the
/// Ollama adapter needs none and is always registered. Seats in `required`
/// that end up without an adapter produce a warning, not an error, so the
/// panel can still run and record their failures.
pub fn build_gateway(
    config: &FileConfig,
    required: &[ProviderId],
) -> Result<(PanelGateway, Vec<String>), GatewayError> {
    let timeout = Duration::from_secs(config.behavior.request_timeout_secs);
    let temperature = |t: Option<f32>| t.unwrap_or(config.behavior.temperature);

    let mut adapters: Vec<Arc<dyn ProviderAdapter>> = Vec::new();
    let mut warnings = Vec::new();

    match config.providers.groq.resolve_api_key() {
        Some(api_key) => adapters.push(Arc::new(HostedApiAdapter::new(
            ProviderId::Groq,
            config.providers.groq.base_url.clone(),
            api_key,
            config.providers.groq.model.clone(),
            temperature(config.providers.groq.temperature),
            timeout,
        )?)),
        None if required.contains(&ProviderId::Groq) => warnings.push(format!(
            "groq has no API key (set {} or providers.groq.api_key); its calls will fail",
            config.providers.groq.api_key_env
        )),
        None => {}
    }

    match config.providers.mistral.resolve_api_key() {
        Some(api_key) => adapters.push(Arc::new(HostedApiAdapter::new(
            ProviderId::Mistral,
            config.providers.mistral.base_url.clone(),
            api_key,
            config.providers.mistral.model.clone(),
            temperature(config.providers.mistral.temperature),
            timeout,
        )?)),
        None if required.contains(&ProviderId::Mistral) => warnings.push(format!(
            "mistral has no API key (set {} or providers.mistral.api_key); its calls will fail",
            config.providers.mistral.api_key_env
        )),
        None => {}
    }

    adapters.push(Arc::new(OllamaAdapter::new(
        config.providers.ollama.base_url.clone(),
        config.providers.ollama.model.clone(),
        temperature(config.providers.ollama.temperature),
        timeout,
    )?));

    for provider in required {
        if provider.kind().is_none() {
            warnings.push(format!(
                "{} is not a known provider; its calls will fail",
                provider
            ));
        }
    }

    Ok((PanelGateway::new(adapters), warnings))
}

/// Trim server error bodies to something loggable.
pub(crate) fn clip(body: &str, max_chars: usize) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= max_chars {
        trimmed.to_string()
    } else {
        let clipped: String = trimmed.chars().take(max_chars).collect();
        format!("{}...", clipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Mock ProviderAdapter --------------------------------------------------

    struct MockAdapter {
        id: ProviderId,
        reply: String,
    }

    impl MockAdapter {
        fn new(id: ProviderId, reply: &str) -> Arc<dyn ProviderAdapter> {
            Arc::new(Self {
                id,
                reply: reply.to_string(),
            })
        }
    }

    #[async_trait]
    impl ProviderAdapter for MockAdapter {
        fn id(&self) -> &ProviderId {
            &self.id
        }

        fn kind(&self) -> ProviderKind {
            ProviderKind::HostedApi
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<String, GatewayError> {
            Ok(self.reply.clone())
        }
    }

    // -- Routing ---------------------------------------------------------------

    #[tokio::test]
    async fn test_routes_to_matching_adapter() {
        let gateway = PanelGateway::new(vec![
            MockAdapter::new(ProviderId::Groq, "from groq"),
            MockAdapter::new(ProviderId::Mistral, "from mistral"),
        ]);

        let reply = gateway
            .complete(&ProviderId::Mistral, CompletionRequest::new("q"))
            .await
            .unwrap();
        assert_eq!(reply, "from mistral");
    }

    #[tokio::test]
    async fn test_unregistered_provider_is_not_available() {
        let gateway = PanelGateway::new(vec![MockAdapter::new(ProviderId::Groq, "ok")]);

        let result = gateway
            .complete(&ProviderId::Ollama, CompletionRequest::new("q"))
            .await;
        assert!(matches!(
            result,
            Err(GatewayError::ProviderNotAvailable(_))
        ));
    }

    #[test]
    fn test_available_providers_lists_registered_adapters() {
        let gateway = PanelGateway::new(vec![
            MockAdapter::new(ProviderId::Groq, "a"),
            MockAdapter::new(ProviderId::Ollama, "b"),
        ]);

        assert_eq!(
            gateway.available_providers(),
            vec![ProviderId::Groq, ProviderId::Ollama]
        );
    }

    // -- Assembly from config --------------------------------------------------

    #[test]
    fn test_missing_hosted_keys_leave_only_ollama() {
        let mut config = FileConfig::default();
        config.providers.groq.api_key_env = "LLM_PANEL_TEST_NO_SUCH_KEY".to_string();
        config.providers.mistral.api_key_env = "LLM_PANEL_TEST_NO_SUCH_KEY".to_string();

        let (gateway, warnings) =
            build_gateway(&config, &[ProviderId::Groq, ProviderId::Mistral]).unwrap();

        assert_eq!(gateway.available_providers(), vec![ProviderId::Ollama]);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("groq"));
        assert!(warnings[1].contains("mistral"));
    }

    #[test]
    fn test_direct_api_keys_register_hosted_adapters() {
        let mut config = FileConfig::default();
        config.providers.groq.api_key = Some("gsk-test".to_string());
        config.providers.mistral.api_key = Some("msk-test".to_string());

        let (gateway, warnings) =
            build_gateway(&config, &[ProviderId::Groq, ProviderId::Mistral]).unwrap();

        assert_eq!(
            gateway.available_providers(),
            vec![ProviderId::Groq, ProviderId::Mistral, ProviderId::Ollama]
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_required_custom_seat_warns() {
        let config = FileConfig::default();
        let required = vec![ProviderId::Custom("together".to_string())];

        let (_, warnings) = build_gateway(&config, &required).unwrap();

        assert!(warnings.iter().any(|w| w.contains("together")));
    }

    #[test]
    fn test_clip_shortens_long_bodies() {
        assert_eq!(clip("  short  ", 10), "short");
        let long = "x".repeat(300);
        let clipped = clip(&long, 200);
        assert!(clipped.chars().count() <= 203);
        assert!(clipped.ends_with("..."));
    }
}
