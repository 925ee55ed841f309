//! Raw configuration structures matching the TOML file format
//!
//! These are the serde targets for the merged figment sources. Seat and
//! adjudicator fields deserialize straight into domain identifiers; the
//! `third_seat` toggle is an enum so a bad value fails at load time instead
//! of surfacing mid-run.

use panel_domain::ProviderId;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Panel composition
    pub panel: FilePanelConfig,
    /// Run behavior
    pub behavior: FileBehaviorConfig,
    /// Per-provider settings
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Seats in query order.
    ///
    /// An explicit `panel.seats` list wins; otherwise the pair is derived
    /// from the `third_seat` toggle.
    pub fn resolve_seats(&self) -> Vec<ProviderId> {
        if !self.panel.seats.is_empty() {
            return self.panel.seats.clone();
        }
        match self.panel.third_seat {
            ThirdSeat::Hosted => ProviderId::default_panel(),
            ThirdSeat::Local => vec![ProviderId::Groq, ProviderId::Ollama],
        }
    }

    /// Explicitly configured adjudicator, if any.
    pub fn resolve_adjudicator(&self) -> Option<ProviderId> {
        self.panel.adjudicator.clone()
    }
}

/// Which backend fills the panel's swing seat when no explicit seat list is
/// configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThirdSeat {
    /// The hosted pair: Groq plus Mistral.
    #[default]
    Hosted,
    /// Groq plus a local Ollama server.
    Local,
}

/// Panel composition (`[panel]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePanelConfig {
    /// Explicit seats in query order. Overrides `third_seat` when non-empty.
    pub seats: Vec<ProviderId>,
    /// Backend for the swing seat when `seats` is empty.
    pub third_seat: ThirdSeat,
    /// Seat that synthesizes the final answer. Defaults to the first seat
    /// that answers.
    pub adjudicator: Option<ProviderId>,
    /// Run the cross-critique round before synthesis.
    pub enable_critique: bool,
}

/// Run behavior (`[behavior]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBehaviorConfig {
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Sampling temperature for providers without their own override.
    pub temperature: f32,
}

impl Default for FileBehaviorConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            temperature: 0.7,
        }
    }
}

/// Per-provider settings (`[providers]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Groq settings
    pub groq: FileGroqConfig,
    /// Mistral settings
    pub mistral: FileMistralConfig,
    /// Ollama settings
    pub ollama: FileOllamaConfig,
}

/// Groq settings (`[providers.groq]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGroqConfig {
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// API key set directly in the file. Prefer the environment variable.
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature override for this provider.
    pub temperature: Option<f32>,
}

impl Default for FileGroqConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.1-70b-versatile".to_string(),
            temperature: None,
        }
    }
}

impl FileGroqConfig {
    /// Direct key first, then the configured environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }
}

/// Mistral settings (`[providers.mistral]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMistralConfig {
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// API key set directly in the file. Prefer the environment variable.
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible endpoint.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature override for this provider.
    pub temperature: Option<f32>,
}

impl Default for FileMistralConfig {
    fn default() -> Self {
        Self {
            api_key_env: "MISTRAL_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.mistral.ai/v1".to_string(),
            model: "mistral-large-latest".to_string(),
            temperature: None,
        }
    }
}

impl FileMistralConfig {
    /// Direct key first, then the configured environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        resolve_key(self.api_key.as_deref(), &self.api_key_env)
    }
}

/// Ollama settings (`[providers.ollama]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Address of the local server.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature override for this provider.
    pub temperature: Option<f32>,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.1".to_string(),
            temperature: None,
        }
    }
}

fn resolve_key(direct: Option<&str>, env_var: &str) -> Option<String> {
    direct
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var(env_var).ok())
        .filter(|key| !key.trim().is_empty())
}
