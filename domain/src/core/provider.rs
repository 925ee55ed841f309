//! Provider identity
//!
//! [`ProviderId`] names an LLM backend that can hold a panel seat. The
//! well-known backends are closed variants; `Custom` keeps the type open for
//! seats configured by name only.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An LLM backend that can hold a panel seat (Value Object).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProviderId {
    /// Groq hosted inference API
    Groq,
    /// Mistral "La Plateforme" hosted API
    Mistral,
    /// Ollama server on the user's own machine or network
    Ollama,
    /// A backend known only by its configured name
    Custom(String),
}

impl ProviderId {
    /// Canonical lowercase name, as used in configuration and output.
    pub fn as_str(&self) -> &str {
        match self {
            ProviderId::Groq => "groq",
            ProviderId::Mistral => "mistral",
            ProviderId::Ollama => "ollama",
            ProviderId::Custom(name) => name,
        }
    }

    /// Transport class for the well-known backends.
    ///
    /// `None` for [`ProviderId::Custom`]: configuration decides how (and
    /// whether) such a seat is reachable.
    pub fn kind(&self) -> Option<ProviderKind> {
        match self {
            ProviderId::Groq | ProviderId::Mistral => Some(ProviderKind::HostedApi),
            ProviderId::Ollama => Some(ProviderKind::LocalServer),
            ProviderId::Custom(_) => None,
        }
    }

    /// Panel seats used when configuration names none: the two hosted APIs.
    pub fn default_panel() -> Vec<ProviderId> {
        vec![ProviderId::Groq, ProviderId::Mistral]
    }
}

fn parse_name(s: &str) -> ProviderId {
    match s.to_ascii_lowercase().as_str() {
        "groq" => ProviderId::Groq,
        "mistral" => ProviderId::Mistral,
        "ollama" => ProviderId::Ollama,
        _ => ProviderId::Custom(s.to_string()),
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_name(s))
    }
}

impl From<&str> for ProviderId {
    fn from(s: &str) -> Self {
        parse_name(s)
    }
}

impl Serialize for ProviderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProviderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(parse_name(&s))
    }
}

/// How a provider is reached.
///
/// Resolved once when configuration is loaded; downstream code never
/// re-infers it from names or URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Hosted HTTPS API that requires a credential (Groq, Mistral)
    HostedApi,
    /// Inference server on the user's network (Ollama); no credential
    LocalServer,
}
