//! Per-seat outcomes
//!
//! A panel query never shrinks: every configured seat yields exactly one
//! [`ProviderAnswer`], successful or not, and [`PanelResult`] keeps them in
//! seat order.

use crate::core::provider::ProviderId;
use serde::{Deserialize, Serialize};

/// One seat's outcome for a single panel query (Value Object).
///
/// Exactly one of `text` / `error` is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderAnswer {
    /// The provider holding the seat.
    pub provider: ProviderId,
    /// Answer text, present when the call succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Failure description, present when it did not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProviderAnswer {
    /// Record a successful answer.
    pub fn answered(provider: ProviderId, text: impl Into<String>) -> Self {
        Self {
            provider,
            text: Some(text.into()),
            error: None,
        }
    }

    /// Record a failed call in place of an answer.
    pub fn failed(provider: ProviderId, error: impl Into<String>) -> Self {
        Self {
            provider,
            text: None,
            error: Some(error.into()),
        }
    }

    /// Whether this seat produced usable text.
    pub fn is_answered(&self) -> bool {
        self.text.is_some()
    }
}

/// All seat outcomes for one query, in configured seat order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelResult {
    answers: Vec<ProviderAnswer>,
}

impl PanelResult {
    pub fn new(answers: Vec<ProviderAnswer>) -> Self {
        Self { answers }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// All seats, in order.
    pub fn iter(&self) -> impl Iterator<Item = &ProviderAnswer> {
        self.answers.iter()
    }

    /// Seats that produced text, in order.
    pub fn answered(&self) -> impl Iterator<Item = &ProviderAnswer> {
        self.answers.iter().filter(|a| a.is_answered())
    }

    /// Seats whose calls failed, in order.
    pub fn failed(&self) -> impl Iterator<Item = &ProviderAnswer> {
        self.answers.iter().filter(|a| !a.is_answered())
    }

    /// True when not a single seat answered.
    pub fn all_failed(&self) -> bool {
        self.answers.iter().all(|a| !a.is_answered())
    }

    /// The first seat, in order, that answered.
    pub fn first_answered(&self) -> Option<&ProviderAnswer> {
        self.answered().next()
    }
}

impl<'a> IntoIterator for &'a PanelResult {
    type Item = &'a ProviderAnswer;
    type IntoIter = std::slice::Iter<'a, ProviderAnswer>;

    fn into_iter(self) -> Self::IntoIter {
        self.answers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PanelResult {
        PanelResult::new(vec![
            ProviderAnswer::failed(ProviderId::Groq, "timed out"),
            ProviderAnswer::answered(ProviderId::Mistral, "Paris"),
            ProviderAnswer::answered(ProviderId::Ollama, "The capital is Paris."),
        ])
    }

    #[test]
    fn test_keeps_seat_order() {
        let result = sample();
        let seats: Vec<_> = result.iter().map(|a| a.provider.clone()).collect();
        assert_eq!(
            seats,
            vec![ProviderId::Groq, ProviderId::Mistral, ProviderId::Ollama]
        );
    }

    #[test]
    fn test_separates_answered_from_failed() {
        let result = sample();
        assert_eq!(result.answered().count(), 2);
        assert_eq!(result.failed().count(), 1);
        assert_eq!(
            result.failed().next().unwrap().error.as_deref(),
            Some("timed out")
        );
    }

    #[test]
    fn test_first_answered_respects_seat_order() {
        let result = sample();
        let first = result.first_answered().unwrap();
        assert_eq!(first.provider, ProviderId::Mistral);
        assert_eq!(first.text.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_all_failed_only_when_no_seat_answered() {
        assert!(!sample().all_failed());
        let dead = PanelResult::new(vec![
            ProviderAnswer::failed(ProviderId::Groq, "401"),
            ProviderAnswer::failed(ProviderId::Mistral, "connection refused"),
        ]);
        assert!(dead.all_failed());
        assert!(dead.first_answered().is_none());
    }

    #[test]
    fn test_answer_serializes_without_empty_fields() {
        let a = ProviderAnswer::answered(ProviderId::Groq, "hi");
        let json = serde_json::to_value(&a).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["text"], "hi");
    }
}
