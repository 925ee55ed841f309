//! Refinement chain record

use crate::core::provider::ProviderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One link in a refinement chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefineStep {
    /// The provider that produced this step.
    pub provider: ProviderId,
    /// What the refiner said it changed. `None` for the opening draft or
    /// when the response carried no analysis section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    /// The answer as of this step.
    pub text: String,
    /// Populated when this refiner failed; `text` then repeats the previous
    /// step's answer unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RefineStep {
    /// The opening draft from the first seat.
    pub fn draft(provider: ProviderId, text: impl Into<String>) -> Self {
        Self {
            provider,
            analysis: None,
            text: text.into(),
            error: None,
        }
    }

    /// A successful refinement.
    pub fn refined(
        provider: ProviderId,
        analysis: Option<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            analysis,
            text: text.into(),
            error: None,
        }
    }

    /// A refiner that failed; the chain carries the previous text forward.
    pub fn failed(
        provider: ProviderId,
        previous_text: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            analysis: None,
            text: previous_text.into(),
            error: Some(error.into()),
        }
    }
}

/// Complete record of one refinement run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefineReport {
    /// The question that was posed.
    pub question: String,
    /// Every step of the chain, draft first.
    pub steps: Vec<RefineStep>,
    /// When the run finished.
    pub completed_at: DateTime<Utc>,
}

impl RefineReport {
    /// Build a report from a non-empty chain.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is empty; a refinement run always has at least the
    /// opening draft.
    pub fn new(question: impl Into<String>, steps: Vec<RefineStep>) -> Self {
        assert!(!steps.is_empty(), "refinement chain must not be empty");
        Self {
            question: question.into(),
            steps,
            completed_at: Utc::now(),
        }
    }

    /// The answer as of the last step.
    ///
    /// # Panics
    ///
    /// Panics if the chain is empty, which [`RefineReport::new`] rules out.
    pub fn final_text(&self) -> &str {
        let last = self
            .steps
            .last()
            .expect("refinement chain must not be empty");
        &last.text
    }
}
