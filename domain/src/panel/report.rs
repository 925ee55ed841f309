//! Panel run report
//!
//! [`PanelReport`] is the aggregate handed back to callers: the question,
//! the full per-seat record, any critiques, and the adjudicator's synthesis.

use super::answer::PanelResult;
use crate::core::provider::ProviderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The adjudicator's synthesized answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesizedAnswer {
    /// The provider that adjudicated.
    pub adjudicator: ProviderId,
    /// The synthesized text.
    pub text: String,
}

impl SynthesizedAnswer {
    pub fn new(adjudicator: ProviderId, text: impl Into<String>) -> Self {
        Self {
            adjudicator,
            text: text.into(),
        }
    }
}

/// One seat's critique of the other seats' answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Critique {
    /// The seat doing the critiquing.
    pub critic: ProviderId,
    /// Its assessment of the other answers.
    pub content: String,
}

impl Critique {
    pub fn new(critic: ProviderId, content: impl Into<String>) -> Self {
        Self {
            critic,
            content: content.into(),
        }
    }
}

/// Complete record of one panel run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelReport {
    /// The question that was posed.
    pub question: String,
    /// The seats that were queried, in configured order.
    pub seats: Vec<ProviderId>,
    /// Per-seat outcomes, same order as `seats`.
    pub answers: PanelResult,
    /// Cross-critiques, when that phase ran.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub critiques: Vec<Critique>,
    /// The adjudicator's synthesis.
    pub synthesis: SynthesizedAnswer,
    /// When the run finished.
    pub completed_at: DateTime<Utc>,
}

impl PanelReport {
    pub fn new(
        question: impl Into<String>,
        seats: Vec<ProviderId>,
        answers: PanelResult,
        critiques: Vec<Critique>,
        synthesis: SynthesizedAnswer,
    ) -> Self {
        Self {
            question: question.into(),
            seats,
            answers,
            critiques,
            synthesis,
            completed_at: Utc::now(),
        }
    }
}
