//! Run phases

use serde::{Deserialize, Serialize};
use std::fmt;

/// The stages a panel run moves through, in order.
///
/// Critique only runs when cross-critique is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Fan-out: every seat answers the question independently.
    Panel,
    /// Each answering seat reads and critiques the other seats' answers.
    Critique,
    /// The adjudicator produces the final synthesized answer.
    Synthesis,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Panel => "panel",
            Phase::Critique => "critique",
            Phase::Synthesis => "synthesis",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::Panel.as_str(), "panel");
        assert_eq!(Phase::Critique.to_string(), "critique");
        assert_eq!(Phase::Synthesis.as_str(), "synthesis");
    }
}
