//! Question value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A question posed to the panel (Value Object).
///
/// Guaranteed non-blank at construction, so downstream code never has to
/// re-check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a question from raw text.
    ///
    /// # Panics
    ///
    /// Panics if `content` is empty or whitespace-only. Use
    /// [`Question::try_new`] for input that comes from the outside world.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(
            !content.trim().is_empty(),
            "Question content must not be empty"
        );
        Self { content }
    }

    /// Create a question, returning `None` for blank input.
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// The question text.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Question::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_question_from_text() {
        let q = Question::new("What is the capital of France?");
        assert_eq!(q.content(), "What is the capital of France?");
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_rejects_blank_content() {
        Question::new("   ");
    }

    #[test]
    fn test_try_new_returns_none_for_blank_content() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new("  \n ").is_none());
        assert!(Question::try_new("ok").is_some());
    }

    #[test]
    fn test_displays_as_plain_text() {
        let q = Question::new("Why is the sky blue?");
        assert_eq!(q.to_string(), "Why is the sky blue?");
    }

    #[test]
    fn test_converts_from_str_and_string() {
        let from_str = Question::from("Why?");
        let from_string = Question::from(String::from("Why?"));
        assert_eq!(from_str, from_string);
    }
}
