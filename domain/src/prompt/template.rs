//! Prompt templates
//!
//! Pure functions of their inputs; no I/O. Every template that takes the
//! question embeds it verbatim.

use crate::core::provider::ProviderId;
use crate::panel::answer::PanelResult;
use crate::panel::report::Critique;

/// Marker inserted for seats that produced no answer.
const UNAVAILABLE: &str = "(answer unavailable)";

/// Prompt templates for the panel flow.
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the independent fan-out.
    pub fn panel_system() -> &'static str {
        r#"You are one of several experts answering the same question independently.
Provide a crisp, to-the-point answer. Be concise and direct - no fluff,
just the essential information."#
    }

    /// User prompt for the independent fan-out.
    pub fn panel_query(question: &str) -> String {
        format!("Question: {}\n\nAnswer:", question)
    }

    /// System prompt for the cross-critique round.
    pub fn critique_system() -> &'static str {
        r#"You review other experts' answers for conciseness and accuracy.
Be brief in your critique."#
    }

    /// Prompt asking `critic` to assess the other seats' answers.
    ///
    /// Only answered seats other than the critic appear; failed seats are
    /// left out entirely.
    pub fn critique_prompt(question: &str, critic: &ProviderId, answers: &PanelResult) -> String {
        let mut prompt = String::new();
        prompt.push_str("Review these answers for conciseness and accuracy.\n\n");
        prompt.push_str(&format!("Question: {}\n\n", question));
        prompt.push_str("Other answers:\n");
        for answer in answers.answered().filter(|a| &a.provider != critic) {
            prompt.push_str(&format!(
                "\n--- {} ---\n{}\n",
                answer.provider,
                answer.text.as_deref().unwrap_or_default()
            ));
        }
        prompt.push_str(
            "\nCritique:\n\
             1. What is correct but too verbose?\n\
             2. What is missing or wrong?\n\
             3. How could they be more crisp and to-the-point?\n",
        );
        prompt
    }

    /// System prompt for the adjudicator.
    pub fn synthesis_system() -> &'static str {
        r#"You are the adjudicator of an expert panel. You weigh the panel's
answers and produce one final answer. Be crisp and to-the-point."#
    }

    /// Prompt presenting the full panel record to the adjudicator.
    ///
    /// Every seat appears in order; seats that failed are explicitly marked
    /// unavailable rather than dropped.
    pub fn synthesis_prompt(
        question: &str,
        answers: &PanelResult,
        critiques: &[Critique],
    ) -> String {
        let mut prompt = String::new();
        prompt.push_str(&format!("Question: {}\n\n", question));
        prompt.push_str("Panel answers:\n");
        for answer in answers.iter() {
            prompt.push_str(&format!("\n--- {} ---\n", answer.provider));
            match &answer.text {
                Some(text) => prompt.push_str(text),
                None => prompt.push_str(UNAVAILABLE),
            }
            prompt.push('\n');
        }
        if !critiques.is_empty() {
            prompt.push_str("\nCritiques:\n");
            for critique in critiques {
                prompt.push_str(&format!(
                    "\n--- {} ---\n{}\n",
                    critique.critic, critique.content
                ));
            }
        }
        prompt.push_str(
            "\nTask: identify the most consistent and well-supported answer \
             and produce ONE final answer that:\n\
             - captures the essential information\n\
             - removes redundancy and fluff\n\
             - corrects any errors\n\
             Briefly explain which answers you relied on and why.\n",
        );
        prompt
    }

    /// System prompt for sequential refinement.
    pub fn refine_system() -> &'static str {
        r#"You tighten another model's answer. Remove unnecessary words and
keep only essential information."#
    }

    /// Prompt asking a refiner to analyze and tighten the previous answer.
    ///
    /// The response is expected in the `ANALYSIS:` / `IMPROVED RESPONSE:`
    /// format that [`crate::refine::parsing::parse_refinement`] understands.
    pub fn refine_prompt(question: &str, previous: &str) -> String {
        format!(
            "Make this response more crisp and to-the-point. Remove unnecessary \
             words, keep only essential information.\n\n\
             Question: {}\n\n\
             Previous response: {}\n\n\
             Task:\n\
             1. Identify what can be removed or condensed\n\
             2. Provide a more concise, direct version\n\n\
             Format:\n\
             ANALYSIS:\n\
             [What to remove or condense]\n\n\
             IMPROVED RESPONSE:\n\
             [Crisp, to-the-point version - shorter than the previous one]",
            question, previous
        )
    }
}
