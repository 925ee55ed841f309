//! Prompt domain
//!
//! Templates for every prompt the panel and refinement flows send to a
//! provider.

mod template;

pub use template::PromptTemplate;
