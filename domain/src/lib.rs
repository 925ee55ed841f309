//! Domain layer for llm-panel
//!
//! This crate contains the core entities, value objects, and pure logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Panel
//!
//! The panel is the ordered set of LLM providers a question is posed to.
//! Every seat is queried with the same question, and every seat contributes
//! exactly one entry to the record: its answer, or the failure that stood
//! in for one. Seat order is configuration order, never completion order.
//!
//! ## Adjudication
//!
//! After the fan-out, one provider (the adjudicator) reads the full set of
//! panel answers and produces a single synthesized answer, picking out the
//! best-supported response and explaining the choice.
//!
//! ## Refinement
//!
//! An alternative, sequential flow: the first seat drafts an answer and each
//! subsequent seat tightens it, recording what it changed along the way.

pub mod core;
pub mod panel;
pub mod prompt;
pub mod refine;

// Re-export commonly used types
pub use crate::core::{
    provider::{ProviderId, ProviderKind},
    question::Question,
};
pub use panel::{
    answer::{PanelResult, ProviderAnswer},
    phase::Phase,
    report::{Critique, PanelReport, SynthesizedAnswer},
};
pub use prompt::PromptTemplate;
pub use refine::{
    parsing::parse_refinement,
    report::{RefineReport, RefineStep},
};
