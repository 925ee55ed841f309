//! Panel subdomain
//!
//! Record types for one panel run: per-seat answers, optional
//! cross-critiques, and the adjudicator's synthesis.

pub mod answer;
pub mod phase;
pub mod report;

pub use answer::{PanelResult, ProviderAnswer};
pub use phase::Phase;
pub use report::{Critique, PanelReport, SynthesizedAnswer};
