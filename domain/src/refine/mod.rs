//! Sequential refinement subdomain
//!
//! In refinement mode the providers work in series instead of in parallel:
//! the first seat drafts an answer, and each later seat analyzes and
//! tightens the current draft in a single call.

pub mod parsing;
pub mod report;

pub use parsing::parse_refinement;
pub use report::{RefineReport, RefineStep};
