//! Core domain concepts shared across all subdomains.
//!
//! - [`provider::ProviderId`]: the LLM backends that can hold a panel seat
//! - [`question::Question`]: a validated question to pose to the panel

pub mod provider;
pub mod question;
