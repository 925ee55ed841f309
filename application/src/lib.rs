//! Application layer for llm-panel
//!
//! This crate contains the use cases and port definitions. It depends only
//! on the domain layer; everything that talks to the outside world is an
//! adapter behind one of the ports here.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    completion::{CompletionGateway, CompletionRequest, GatewayError},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::run_panel::{RunPanelError, RunPanelInput, RunPanelUseCase};
pub use use_cases::run_refine::{RunRefineError, RunRefineInput, RunRefineUseCase};
