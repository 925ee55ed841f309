//! Infrastructure layer for llm-panel
//!
//! This crate contains the adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, ThirdSeat};
pub use providers::{
    PanelGateway, ProviderAdapter, build_gateway, hosted::HostedApiAdapter, ollama::OllamaAdapter,
};
