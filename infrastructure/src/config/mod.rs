//! Configuration loading
//!
//! Raw TOML structures plus the multi-source loader that merges defaults,
//! config files, and environment variables.

mod file_config;
mod loader;

pub use file_config::{
    FileBehaviorConfig, FileConfig, FileGroqConfig, FileMistralConfig, FileOllamaConfig,
    FilePanelConfig, FileProvidersConfig, ThirdSeat,
};
pub use loader::ConfigLoader;
