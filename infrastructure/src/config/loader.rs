//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `LLM_PANEL_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./llm-panel.toml` or `./.llm-panel.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/llm-panel/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Global config (XDG or platform equivalent)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        // Project-level config files (check both names)
        for filename in &["llm-panel.toml", ".llm-panel.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Nested keys use a double underscore: LLM_PANEL_PANEL__THIRD_SEAT=local
        figment = figment.merge(Env::prefixed("LLM_PANEL_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/llm-panel/config.toml if set,
    /// otherwise falls back to ~/.config/llm-panel/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("llm-panel").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["llm-panel.toml", ".llm-panel.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     LLM_PANEL_* variables");

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./llm-panel.toml or ./.llm-panel.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::ProviderId;

    #[test]
    fn test_load_defaults_targets_the_hosted_pair() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(
            config.resolve_seats(),
            vec![ProviderId::Groq, ProviderId::Mistral]
        );
        assert_eq!(config.behavior.request_timeout_secs, 30);
    }

    #[test]
    fn test_global_config_path_names_the_app_dir() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("llm-panel"));
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[panel]
seats = ["ollama", "groq"]
enable_critique = true

[behavior]
request_timeout_secs = 10

[providers.ollama]
model = "qwen2.5"
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(
            config.resolve_seats(),
            vec![ProviderId::Ollama, ProviderId::Groq]
        );
        assert!(config.panel.enable_critique);
        assert_eq!(config.behavior.request_timeout_secs, 10);
        assert_eq!(config.providers.ollama.model, "qwen2.5");
        // Untouched sections keep their defaults.
        assert_eq!(config.providers.groq.model, "llama-3.1-70b-versatile");
    }

    #[test]
    fn test_environment_overrides_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[providers.mistral]\nmodel = \"mistral-large-latest\"\n").unwrap();

        // set_var is unsafe on edition 2024. Tests run in parallel, so this
        // overrides a key no other test reads through the loader.
        unsafe { std::env::set_var("LLM_PANEL_PROVIDERS__MISTRAL__MODEL", "mistral-small-latest") };
        let config = ConfigLoader::load(Some(&path)).unwrap();
        unsafe { std::env::remove_var("LLM_PANEL_PROVIDERS__MISTRAL__MODEL") };

        assert_eq!(config.providers.mistral.model, "mistral-small-latest");
    }

    #[test]
    fn test_unknown_third_seat_value_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[panel]\nthird_seat = \"cloud\"\n").unwrap();

        assert!(ConfigLoader::load(Some(&path)).is_err());
    }
}
