// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::api::ChatModel;
use crate::theme::ThemeKind;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TOP_K: u32 = 5;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// `[api]`: where the completion service lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `[suggest]`: prompt suggestion dropdown
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    pub enabled: bool,
    pub top_k: u32,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// `[chat]`: completion defaults and transcript export
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub model: ChatModel,
    pub export_dir: PathBuf,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: ChatModel::default(),
            export_dir: PathBuf::from("."),
        }
    }
}

/// `[ui]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: ThemeKind,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub suggest: SuggestConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.api.api_key.is_none());
        assert!(config.suggest.enabled);
        assert_eq!(config.suggest.top_k, DEFAULT_TOP_K);
        assert_eq!(config.chat.model, ChatModel::OpenAi);
        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
        assert_eq!(config.ui.theme, ThemeKind::Dark);
    }

    #[test]
    fn test_full_config_parses() {
        let toml_content = r#"
[api]
base_url = "https://chat.example.com"
api_key = "sk-test"
timeout_secs = 10

[suggest]
enabled = false
top_k = 3

[chat]
model = "claude"
export_dir = "/tmp/exports"

[clipboard]
backend = "osc52"

[ui]
theme = "light"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "https://chat.example.com");
        assert_eq!(config.api.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.api.timeout_secs, 10);
        assert!(!config.suggest.enabled);
        assert_eq!(config.suggest.top_k, 3);
        assert_eq!(config.chat.model, ChatModel::Claude);
        assert_eq!(config.chat.export_dir, PathBuf::from("/tmp/exports"));
        assert_eq!(config.clipboard.backend, ClipboardBackend::Osc52);
        assert_eq!(config.ui.theme, ThemeKind::Light);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[suggest]\ntop_k = 8\n").unwrap();
        assert!(config.suggest.enabled);
        assert_eq!(config.suggest.top_k, 8);
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[chat]\nmodel = \"gpt\"\n");
        assert!(result.is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_backend_parsing(backend in prop::sample::select(vec!["auto", "system", "osc52"])) {
            let toml_content = format!("[clipboard]\nbackend = \"{}\"\n", backend);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid backend: {}", backend);

            let expected = match backend {
                "auto" => ClipboardBackend::Auto,
                "system" => ClipboardBackend::System,
                "osc52" => ClipboardBackend::Osc52,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.unwrap().clipboard.backend, expected);
        }

        #[test]
        fn prop_valid_model_parsing(model in prop::sample::select(vec!["openai", "claude", "local"])) {
            let toml_content = format!("[chat]\nmodel = \"{}\"\n", model);

            let config: Config = toml::from_str(&toml_content).unwrap();
            prop_assert_eq!(config.chat.model.as_str(), model);
        }
    }
}
