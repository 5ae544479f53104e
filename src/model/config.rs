use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from taskboard.toml. Every section is optional; a
/// missing file yields all defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Backend base URL. Overridden by TASKBOARD_URL and --url.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key-hint line in the status row.
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides, keyed by theme field name (e.g. "#FF4444").
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: BoardConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.base_url, "http://localhost:5000");
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn partial_toml_fills_in_the_rest() {
        let config: BoardConfig = toml::from_str(
            r##"
[server]
base_url = "http://tasks.example.net:8080"

[ui.colors]
highlight = "#FB4196"
"##,
        )
        .unwrap();
        assert_eq!(config.server.base_url, "http://tasks.example.net:8080");
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FB4196");
    }
}
