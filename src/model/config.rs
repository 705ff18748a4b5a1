use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml (all optional, defaults apply)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color overrides by theme slot name, hex strings like "#FF4444"
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Show key hints on the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

// an absent config.toml and an empty one must behave the same
impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            colors: HashMap::new(),
            show_key_hints: true,
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
    fn empty_config_parses_with_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.ui.colors.is_empty());
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn partial_ui_section() {
        let config: Config = toml::from_str(
            r##"[ui]
show_key_hints = false

[ui.colors]
highlight = "#FB4196"
"##,
        )
        .unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FB4196");
    }
}
