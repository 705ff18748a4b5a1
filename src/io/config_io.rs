use std::fs;
use std::path::Path;

use crate::model::config::Config;

/// Read config.toml from the data directory. A missing or unreadable
/// config is not an error; the app runs on defaults.
pub fn read_config(data_dir: &Path) -> Config {
    let path = data_dir.join("config.toml");
    fs::read_to_string(&path)
        .ok()
        .and_then(|content| toml::from_str(&content).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = read_config(dir.path());
        assert!(config.ui.colors.is_empty());
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn malformed_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "[ui\nbroken").unwrap();
        let config = read_config(dir.path());
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn reads_color_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[ui.colors]\ntext = \"#AABBCC\"\n",
        )
        .unwrap();
        let config = read_config(dir.path());
        assert_eq!(config.ui.colors.get("text").unwrap(), "#AABBCC");
    }
}
