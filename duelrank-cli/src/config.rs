/// Config file loading and creation for the duelrank CLI.
///
/// Config lives at ~/.config/duelrank/config.toml.
/// All fields are optional — CLI args override config values.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bail;

/// Display theme for table rendering. Persisted across sessions; has no
/// effect on ranking results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Serialize, Deserialize, Default)]
pub struct DuelrankConfig {
    /// "light" or "dark". Defaults to dark when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    /// Ask before the first removal in a run. Defaults to true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_removals: Option<bool>,
}

impl DuelrankConfig {
    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or(Theme::Dark)
    }

    pub fn confirm_removals(&self) -> bool {
        self.confirm_removals.unwrap_or(true)
    }
}

const DEFAULT_CONFIG_TEMPLATE: &str = "\
# duelrank configuration
# All values here can be overridden by CLI flags.

# Display theme for tables: \"light\" or \"dark\" (default: dark)
# theme = \"dark\"

# Ask for confirmation before the first removal in a run (default: true)
# confirm_removals = true
";

/// Returns the default config path: ~/.config/duelrank/config.toml
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| bail("HOME environment variable not set"));
    PathBuf::from(home).join(".config").join("duelrank").join("config.toml")
}

/// Load config from a file path. Returns default (all None) if file doesn't exist.
pub fn load_config(path: &Path) -> DuelrankConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content)
            .unwrap_or_else(|e| bail(format!("Failed to parse config at {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => DuelrankConfig::default(),
        Err(e) => bail(format!("Failed to read config at {}: {e}", path.display())),
    }
}

/// Persist a theme choice, keeping any other settings in the file.
pub fn save_theme(path: &Path, theme: Theme) {
    let mut cfg = load_config(path);
    cfg.theme = Some(theme);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    let content = toml::to_string(&cfg)
        .unwrap_or_else(|e| bail(format!("Failed to serialize config: {e}")));
    std::fs::write(path, content)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));
}

/// Create the default config file. Errors if it already exists.
pub fn create_default_config() -> PathBuf {
    let path = config_path();

    if path.exists() {
        bail(format!("Config file already exists at {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", parent.display())));
    }

    std::fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .unwrap_or_else(|e| bail(format!("Failed to write config to {}: {e}", path.display())));

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parse_round_trip() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = DuelrankConfig::default();
        assert_eq!(cfg.theme(), Theme::Dark);
        assert!(cfg.confirm_removals());
    }

    #[test]
    fn config_deserializes_from_toml() {
        let cfg: DuelrankConfig =
            toml::from_str("theme = \"light\"\nconfirm_removals = false\n").unwrap();
        assert_eq!(cfg.theme(), Theme::Light);
        assert!(!cfg.confirm_removals());
    }
}
