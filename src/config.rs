use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub browser: BrowserConfig,
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub font: FontConfig,
}

/// What the chooser lists and where it starts
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct BrowserConfig {
    /// Starting directory; the home directory when unset
    pub start_dir: Option<PathBuf>,
    /// List directories only
    pub dirs_only: bool,
    /// Substrings a file name must contain to be listed when `dirs_only` is off
    pub patterns: Vec<String>,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Initial window size
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Font configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct FontConfig {
    /// Size of the main interface font (in points)
    pub font_size: f32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            start_dir: None,
            dirs_only: true,
            patterns: Vec::new(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: "dark".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 520.0,
            height: 640.0,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig { font_size: 14.0 }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "dirchooser")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match Self::parse(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            log::warn!("Failed to parse config file {}: {}", path.display(), e);
                        }
                    },
                    Err(e) => {
                        log::warn!("Failed to read config file {}: {}", path.display(), e);
                    }
                }
                log::warn!("Using default configuration");
            }
        }
        Config::default()
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            // Create config directory if it doesn't exist
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }

        Err("Could not determine config directory".into())
    }

    /// Starting directory: configured, else home, else the working directory.
    pub fn resolve_start_dir(&self) -> PathBuf {
        self.browser
            .start_dir
            .clone()
            .or_else(|| directories::UserDirs::new().map(|ud| ud.home_dir().to_path_buf()))
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert!(config.browser.dirs_only);
        assert!(config.browser.patterns.is_empty());
        assert_eq!(config.window.width, 520.0);
        assert_eq!(config.font.font_size, 14.0);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.browser.patterns = vec![".mp3".to_string()];
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized = Config::parse(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(deserialized.browser.patterns, vec![".mp3".to_string()]);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::parse(
            r#"
            [browser]
            dirs_only = false
            patterns = [".flac"]
            "#,
        )
        .unwrap();
        assert!(!config.browser.dirs_only);
        assert_eq!(config.browser.patterns, vec![".flac".to_string()]);
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.window.height, 640.0);
    }

    #[test]
    fn test_configured_start_dir_wins() {
        let mut config = Config::default();
        config.browser.start_dir = Some(PathBuf::from("/srv/media"));
        assert_eq!(config.resolve_start_dir(), PathBuf::from("/srv/media"));
    }
}
