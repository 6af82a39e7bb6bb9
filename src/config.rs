//! Daemon configuration.
//!
//! Loaded from `$XDG_CONFIG_HOME/i3fox/config.toml` when present; every
//! field has a default, so the file is optional.

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Application filter: the sway `app_id`, also matched (case
    /// insensitively) against the X11 window class under plain i3.
    pub app_id: String,
    /// Titles that count as the generic placeholder. The empty title is
    /// always treated as placeholder.
    pub placeholder_titles: Vec<String>,
    /// Upper bound on remembered closed windows; the oldest entry is
    /// evicted first.
    pub closed_window_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_id: "firefox".to_string(),
            placeholder_titles: vec!["Mozilla Firefox".to_string()],
            closed_window_limit: 64,
        }
    }
}

impl Config {
    /// Load the config file if one exists, otherwise fall back to defaults.
    pub fn load() -> Result<Self> {
        let base = xdg::BaseDirectories::with_prefix("i3fox")?;
        match base.find_config_file("config.toml") {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                Ok(toml::from_str(&fs::read_to_string(path)?)?)
            }
            None => Ok(Self::default()),
        }
    }

    /// The injected placeholder predicate: does this title carry no
    /// distinguishing information yet?
    pub fn is_placeholder(&self, title: &str) -> bool {
        title.is_empty() || self.placeholder_titles.iter().any(|p| p == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_is_always_placeholder() {
        let config = Config::default();
        assert!(config.is_placeholder(""));
        assert!(config.is_placeholder("Mozilla Firefox"));
        assert!(!config.is_placeholder("Mail \u{2013} Inbox"));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: Config = toml::from_str("app_id = \"librewolf\"").unwrap();
        assert_eq!(config.app_id, "librewolf");
        assert_eq!(config.placeholder_titles, vec!["Mozilla Firefox"]);
        assert_eq!(config.closed_window_limit, 64);
    }
}
