use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RcConfig {
    pub tab_stop: usize,
}

impl Default for RcConfig {
    fn default() -> Self {
        Self { tab_stop: 4 }
    }
}

pub struct RcLoader;

impl RcLoader {
    /// Get the path to the RC file
    /// Looks for .scrawlrc in:
    /// 1. Current directory
    /// 2. Home directory (~/.scrawlrc)
    pub fn get_rc_path() -> Option<PathBuf> {
        let current_rc = Path::new(".scrawlrc");
        if current_rc.exists() {
            return Some(current_rc.to_path_buf());
        }

        if let Ok(home) = env::var("HOME") {
            let home_rc = Path::new(&home).join(".scrawlrc");
            if home_rc.exists() {
                return Some(home_rc);
            }
        }

        None
    }

    /// Load and parse the RC file
    pub fn load_config() -> RcConfig {
        let mut config = RcConfig::default();

        if let Some(rc_path) = Self::get_rc_path() {
            match fs::read_to_string(&rc_path) {
                Ok(content) => Self::parse_config_content(&content, &mut config),
                Err(err) => {
                    // An unreadable rc file never blocks startup.
                    tracing::warn!("could not read {}: {err}", rc_path.display());
                }
            }
        }

        config
    }

    /// Parse the content of an RC file
    fn parse_config_content(content: &str, config: &mut RcConfig) {
        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('"') {
                continue;
            }

            Self::parse_config_line(line, config);
        }
    }

    /// Parse a single configuration line
    fn parse_config_line(line: &str, config: &mut RcConfig) {
        // Remove inline comments
        let line = if let Some(pos) = line.find('#') {
            &line[..pos]
        } else {
            line
        }
        .trim();

        // Handle "set" commands (vim-style)
        if let Some(stripped) = line.strip_prefix("set ") {
            let setting = stripped.trim();

            if let Some(value) = setting.strip_prefix("tabstop=") {
                Self::apply_tab_stop(value, config);
            }
        }
        // Handle direct key-value pairs
        else if let Some((key, value)) = line.split_once('=') {
            match key.trim() {
                "tabstop" | "tab_stop" => Self::apply_tab_stop(value.trim(), config),
                _ => {} // Unknown setting, ignore
            }
        }
    }

    fn apply_tab_stop(value: &str, config: &mut RcConfig) {
        if let Ok(tab_stop) = value.parse::<usize>() {
            if (1..=16).contains(&tab_stop) {
                config.tab_stop = tab_stop;
            }
        }
    }
}
