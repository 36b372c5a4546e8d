//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use satisfy_runtime::{EventBus, RuntimeConfig};

/// Configuration required to bootstrap a client session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding the static tables.
    pub data_dir: Option<PathBuf>,
    /// Settings file; defaults to the platform config directory.
    pub settings_path: Option<PathBuf>,
    /// Name of the log session directory.
    pub session_id: Option<String>,
    /// Event bus capacity per topic.
    pub event_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            settings_path: None,
            session_id: None,
            event_buffer: EventBus::DEFAULT_CAPACITY,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DATA_DIR` - Static table directory (default: bundled data)
    /// - `SATISFY_SETTINGS_PATH` - Settings file (default: platform config dir)
    /// - `SATISFY_SESSION_ID` - Log session name (default: timestamped)
    /// - `SATISFY_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] over an arbitrary variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.data_dir = var("CONTENT_DATA_DIR").map(PathBuf::from);
        config.settings_path = var("SATISFY_SETTINGS_PATH").map(PathBuf::from);
        config.session_id = var("SATISFY_SESSION_ID");

        if let Some(capacity) = var("SATISFY_EVENT_BUFFER").and_then(|value| value.parse::<usize>().ok())
        {
            config.event_buffer = capacity.max(1);
        }

        config
    }

    /// Settings file in effect.
    pub fn settings_path(&self) -> PathBuf {
        self.settings_path.clone().unwrap_or_else(default_settings_path)
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            event_buffer_size: self.event_buffer,
            ..RuntimeConfig::default()
        }
    }
}

/// Platform-specific settings file.
///
/// - macOS: `~/Library/Application Support/satisfy/settings.json`
/// - Linux: `~/.config/satisfy/settings.json`
/// - Windows: `%APPDATA%\satisfy\config\settings.json`
pub fn default_settings_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "satisfy")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("settings.json")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let config = ClientConfig::from_vars(vars(&[]));
        assert!(config.data_dir.is_none());
        assert!(config.session_id.is_none());
        assert_eq!(config.event_buffer, EventBus::DEFAULT_CAPACITY);
        assert!(config.settings_path().ends_with("settings.json"));
    }

    #[test]
    fn variables_override_defaults() {
        let config = ClientConfig::from_vars(vars(&[
            ("CONTENT_DATA_DIR", "/srv/tables"),
            ("SATISFY_SETTINGS_PATH", "/tmp/satisfy.json"),
            ("SATISFY_SESSION_ID", "evening"),
            ("SATISFY_EVENT_BUFFER", "0"),
        ]));

        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/tables")));
        assert_eq!(config.settings_path(), PathBuf::from("/tmp/satisfy.json"));
        assert_eq!(config.session_id.as_deref(), Some("evening"));
        assert_eq!(config.event_buffer, 1);
        assert_eq!(config.runtime_config().event_buffer_size, 1);
    }

    #[test]
    fn malformed_buffer_is_ignored() {
        let config = ClientConfig::from_vars(vars(&[("SATISFY_EVENT_BUFFER", "lots")]));
        assert_eq!(config.event_buffer, EventBus::DEFAULT_CAPACITY);
    }
}
