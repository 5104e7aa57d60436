use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use metasearch_core::{EngineEntry, Preset};
use metasearch_embed::FetchConfig;

// ---------------------------------------------------------------------------
// Application preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppPreferences {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// Engine codes the three panels start on.
    #[serde(default = "default_initial_engines")]
    pub initial_engines: [String; 3],
    /// When set, panel selections are written back to `initial_engines` as they change.
    #[serde(default = "default_true")]
    pub remember_selections: bool,
    /// Extra engines appended to the built-in list.
    #[serde(default)]
    pub custom_engines: Vec<EngineEntry>,
    /// Fetch each panel's page in the background to show its title and embed status.
    #[serde(default = "default_true")]
    pub load_previews: bool,
    #[serde(default = "default_load_timeout_secs")]
    pub load_timeout_secs: u64,
}

fn default_window_width() -> f32 {
    1440.0
}
fn default_window_height() -> f32 {
    860.0
}
fn default_initial_engines() -> [String; 3] {
    Preset::General.engines().map(str::to_string)
}
fn default_true() -> bool {
    true
}
fn default_load_timeout_secs() -> u64 {
    FetchConfig::DEFAULT_TIMEOUT_SECS
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            initial_engines: default_initial_engines(),
            remember_selections: true,
            custom_engines: Vec::new(),
            load_previews: true,
            load_timeout_secs: default_load_timeout_secs(),
        }
    }
}

impl AppPreferences {
    /// Load preferences from next to the executable, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&crate::app_dir::preferences_path())
    }

    pub(crate) fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(json) => match serde_json::from_str::<AppPreferences>(&json) {
                    Ok(prefs) => {
                        info!("Loaded preferences from {}", path.display());
                        return prefs;
                    }
                    Err(e) => {
                        error!("Failed to parse preferences: {e}");
                    }
                },
                Err(e) => {
                    error!("Failed to read preferences file: {e}");
                }
            }
        } else {
            debug!("No preferences file at {}", path.display());
        }
        Self::default()
    }

    /// Persist preferences to disk.
    pub fn save(&self) {
        self.save_to(&crate::app_dir::preferences_path());
    }

    pub(crate) fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write preferences: {e}");
                } else {
                    debug!("Saved preferences");
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }

    /// Settings for background panel loads.
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig::default().with_timeout(Duration::from_secs(self.load_timeout_secs.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("metasearch-prefs-{}-{name}", std::process::id()))
            .join("preferences.json")
    }

    #[test]
    fn missing_fields_take_defaults() {
        let prefs: AppPreferences = serde_json::from_str(r#"{"window_width": 800.0}"#).unwrap();
        assert_eq!(prefs.window_width, 800.0);
        assert_eq!(prefs.initial_engines, default_initial_engines());
        assert!(prefs.load_previews);
        assert_eq!(prefs.load_timeout_secs, FetchConfig::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn custom_engines_parse() {
        let prefs: AppPreferences = serde_json::from_str(
            r#"{"custom_engines":[{"code":"arxiv","name":"arXiv","url_template":"https://arxiv.org/?q={query}","category":"specialized"}]}"#,
        )
        .unwrap();
        assert_eq!(prefs.custom_engines.len(), 1);
        assert_eq!(prefs.custom_engines[0].code, "arxiv");
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = temp_path("roundtrip");
        let mut prefs = AppPreferences::default();
        prefs.initial_engines = Preset::Academic.engines().map(str::to_string);
        prefs.load_previews = false;
        prefs.save_to(&path);
        assert_eq!(AppPreferences::load_from(&path), prefs);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let path = temp_path("garbage");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppPreferences::load_from(&path), AppPreferences::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn zero_timeout_is_clamped() {
        let prefs = AppPreferences {
            load_timeout_secs: 0,
            ..AppPreferences::default()
        };
        assert_eq!(prefs.fetch_config().timeout, Duration::from_secs(1));
    }
}
