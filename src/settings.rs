use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "album-player.app_settings";

#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_FILE: &str = "settings.json";

pub const DEFAULT_VOLUME: f64 = 0.5;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[cfg(target_arch = "wasm32")]
    #[error("browser storage error: {0}")]
    Storage(#[from] gloo_storage::errors::StorageError),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("settings format error: {0}")]
    Format(#[from] serde_json::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("no configuration directory on this platform")]
    NoConfigDir,
}

/// Player preferences that outlive a single album page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_volume")]
    pub volume: f64,
}

fn default_volume() -> f64 {
    DEFAULT_VOLUME
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
        }
    }
}

impl AppSettings {
    /// Repair values written by older builds or edited by hand.
    pub fn normalized(mut self) -> Self {
        self.volume = normalize_volume(self.volume);
        self
    }
}

/// Bring a stored volume into `0.0..=1.0`, accepting percent-style values.
pub fn normalize_volume(mut value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_VOLUME;
    }
    let mut passes = 0;
    while value > 1.0 && passes < 4 {
        value /= 100.0;
        passes += 1;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> Result<AppSettings, SettingsError> {
    match LocalStorage::get::<AppSettings>(SETTINGS_KEY) {
        Ok(settings) => Ok(settings.normalized()),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(AppSettings::default()),
        Err(err) => Err(err.into()),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn save_settings(settings: &AppSettings) -> Result<(), SettingsError> {
    LocalStorage::set(SETTINGS_KEY, settings)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn settings_path() -> Result<std::path::PathBuf, SettingsError> {
    let dir = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
    Ok(dir.join("album-player").join(SETTINGS_FILE))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> Result<AppSettings, SettingsError> {
    let path = settings_path()?;
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(serde_json::from_str::<AppSettings>(&text)?.normalized()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(AppSettings::default()),
        Err(err) => Err(err.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_settings(settings: &AppSettings) -> Result<(), SettingsError> {
    let path = settings_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}

/// Load settings, falling back to defaults when storage is unavailable.
pub fn load_settings_or_default() -> AppSettings {
    load_settings().unwrap_or_else(|err| {
        tracing::warn!("using default settings: {err}");
        AppSettings::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_volume_uses_default() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.volume, DEFAULT_VOLUME);
    }

    #[test]
    fn percent_volumes_are_normalized() {
        assert_eq!(normalize_volume(80.0), 0.8);
        assert_eq!(normalize_volume(0.25), 0.25);
        assert_eq!(normalize_volume(-1.0), 0.0);
        assert_eq!(normalize_volume(f64::NAN), DEFAULT_VOLUME);
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings = AppSettings { volume: 0.3 };
        let json = serde_json::to_string(&settings).unwrap();
        let restored: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.normalized(), settings);
    }
}
