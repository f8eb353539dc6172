//! Persistent desktop settings and UI scale handling.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tileworld::DEFAULT_LIGHT_RADIUS;
use tracing::warn;

use crate::APP_NAME;

pub const SETTINGS_FORMAT_VERSION: u32 = 1;
pub const SAVE_FILE_NAME: &str = "save_data.txt";
pub const UI_SCALE_ENV: &str = "TILEWORLD_UI_SCALE";

pub const DEFAULT_UI_SCALE: f32 = 1.0;
pub const MIN_UI_SCALE: f32 = 0.5;
pub const MAX_UI_SCALE: f32 = 4.0;
pub const UI_SCALE_STEP: f32 = 0.1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub format_version: u32,
    pub light_radius: u32,
    #[serde(default)]
    pub ui_scale: Option<f32>,
    #[serde(default)]
    pub save_path: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            format_version: SETTINGS_FORMAT_VERSION,
            light_radius: DEFAULT_LIGHT_RADIUS,
            ui_scale: None,
            save_path: None,
        }
    }
}

impl AppSettings {
    pub fn get_default_path() -> Option<PathBuf> {
        data_dir().map(|dir| dir.join("settings.json"))
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Missing files fall back silently; unreadable ones fall back with a warning.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
                Self::default()
            }
        }
    }
}

/// Command-line path first, then the settings override, then the per-user data dir.
pub fn resolve_save_path(cli_path: Option<PathBuf>, settings: &AppSettings) -> PathBuf {
    cli_path
        .or_else(|| settings.save_path.clone())
        .or_else(|| data_dir().map(|dir| dir.join(SAVE_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(SAVE_FILE_NAME))
}

fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().to_path_buf())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiScaleAction {
    Increase,
    Decrease,
    Reset,
}

impl UiScaleAction {
    pub fn apply(self, current: f32) -> f32 {
        match self {
            UiScaleAction::Increase => clamp_ui_scale(current + UI_SCALE_STEP),
            UiScaleAction::Decrease => clamp_ui_scale(current - UI_SCALE_STEP),
            UiScaleAction::Reset => DEFAULT_UI_SCALE,
        }
    }
}

pub fn clamp_ui_scale(value: f32) -> f32 {
    if !value.is_finite() {
        return DEFAULT_UI_SCALE;
    }
    value.clamp(MIN_UI_SCALE, MAX_UI_SCALE)
}

/// Environment override beats the saved value, which beats a high-DPI display.
pub fn resolve_ui_scale(
    dpi_scale: f32,
    persisted_ui_scale: Option<f32>,
    ui_scale_override: Option<&str>,
) -> f32 {
    ui_scale_override
        .and_then(|raw| raw.trim().parse::<f32>().ok())
        .or(persisted_ui_scale)
        .map(clamp_ui_scale)
        .unwrap_or_else(|| {
            if dpi_scale.is_finite() && dpi_scale > 1.0 {
                clamp_ui_scale(dpi_scale)
            } else {
                DEFAULT_UI_SCALE
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn settings_atomic_write_and_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        let settings = AppSettings {
            light_radius: 7,
            ui_scale: Some(1.4),
            save_path: Some(PathBuf::from("/tmp/elsewhere.txt")),
            ..AppSettings::default()
        };

        settings.write_atomic(&path).expect("write");
        assert_eq!(AppSettings::load(&path).expect("load"), settings);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let json = r#"{ "format_version": 1, "light_radius": 3 }"#;
        let settings: AppSettings = serde_json::from_str(json).expect("deserialize");
        assert_eq!(settings.light_radius, 3);
        assert_eq!(settings.ui_scale, None);
        assert_eq!(settings.save_path, None);
    }

    #[test]
    fn missing_or_corrupt_settings_fall_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let missing = dir.path().join("missing.json");
        assert_eq!(AppSettings::load_or_default(&missing), AppSettings::default());

        let corrupt = dir.path().join("corrupt.json");
        fs::write(&corrupt, "{ not json").expect("write");
        assert_eq!(AppSettings::load_or_default(&corrupt), AppSettings::default());
    }

    #[test]
    fn save_path_prefers_cli_then_settings() {
        let settings =
            AppSettings { save_path: Some(PathBuf::from("from_settings.txt")), ..Default::default() };
        assert_eq!(
            resolve_save_path(Some(PathBuf::from("from_cli.txt")), &settings),
            PathBuf::from("from_cli.txt")
        );
        assert_eq!(resolve_save_path(None, &settings), PathBuf::from("from_settings.txt"));
        assert!(resolve_save_path(None, &AppSettings::default()).ends_with(SAVE_FILE_NAME));
    }

    #[test]
    fn ui_scale_prefers_env_then_saved_then_dpi() {
        assert_eq!(resolve_ui_scale(2.0, Some(1.2), Some("1.5")), 1.5);
        assert_eq!(resolve_ui_scale(2.0, Some(1.2), Some("abc")), 1.2);
        assert_eq!(resolve_ui_scale(2.0, None, None), 2.0);
        assert_eq!(resolve_ui_scale(0.0, None, None), DEFAULT_UI_SCALE);
        assert_eq!(resolve_ui_scale(1.0, Some(99.0), None), MAX_UI_SCALE);
    }

    #[test]
    fn scale_actions_step_and_clamp() {
        assert!((UiScaleAction::Increase.apply(1.0) - 1.1).abs() < 0.0001);
        assert!((UiScaleAction::Decrease.apply(1.0) - 0.9).abs() < 0.0001);
        assert_eq!(UiScaleAction::Decrease.apply(MIN_UI_SCALE), MIN_UI_SCALE);
        assert_eq!(UiScaleAction::Reset.apply(3.3), DEFAULT_UI_SCALE);
        assert_eq!(clamp_ui_scale(f32::NAN), DEFAULT_UI_SCALE);
    }
}
