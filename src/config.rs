//! Window configuration.
//!
//! Settings are loaded from an INI file with safe defaults for every key, so
//! the demo starts even when no file is present.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! title = Sprite Animation Demo
//! target_fps = 120
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_WINDOW_TITLE: &str = "Sprite Animation Demo";
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Window settings used to open the window and pace the frame loop.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Window title.
    pub window_title: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.window_title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        info!(
            "Loaded config: {}x{} window \"{}\", fps={}",
            self.window_width, self.window_height, self.window_title, self.target_fps
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 720);
        assert_eq!(config.window_title, "Sprite Animation Demo");
        assert_eq!(config.target_fps, 120);
        assert_eq!(config.config_path, PathBuf::from("./config.ini"));
    }

    #[test]
    fn test_with_path_keeps_other_defaults() {
        let config = GameConfig::with_path("/tmp/other.ini");
        assert_eq!(config.config_path, PathBuf::from("/tmp/other.ini"));
        assert_eq!(config.window_size(), (1280, 720));
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let mut config = GameConfig::with_path("/nonexistent/raysprite.ini");
        assert!(config.load_from_file().is_err());
        // Defaults survive the failed load.
        assert_eq!(config.window_size(), (1280, 720));
    }

    #[test]
    fn test_load_overrides_present_keys_only() {
        let dir = std::env::temp_dir().join("raysprite_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("partial.ini");
        std::fs::write(&path, "[window]\nwidth = 800\ntitle = Test Window\n").unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();

        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_title, "Test Window");
        // Keys absent from the file keep their defaults.
        assert_eq!(config.window_height, 720);
        assert_eq!(config.target_fps, 120);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_full_window_section() {
        let dir = std::env::temp_dir().join("raysprite_config_full_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("full.ini");
        std::fs::write(
            &path,
            "[window]\nwidth = 1920\nheight = 1080\ntitle = Big\ntarget_fps = 60\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();

        assert_eq!(config.window_size(), (1920, 1080));
        assert_eq!(config.window_title, "Big");
        assert_eq!(config.target_fps, 60);

        std::fs::remove_dir_all(&dir).ok();
    }
}
