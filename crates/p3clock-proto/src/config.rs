use serde::Deserialize;

mod validation;

pub use validation::ConfigValidationError;

pub const DEFAULT_CONFIG_FILE_PATH: &str = "~/.config/p3clock/config.toml";

/// Layout of the clock inside the window.
#[derive(Deserialize, Default, Copy, Clone, Eq, PartialEq, Debug)]
pub enum DisplayMode {
    /// A single digital label filling the window.
    #[default]
    Digital,
    /// Analog face on the left half, digital label on the right half.
    Split,
    /// Analog face only.
    Analog,
}

impl DisplayMode {
    pub fn shows_digital(self) -> bool {
        matches!(self, DisplayMode::Digital | DisplayMode::Split)
    }

    pub fn shows_analog(self) -> bool {
        matches!(self, DisplayMode::Split | DisplayMode::Analog)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_title() -> String {
    "P3 Clock".to_owned()
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    400
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClockConfig {
    #[serde(default)]
    pub mode: DisplayMode,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

fn default_tick_interval_ms() -> u64 {
    1000
}

/// Rendering options handed to the toolkit at startup.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct AppearanceConfig {
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
    #[serde(default = "default_antialiasing")]
    pub antialiasing: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            scale_factor: default_scale_factor(),
            antialiasing: default_antialiasing(),
        }
    }
}

fn default_scale_factor() -> f64 {
    1.0
}

fn default_antialiasing() -> bool {
    true
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

fn default_log_level() -> String {
    "warn".to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            window: WindowConfig::default(),
            clock: ClockConfig::default(),
            appearance: AppearanceConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config: Config = toml::from_str("").expect("empty config");
        assert_eq!(config, Config::default());
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 400);
        assert_eq!(config.clock.tick_interval_ms, 1000);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: Config = toml::from_str(
            r#"
            log_level = "debug"

            [window]
            width = 1024

            [clock]
            mode = "Split"
            "#,
        )
        .expect("partial config");

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 400);
        assert_eq!(config.window.title, "P3 Clock");
        assert_eq!(config.clock.mode, DisplayMode::Split);
        assert!(config.appearance.antialiasing);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let result = toml::from_str::<Config>("[clock]\nmode = \"Binary\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn display_mode_areas() {
        assert!(DisplayMode::Digital.shows_digital());
        assert!(!DisplayMode::Digital.shows_analog());
        assert!(DisplayMode::Split.shows_digital());
        assert!(DisplayMode::Split.shows_analog());
        assert!(!DisplayMode::Analog.shows_digital());
        assert!(DisplayMode::Analog.shows_analog());
    }
}
