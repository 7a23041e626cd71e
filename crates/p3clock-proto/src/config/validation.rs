use masterror::Error;

use super::Config;

/// Errors returned when validating a [`Config`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    /// A window dimension is below one pixel.
    #[error("window {dimension} must be at least 1 pixel, got {value}")]
    WindowDimension { dimension: &'static str, value: u32 },

    /// The tick interval would spin the event loop.
    #[error("clock tick interval must be at least 1 ms")]
    TickInterval,

    /// The scale factor cannot be handed to the renderer.
    #[error("scale factor must be finite and positive, got {value}")]
    ScaleFactor { value: f64 },
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigValidationError`] for zero-sized windows, a zero tick
    /// interval or a scale factor that is not a finite positive number.
    ///
    /// # Examples
    ///
    /// ```
    /// use p3clock_proto::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (dimension, value) in [("width", self.window.width), ("height", self.window.height)] {
            if value < 1 {
                return Err(ConfigValidationError::WindowDimension { dimension, value });
            }
        }

        if self.clock.tick_interval_ms < 1 {
            return Err(ConfigValidationError::TickInterval);
        }

        let scale = self.appearance.scale_factor;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigValidationError::ScaleFactor { value: scale });
        }

        Ok(())
    }
}
