mod analog;
mod color;

use chrono::{Local, Timelike};
use log::{debug, trace};

pub use analog::{AnalogFace, Hand, HandAngles};
pub use color::ClockColor;

use crate::layout::{DisplayFont, font_size_for};

/// Wall-clock snapshot taken once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockReading {
    pub fn now() -> Self {
        Self::from_time(&Local::now())
    }

    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }

    /// Builds a reading from explicit components, rejecting out-of-range values.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        (hour < 24 && minute < 60 && second < 60).then_some(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Zero-padded 24-hour `HH:MM:SS`.
    pub fn text(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    pub fn color(&self) -> ClockColor {
        ClockColor::for_hour(self.hour)
    }
}

/// The text element showing the formatted time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockLabel {
    text: String,
    color: ClockColor,
    font: DisplayFont,
}

impl Default for ClockLabel {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: ClockColor::Standard,
            font: DisplayFont::bold(100),
        }
    }
}

impl ClockLabel {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> ClockColor {
        self.color
    }

    pub fn font(&self) -> DisplayFont {
        self.font
    }
}

/// Clock state - business logic only, rendering lives in the GUI crate.
#[derive(Debug, Clone)]
pub struct Clock {
    label: ClockLabel,
    reading: ClockReading,
    last_font: Option<DisplayFont>,
}

impl Default for Clock {
    fn default() -> Self {
        let mut clock = Self {
            label: ClockLabel::default(),
            reading: ClockReading::now(),
            last_font: None,
        };
        clock.tick_at(clock.reading);
        clock
    }
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self) -> &ClockLabel {
        &self.label
    }

    pub fn reading(&self) -> ClockReading {
        self.reading
    }

    /// Font applied by the most recent effective resize.
    pub fn last_font(&self) -> Option<DisplayFont> {
        self.last_font
    }

    /// Re-reads the local time and refreshes the label.
    pub fn tick(&mut self) {
        self.tick_at(ClockReading::now());
    }

    pub fn tick_at(&mut self, reading: ClockReading) {
        self.reading = reading;
        self.label.text = reading.text();
        self.label.color = reading.color();

        trace!("clock tick {}", self.label.text);
    }

    /// Rescales the label font to the given area.
    ///
    /// Returns the applied font, or `None` when either dimension is below one
    /// pixel, in which case the label keeps its previous font.
    pub fn on_resize(&mut self, width: u32, height: u32) -> Option<DisplayFont> {
        let Some(size) = font_size_for(width, height) else {
            debug!("ignoring degenerate resize {width}x{height}");
            return None;
        };

        let font = DisplayFont::bold(size);
        self.label.font = font;
        self.last_font = Some(font);

        debug!("resized to {width}x{height}, font size {size}");
        Some(font)
    }
}
