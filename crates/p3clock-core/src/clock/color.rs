use hex_color::HexColor;
use iced::Color;

const MIDNIGHT: HexColor = HexColor::rgb(0x08, 0x6d, 0x28);
const STANDARD: HexColor = HexColor::rgb(0x24, 0x9a, 0xff);

/// Foreground colour of the clock, chosen by the current hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockColor {
    /// Green shown throughout the midnight hour.
    Midnight,
    /// Blue shown at every other hour.
    Standard,
}

impl ClockColor {
    pub fn for_hour(hour: u32) -> Self {
        if hour == 0 {
            ClockColor::Midnight
        } else {
            ClockColor::Standard
        }
    }

    pub fn hex(self) -> HexColor {
        match self {
            ClockColor::Midnight => MIDNIGHT,
            ClockColor::Standard => STANDARD,
        }
    }
}

impl From<ClockColor> for Color {
    fn from(value: ClockColor) -> Self {
        let hex = value.hex();
        Color::from_rgb8(hex.r, hex.g, hex.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_hour_zero_is_midnight() {
        for hour in 0..24 {
            let expected = if hour == 0 {
                ClockColor::Midnight
            } else {
                ClockColor::Standard
            };
            assert_eq!(ClockColor::for_hour(hour), expected, "hour {hour}");
        }
    }

    #[test]
    fn hex_values_match_palette() {
        assert_eq!(
            ClockColor::Midnight.hex(),
            HexColor::parse("#086d28").expect("hex")
        );
        assert_eq!(
            ClockColor::Standard.hex(),
            HexColor::parse("#249aff").expect("hex")
        );
    }

    #[test]
    fn converts_to_iced_color() {
        assert_eq!(
            Color::from(ClockColor::Standard),
            Color::from_rgb8(0x24, 0x9a, 0xff)
        );
    }
}
