use iced::{
    Font,
    font::{Family, Weight},
};
use p3clock_proto::config::DisplayMode;

pub const FONT_FAMILY: &str = "Arial";

const HEIGHT_DIVISOR: f64 = 1.5;
const WIDTH_DIVISOR: f64 = 4.5;

/// Font descriptor applied to the clock label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFont {
    family: &'static str,
    weight: Weight,
    size: u32,
}

impl DisplayFont {
    pub fn bold(size: u32) -> Self {
        Self {
            family: FONT_FAMILY,
            weight: Weight::Bold,
            size: size.max(1),
        }
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn to_font(&self) -> Font {
        Font {
            family: Family::Name(self.family),
            weight: self.weight,
            ..Font::DEFAULT
        }
    }
}

/// Font size that fits `HH:MM:SS` into a `width` x `height` area.
///
/// Returns `None` when either dimension is below one pixel.
pub fn font_size_for(width: u32, height: u32) -> Option<u32> {
    if width < 1 || height < 1 {
        return None;
    }

    let from_height = (f64::from(height) / HEIGHT_DIVISOR).floor() as u32;
    let from_width = (f64::from(width) / WIDTH_DIVISOR).floor() as u32;

    Some(from_height.min(from_width).max(1))
}

/// Portion of the window given to the digital label.
pub fn digital_area(mode: DisplayMode, width: u32, height: u32) -> (u32, u32) {
    match mode {
        DisplayMode::Split => (width / 2, height),
        DisplayMode::Digital | DisplayMode::Analog => (width, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_width_bound() {
        assert_eq!(font_size_for(800, 400), Some(177));
    }

    #[test]
    fn short_window_is_height_bound() {
        assert_eq!(font_size_for(2000, 150), Some(100));
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        assert_eq!(font_size_for(800, 0), None);
        assert_eq!(font_size_for(0, 400), None);
        assert_eq!(font_size_for(0, 0), None);
    }

    #[test]
    fn size_never_drops_below_one() {
        assert_eq!(font_size_for(1, 1), Some(1));
        assert_eq!(font_size_for(4, 1000), Some(1));
    }

    #[test]
    fn matches_formula_across_sizes() {
        for width in (1..2000).step_by(37) {
            for height in (1..1200).step_by(41) {
                let expected = ((height as f64 / 1.5).floor() as u32)
                    .min((width as f64 / 4.5).floor() as u32)
                    .max(1);
                assert_eq!(font_size_for(width, height), Some(expected));
            }
        }
    }

    #[test]
    fn split_mode_halves_width() {
        assert_eq!(digital_area(DisplayMode::Split, 800, 400), (400, 400));
        assert_eq!(digital_area(DisplayMode::Digital, 800, 400), (800, 400));

        let (width, height) = digital_area(DisplayMode::Split, 800, 400);
        assert_eq!(font_size_for(width, height), Some(88));
    }

    #[test]
    fn display_font_is_bold_arial() {
        let font = DisplayFont::bold(42);
        assert_eq!(font.family(), "Arial");
        assert_eq!(font.weight(), Weight::Bold);
        assert_eq!(font.size(), 42);

        let iced_font = font.to_font();
        assert_eq!(iced_font.family, Family::Name("Arial"));
        assert_eq!(iced_font.weight, Weight::Bold);
    }
}
