use iced::{Point, Size};

use super::ClockReading;

const FACE_MARGIN: f32 = 20.0;
const NUMERAL_RADIUS_RATIO: f32 = 0.75;
const MIN_NUMERAL_SIZE: f32 = 8.0;

const NUMERALS: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// Hand angles in degrees, clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    pub fn from_reading(reading: &ClockReading) -> Self {
        let hour = reading.hour() % 12;
        let minute = reading.minute() as f32;
        let second = reading.second() as f32;

        Self {
            hour: hour as f32 * 30.0 + minute * 0.5,
            minute: minute * 6.0 + second * 0.1,
            second: second * 6.0,
        }
    }
}

/// A stroked hand from the face centre to `tip`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hand {
    pub tip: Point,
    pub width: f32,
}

/// Geometry of the analog face inside a drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalogFace {
    center: Point,
    radius: f32,
}

impl AnalogFace {
    /// Fits a face into `area`, keeping a fixed margin to the edges.
    pub fn fit(area: Size) -> Self {
        let radius = (area.width.min(area.height) / 2.0 - FACE_MARGIN).max(1.0);

        Self {
            center: Point::new(area.width / 2.0, area.height / 2.0),
            radius,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn numeral_size(&self) -> f32 {
        (self.radius / 5.0).floor().max(MIN_NUMERAL_SIZE)
    }

    /// Roman numerals I..XII with their centres.
    pub fn numerals(&self) -> impl Iterator<Item = (&'static str, Point)> + '_ {
        let ring = self.radius * NUMERAL_RADIUS_RATIO;

        NUMERALS.iter().enumerate().map(move |(idx, numeral)| {
            let angle = ((idx as f32 + 1.0) * 30.0 - 90.0).to_radians();
            let position = Point::new(
                self.center.x + ring * angle.cos(),
                self.center.y + ring * angle.sin(),
            );
            (*numeral, position)
        })
    }

    /// Hour, minute and second hands, in drawing order from back to front.
    pub fn hands(&self, reading: &ClockReading) -> [Hand; 3] {
        let angles = HandAngles::from_reading(reading);

        [
            Hand {
                tip: self.tip(angles.second, 0.9),
                width: 1.0,
            },
            Hand {
                tip: self.tip(angles.minute, 0.7),
                width: 3.0,
            },
            Hand {
                tip: self.tip(angles.hour, 0.5),
                width: 5.0,
            },
        ]
    }

    fn tip(&self, degrees: f32, length_ratio: f32) -> Point {
        let radians = degrees.to_radians();
        let length = self.radius * length_ratio;

        Point::new(
            self.center.x + length * radians.sin(),
            self.center.y - length * radians.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn reading(hour: u32, minute: u32, second: u32) -> ClockReading {
        ClockReading::from_hms(hour, minute, second).expect("valid reading")
    }

    #[test]
    fn hand_angles_follow_dial() {
        let angles = HandAngles::from_reading(&reading(3, 0, 0));
        assert_eq!(angles.hour, 90.0);
        assert_eq!(angles.minute, 0.0);
        assert_eq!(angles.second, 0.0);

        let angles = HandAngles::from_reading(&reading(15, 30, 30));
        assert!((angles.hour - 105.0).abs() < EPSILON);
        assert!((angles.minute - 183.0).abs() < EPSILON);
        assert!((angles.second - 180.0).abs() < EPSILON);
    }

    #[test]
    fn face_fits_smaller_dimension() {
        let face = AnalogFace::fit(Size::new(400.0, 400.0));
        assert_eq!(face.radius(), 180.0);
        assert_eq!(face.center(), Point::new(200.0, 200.0));
        assert_eq!(face.numeral_size(), 36.0);
    }

    #[test]
    fn tiny_area_keeps_positive_radius() {
        let face = AnalogFace::fit(Size::new(10.0, 10.0));
        assert_eq!(face.radius(), 1.0);
        assert_eq!(face.numeral_size(), 8.0);
    }

    #[test]
    fn twelve_sits_above_center() {
        let face = AnalogFace::fit(Size::new(400.0, 400.0));
        let (label, position) = face.numerals().last().expect("twelve numerals");

        assert_eq!(label, "XII");
        assert!((position.x - 200.0).abs() < EPSILON);
        assert!((position.y - (200.0 - 135.0)).abs() < EPSILON);
    }

    #[test]
    fn three_o_clock_hour_hand_points_right() {
        let face = AnalogFace::fit(Size::new(400.0, 400.0));
        let [_, _, hour] = face.hands(&reading(3, 0, 0));

        assert_eq!(hour.width, 5.0);
        assert!((hour.tip.x - 290.0).abs() < EPSILON);
        assert!((hour.tip.y - 200.0).abs() < EPSILON);
    }
}
