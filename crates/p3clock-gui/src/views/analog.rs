use iced::{
    Color, Element, Font, Length, Rectangle, Renderer, Theme, alignment,
    mouse::Cursor,
    widget::{
        canvas,
        canvas::{Frame, Geometry, Path, Program, Stroke, Text},
    },
};
use p3clock_core::clock::{AnalogFace, ClockColor, ClockReading};

use crate::app::Message;

const NUMERAL_FONT: Font = Font::with_name("Arial");
const BORDER_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy)]
struct AnalogClock {
    reading: ClockReading,
    color: Color,
}

impl Program<Message> for AnalogClock {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        self.paint(&mut frame);

        vec![frame.into_geometry()]
    }
}

impl AnalogClock {
    fn paint(&self, frame: &mut Frame) {
        let face = AnalogFace::fit(frame.size());
        let center = face.center();
        let disc = Path::circle(center, face.radius());

        frame.fill(&disc, Color::BLACK);
        frame.stroke(
            &disc,
            Stroke::default()
                .with_width(BORDER_WIDTH)
                .with_color(self.color),
        );

        let numeral_size = face.numeral_size();
        for (numeral, position) in face.numerals() {
            frame.fill_text(Text {
                content: numeral.to_owned(),
                position,
                color: self.color,
                size: numeral_size.into(),
                font: NUMERAL_FONT,
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Center,
                ..Text::default()
            });
        }

        for hand in face.hands(&self.reading) {
            frame.stroke(
                &Path::line(center, hand.tip),
                Stroke::default().with_width(hand.width).with_color(self.color),
            );
        }
    }
}

/// Render the analog face filling the given area.
pub fn render_analog(reading: ClockReading, color: ClockColor) -> Element<'static, Message> {
    canvas(AnalogClock {
        reading,
        color: color.into(),
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
