/// Digital clock view layer - pure rendering, no business logic
use iced::{
    Color, Element, Length,
    widget::{container, text},
};
use p3clock_core::clock::ClockLabel;

use crate::app::Message;

/// Render the label centred in whatever area it is given.
pub fn render_clock(label: &ClockLabel) -> Element<'static, Message> {
    let font = label.font();

    container(
        text(label.text().to_owned())
            .size(font.size() as f32)
            .font(font.to_font())
            .color(Color::from(label.color())),
    )
    .center(Length::Fill)
    .into()
}
