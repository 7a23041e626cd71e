use iced::{
    Color, Element, Length, Theme,
    widget::{Row, container},
};

use super::state::{App, Message};
use crate::views::{analog::render_analog, clock::render_clock};

impl App {
    pub fn title(&self) -> String {
        self.config.window.title.clone()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn scale_factor(&self) -> f64 {
        self.capabilities.scale_factor
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mode = self.config.clock.mode;
        let label = self.clock.label();

        let mut areas = Vec::with_capacity(2);
        if mode.shows_analog() {
            areas.push(render_analog(self.clock.reading(), label.color()));
        }
        if mode.shows_digital() {
            areas.push(render_clock(label));
        }

        container(
            Row::with_children(areas)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::BLACK.into()),
            ..container::Style::default()
        })
        .into()
    }
}
