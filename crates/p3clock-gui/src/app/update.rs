use iced::{Size, Subscription, Task, window};
use log::{debug, info};
use p3clock_core::layout::{DisplayFont, digital_area};

use super::state::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.clock.tick();
                Task::none()
            }
            Message::Resized(size) => {
                if self.resize_clock(size).is_none() {
                    debug!("window resized to {size:?}, keeping current font");
                }

                Task::none()
            }
            Message::CloseRequested(id) => {
                info!("Window {id:?} close requested, stopping clock");
                self.ticker.stop();
                iced::exit()
            }
        }
    }

    /// Refits the label to a window of `size` logical pixels.
    ///
    /// Layout runs at `scale_factor` times the logical size, so the area
    /// available to the text shrinks by the same factor.
    pub(super) fn resize_clock(&mut self, size: Size) -> Option<DisplayFont> {
        let scale = self.capabilities.scale_factor as f32;
        let (width, height) = digital_area(
            self.config.clock.mode,
            (size.width / scale) as u32,
            (size.height / scale) as u32,
        );

        self.clock.on_resize(width, height)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            self.ticker.subscription(),
            window::resize_events().map(|(_id, size)| Message::Resized(size)),
            window::close_requests().map(Message::CloseRequested),
        ])
    }
}
