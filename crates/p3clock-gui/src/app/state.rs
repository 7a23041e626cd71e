use iced::{Size, Task, window::Id};
use log::info;
use p3clock_core::{clock::Clock, platform::Capabilities};
use p3clock_proto::config::Config;

use super::ticker::Ticker;

/// Application state shared by the tick and resize handlers.
pub struct App {
    pub(super) config: Config,
    pub(super) capabilities: Capabilities,
    pub(super) ticker: Ticker,
    pub(super) clock: Clock,
}

#[derive(Debug, Clone)]
pub enum Message {
    Tick,
    Resized(Size),
    CloseRequested(Id),
}

impl App {
    pub fn new(
        (config, capabilities): (Config, Capabilities),
    ) -> impl FnOnce() -> (Self, Task<Message>) {
        move || {
            let mut ticker = Ticker::from_millis(config.clock.tick_interval_ms);
            ticker.start();

            info!(
                "Clock started in {:?} mode, ticking every {:?}",
                config.clock.mode,
                ticker.interval()
            );

            let initial_size = Size::new(config.window.width as f32, config.window.height as f32);
            let mut app = App {
                config,
                capabilities,
                ticker,
                clock: Clock::new(),
            };
            app.resize_clock(initial_size);

            (app, Task::none())
        }
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }
}
