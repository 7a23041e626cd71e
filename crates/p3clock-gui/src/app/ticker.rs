use std::time::Duration;

use iced::{Subscription, time};

use super::Message;

/// Repeating clock timer owned by the application.
///
/// While running it yields one [`Message::Tick`] per interval; the runtime
/// only guarantees each tick fires no earlier than the interval.
#[derive(Debug, Clone)]
pub(super) struct Ticker {
    interval: Duration,
    running: bool,
}

impl Ticker {
    pub(super) fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
        }
    }

    pub(super) fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis.max(1)))
    }

    pub(super) fn interval(&self) -> Duration {
        self.interval
    }

    pub(super) fn is_running(&self) -> bool {
        self.running
    }

    pub(super) fn start(&mut self) {
        self.running = true;
    }

    pub(super) fn stop(&mut self) {
        self.running = false;
    }

    pub(super) fn subscription(&self) -> Subscription<Message> {
        if self.running {
            time::every(self.interval).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }
}
