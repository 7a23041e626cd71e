mod state;
mod ticker;
mod update;
mod view;

pub use state::{App, Message};
