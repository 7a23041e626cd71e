pub mod clock;
pub mod config;
pub mod layout;
pub mod platform;
