use std::{backtrace::Backtrace, panic, path::PathBuf};

use clap::Parser;
use flexi_logger::Logger;
use iced::{Size, window};
use log::{debug, error, info, warn};
use p3clock_core::{config::get_config, platform};
use p3clock_gui::{App, DEFAULT_LOG_LEVEL, fallback_log_spec, get_log_spec};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_parser = clap::value_parser!(PathBuf))]
    config_path: Option<PathBuf>,
}

fn main() -> iced::Result {
    let args = Args::parse();

    let (bootstrap_spec, env_error) = match get_log_spec(DEFAULT_LOG_LEVEL) {
        Ok(spec) => (spec, None),
        Err(err) => (fallback_log_spec(), Some(err)),
    };

    let logger = Logger::with(bootstrap_spec)
        .start()
        .map_err(|err| eprintln!("Failed to start logger: {err}"))
        .ok();

    if let Some(err) = env_error {
        warn!("Ignoring unparsable RUST_LOG: {err}");
    }

    panic::set_hook(Box::new(|info| {
        let b = Backtrace::capture();
        error!("Panic: {info} \n {b}");
    }));

    debug!("args: {args:?}");

    let (config, config_path) = get_config(args.config_path).unwrap_or_else(|err| {
        error!("Failed to read config: {err}");

        std::process::exit(1);
    });

    if let Some(logger) = &logger {
        match get_log_spec(&config.log_level) {
            Ok(spec) => logger.set_new_spec(spec),
            Err(err) => warn!(
                "Invalid log level '{}': {err}, keeping {DEFAULT_LOG_LEVEL}",
                config.log_level
            ),
        }
    }

    info!("Using config {config_path:?}");

    let capabilities = platform::probe(&config.appearance);
    let window = window::Settings {
        size: Size::new(config.window.width as f32, config.window.height as f32),
        exit_on_close_request: false,
        ..window::Settings::default()
    };

    let result = iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .scale_factor(App::scale_factor)
        .antialiasing(capabilities.antialiasing)
        .window(window)
        .run_with(App::new((config, capabilities)));

    info!("Clock window closed");
    result
}
