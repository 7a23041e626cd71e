use flexi_logger::{FlexiLoggerError, LogSpecBuilder, LogSpecification};

mod views;

pub mod app;

pub use app::{App, Message};

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Parses a log specification, letting `RUST_LOG` take precedence.
pub fn get_log_spec(log_level: &str) -> Result<LogSpecification, FlexiLoggerError> {
    LogSpecification::env_or_parse(log_level)
}

/// Specification used when neither `RUST_LOG` nor the configured level parse.
pub fn fallback_log_spec() -> LogSpecification {
    LogSpecBuilder::new()
        .default(log::LevelFilter::Warn)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_parses() {
        assert!(get_log_spec(DEFAULT_LOG_LEVEL).is_ok());
    }

    #[test]
    fn malformed_level_is_reported() {
        // An exported RUST_LOG wins over the argument, so only check without it.
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(get_log_spec("p3clock=loud").is_err());
        }
    }

    #[test]
    fn fallback_is_warn() {
        assert_eq!(
            fallback_log_spec().module_filters()[0].level_filter,
            log::LevelFilter::Warn
        );
    }
}
