use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::LoggingConfig;

static LOGGING_INIT: Once = Once::new();

impl LoggingConfig {
    pub(crate) fn normalize_level_directives(input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::default_level();
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "trace" => "trace".to_owned(),
            "debug" => "debug".to_owned(),
            "info" => "info".to_owned(),
            "warn" | "warning" => "warn".to_owned(),
            "error" => "error".to_owned(),
            // Anything else is treated as an `EnvFilter` directive string.
            _ => trimmed.to_owned(),
        }
    }

    fn config_env_filter(&self) -> EnvFilter {
        let directives = Self::normalize_level_directives(&self.level);
        EnvFilter::try_new(directives).unwrap_or_else(|_| {
            EnvFilter::default().add_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        })
    }

    /// The effective filter: `RUST_LOG` when set and valid, the configured
    /// level otherwise.
    pub fn env_filter(&self) -> EnvFilter {
        self.env_filter_from(std::env::var("RUST_LOG").ok().as_deref())
    }

    fn env_filter_from(&self, rust_log: Option<&str>) -> EnvFilter {
        rust_log
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .and_then(|value| EnvFilter::try_new(value).ok())
            .unwrap_or_else(|| self.config_env_filter())
    }
}

/// Installs the global `tracing` subscriber writing to stderr.
///
/// Only the first call has an effect; later calls (and subscribers installed
/// elsewhere, e.g. by a test harness) are left alone.
pub fn init_logging(config: &LoggingConfig) {
    LOGGING_INIT.call_once(|| {
        let filter = config.env_filter();
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false);

        let installed = if config.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        if installed.is_err() {
            tracing::debug!(target: "apidoc.config", "tracing subscriber already installed");
        }
    });
}
