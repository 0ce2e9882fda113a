use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "scrolltint_engine=debug").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Crate target used for the engine's own records.
const ENGINE_TARGET: &str = "scrolltint_engine";

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored. Hosts that
/// install their own `log` backend simply never call it.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = builder(&config, std::env::var("RUST_LOG").ok());

        // A second backend may already be installed by the host; keep it.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

/// Builds the logger from `config`, falling back to `rust_log` and then to
/// the scrolltint default.
fn builder(config: &LoggingConfig, rust_log: Option<String>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter.as_deref().or(rust_log.as_deref()) {
        builder.parse_filters(filter);
    } else {
        // The engine logs per frame at trace/debug; by default only its
        // malformed-color warnings reach the host's info output.
        builder.filter_level(log::LevelFilter::Info);
        builder.filter_module(ENGINE_TARGET, log::LevelFilter::Warn);
    }

    builder.write_style(config.write_style);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn default_keeps_engine_quiet() {
        let logger = builder(&LoggingConfig::default(), None).build();
        assert!(enabled(&logger, "scrolltint_engine::theme::engine", Level::Warn));
        assert!(!enabled(&logger, "scrolltint_engine::theme::engine", Level::Info));
        assert!(!enabled(&logger, "scrolltint_engine::theme::state", Level::Debug));
        assert!(enabled(&logger, "scrolltint_studio", Level::Info));
        assert!(!enabled(&logger, "scrolltint_studio", Level::Debug));
    }

    #[test]
    fn explicit_filter_wins_over_rust_log() {
        let config = LoggingConfig {
            env_filter: Some("scrolltint_engine=trace".to_string()),
            ..LoggingConfig::default()
        };
        let logger = builder(&config, Some("off".to_string())).build();
        assert!(enabled(&logger, "scrolltint_engine::theme::engine", Level::Trace));
    }

    #[test]
    fn rust_log_replaces_default() {
        let logger = builder(&LoggingConfig::default(), Some("debug".to_string())).build();
        assert!(enabled(&logger, "scrolltint_engine::theme::state", Level::Debug));
    }
}
