use std::sync::Once;

/// How the `env_logger` backend is set up by [`init_logging`].
///
/// The engine logs font loading and size changes at `debug` and skipped
/// code points at `trace`; `pixmark_engine=trace` shows both.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` directive string; `None` defers to `RUST_LOG`.
    pub env_filter: Option<String>,
    /// Colouring of the stderr output.
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Config with an explicit filter, overriding `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the process-wide logger on the first call; later calls return
/// without touching it.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `info`. If
/// another logger is already installed it is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.write_style(config.write_style);

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(directives) => builder.parse_filters(&directives),
            None => builder.filter_level(log::LevelFilter::Info),
        };

        match builder.try_init() {
            Ok(()) => log::debug!("env_logger installed"),
            Err(err) => log::debug!("keeping existing logger: {err}"),
        }
    });
}
