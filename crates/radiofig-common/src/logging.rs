//! Structured logging infrastructure for radiofig

use crate::error::{FigureError, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Output format of the log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One line per event: level tag followed by the message
    #[default]
    Plain,
    /// Abbreviated single-line format
    Compact,
    /// Multi-line human friendly format
    Pretty,
    /// Newline-delimited JSON
    Json,
}

impl FromStr for LogFormat {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(FigureError::config(format!(
                "unknown log format '{other}', expected plain, compact, pretty or json"
            ))),
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "radiofig=trace")
    pub level: String,
    /// Line format
    pub format: LogFormat,
    /// Optional file path for log output; stdout when absent
    pub file_path: Option<PathBuf>,
    /// Whether `RUST_LOG` takes precedence over `level` when set
    pub use_env_filter: bool,
    /// Whether to include timestamps
    pub include_timestamps: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Plain,
            file_path: None,
            use_env_filter: true,
            include_timestamps: false,
            include_targets: false,
        }
    }
}

impl LoggingConfig {
    /// Default configuration, switched to debug level when `verbose` is set
    pub fn for_verbosity(verbose: bool) -> Self {
        Self {
            level: if verbose { "debug" } else { "info" }.to_string(),
            ..Self::default()
        }
    }

    /// Build the level filter, honouring `RUST_LOG` when enabled
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let from_env = std::env::var(EnvFilter::DEFAULT_ENV)
            .ok()
            .filter(|value| self.use_env_filter && !value.trim().is_empty());

        let directives = from_env.as_deref().unwrap_or(&self.level);
        EnvFilter::try_new(directives).map_err(|e| {
            FigureError::config_with_source(format!("invalid log filter '{directives}'"), e)
        })
    }
}

fn build_layer<W>(config: &LoggingConfig, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let base = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(config.include_targets);

    match (config.format, config.include_timestamps) {
        (LogFormat::Plain, true) => base.boxed(),
        (LogFormat::Plain, false) => base.without_time().boxed(),
        (LogFormat::Compact, true) => base.compact().boxed(),
        (LogFormat::Compact, false) => base.compact().without_time().boxed(),
        (LogFormat::Pretty, true) => base.pretty().boxed(),
        (LogFormat::Pretty, false) => base.pretty().without_time().boxed(),
        (LogFormat::Json, true) => base.json().boxed(),
        (LogFormat::Json, false) => base.json().without_time().boxed(),
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Fails with [`FigureError::Logging`] if a global subscriber is already set.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = config.env_filter()?;

    let layer = match &config.file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            build_layer(&config, Mutex::new(file), false)
        }
        None => build_layer(&config, io::stdout, false),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| FigureError::logging(e.to_string()))
}
