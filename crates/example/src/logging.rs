//! Logging setup for the example binary.
//!
//! Schema compilation logs through `tracing`: degraded types and compile
//! steps at `debug`, strict-mode removals and duplicate parameters at `warn`.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingFormat {
    /// Human-readable colored output (default).
    #[default]
    Pretty,
    /// Compact single-line output.
    Compact,
    /// JSON structured output for log aggregation.
    Json,
}

impl TracingFormat {
    /// Parses `pretty`, `compact` or `json`, ignoring case.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Subscriber configuration.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Maximum log level when no filter is given.
    pub level: Level,
    /// Output format.
    pub format: TracingFormat,
    /// Environment filter (e.g., "fnschema_core=debug").
    pub env_filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: TracingFormat::Pretty,
            env_filter: None,
        }
    }
}

impl TracingConfig {
    /// Reads `RUST_LOG` and `FNSCHEMA_LOG_FORMAT`, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(filter) = std::env::var(EnvFilter::DEFAULT_ENV) {
            config.env_filter = Some(filter);
        }
        if let Some(format) = std::env::var("FNSCHEMA_LOG_FORMAT")
            .ok()
            .as_deref()
            .and_then(TracingFormat::parse)
        {
            config.format = format;
        }
        config
    }

    /// Sets the maximum log level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: TracingFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets a custom environment filter string.
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Installs the global subscriber. Does nothing if one is already set.
    pub fn init(&self) {
        let env_filter = match &self.env_filter {
            Some(filter) => {
                EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))
            }
            None => EnvFilter::new(self.level.as_str()),
        };

        let registry = tracing_subscriber::registry().with(env_filter);
        let installed = match self.format {
            TracingFormat::Pretty => registry
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init(),
            TracingFormat::Compact => registry
                .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
                .try_init(),
            TracingFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
        };

        if installed.is_ok() {
            tracing::debug!(level = %self.level, format = ?self.format, "Tracing initialized");
        }
    }
}
