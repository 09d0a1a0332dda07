use super::{CliError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
///
/// Logs always go to stderr so command output on stdout stays pipeable.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub default_level: tracing::Level,
    pub json_format: bool,
    pub show_targets: bool,
    pub show_logs: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: tracing::Level::WARN,
            json_format: false,
            show_targets: false,
            show_logs: true,
        }
    }
}

impl LogConfig {
    /// Map repeated `-v` flags to a level; targets show from `-vv` up
    pub fn from_verbosity(verbose: u8) -> Self {
        let default_level = match verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };
        Self {
            default_level,
            show_targets: verbose >= 2,
            ..Default::default()
        }
    }

    pub fn with_json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Hide logs entirely
    pub fn without_logs(mut self) -> Self {
        self.show_logs = false;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={level},adventure_core={level}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                level = self.default_level
            ))
        })
    }

    pub fn init(self) -> Result<()> {
        let env_filter = self.env_filter();
        let to_error = |e: tracing_subscriber::util::TryInitError| CliError::Logging(e.to_string());

        if !self.show_logs {
            return tracing_subscriber::registry()
                .with(env_filter)
                .try_init()
                .map_err(to_error);
        }

        if self.json_format {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(self.show_targets)
                .with_writer(std::io::stderr);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(to_error)
        } else {
            let fmt_layer = fmt::layer()
                .with_target(self.show_targets)
                .with_writer(std::io::stderr);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(to_error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.default_level, tracing::Level::WARN);
        assert!(!config.json_format);
        assert!(config.show_logs);
    }

    #[test]
    fn test_targets_follow_verbosity() {
        assert!(!LogConfig::from_verbosity(1).show_targets);
        assert!(LogConfig::from_verbosity(2).show_targets);
    }

    #[test]
    fn test_from_verbosity() {
        assert_eq!(LogConfig::from_verbosity(0).default_level, tracing::Level::WARN);
        assert_eq!(LogConfig::from_verbosity(1).default_level, tracing::Level::INFO);
        assert_eq!(LogConfig::from_verbosity(2).default_level, tracing::Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(9).default_level, tracing::Level::TRACE);
    }

    #[test]
    fn test_with_json() {
        assert!(LogConfig::default().with_json().json_format);
    }

    #[test]
    fn test_without_logs() {
        assert!(!LogConfig::default().without_logs().show_logs);
    }
}
