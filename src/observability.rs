//! Observability utilities.
//!
//! Process-wide `tracing` setup. `RUST_LOG` and `RNOH_NOTIFY_LOG_FORMAT`
//! override the configured level and format.

use crate::types::ObservabilityConfig;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FORMAT_ENV: &str = "RNOH_NOTIFY_LOG_FORMAT";

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Initialize tracing subscriber once for the process with default settings.
pub fn init_tracing() {
    init_tracing_with(&ObservabilityConfig::default());
}

/// Initialize tracing subscriber once for the process.
///
/// Later calls are no-ops, whatever config they pass.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    TRACING_INIT.get_or_init(|| {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let log_format = std::env::var(LOG_FORMAT_ENV).ok();

        let env_filter = EnvFilter::try_new(filter_directives(config, rust_log.as_deref()))
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let result = if use_json(config, log_format.as_deref()) {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().compact())
                .try_init()
        };

        if let Err(err) = result {
            eprintln!("tracing init skipped: {err}");
        }
    });
}

/// Filter directives: a non-empty `RUST_LOG` wins over the configured level.
fn filter_directives<'a>(config: &'a ObservabilityConfig, rust_log: Option<&'a str>) -> &'a str {
    rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .unwrap_or(config.log_level.as_str())
}

/// JSON output when the format variable says `json`; any other value means
/// compact text. Unset falls back to `config.json_logs`.
fn use_json(config: &ObservabilityConfig, log_format: Option<&str>) -> bool {
    log_format
        .map(|format| format.trim().eq_ignore_ascii_case("json"))
        .unwrap_or(config.json_logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(log_level: &str, json_logs: bool) -> ObservabilityConfig {
        ObservabilityConfig {
            log_level: log_level.to_string(),
            json_logs,
        }
    }

    #[test]
    fn test_filter_from_config_when_env_unset() {
        let config = config("warn,rnoh_push_notifications=debug", false);
        assert_eq!(
            filter_directives(&config, None),
            "warn,rnoh_push_notifications=debug"
        );
        assert_eq!(filter_directives(&config, Some("  ")), config.log_level);
    }

    #[test]
    fn test_filter_env_overrides_config() {
        let config = config("info", false);
        assert_eq!(filter_directives(&config, Some("trace")), "trace");
    }

    #[test]
    fn test_format_from_config_when_env_unset() {
        assert!(use_json(&config("info", true), None));
        assert!(!use_json(&config("info", false), None));
    }

    #[test]
    fn test_format_env_overrides_config() {
        assert!(use_json(&config("info", false), Some("JSON")));
        assert!(!use_json(&config("info", true), Some("compact")));
        assert!(!use_json(&config("info", true), Some("")));
    }

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing_with(&config("debug", true));
    }
}
