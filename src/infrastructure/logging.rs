/// Logging setup
///
/// Structured JSON logs for Lambda/CloudWatch, built on tracing.
use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Guards one-time subscriber initialization
static INIT: Once = Once::new();

/// Initialize the log subscriber for the Lambda environment
///
/// Emits flattened JSON events, filtered by `RUST_LOG` (default: info).
/// Safe to call more than once; only the first call installs the subscriber.
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .flatten_event(true)
            .with_current_span(false);

        // try_init: another subscriber may already be installed (tests)
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init();
    });
}

/// Initialize a human-readable subscriber for tests
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_idempotent() {
        init_test_logging();
        init_test_logging();
        init_logging();
        init_logging();
    }

    #[test]
    fn test_log_with_context() {
        init_test_logging();

        tracing::info!(method = "POST", path = "/notes", route = "create_note", "request received");
        tracing::error!(error = "Write error: throttled", "internal failure");
    }

    #[test]
    fn test_init_logging_after_test_logging_keeps_subscriber() {
        init_test_logging();
        init_logging();

        assert!(tracing::dispatcher::has_been_set());
        assert!(tracing::enabled!(tracing::Level::ERROR));
        tracing::info!(route = "get_note", "still accepting events");
    }
}
