//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize logging with default observability settings.
///
/// Reads `NUMEN_LOG` for filter directives, e.g.
/// `NUMEN_LOG=numen_compat=debug,numen_calc=trace`.
/// Falls back to `numen=info` if `NUMEN_LOG` is unset or invalid.
///
/// Idempotent. If another global subscriber is already installed
/// (common in host apps and tests) this is a no-op.
pub fn init_tracing() {
    init_tracing_with(&ObservabilityConfig::default());
}

/// Initialize logging from config. `NUMEN_LOG` still takes precedence over
/// `observability.log_filter`.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    let default_filter = config.effective_log_filter();
    let json = config.effective_json();

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&default_filter));

        let json_layer = json.then(|| fmt::layer().json().with_target(true));
        let text_layer = (!json).then(|| {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
        });

        let _ = tracing_subscriber::registry()
            .with(json_layer)
            .with(text_layer)
            .with(filter)
            .try_init();
    });
}
