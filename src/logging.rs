// src/logging.rs
//! Diagnostics go to stderr through `tracing`. Standard output is reserved for
//! the program's own text, so the default level is `warn` and a normal run
//! logs nothing. `RUST_LOG` overrides the filter.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init_subscriber() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        // try_init: a test harness may already have installed one.
        let _ = fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init_subscriber();
        init_subscriber();
        tracing::debug!("after init");
    }
}
