//! Logging setup for Collective binaries.
//!
//! Filter precedence: `COLLECTIVE_LOG`, then `RUST_LOG`, then the default
//! passed by the binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "COLLECTIVE_LOG";

/// Build the filter from the environment, falling back to `default_directives`.
pub fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays parseable.
///
/// Returns `false` if a subscriber was already installed.
pub fn init(default_directives: &str) -> bool {
    let installed = tracing_subscriber::registry()
        .with(env_filter(default_directives))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(default_directives, "logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_rejected() {
        let _ = init("warn");
        assert!(!init("warn"));
    }
}
