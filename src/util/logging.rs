//! Diagnostic logging to stderr.
//!
//! Stdout is reserved for command output, so every log line goes to stderr.
//! `RUST_LOG` overrides the default level.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Default level: `warn`, or `debug` when `--debug` is given.
pub fn default_level(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(debug: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(debug).into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), Level::WARN);
        assert_eq!(default_level(true), Level::DEBUG);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
