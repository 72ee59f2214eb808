/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. Logs go to stderr, stdout carries the
/// generated source.
///
/// With `default` set, `RUST_LOG` is ignored. Otherwise `RUST_LOG` is used,
/// falling back to `warn`.
pub fn setup_logging(default: Option<LevelFilter>) {
    let filter = match default {
        Some(level) => EnvFilter::builder()
            .with_default_directive(level.into())
            .parse_lossy(""),
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy(),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

/// Maps `-q`/`-v` counts to a level. `None` leaves the choice to `RUST_LOG`.
pub fn level_from_flags(quiet: bool, verbose: u8) -> Option<LevelFilter> {
    match (quiet, verbose) {
        (true, _) => Some(LevelFilter::ERROR),
        (false, 0) => None,
        (false, 1) => Some(LevelFilter::INFO),
        (false, _) => Some(LevelFilter::DEBUG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_to_level() {
        assert_eq!(level_from_flags(false, 0), None);
        assert_eq!(level_from_flags(false, 1), Some(LevelFilter::INFO));
        assert_eq!(level_from_flags(false, 4), Some(LevelFilter::DEBUG));
        assert_eq!(level_from_flags(true, 2), Some(LevelFilter::ERROR));
    }
}
