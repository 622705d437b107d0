//! Logging setup.
//!
//! All diagnostics go to stderr through `tracing`, so stdout stays free for
//! the closing instructions printed by the CLI.

use scot4_types::{Scot4Error, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter directive when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "scot4=info";

/// Initialize logging with `directive` as the fallback filter.
///
/// `RUST_LOG` takes precedence when set.
pub fn init(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init()
        .map_err(|e| Scot4Error::Other(format!("Failed to initialize logging: {}", e)))
}

/// Pick a filter directive from the usual verbosity flags.
pub fn directive_for(verbose: bool, debug: bool, quiet: bool) -> &'static str {
    if quiet {
        "scot4=error"
    } else if debug {
        "scot4=trace"
    } else if verbose {
        "scot4=debug"
    } else {
        DEFAULT_DIRECTIVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_precedence() {
        assert_eq!(directive_for(false, false, false), "scot4=info");
        assert_eq!(directive_for(true, false, false), "scot4=debug");
        assert_eq!(directive_for(true, true, false), "scot4=trace");
        assert_eq!(directive_for(true, true, true), "scot4=error");
    }
}
