//! Tracing subscriber setup shared by all binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging for the binary whose crate name is `bin`.
///
/// `RUST_LOG` takes precedence. Otherwise everything logs at `warn`, and the
/// library plus the running binary log at `debug` when `verbose` is set.
/// Output goes to stderr so stdout stays clean for program output.
pub fn init_logging(bin: &str, verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin, level)));

    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

fn default_directives(bin: &str, level: &str) -> String {
    format!("warn,imgtools={level},{bin}={level}")
}
