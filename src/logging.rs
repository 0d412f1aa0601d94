use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// Logs go to stderr so stdout stays reserved for the oracle's output.
/// Recoverable problems are logged at `warn`, which the default filter
/// hides; `verbose` raises the level to DEBUG. `RUST_LOG` overrides both.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    // A second init (e.g. from tests) must not panic.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}

fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "error" };
    format!("pet_oracle={}", level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_is_quiet() {
        assert_eq!(default_directive(false), "pet_oracle=error");
    }

    #[test]
    fn test_verbose_directive() {
        assert_eq!(default_directive(true), "pet_oracle=debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
        tracing::debug!("logging smoke test");
    }
}
