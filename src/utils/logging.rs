use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive used when `RUST_LOG` is not set
fn default_directive(debug: bool) -> &'static str {
    if debug { "bloglist=debug" } else { "bloglist=warn" }
}

/// Install the stderr subscriber. Safe to call more than once.
pub(crate) fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_raises_level() {
        assert_eq!(default_directive(true), "bloglist=debug");
        assert_eq!(default_directive(false), "bloglist=warn");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logging(false);
        init_logging(true);
    }
}
