use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
///
/// Events go to stderr as JSON; stdout stays reserved for command output.
/// `RUST_LOG` can widen the filter beyond the built-in directive, e.g. to
/// see debug events from the reconciliation pass.
pub fn init_logging(quiet: bool) {
    // The prefix also covers the wink_core targets
    let directive = if quiet { "wink=error" } else { "wink=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(directive.parse().expect("Invalid log directive")),
        )
        .init();
}
