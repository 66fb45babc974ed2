use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialise the tracing subscriber.
///
/// Filter comes from `RUST_LOG`, defaulting to info for our crates and warn
/// for everything else. Safe to call once at startup; a second call is a
/// no-op because `try_init` fails quietly.
pub fn init_telemetry() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,server=info,app=info,sqlx=warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}
