use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging for embedding applications and manual runs.
///
/// The toolkit itself only emits `debug!`/`warn!` diagnostics; nothing in it
/// requires a subscriber to be installed.
pub fn init_logging() {
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("fixture_text=info".parse().unwrap()))
        .with(console_layer)
        .init();
}
