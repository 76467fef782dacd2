use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr. `RUST_LOG` overrides the default filter;
/// `--debug` raises the crate level to debug.
pub fn init_logging(debug: bool) {
    let default = if debug { "fontprep=debug" } else { "fontprep=warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
