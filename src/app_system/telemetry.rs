/// Installs the global subscriber.
///
/// Diagnostics go to stderr: stdout carries the interactive session. The
/// filter comes from `RUST_LOG` and defaults to `warn` so a normal session
/// stays quiet.
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
