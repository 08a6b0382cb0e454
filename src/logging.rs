use tracing_subscriber::EnvFilter;

/// Default filter when RUST_LOG is unset.
pub fn default_directive(verbose: bool) -> &'static str {
  if verbose { "warn,github_teamwork=debug" } else { "warn" }
}

/// Install the stderr subscriber once; RUST_LOG wins over `verbose`.
pub fn init(verbose: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}
