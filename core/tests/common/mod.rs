use tracing_subscriber::EnvFilter;

/// Initializes logging to the test writer, filtered by the `TEST_LOG` environment variable. Can be called from every
/// test; only the first call installs the subscriber.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_env("TEST_LOG").unwrap_or_default();
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_test_writer()
    .try_init(); // Ignore error ok: another test already installed the subscriber.
}
