//! Console logging setup

use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::new(format!("csvscrub={level},organize_files={level}"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
