//! Log output for the shell

use tracing::Level;

/// Install the fmt subscriber writing to stderr.
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init_logging(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
