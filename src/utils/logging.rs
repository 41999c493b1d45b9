// ============================================================================
// Logging Setup
// tracing-subscriber initialisation for binaries and demos
// ============================================================================

use tracing::Level;

/// Install a fmt subscriber at `level` for the whole process.
///
/// Returns `false` if a global subscriber was already installed, so repeated
/// calls (tests, embedding hosts) are harmless.
pub fn init_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
