// ============================================================================
// Utilities Module
// Helper functions for hosts embedding the decoder
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
