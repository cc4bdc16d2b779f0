//! Logger trait definition

use std::sync::Arc;

/// Logger abstraction used by the seeder
///
/// Implementations:
/// - `NoOpLogger`: silent, the default
/// - `ConsoleLogger`: logs to stdout/stderr
/// - Host adapters: forward into the embedding application's logging
///
/// Callers must never pass secret values in messages; log property and
/// provider names only.
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);

    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Convenience macros for logging
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(&format!($($arg)*))
    };
}
