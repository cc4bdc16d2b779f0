//! Logger that records messages in memory

use parking_lot::Mutex;

use super::traits::Logger;

/// Records every message with its level, for assertions in tests and for
/// hosts that want to replay bootstrap logs later
#[derive(Debug, Default)]
pub struct CaptureLogger {
    entries: Mutex<Vec<(&'static str, String)>>,
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded (level, message) pairs, oldest first
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        self.entries.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries.lock().iter().map(|(_, m)| m.clone()).collect()
    }

    fn push(&self, level: &'static str, message: &str) {
        self.entries.lock().push((level, message.to_string()));
    }
}

impl Logger for CaptureLogger {
    fn debug(&self, message: &str) {
        self.push("debug", message);
    }

    fn info(&self, message: &str) {
        self.push("info", message);
    }

    fn warn(&self, message: &str) {
        self.push("warn", message);
    }

    fn error(&self, message: &str) {
        self.push("error", message);
    }
}
