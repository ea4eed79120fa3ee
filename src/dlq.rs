use parking_lot::Mutex;
use tracing::warn;

use crate::domain::{DeadLetterQueue, Error};

#[derive(Default, Debug)]
pub struct LogDeadLetterQueue {}

impl DeadLetterQueue for LogDeadLetterQueue {
    fn report(&self, error: &Error) {
        warn!(%error, "command dropped");
    }
}

/// Keeps every report in memory, rendered with `Display`.
#[derive(Default, Debug)]
pub struct MemoryDeadLetterQueue {
    reports: Mutex<Vec<String>>,
}

impl MemoryDeadLetterQueue {
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().clone()
    }
}

impl DeadLetterQueue for MemoryDeadLetterQueue {
    fn report(&self, error: &Error) {
        self.reports.lock().push(error.to_string());
    }
}
