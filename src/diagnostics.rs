// In-app diagnostics log.
// Records underlying failure causes that are never shown raw to the user;
// the latest entry surfaces in the status bar.

use chrono::{DateTime, Utc};

const MAX_ENTRIES: usize = 100;

/// Diagnostic message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagLevel {
    Info,
    Error,
}

/// A timestamped diagnostic entry.
#[derive(Debug, Clone)]
pub struct DiagMessage {
    pub level: DiagLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Bounded log of diagnostic entries, newest last.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<DiagMessage>,
}

impl Diagnostics {
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(DiagLevel::Info, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(DiagLevel::Error, message.into());
    }

    fn push(&mut self, level: DiagLevel, message: String) {
        self.entries.push(DiagMessage {
            level,
            message,
            timestamp: Utc::now(),
        });
        if self.entries.len() > MAX_ENTRIES {
            self.entries.remove(0);
        }
    }

    pub fn latest(&self) -> Option<&DiagMessage> {
        self.entries.last()
    }

    pub fn entries(&self) -> &[DiagMessage] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_returns_newest_entry() {
        let mut diag = Diagnostics::default();
        diag.info("loaded 10 users");
        diag.error("connection refused");
        let latest = diag.latest().unwrap();
        assert_eq!(latest.level, DiagLevel::Error);
        assert_eq!(latest.message, "connection refused");
    }

    #[test]
    fn test_log_is_bounded() {
        let mut diag = Diagnostics::default();
        for i in 0..(MAX_ENTRIES + 10) {
            diag.info(format!("entry {i}"));
        }
        assert_eq!(diag.entries().len(), MAX_ENTRIES);
        assert_eq!(diag.entries()[0].message, "entry 10");
    }
}
