//! The shared error banner, modelled as a last-write-wins register.
//!
//! Several requests can be in flight at once and each may fail. Whichever
//! settles last owns the banner; nothing is queued or stacked. Every write
//! is numbered so tests can observe which write won.

use chrono::{DateTime, Utc};

use super::Operation;

/// One write to the register.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    pub operation: Operation,
    pub message: String,
    /// 1-based write number within this register
    pub sequence: u64,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ErrorRegister {
    current: Option<ErrorRecord>,
    writes: u64,
}

impl ErrorRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the register with `message` from `operation`.
    pub fn record(&mut self, operation: Operation, message: impl Into<String>) -> &ErrorRecord {
        self.writes += 1;
        self.current.insert(ErrorRecord {
            operation,
            message: message.into(),
            sequence: self.writes,
            recorded_at: Utc::now(),
        })
    }

    /// Record `operation`'s fixed failure message. Silent operations leave
    /// the register untouched and return `false`.
    pub fn record_failure(&mut self, operation: Operation) -> bool {
        match operation.failure_message() {
            Some(message) => {
                self.record(operation, message);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&ErrorRecord> {
        self.current.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|r| r.message.as_str())
    }

    pub fn operation(&self) -> Option<Operation> {
        self.current.as_ref().map(|r| r.operation)
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }

    /// Total number of writes, including overwritten ones.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}
