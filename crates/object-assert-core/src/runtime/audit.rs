// crates/object-assert-core/src/runtime/audit.rs
// ============================================================================
// Module: Verification Audit Sinks
// Description: JSON-line, in-memory, and no-op sinks for verification events.
// Purpose: Emit run diagnostics without hard dependencies on a logging stack.
// Dependencies: crate::interfaces, serde_json
// ============================================================================

//! ## Overview
//! Sinks receive one [`VerificationEvent`] per run and, when enabled, one
//! [`CheckEvent`] per executed check. Serialization failures and write
//! errors are dropped; auditing never changes a verification result.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::interfaces::CheckEvent;
use crate::interfaces::VerificationEvent;
use crate::interfaces::VerificationSink;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the current time in milliseconds since the Unix epoch (0 if the clock is earlier).
pub(crate) fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |elapsed| elapsed.as_millis())
}

/// Writes one JSON line to `writer`, ignoring failures.
fn write_json_line<W: Write, E: Serialize>(writer: &mut W, event: &E) {
    if let Ok(payload) = serde_json::to_string(event) {
        let _ = writeln!(writer, "{payload}");
        let _ = writer.flush();
    }
}

// ============================================================================
// SECTION: Stderr Sink
// ============================================================================

/// Audit sink that logs JSON lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrVerificationSink {
    /// Emit per-check events in addition to run events.
    include_checks: bool,
}

impl StderrVerificationSink {
    /// Creates a stderr sink.
    #[must_use]
    pub const fn new(include_checks: bool) -> Self {
        Self {
            include_checks,
        }
    }
}

impl VerificationSink for StderrVerificationSink {
    fn record(&self, event: &VerificationEvent) {
        write_json_line(&mut io::stderr(), event);
    }

    fn record_check(&self, event: &CheckEvent) {
        if self.include_checks {
            write_json_line(&mut io::stderr(), event);
        }
    }

    fn records_checks(&self) -> bool {
        self.include_checks
    }
}

// ============================================================================
// SECTION: File Sink
// ============================================================================

/// Audit sink that logs JSON lines to a file.
pub struct FileVerificationSink {
    /// File handle used for append-only logging.
    file: Mutex<File>,
    /// Emit per-check events in addition to run events.
    include_checks: bool,
}

impl FileVerificationSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path, include_checks: bool) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
            include_checks,
        })
    }
}

impl VerificationSink for FileVerificationSink {
    fn record(&self, event: &VerificationEvent) {
        if let Ok(mut file) = self.file.lock() {
            write_json_line(&mut *file, event);
        }
    }

    fn record_check(&self, event: &CheckEvent) {
        if self.include_checks
            && let Ok(mut file) = self.file.lock()
        {
            write_json_line(&mut *file, event);
        }
    }

    fn records_checks(&self) -> bool {
        self.include_checks
    }
}

// ============================================================================
// SECTION: Memory Sink
// ============================================================================

/// Audit sink that keeps every event in memory for inspection.
#[derive(Debug, Default)]
pub struct MemoryVerificationSink {
    /// Recorded run events.
    runs: Mutex<Vec<VerificationEvent>>,
    /// Recorded check events.
    checks: Mutex<Vec<CheckEvent>>,
}

impl MemoryVerificationSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded run events in order.
    #[must_use]
    pub fn runs(&self) -> Vec<VerificationEvent> {
        self.runs.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Returns the recorded check events in order.
    #[must_use]
    pub fn checks(&self) -> Vec<CheckEvent> {
        self.checks.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl VerificationSink for MemoryVerificationSink {
    fn record(&self, event: &VerificationEvent) {
        self.runs.lock().unwrap_or_else(PoisonError::into_inner).push(event.clone());
    }

    fn record_check(&self, event: &CheckEvent) {
        self.checks.lock().unwrap_or_else(PoisonError::into_inner).push(event.clone());
    }
}

// ============================================================================
// SECTION: No-op Sink
// ============================================================================

/// No-op audit sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVerificationSink;

impl VerificationSink for NoopVerificationSink {
    fn record(&self, _event: &VerificationEvent) {}

    fn record_check(&self, _event: &CheckEvent) {}

    fn records_checks(&self) -> bool {
        false
    }
}
