// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use std::time::Instant;

/// Categories of warnings surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningType {
    /// A configuration issue was detected.
    ConfigurationIssue,
    /// Other warning type not covered by specific categories.
    Other,
}

/// Categories of errors surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Input/output error (file read/write failures).
    IoError,
    /// Other error type not covered by specific categories.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    Warning { event: WarningEvent },
    Error { event: ErrorEvent },
}

/// A timestamped diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}
