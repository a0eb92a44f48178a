// SPDX-License-Identifier: MPL-2.0
//! In-memory diagnostics for warnings and errors shown to the user.
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped warning or error
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Channel-fed event store
//!
//! Every event is also written to the `log` facade.

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, WarningEvent, WarningType,
};
