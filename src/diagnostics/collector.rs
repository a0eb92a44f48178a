// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Handles push events through a bounded channel; the collector drains the
//! channel into a circular buffer on each UI tick.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent, WarningEvent};
use crate::config::DIAGNOSTICS_CHANNEL_CAPACITY;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block: events are dropped when the channel
/// is full.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log_warning(&self, warning_event: WarningEvent) {
        log::warn!("{}", warning_event.message);
        self.send(DiagnosticEventKind::Warning {
            event: warning_event,
        });
    }

    pub fn log_error(&self, error_event: ErrorEvent) {
        log::error!("{}", error_event.message);
        self.send(DiagnosticEventKind::Error { event: error_event });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        if self.event_tx.try_send(DiagnosticEvent::new(kind)).is_err() {
            log::debug!("diagnostics channel full, event dropped");
        }
    }
}

/// Central store for diagnostic events.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(DIAGNOSTICS_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of stored warnings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.iter()
            .filter(|e| matches!(e.kind, DiagnosticEventKind::Warning { .. }))
            .count()
    }

    /// Number of stored errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.iter()
            .filter(|e| matches!(e.kind, DiagnosticEventKind::Error { .. }))
            .count()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
