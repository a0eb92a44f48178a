// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::{NotificationsConfig, DEFAULT_MAX_VISIBLE_TOASTS};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use std::collections::VecDeque;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Auto-dismiss delays per severity. Errors always require a manual dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub success: Duration,
    pub info: Duration,
    pub warning: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self::from_config(&NotificationsConfig::default())
    }
}

impl Timing {
    #[must_use]
    pub fn from_config(config: &NotificationsConfig) -> Self {
        Self {
            success: config.success_duration(),
            info: config.info_duration(),
            warning: config.warning_duration(),
        }
    }

    #[must_use]
    pub fn duration_for(&self, severity: Severity) -> Option<Duration> {
        match severity {
            Severity::Success => Some(self.success),
            Severity::Info => Some(self.info),
            Severity::Warning => Some(self.warning),
            Severity::Error => None,
        }
    }
}

/// Manages the notification queue and visible notifications.
#[derive(Debug)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
    max_visible: usize,
    timing: Timing,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager {
    fn default() -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            max_visible: DEFAULT_MAX_VISIBLE_TOASTS,
            timing: Timing::default(),
            diagnostics: None,
        }
    }
}

impl Manager {
    /// Creates a new empty notification manager with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager using the `[notifications]` settings.
    #[must_use]
    pub fn with_config(config: &NotificationsConfig) -> Self {
        Self {
            max_visible: config.max_visible(),
            timing: Timing::from_config(config),
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle for logging warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `max_visible` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    ///
    /// Warnings and errors are logged to diagnostics when a handle is set.
    pub fn push(&mut self, mut notification: Notification) {
        if let Some(handle) = &self.diagnostics {
            match notification.severity() {
                Severity::Warning => {
                    let warning_type = notification.warning_type().unwrap_or(WarningType::Other);
                    handle.log_warning(WarningEvent::new(warning_type, notification.message()));
                }
                Severity::Error => {
                    let error_type = notification.error_type().unwrap_or(ErrorType::Other);
                    handle.log_error(ErrorEvent::new(error_type, notification.message()));
                }
                Severity::Success | Severity::Info => {}
            }
        }

        if self.visible.len() < self.max_visible {
            notification.mark_shown();
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification whose timer has expired.
    ///
    /// Timers start when a notification becomes visible, not while it waits
    /// in the queue.
    pub fn tick(&mut self) {
        let timing = self.timing;
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss_after(timing.duration_for(n.severity())))
            .map(Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the currently visible notifications (newest first).
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all notifications (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < self.max_visible {
            if let Some(mut notification) = self.queue.pop_front() {
                notification.mark_shown();
                self.visible.push_back(notification);
            } else {
                break;
            }
        }
    }
}
