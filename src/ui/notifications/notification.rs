// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::diagnostics::{ErrorType, WarningType};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines visual styling. Display durations come from
/// the `[notifications]` settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green).
    #[default]
    Success,
    /// Informational message (blue).
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Glyph shown when a notification carries no icon override.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✅",
            Severity::Info => "ℹ️",
            Severity::Warning => "⚠️",
            Severity::Error => "❌",
        }
    }
}

/// What a notification says: literal text, or an i18n key resolved at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Key {
        key: String,
        args: Vec<(String, String)>,
    },
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    content: Content,
    /// Replaces the severity glyph when set.
    icon: Option<String>,
    created_at: Instant,
    /// Set when the notification enters the visible stack.
    shown_at: Option<Instant>,
    /// Custom auto-dismiss duration (overrides severity default).
    custom_dismiss_duration: Option<Duration>,
    warning_type: Option<WarningType>,
    error_type: Option<ErrorType>,
}

impl Notification {
    fn with_content(severity: Severity, content: Content) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            content,
            icon: None,
            created_at: Instant::now(),
            shown_at: None,
            custom_dismiss_duration: None,
            warning_type: None,
            error_type: None,
        }
    }

    /// Creates a notification whose message is an i18n key.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self::with_content(
            severity,
            Content::Key {
                key: message_key.into(),
                args: Vec::new(),
            },
        )
    }

    /// Creates a notification that displays `text` verbatim.
    pub fn text(severity: Severity, text: impl Into<String>) -> Self {
        Self::with_content(severity, Content::Text(text.into()))
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    ///
    /// Ignored for literal text notifications.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Content::Key { args, .. } = &mut self.content {
            args.push((key.into(), value.into()));
        }
        self
    }

    /// Overrides the severity glyph.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    /// Sets the diagnostics category used when this warning is logged.
    #[must_use]
    pub fn with_warning_type(mut self, warning_type: WarningType) -> Self {
        self.warning_type = Some(warning_type);
        self
    }

    /// Sets the diagnostics category used when this error is logged.
    #[must_use]
    pub fn with_error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = Some(error_type);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Literal text, or the i18n key for keyed notifications.
    #[must_use]
    pub fn message(&self) -> &str {
        match &self.content {
            Content::Text(text) => text,
            Content::Key { key, .. } => key,
        }
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Icon override if present, otherwise the severity glyph.
    #[must_use]
    pub fn display_icon(&self) -> &str {
        self.icon().unwrap_or_else(|| self.severity.glyph())
    }

    #[must_use]
    pub fn warning_type(&self) -> Option<WarningType> {
        self.warning_type
    }

    #[must_use]
    pub fn error_type(&self) -> Option<ErrorType> {
        self.error_type
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn shown_at(&self) -> Option<Instant> {
        self.shown_at
    }

    /// Starts the display timer. Only the first call has an effect.
    pub(super) fn mark_shown(&mut self) {
        if self.shown_at.is_none() {
            self.shown_at = Some(Instant::now());
        }
    }

    #[must_use]
    pub fn custom_dismiss_duration(&self) -> Option<Duration> {
        self.custom_dismiss_duration
    }

    /// Returns whether the display timer has run past its duration.
    ///
    /// The timer counts from [`Self::shown_at`], so a notification still
    /// waiting in the queue never expires. A custom duration set on the
    /// notification takes precedence over `default`.
    #[must_use]
    pub fn should_auto_dismiss_after(&self, default: Option<Duration>) -> bool {
        match (self.custom_dismiss_duration.or(default), self.shown_at) {
            (Some(d), Some(shown_at)) => shown_at.elapsed() >= d,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let success = Severity::Success.color();
        let info = Severity::Info.color();
        let warning = Severity::Warning.color();
        let error = Severity::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn keyed_notification_collects_args() {
        let notification = Notification::error("notification-io-error")
            .with_arg("path", "settings.toml")
            .with_arg("reason", "denied");

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message(), "notification-io-error");
        match notification.content() {
            Content::Key { args, .. } => assert_eq!(args.len(), 2),
            Content::Text(_) => panic!("expected keyed content"),
        }
    }

    #[test]
    fn text_notification_ignores_args() {
        let notification = Notification::text(Severity::Info, "FYI").with_arg("k", "v");
        assert_eq!(notification.content(), &Content::Text("FYI".to_string()));
    }

    #[test]
    fn icon_override_replaces_severity_glyph() {
        let plain = Notification::text(Severity::Info, "hello");
        assert_eq!(plain.icon(), None);
        assert_eq!(plain.display_icon(), Severity::Info.glyph());

        let tagged = Notification::text(Severity::Info, "hello").with_icon("⚠️");
        assert_eq!(tagged.display_icon(), "⚠️");
    }

    #[test]
    fn zero_custom_duration_dismisses_once_shown() {
        let mut notification = Notification::error("boom").auto_dismiss(Duration::ZERO);
        assert!(!notification.should_auto_dismiss_after(None));

        notification.mark_shown();
        assert!(notification.should_auto_dismiss_after(None));
    }

    #[test]
    fn caller_default_applies_without_custom_duration() {
        let mut notification = Notification::text(Severity::Info, "hi");
        notification.mark_shown();
        assert!(notification.should_auto_dismiss_after(Some(Duration::ZERO)));
        assert!(!notification.should_auto_dismiss_after(None));
    }

    #[test]
    fn unshown_notification_never_expires() {
        let notification = Notification::success("queued").auto_dismiss(Duration::ZERO);
        assert!(notification.shown_at().is_none());
        assert!(!notification.should_auto_dismiss_after(Some(Duration::ZERO)));
    }

    #[test]
    fn mark_shown_keeps_first_instant() {
        let mut notification = Notification::info("fyi");
        notification.mark_shown();
        let first = notification.shown_at().expect("shown");
        notification.mark_shown();

        assert_eq!(notification.shown_at(), Some(first));
        assert!(notification.created_at() <= first);
    }
}
