// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale requested with `--lang`.
    pub lang: Option<String>,
    /// Config directory requested with `--config-dir`.
    pub config_dir: Option<String>,
}

/// Which feedback toast a demo button asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Success,
    Error,
    Info,
    Warning,
}

impl Feedback {
    pub const ALL: [Feedback; 4] = [
        Feedback::Success,
        Feedback::Error,
        Feedback::Info,
        Feedback::Warning,
    ];

    /// i18n key of the button label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Feedback::Success => "button-show-success",
            Feedback::Error => "button-show-error",
            Feedback::Info => "button-show-info",
            Feedback::Warning => "button-show-warning",
        }
    }

    /// i18n key of the toast text.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Feedback::Success => "demo-success-message",
            Feedback::Error => "demo-error-message",
            Feedback::Info => "demo-info-message",
            Feedback::Warning => "demo-warning-message",
        }
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(notifications::NotificationMessage),
    ShowFeedback(Feedback),
    LanguageSelected(LanguageIdentifier),
    ClearDiagnostics,
    Tick(Instant), // Periodic tick for toast auto-dismiss
}
