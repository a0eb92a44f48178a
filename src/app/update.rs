// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::message::Feedback;
use super::{persistence, Message};
use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, NotificationMessage, ToastApi};
use iced::Task;
use std::path::PathBuf;

/// Mutable state the update loop works on.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a mut DiagnosticsCollector,
    /// Where language changes are saved; `None` uses the resolved config dir.
    pub config_dir: Option<PathBuf>,
}

pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Notification(msg) => {
            ctx.notifications.handle_message(&msg);
        }
        Message::ShowFeedback(feedback) => {
            let text = ctx.i18n.tr(feedback.message_key());
            show_feedback(ctx.notifications, feedback, &text);
        }
        Message::LanguageSelected(locale) => {
            persistence::apply_language_change(
                ctx.i18n,
                ctx.notifications,
                ctx.config_dir.clone(),
                locale,
            );
            // Surface a failed save right away
            ctx.diagnostics.process_pending();
        }
        Message::ClearDiagnostics => {
            ctx.diagnostics.clear();
        }
        Message::Tick(_) => {
            ctx.notifications.handle_message(&NotificationMessage::Tick);
            ctx.diagnostics.process_pending();
        }
    }
    Task::none()
}

/// Routes a feedback request through the snackbar adapter.
pub fn show_feedback<T: ToastApi + ?Sized>(api: &mut T, feedback: Feedback, text: &str) {
    let mut snackbar = notifications::Snackbar::new(api);
    match feedback {
        Feedback::Success => snackbar.show_success(text),
        Feedback::Error => snackbar.show_error(text),
        Feedback::Info => snackbar.show_info(text),
        Feedback::Warning => snackbar.show_warning(text),
    }
}
