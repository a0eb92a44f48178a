// SPDX-License-Identifier: MPL-2.0
//! Snackbar adapter over a toast API.
//!
//! UI code reports outcomes through four calls (`show_success`, `show_error`,
//! `show_info`, `show_warning`) and never deals with severities, icons or
//! timers. Each call forwards exactly one primitive to a [`ToastApi`]; how the
//! toast is queued, stacked and dismissed is the API's business.
//!
//! ```
//! use meetdeck::ui::notifications::Manager;
//!
//! let mut manager = Manager::new();
//! manager.snackbar().show_success("Saved");
//! assert_eq!(manager.visible_count(), 1);
//! ```

use super::manager::Manager;
use super::notification::{Notification, Severity};

/// Glyph attached to warning toasts.
pub const WARNING_ICON: &str = "⚠️";

/// Options accepted by the generic [`ToastApi::toast`] primitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastOptions {
    /// Replaces the default icon.
    pub icon: Option<String>,
}

impl ToastOptions {
    #[must_use]
    pub fn with_icon(icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
        }
    }
}

/// The three primitives a toast implementation offers.
pub trait ToastApi {
    /// Shows a neutral toast.
    fn toast(&mut self, message: &str, options: ToastOptions);

    fn success(&mut self, message: &str);

    fn error(&mut self, message: &str);
}

impl ToastApi for Manager {
    fn toast(&mut self, message: &str, options: ToastOptions) {
        let mut notification = Notification::text(Severity::Info, message);
        if let Some(icon) = options.icon {
            notification = notification.with_icon(icon);
        }
        self.push(notification);
    }

    fn success(&mut self, message: &str) {
        self.push(Notification::text(Severity::Success, message));
    }

    fn error(&mut self, message: &str) {
        self.push(Notification::text(Severity::Error, message));
    }
}

/// Borrowing adapter exposing the four snackbar calls.
pub struct Snackbar<'a, T: ToastApi + ?Sized> {
    api: &'a mut T,
}

impl<'a, T: ToastApi + ?Sized> Snackbar<'a, T> {
    pub fn new(api: &'a mut T) -> Self {
        Self { api }
    }

    pub fn show_success(&mut self, message: &str) {
        self.api.success(message);
    }

    pub fn show_error(&mut self, message: &str) {
        self.api.error(message);
    }

    pub fn show_info(&mut self, message: &str) {
        self.api.toast(message, ToastOptions::default());
    }

    pub fn show_warning(&mut self, message: &str) {
        self.api.toast(message, ToastOptions::with_icon(WARNING_ICON));
    }
}

impl Manager {
    /// Returns the snackbar adapter bound to this manager.
    pub fn snackbar(&mut self) -> Snackbar<'_, Self> {
        Snackbar::new(self)
    }
}
