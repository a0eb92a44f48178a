// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`Notification`] - Message, severity level and optional icon override
//! - [`Manager`] - Queuing and lifecycle management
//! - [`Toast`] - Widget rendering notifications
//! - [`Snackbar`] - Four-call adapter over any [`ToastApi`]
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.snackbar().show_warning("Unsaved changes");
//!
//! // In your view function, render toasts
//! let toast_overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: ~3s for success/info, ~5s for warnings, manual dismiss for errors
//! - Max visible toasts: 3 by default (others are queued)
//! - Position: bottom-right corner

mod manager;
mod notification;
mod snackbar;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, Timing};
pub use notification::{Content, Notification, NotificationId, Severity};
pub use snackbar::{Snackbar, ToastApi, ToastOptions, WARNING_ICON};
pub use toast::Toast;
