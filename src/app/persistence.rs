// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Saves user preferences to disk when they change in the UI.

use crate::config;
use crate::diagnostics::ErrorType;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Applies the newly selected locale and persists it to the settings file.
///
/// A failed save leaves the new locale active for this session and reports
/// the failure as an error toast.
pub fn apply_language_change(
    i18n: &mut I18n,
    notifications: &mut notifications::Manager,
    config_dir: Option<PathBuf>,
    locale: LanguageIdentifier,
) {
    i18n.set_locale(locale.clone());

    let (mut cfg, _) = config::load_with_override(config_dir.clone());
    cfg.general.language = Some(locale.to_string());

    if let Err(error) = config::save_with_override(&cfg, config_dir) {
        notifications.push(
            Notification::error("notification-io-error")
                .with_arg("reason", error.to_string())
                .with_error_type(ErrorType::IoError),
        );
    }
}
