// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! - Locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching
//! - `MISSING: <key>` marker when a translation is absent

pub mod fluent;
