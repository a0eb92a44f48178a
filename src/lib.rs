// SPDX-License-Identifier: MPL-2.0
//! `meetdeck` is a small meeting desk shell built with the Iced GUI framework.
//!
//! It carries a compile-time feature flag registry ([`features`]) and a
//! snackbar adapter over a toast notification system
//! ([`ui::notifications`]), plus Fluent localization and TOML preferences.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod features;
pub mod i18n;
pub mod ui;
