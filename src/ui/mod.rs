// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system and snackbar adapter

pub mod design_tokens;
pub mod notifications;
pub mod theming;
