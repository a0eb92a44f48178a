// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast stacking and auto-dismiss timing
//! - **Diagnostics**: In-memory event buffer sizing

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default number of toasts shown at once (others are queued).
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = 3;

/// Minimum number of visible toasts.
pub const MIN_MAX_VISIBLE_TOASTS: usize = 1;

/// Maximum number of visible toasts.
pub const MAX_MAX_VISIBLE_TOASTS: usize = 8;

/// Default auto-dismiss delay for success toasts (in seconds).
pub const DEFAULT_SUCCESS_SECS: u32 = 3;

/// Default auto-dismiss delay for info toasts (in seconds).
pub const DEFAULT_INFO_SECS: u32 = 3;

/// Default auto-dismiss delay for warning toasts (in seconds).
pub const DEFAULT_WARNING_SECS: u32 = 5;

/// Minimum auto-dismiss delay (in seconds).
pub const MIN_DISMISS_SECS: u32 = 1;

/// Maximum auto-dismiss delay (in seconds).
pub const MAX_DISMISS_SECS: u32 = 60;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Bounded channel size between handles and the collector.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 64;

const _: () = {
    assert!(MIN_MAX_VISIBLE_TOASTS <= DEFAULT_MAX_VISIBLE_TOASTS);
    assert!(DEFAULT_MAX_VISIBLE_TOASTS <= MAX_MAX_VISIBLE_TOASTS);
    assert!(MIN_DISMISS_SECS <= DEFAULT_SUCCESS_SECS);
    assert!(DEFAULT_WARNING_SECS <= MAX_DISMISS_SECS);
};
