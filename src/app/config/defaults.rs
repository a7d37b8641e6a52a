// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

use crate::ui::settings::{FONT_SIZE_MAX, FONT_SIZE_MIN};

// ==========================================================================
// Accessibility Defaults
// ==========================================================================

/// Default font scale, percent of the base size.
pub const DEFAULT_FONT_SIZE_PERCENT: u16 = 100;

/// Default high-contrast preference.
pub const DEFAULT_HIGH_CONTRAST: bool = false;

/// Default reduced-motion preference.
pub const DEFAULT_REDUCED_MOTION: bool = false;

// ==========================================================================
// Learning Mode Defaults
// ==========================================================================

/// Learning mode starts disabled for new installs.
pub const DEFAULT_LEARNING_ENABLED: bool = false;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(FONT_SIZE_MIN > 0);
    assert!(FONT_SIZE_MAX > FONT_SIZE_MIN);
    assert!(DEFAULT_FONT_SIZE_PERCENT >= FONT_SIZE_MIN);
    assert!(DEFAULT_FONT_SIZE_PERCENT <= FONT_SIZE_MAX);
};
