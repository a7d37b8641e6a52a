// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains reusable state logic separated from the main App struct,
//! following the principle of separation of concerns.

pub mod deadline;

// Re-export commonly used types for convenience
pub use deadline::Deadline;
