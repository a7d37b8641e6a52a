// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page Sections
//!
//! - [`header`] - Top bar with navigation, theme toggle, and reading progress
//! - [`showcase`] - Animation catalog with live previews and snippet panes
//! - [`contact`] - Contact form with debounced validation and retried submission
//! - [`settings`] - Settings drawer (language, theme, accessibility, learning)
//! - [`tour`] - Learning mode keyboard navigation over feature cards
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state management (cancellable deadlines)
//! - [`announcer`] - Assistive announcement channel and history
//! - [`panel`] - Modal panel focus containment
//! - [`scroll_chrome`] - Scroll-linked progress, pulse, and header state
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod announcer;
pub mod contact;
pub mod design_tokens;
pub mod header;
pub mod notifications;
pub mod panel;
pub mod scroll_chrome;
pub mod settings;
pub mod showcase;
pub mod state;
pub mod styles;
pub mod theming;
pub mod tour;
