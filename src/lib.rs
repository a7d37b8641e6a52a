// SPDX-License-Identifier: MPL-2.0
//! `motion_deck` is a desktop showcase of UI motion patterns built with the
//! Iced GUI framework.
//!
//! It renders a scrolling landing page with an animation gallery, a
//! debounced contact form, a settings drawer, and a guided learning mode,
//! and demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/motion_deck/0.1.0")]

pub mod app;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod platform;
pub mod ui;
