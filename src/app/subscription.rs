// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two subscriptions drive the app: a raw event listener for the keyboard
//! surface, and a periodic tick that runs only while some timed state
//! (debounce, transition, toast, preview) is pending.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// How often timed state is polled while any of it is pending.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// How often the OS color scheme is re-read while the theme follows it.
pub const SYSTEM_THEME_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Listens for keyboard events that no widget captured.
///
/// Widgets get first pick: while a text input has focus its key presses
/// arrive as `Captured` and are dropped here, so single-letter shortcuts
/// never fire mid-sentence.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if !matches!(event, iced::Event::Keyboard(_)) {
            return None;
        }
        match status {
            event::Status::Ignored => Some(Message::RawEvent(event)),
            event::Status::Captured => None,
        }
    })
}

/// Creates the periodic tick subscription, active only while needed.
pub fn create_tick_subscription(needs_ticks: bool) -> Subscription<Message> {
    if needs_ticks {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Stands in for an OS preference-change listener: a slow poll that runs
/// only while the theme defers to the system and detection is available.
pub fn create_system_theme_subscription(follows_system: bool) -> Subscription<Message> {
    if follows_system {
        time::every(SYSTEM_THEME_POLL_INTERVAL).map(Message::SystemThemePoll)
    } else {
        Subscription::none()
    }
}
