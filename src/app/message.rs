// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::contact;
use crate::ui::header;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::showcase;
use crate::ui::tour;
use iced::widget::scrollable;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Settings(settings::Message),
    Contact(contact::Message),
    Showcase(showcase::Message),
    Tour(tour::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable reported a new viewport.
    PageScrolled(scrollable::Viewport),
    /// Raw runtime event that no widget captured (keyboard shortcuts).
    RawEvent(iced::Event),
    /// Slow re-read of the OS color scheme while no explicit theme is set.
    SystemThemePoll(Instant),
    /// Periodic tick driving debounces, transitions, and auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `MOTION_DECK_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MOTION_DECK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
