// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized handlers that translate component
//! events into side effects: config persistence, announcements, clipboard
//! writes, and the asynchronous submission/retry tasks of the contact form.

use super::{config, notifications, view, Message};
use crate::app::persisted_state::AppState;
use crate::i18n::fluent::I18n;
use crate::platform::Capabilities;
use crate::ui::announcer::Announcer;
use crate::ui::contact::{self, ContactForm, Event as ContactEvent};
use crate::ui::header::Event as HeaderEvent;
use crate::ui::panel::{FocusTarget, PanelState};
use crate::ui::scroll_chrome::{RegionId, ScrollChrome};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::showcase::{self, Event as ShowcaseEvent, Showcase};
use crate::ui::theming::{ThemeMode, ThemeState};
use crate::ui::tour::{self, Event as TourEvent, Tour};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{keyboard, Task};
use std::time::{Duration, Instant};

/// Simulated network latency of one submission attempt.
pub const SUBMIT_LATENCY: Duration = Duration::from_secs(1);

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut config::Config,
    pub theme: &'a mut ThemeState,
    pub announcer: &'a mut Announcer,
    pub panel: &'a mut PanelState,
    pub scroll: &'a mut ScrollChrome,
    pub contact: &'a mut ContactForm,
    pub showcase: &'a mut Showcase,
    pub tour: &'a mut Tour,
    pub notifications: &'a mut notifications::Manager,
    pub capabilities: &'a Capabilities,
    pub app_state: &'a mut AppState,
    /// Header control focused after a drawer close; drawn by the view.
    pub page_focus: &'a mut Option<FocusTarget>,
}

impl UpdateContext<'_> {
    /// Writes the config file, degrading to a session-only preference when
    /// storage is unavailable.
    fn persist_config(&mut self) {
        if !self.capabilities.persistent_storage {
            return;
        }
        if config::save(self.config).is_err() {
            self.notifications
                .push(notifications::Notification::warning(
                    "notification-config-save-error",
                ));
        }
    }

    /// Writes the state file under the same storage degradation rule.
    fn persist_state(&mut self) {
        if !self.capabilities.persistent_storage {
            return;
        }
        if let Some(key) = self.app_state.save() {
            self.notifications
                .push(notifications::Notification::warning(key));
        }
    }

    fn announce_theme(&mut self) {
        let key = if self.theme.is_dark() {
            "announce-theme-dark"
        } else {
            "announce-theme-light"
        };
        self.announcer.polite(self.i18n.tr(key));
    }
}

/// Handles events emitted by the header.
pub fn handle_header_event(ctx: &mut UpdateContext<'_>, event: HeaderEvent) -> Task<Message> {
    match event {
        HeaderEvent::ToggleTheme => {
            let animate = !ctx.config.accessibility.reduced_motion;
            let mode = ctx.theme.toggle(animate, Instant::now());
            ctx.config.general.theme_mode = mode;
            ctx.persist_config();
            ctx.announce_theme();
            Task::none()
        }
        HeaderEvent::OpenSettings => {
            *ctx.page_focus = None;
            ctx.panel
                .open(settings::focus_ring(), Some(FocusTarget::MenuButton));
            ctx.announcer.polite(ctx.i18n.tr("announce-settings-open"));
            Task::none()
        }
        HeaderEvent::NavigateTo(region) => {
            ctx.announcer.polite(ctx.i18n.tr_with_args(
                "announce-region",
                &[("region", &ctx.i18n.tr(region.name_key()))],
            ));
            snap_to_region(region)
        }
    }
}

/// Scrolls the page to a region's anchor offset.
fn snap_to_region(region: RegionId) -> Task<Message> {
    operation::snap_to(
        view::page_scroll_id(),
        RelativeOffset {
            x: 0.0,
            y: region.anchor(),
        },
    )
}

/// Handles events emitted by the settings drawer.
pub fn handle_settings_event(ctx: &mut UpdateContext<'_>, event: SettingsEvent) -> Task<Message> {
    match event {
        SettingsEvent::Close => {
            *ctx.page_focus = ctx.panel.close();
            ctx.announcer
                .polite(ctx.i18n.tr("announce-settings-closed"));
        }
        SettingsEvent::LanguageSelected(locale) => {
            ctx.config.general.language = Some(locale.to_string());
            ctx.i18n.set_locale(locale);
            ctx.persist_config();
            ctx.announcer.polite(ctx.i18n.tr("announce-language"));
        }
        SettingsEvent::ThemeModeSelected(mode) => {
            let animate = !ctx.config.accessibility.reduced_motion;
            ctx.theme.set_mode(mode, animate, Instant::now());
            ctx.config.general.theme_mode = mode;
            ctx.persist_config();
            ctx.announce_theme();
        }
        SettingsEvent::HighContrastToggled(on) => {
            ctx.config.accessibility.high_contrast = on;
            ctx.persist_config();
        }
        SettingsEvent::FontSizeChanged(percent) => {
            ctx.config.accessibility.font_size_percent = percent;
            ctx.persist_config();
        }
        SettingsEvent::ReducedMotionToggled(on) => {
            ctx.config.accessibility.reduced_motion = on;
            ctx.showcase.set_reduced_motion(on);
            ctx.persist_config();
        }
        SettingsEvent::LearningToggled(on) => {
            if on != ctx.tour.is_enabled() {
                let event = ctx.tour.update(tour::Message::Toggle);
                return handle_tour_event(ctx, event);
            }
        }
    }
    Task::none()
}

/// Handles events emitted by the contact form.
pub fn handle_contact_event(ctx: &mut UpdateContext<'_>, event: ContactEvent) -> Task<Message> {
    match event {
        ContactEvent::None => Task::none(),
        ContactEvent::Invalid(field) => {
            let state = ctx.contact.field(field);
            if let Some(error) = state.error {
                let message = ctx.i18n.tr_with_args(
                    error.message_key(),
                    &[("field", &ctx.i18n.tr(field.label_key()))],
                );
                ctx.announcer.assertive(message);
            }
            operation::focus(Id::new(field.input_id()))
        }
        ContactEvent::StartAttempt { attempt } => run_submit_attempt(attempt),
        ContactEvent::ScheduleRetry { attempt, delay } => {
            ctx.notifications.push(
                notifications::Notification::warning("notification-submit-error-retry")
                    .with_arg("attempt", attempt.to_string())
                    .with_arg("max", ctx.contact.max_attempts().to_string())
                    .with_arg("seconds", delay.as_secs().to_string()),
            );
            Task::perform(tokio::time::sleep(delay), move |()| {
                Message::Contact(contact::Message::RetryDelayElapsed { attempt })
            })
        }
        ContactEvent::Succeeded => {
            ctx.notifications.clear_submit_errors();
            ctx.notifications
                .push(notifications::Notification::success(
                    "notification-submit-success",
                ));
            ctx.announcer.polite(ctx.i18n.tr("form-success"));
            Task::none()
        }
        ContactEvent::Failed => {
            ctx.notifications
                .push(notifications::Notification::error(
                    "notification-submit-error",
                ));
            ctx.announcer.assertive(ctx.i18n.tr("form-failure"));
            Task::none()
        }
    }
}

/// Runs one simulated submission attempt.
fn run_submit_attempt(attempt: u8) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(SUBMIT_LATENCY).await;
            simulated_send_succeeds()
        },
        move |success| Message::Contact(contact::Message::AttemptFinished { attempt, success }),
    )
}

/// Stand-in for the transport: roughly one attempt in ten fails.
fn simulated_send_succeeds() -> bool {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() % 10 != 0)
        .unwrap_or(true)
}

/// Handles events emitted by the showcase.
pub fn handle_showcase_event(ctx: &mut UpdateContext<'_>, event: ShowcaseEvent) -> Task<Message> {
    match event {
        ShowcaseEvent::None => Task::none(),
        ShowcaseEvent::CategoryChanged(category) => {
            ctx.app_state.set_last_category(category);
            ctx.persist_state();
            Task::none()
        }
        ShowcaseEvent::CopyRequested(snippet) => {
            ctx.notifications
                .push(notifications::Notification::success(
                    "notification-copy-success",
                ));
            ctx.announcer.polite(ctx.i18n.tr("showcase-copied"));
            iced::clipboard::write(snippet)
        }
        ShowcaseEvent::Replayed(id) => {
            ctx.announcer
                .polite(ctx.i18n.tr_with_args("announce-replay", &[("id", id)]));
            Task::none()
        }
    }
}

/// Handles events emitted by learning mode.
pub fn handle_tour_event(ctx: &mut UpdateContext<'_>, event: TourEvent) -> Task<Message> {
    match event {
        TourEvent::None => {}
        TourEvent::Toggled { enabled } => {
            ctx.config.learning.enabled = enabled;
            ctx.persist_config();
            let key = if enabled {
                "announce-learning-on"
            } else {
                "announce-learning-off"
            };
            ctx.announcer.polite(ctx.i18n.tr(key));
        }
        TourEvent::Focused(card) => {
            ctx.announcer.assertive(ctx.i18n.tr(card.title_key));
            return snap_to_region(RegionId::Features);
        }
        TourEvent::Wrapped(card) => {
            ctx.announcer.assertive(ctx.i18n.tr_with_args(
                "announce-tour-wrap",
                &[("title", &ctx.i18n.tr(card.title_key))],
            ));
            return snap_to_region(RegionId::Features);
        }
        TourEvent::AtStart => {
            ctx.announcer.assertive(ctx.i18n.tr("announce-tour-start"));
        }
        TourEvent::Selected(card) => {
            let text = format!(
                "{}. {}",
                ctx.i18n.tr(card.title_key),
                ctx.i18n.tr(card.description_key)
            );
            ctx.announcer.assertive(text);
        }
    }
    Task::none()
}

/// Routes a raw keyboard event that no widget captured.
///
/// The keyboard surface changes with the modal state: while the drawer is
/// open, Tab cycles its focus ring and Escape closes it; otherwise the
/// single-letter shortcuts and learning-mode arrows apply.
pub fn handle_raw_event(ctx: &mut UpdateContext<'_>, event: iced::Event) -> Task<Message> {
    let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return Task::none();
    };

    if ctx.panel.is_open() {
        return handle_panel_key(ctx, &key, modifiers);
    }

    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => {
            let event = ctx.tour.update(tour::Message::Exit);
            handle_tour_event(ctx, event)
        }
        keyboard::Key::Named(
            keyboard::key::Named::ArrowRight | keyboard::key::Named::ArrowDown,
        ) => {
            if ctx.tour.is_enabled() {
                let event = ctx.tour.update(tour::Message::FocusNext);
                handle_tour_event(ctx, event)
            } else {
                let event = ctx
                    .showcase
                    .update(showcase::Message::NextCategory, Instant::now());
                handle_showcase_event(ctx, event)
            }
        }
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft | keyboard::key::Named::ArrowUp) => {
            if ctx.tour.is_enabled() {
                let event = ctx.tour.update(tour::Message::FocusPrev);
                handle_tour_event(ctx, event)
            } else {
                let event = ctx
                    .showcase
                    .update(showcase::Message::PrevCategory, Instant::now());
                handle_showcase_event(ctx, event)
            }
        }
        keyboard::Key::Named(keyboard::key::Named::Enter | keyboard::key::Named::Space) => {
            let event = ctx.tour.update(tour::Message::Select);
            handle_tour_event(ctx, event)
        }
        keyboard::Key::Character(c) => match c.as_str() {
            "d" => handle_header_event(ctx, HeaderEvent::ToggleTheme),
            "a" => handle_header_event(ctx, HeaderEvent::NavigateTo(RegionId::Showcase)),
            "l" => {
                let event = ctx.tour.update(tour::Message::Toggle);
                handle_tour_event(ctx, event)
            }
            _ => Task::none(),
        },
        _ => Task::none(),
    }
}

/// Keyboard handling while the settings drawer is open: focus is contained
/// in the drawer's ring until it closes.
fn handle_panel_key(
    ctx: &mut UpdateContext<'_>,
    key: &keyboard::Key,
    modifiers: keyboard::Modifiers,
) -> Task<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => {
            handle_settings_event(ctx, SettingsEvent::Close)
        }
        keyboard::Key::Named(keyboard::key::Named::Tab) => {
            if modifiers.shift() {
                ctx.panel.focus_prev();
            } else {
                ctx.panel.focus_next();
            }
            Task::none()
        }
        keyboard::Key::Named(keyboard::key::Named::Enter | keyboard::key::Named::Space) => {
            activate_focused_control(ctx)
        }
        _ => Task::none(),
    }
}

/// Enter/Space on a drawer control. Toggles flip, the mode selector cycles,
/// and controls that need a pointer (language list, font slider) are inert.
fn activate_focused_control(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(target) = ctx.panel.focused() else {
        return Task::none();
    };
    let event = match target {
        FocusTarget::DrawerClose => SettingsEvent::Close,
        FocusTarget::DrawerThemeMode => {
            let next = match ctx.theme.mode() {
                ThemeMode::Light => ThemeMode::Dark,
                ThemeMode::Dark => ThemeMode::System,
                ThemeMode::System => ThemeMode::Light,
            };
            SettingsEvent::ThemeModeSelected(next)
        }
        FocusTarget::DrawerHighContrast => {
            SettingsEvent::HighContrastToggled(!ctx.config.accessibility.high_contrast)
        }
        FocusTarget::DrawerReducedMotion => {
            SettingsEvent::ReducedMotionToggled(!ctx.config.accessibility.reduced_motion)
        }
        FocusTarget::DrawerLearningMode => {
            SettingsEvent::LearningToggled(!ctx.tour.is_enabled())
        }
        _ => return Task::none(),
    };
    handle_settings_event(ctx, event)
}
