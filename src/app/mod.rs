// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the domains (theming, scroll chrome,
//! showcase, contact form, learning mode) and translates messages into side
//! effects like config persistence or clipboard writes. This file keeps
//! policy decisions (window size, persistence format, locale switching)
//! close to the main update loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::platform::Capabilities;
use crate::ui::announcer::Announcer;
use crate::ui::contact::{self, ContactForm};
use crate::ui::header;
use crate::ui::notifications;
use crate::ui::panel::{FocusTarget, PanelState};
use crate::ui::scroll_chrome::ScrollChrome;
use crate::ui::settings;
use crate::ui::showcase::{self, Showcase};
use crate::ui::theming::{ColorScheme, ThemeMode, ThemeState};
use crate::ui::tour::Tour;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state that bridges page components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    theme: ThemeState,
    announcer: Announcer,
    panel: PanelState,
    scroll: ScrollChrome,
    contact: ContactForm,
    showcase: Showcase,
    tour: Tour,
    /// Header control holding keyboard focus after a drawer close.
    page_focus: Option<FocusTarget>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Platform capabilities probed once at startup.
    capabilities: Capabilities,
    /// Persisted application state (last showcase category, etc.).
    app_state: persisted_state::AppState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme.mode())
            .field("panel_open", &self.panel.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: config::Config::default(),
            theme: ThemeState::new(ThemeMode::System),
            announcer: Announcer::default(),
            panel: PanelState::default(),
            scroll: ScrollChrome::default(),
            contact: ContactForm::new(),
            showcase: Showcase::default(),
            tour: Tour::with_enabled(false),
            page_focus: None,
            notifications: notifications::Manager::new(),
            capabilities: Capabilities::default(),
            app_state: persisted_state::AppState::default(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and probes
    /// the platform for optional capabilities.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let capabilities = match paths::get_app_config_dir() {
            Some(dir) => Capabilities::probe(&dir),
            None => Capabilities {
                system_theme: dark_light::detect().is_ok(),
                persistent_storage: false,
            },
        };

        let (app_state, state_warning) = persisted_state::AppState::load();

        let mut app = App {
            i18n,
            theme: ThemeState::new(config.general.theme_mode),
            tour: Tour::with_enabled(config.learning.enabled),
            showcase: app_state
                .restored_category()
                .map(Showcase::with_category)
                .unwrap_or_default(),
            capabilities,
            app_state,
            config,
            ..Self::default()
        };
        app.showcase
            .set_reduced_motion(app.config.accessibility.reduced_motion);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if let Some(key) = state_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        for key in app.capabilities.degradation_warnings() {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        let dark = self.theme.is_dark();
        let base = if dark { Theme::Dark } else { Theme::Light };
        if !self.config.accessibility.high_contrast {
            return base;
        }

        let scheme = if dark {
            ColorScheme::dark_high_contrast()
        } else {
            ColorScheme::light_high_contrast()
        };
        Theme::custom(
            "high-contrast".to_string(),
            iced::theme::Palette {
                background: scheme.surface_primary,
                text: scheme.text_primary,
                primary: scheme.brand_primary,
                success: scheme.success,
                danger: scheme.error,
                ..base.palette()
            },
        )
    }

    /// The tick subscription runs only while some timed state is pending,
    /// so an idle page schedules no wakeups.
    fn needs_ticks(&self) -> bool {
        self.theme.is_transitioning()
            || self.scroll.is_pulsing()
            || self.contact.needs_ticks()
            || self.showcase.needs_ticks()
            || self.notifications.has_notifications()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.needs_ticks());
        let system_theme_sub = subscription::create_system_theme_subscription(
            self.theme.mode() == ThemeMode::System && self.capabilities.system_theme,
        );

        Subscription::batch([event_sub, tick_sub, system_theme_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            theme: &mut self.theme,
            announcer: &mut self.announcer,
            panel: &mut self.panel,
            scroll: &mut self.scroll,
            contact: &mut self.contact,
            showcase: &mut self.showcase,
            tour: &mut self.tour,
            notifications: &mut self.notifications,
            capabilities: &self.capabilities,
            app_state: &mut self.app_state,
            page_focus: &mut self.page_focus,
        };

        match message {
            Message::Header(header_message) => {
                let event = header::update(header_message);
                update::handle_header_event(&mut ctx, event)
            }
            Message::Settings(settings_message) => {
                let event = settings::update(settings_message);
                update::handle_settings_event(&mut ctx, event)
            }
            Message::Contact(contact_message) => {
                let event = ctx.contact.update(contact_message, Instant::now());
                update::handle_contact_event(&mut ctx, event)
            }
            Message::Showcase(showcase_message) => {
                let event = ctx.showcase.update(showcase_message, Instant::now());
                update::handle_showcase_event(&mut ctx, event)
            }
            Message::Tour(tour_message) => {
                let event = ctx.tour.update(tour_message);
                update::handle_tour_event(&mut ctx, event)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::PageScrolled(viewport) => {
                let offset = viewport.absolute_offset().y;
                let scrollable_height =
                    (viewport.content_bounds().height - viewport.bounds().height).max(0.0);
                ctx.scroll.on_scroll(offset, scrollable_height, Instant::now());
                Task::none()
            }
            Message::RawEvent(event) => update::handle_raw_event(&mut ctx, event),
            Message::SystemThemePoll(now) => {
                let animate = !ctx.config.accessibility.reduced_motion;
                if ctx.theme.sync_with_system(animate, now) {
                    let key = if ctx.theme.is_dark() {
                        "announce-theme-dark"
                    } else {
                        "announce-theme-light"
                    };
                    ctx.announcer.polite(ctx.i18n.tr(key));
                }
                Task::none()
            }
            Message::Tick(now) => {
                let _ = ctx.theme.tick(now);
                let _ = ctx.scroll.tick(now);
                ctx.contact.tick(now);
                if ctx.showcase.tick(now) {
                    let label = ctx.i18n.tr(ctx.showcase.category().label_key());
                    ctx.announcer.polite(ctx.i18n.tr_with_args(
                        "announce-category-loaded",
                        &[("category", &label)],
                    ));
                }
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            theme: &self.theme,
            scroll: &self.scroll,
            panel: &self.panel,
            contact: &self.contact,
            showcase: &self.showcase,
            tour: &self.tour,
            announcer: &self.announcer,
            notifications: &self.notifications,
            page_focus: self.page_focus,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::ui::panel::FocusTarget;
    use crate::ui::scroll_chrome::RegionId;
    use crate::ui::theming::ThemeMode;
    use iced::keyboard;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    /// Points both storage directories at a temp dir for the test's duration.
    fn with_temp_dirs<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        // A panicking test must not take the other env tests down with it.
        let _guard = env_lock()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous_config = std::env::var(paths::ENV_CONFIG_DIR).ok();
        let previous_data = std::env::var(paths::ENV_DATA_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());
        std::env::set_var(paths::ENV_DATA_DIR, temp_dir.path());

        test(temp_dir.path());

        match previous_config {
            Some(value) => std::env::set_var(paths::ENV_CONFIG_DIR, value),
            None => std::env::remove_var(paths::ENV_CONFIG_DIR),
        }
        match previous_data {
            Some(value) => std::env::set_var(paths::ENV_DATA_DIR, value),
            None => std::env::remove_var(paths::ENV_DATA_DIR),
        }
    }

    fn key_press(key: keyboard::Key) -> Message {
        Message::RawEvent(iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key.clone(),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::KeyA),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        }))
    }

    fn named_key(named: keyboard::key::Named) -> Message {
        key_press(keyboard::Key::Named(named))
    }

    fn char_key(c: &str) -> Message {
        key_press(keyboard::Key::Character(c.into()))
    }

    #[test]
    fn new_starts_with_defaults() {
        with_temp_dirs(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.theme.mode(), ThemeMode::System);
            assert!(!app.panel.is_open());
            assert!(!app.tour.is_enabled());
            assert!(!app.contact.is_submitting());
        });
    }

    #[test]
    fn title_uses_localized_app_name() {
        let app = App::default();
        assert_eq!(app.title(), "MotionDeck");
    }

    #[test]
    fn theme_toggle_persists_to_config_file() {
        with_temp_dirs(|root| {
            let mut app = App::default();

            let _ = app.update(Message::Header(header::Message::ToggleTheme));

            // The env override points straight at the temp dir, no app
            // subdirectory is appended.
            let config_path = root.join("settings.toml");
            assert!(config_path.exists());
            let contents = fs::read_to_string(config_path).expect("config should be readable");
            assert!(contents.contains("theme_mode"));
        });
    }

    #[test]
    fn toggling_a_system_theme_lands_on_an_explicit_mode() {
        with_temp_dirs(|_| {
            let mut app = App::default();
            assert_eq!(app.theme.mode(), ThemeMode::System);

            let _ = app.update(Message::Header(header::Message::ToggleTheme));

            assert!(matches!(
                app.theme.mode(),
                ThemeMode::Light | ThemeMode::Dark
            ));
        });
    }

    #[test]
    fn open_settings_then_escape_restores_closed_state() {
        with_temp_dirs(|_| {
            let mut app = App::default();

            let _ = app.update(Message::Header(header::Message::OpenSettings));
            assert!(app.panel.is_open());
            assert_eq!(app.panel.focused(), Some(FocusTarget::DrawerClose));

            let _ = app.update(named_key(keyboard::key::Named::Escape));
            assert!(!app.panel.is_open());
        });
    }

    #[test]
    fn tab_cycles_the_drawer_focus_ring() {
        with_temp_dirs(|_| {
            let mut app = App::default();
            let _ = app.update(Message::Header(header::Message::OpenSettings));

            let first = app.panel.focused();
            let _ = app.update(named_key(keyboard::key::Named::Tab));
            assert_ne!(app.panel.focused(), first);
        });
    }

    #[test]
    fn shortcut_d_toggles_the_theme() {
        with_temp_dirs(|_| {
            let mut app = App::default();
            let before_dark = app.theme.is_dark();

            let _ = app.update(char_key("d"));

            assert_ne!(app.theme.is_dark(), before_dark);
        });
    }

    #[test]
    fn shortcut_l_enables_learning_mode_and_persists() {
        with_temp_dirs(|root| {
            let mut app = App::default();

            let _ = app.update(char_key("l"));

            assert!(app.tour.is_enabled());
            assert!(app.config.learning.enabled);
            let config_path = root.join("settings.toml");
            assert!(config_path.exists());
        });
    }

    #[test]
    fn selecting_a_category_persists_state() {
        with_temp_dirs(|root| {
            let mut app = App::default();

            let _ = app.update(Message::Showcase(showcase::Message::SelectCategory(
                Category::Text,
            )));

            assert_eq!(app.app_state.restored_category(), Some(Category::Text));
            let state_path = root.join("state.cbor");
            assert!(state_path.exists());
        });
    }

    #[test]
    fn restored_category_is_used_on_startup() {
        with_temp_dirs(|_| {
            let mut state = persisted_state::AppState::default();
            state.set_last_category(Category::Scroll);
            assert!(state.save().is_none());

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.showcase.category(), Category::Scroll);
        });
    }

    #[test]
    fn navigation_announces_the_target_region() {
        with_temp_dirs(|_| {
            let mut app = App::default();

            let _ = app.update(Message::Header(header::Message::NavigateTo(
                RegionId::Contact,
            )));

            let announcement = app.announcer.current().expect("announcement expected");
            assert!(!announcement.text.is_empty());
        });
    }

    #[test]
    fn degraded_storage_skips_config_writes() {
        with_temp_dirs(|root| {
            let mut app = App {
                capabilities: Capabilities {
                    system_theme: true,
                    persistent_storage: false,
                },
                ..App::default()
            };

            let _ = app.update(Message::Header(header::Message::ToggleTheme));

            // The preference applies in-session, nothing is written.
            assert!(matches!(
                app.theme.mode(),
                ThemeMode::Light | ThemeMode::Dark
            ));
            assert!(!root.join("settings.toml").exists());
        });
    }

    #[test]
    fn settings_changes_update_config() {
        with_temp_dirs(|_| {
            let mut app = App::default();

            let _ = app.update(Message::Settings(settings::Message::HighContrastToggled(
                true,
            )));
            assert!(app.config.accessibility.high_contrast);

            let _ = app.update(Message::Settings(settings::Message::FontSizeChanged(130)));
            assert_eq!(app.config.accessibility.font_size_percent, 130);

            let _ = app.update(Message::Settings(settings::Message::ReducedMotionToggled(
                true,
            )));
            assert!(app.config.accessibility.reduced_motion);
        });
    }

    #[test]
    fn font_size_is_clamped_through_the_drawer() {
        with_temp_dirs(|_| {
            let mut app = App::default();

            let _ = app.update(Message::Settings(settings::Message::FontSizeChanged(400)));

            assert_eq!(
                app.config.accessibility.font_size_percent,
                crate::ui::settings::FONT_SIZE_MAX
            );
        });
    }

    #[test]
    fn idle_app_needs_no_ticks() {
        let app = App::default();
        assert!(!app.needs_ticks());
    }

    #[test]
    fn pending_notification_keeps_ticks_running() {
        let mut app = App::default();
        app.notifications
            .push(notifications::Notification::info("notification-copy-success"));
        assert!(app.needs_ticks());
    }

    #[test]
    fn closing_the_drawer_returns_focus_to_the_menu_button() {
        with_temp_dirs(|_| {
            let mut app = App::default();

            let _ = app.update(Message::Header(header::Message::OpenSettings));
            assert_eq!(app.page_focus, None);

            let _ = app.update(named_key(keyboard::key::Named::Escape));
            assert_eq!(app.page_focus, Some(FocusTarget::MenuButton));
        });
    }

    #[test]
    fn reduced_motion_applies_theme_changes_instantly() {
        with_temp_dirs(|_| {
            let mut app = App::default();
            let _ = app.update(Message::Settings(settings::Message::ReducedMotionToggled(
                true,
            )));

            let _ = app.update(Message::Header(header::Message::ToggleTheme));

            assert!(!app.theme.is_transitioning());
        });
    }

    #[test]
    fn high_contrast_swaps_in_a_stronger_palette() {
        with_temp_dirs(|_| {
            let mut app = App::default();
            let standard = app.theme().palette();

            let _ = app.update(Message::Settings(settings::Message::HighContrastToggled(
                true,
            )));

            assert!(app.config.accessibility.high_contrast);
            assert_ne!(app.theme().palette().primary, standard.primary);
        });
    }

    #[test]
    fn submitting_an_empty_form_flags_the_first_field() {
        with_temp_dirs(|_| {
            let mut app = App::default();

            let _ = app.update(Message::Contact(contact::Message::Submit));

            assert!(app.contact.field(contact::Field::Name).error.is_some());
            let announcement = app.announcer.current().expect("announcement expected");
            assert!(!announcement.text.is_empty());
        });
    }

    #[test]
    fn arrow_keys_move_category_tabs_until_learning_mode_claims_them() {
        with_temp_dirs(|_| {
            let mut app = App::default();
            assert_eq!(app.showcase.category(), Category::Transitions);

            let _ = app.update(named_key(keyboard::key::Named::ArrowRight));
            assert_eq!(app.showcase.category(), Category::Keyframes);
            assert!(app.tour.focused().is_none());

            let _ = app.update(char_key("l"));
            let _ = app.update(named_key(keyboard::key::Named::ArrowRight));
            assert_eq!(app.showcase.category(), Category::Keyframes);
            assert!(app.tour.focused().is_some());
        });
    }
}
