// SPDX-License-Identifier: MPL-2.0
//! Extensible theming system.
//!
//! [`ThemeMode`] is the persisted preference (light, dark, or follow the
//! system). [`ThemeState`] wraps the active [`AppTheme`] together with the
//! transition marker: every mode change schedules a short settle window, and
//! a change arriving while the previous one is still settling replaces it.

use crate::ui::design_tokens::{opacity, palette};
use crate::ui::state::Deadline;
use dark_light;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Window during which a theme change is considered "in transition".
pub const THEME_TRANSITION: Duration = Duration::from_millis(300);

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_tertiary: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            surface_tertiary: Color::from_rgb(0.2, 0.2, 0.2),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Light scheme with maximum figure/ground separation, for the
    /// high-contrast accessibility setting.
    #[must_use]
    pub fn light_high_contrast() -> Self {
        Self {
            surface_secondary: palette::WHITE,
            surface_tertiary: palette::GRAY_100,
            text_primary: palette::BLACK,
            text_secondary: palette::BLACK,
            text_tertiary: palette::GRAY_700,
            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::PRIMARY_600,
            ..Self::light()
        }
    }

    /// Dark counterpart of [`Self::light_high_contrast`].
    #[must_use]
    pub fn dark_high_contrast() -> Self {
        Self {
            surface_primary: palette::BLACK,
            surface_secondary: palette::GRAY_900,
            text_secondary: palette::WHITE,
            text_tertiary: palette::GRAY_200,
            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_400,
            ..Self::dark()
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if system_is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Returns whether the OS currently prefers a dark appearance.
///
/// Defaults to dark on detection error.
#[must_use]
pub fn system_is_dark() -> bool {
    !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
}

/// Configuration de thème globale.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_is_dark(),
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }
}

/// Active theme plus its transition marker.
#[derive(Debug, Clone)]
pub struct ThemeState {
    pub theme: AppTheme,
    /// Effective darkness of the currently applied colors.
    dark: bool,
    transition: Deadline,
}

impl ThemeState {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            theme: AppTheme::new(mode),
            dark: mode.is_dark(),
            transition: Deadline::idle(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.theme.mode
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Whether a recent change is still inside its settle window.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_pending()
    }

    /// Applies a new mode. Returns `true` when the effective appearance
    /// changed. A change that lands mid-transition replaces the pending
    /// settle window rather than stacking a second one.
    pub fn set_mode(&mut self, mode: ThemeMode, animate: bool, now: Instant) -> bool {
        let was_dark = self.dark;
        self.theme = AppTheme::new(mode);
        self.dark = mode.is_dark();

        let changed = self.dark != was_dark;
        if animate && changed {
            self.transition.schedule(now, THEME_TRANSITION);
        } else if !changed {
            self.transition.cancel();
        }
        changed
    }

    /// Flips between explicit light and dark, leaving System mode behind.
    /// `animate` is false when the user asked for reduced motion.
    ///
    /// Returns the mode that is now active, to be persisted.
    pub fn toggle(&mut self, animate: bool, now: Instant) -> ThemeMode {
        let next = if self.dark {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        self.set_mode(next, animate, now);
        next
    }

    /// Re-reads the OS preference when following the system. Returns `true`
    /// when the appearance changed as a result.
    ///
    /// An explicit light/dark preference always wins over the OS setting,
    /// so this is a no-op outside System mode.
    pub fn sync_with_system(&mut self, animate: bool, now: Instant) -> bool {
        if self.theme.mode != ThemeMode::System {
            return false;
        }
        if system_is_dark() == self.dark {
            return false;
        }
        self.set_mode(ThemeMode::System, animate, now)
    }

    /// Clears the transition marker once its settle window has elapsed.
    /// Returns `true` on the tick where it clears.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.transition.fire(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9); // Close to white
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2); // Close to black
    }

    #[test]
    fn both_themes_have_same_brand_hue() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        // Brand colors should be similar (same hue)
        // Simplified test: ensure they are not grayscale
        assert!(light.brand_primary.b > light.brand_primary.r);
        assert!(dark.brand_primary.b > dark.brand_primary.r);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn set_mode_marks_transition_and_settles() {
        let now = Instant::now();
        let mut state = ThemeState::new(ThemeMode::Light);

        assert!(state.set_mode(ThemeMode::Dark, true, now));
        assert!(state.is_transitioning());
        assert!(!state.tick(now + Duration::from_millis(100)));
        assert!(state.tick(now + THEME_TRANSITION));
        assert!(!state.is_transitioning());
    }

    #[test]
    fn rapid_toggles_replace_pending_transition() {
        let now = Instant::now();
        let mut state = ThemeState::new(ThemeMode::Light);

        state.set_mode(ThemeMode::Dark, true, now);
        state.set_mode(ThemeMode::Light, true, now + Duration::from_millis(50));

        // The first settle window was replaced: nothing fires at its
        // original expiry, only at the second one.
        assert!(!state.tick(now + THEME_TRANSITION));
        assert!(state.tick(now + Duration::from_millis(50) + THEME_TRANSITION));
    }

    #[test]
    fn set_mode_without_appearance_change_does_not_transition() {
        let now = Instant::now();
        let mut state = ThemeState::new(ThemeMode::Dark);

        assert!(!state.set_mode(ThemeMode::Dark, true, now));
        assert!(!state.is_transitioning());
    }

    #[test]
    fn toggle_leaves_system_mode_for_an_explicit_preference() {
        let now = Instant::now();
        let mut state = ThemeState::new(ThemeMode::Light);
        let mode = state.toggle(true, now);
        assert_eq!(mode, ThemeMode::Dark);
        assert!(state.is_dark());

        let mode = state.toggle(true, now + Duration::from_secs(1));
        assert_eq!(mode, ThemeMode::Light);
        assert!(!state.is_dark());
    }

    #[test]
    fn toggle_without_animation_skips_the_settle_window() {
        let now = Instant::now();
        let mut state = ThemeState::new(ThemeMode::Light);

        state.toggle(false, now);

        assert!(state.is_dark());
        assert!(!state.is_transitioning());
    }

    #[test]
    fn sync_with_system_is_inert_for_explicit_modes() {
        let now = Instant::now();
        let mut state = ThemeState::new(ThemeMode::Dark);
        assert!(!state.sync_with_system(true, now));
        assert_eq!(state.mode(), ThemeMode::Dark);
    }

    #[test]
    fn high_contrast_schemes_use_full_strength_ink() {
        let light = ColorScheme::light_high_contrast();
        assert_eq!(light.text_primary, palette::BLACK);
        assert_eq!(light.surface_primary, palette::WHITE);

        let dark = ColorScheme::dark_high_contrast();
        assert_eq!(dark.text_primary, palette::WHITE);
        assert_eq!(dark.surface_primary, palette::BLACK);
    }
}
