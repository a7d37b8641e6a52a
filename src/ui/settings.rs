// SPDX-License-Identifier: MPL-2.0
//! Settings drawer: language, theme mode, accessibility, learning mode.
//!
//! The drawer is a modal panel; while it is open, keyboard focus cycles
//! through its controls (see [`crate::ui::panel`]). Every change applies
//! immediately and persists through the config file.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::panel::FocusTarget;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, checkbox, slider, Column, Container, Row, Text};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

/// Font scale bounds, percent of the base size.
pub const FONT_SIZE_MIN: u16 = 80;
pub const FONT_SIZE_MAX: u16 = 150;

/// The focus ring of the drawer's controls, in visual order.
#[must_use]
pub fn focus_ring() -> Vec<FocusTarget> {
    vec![
        FocusTarget::DrawerClose,
        FocusTarget::DrawerLanguage,
        FocusTarget::DrawerThemeMode,
        FocusTarget::DrawerHighContrast,
        FocusTarget::DrawerFontSize,
        FocusTarget::DrawerReducedMotion,
        FocusTarget::DrawerLearningMode,
    ]
}

/// Contextual data needed to render the drawer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub high_contrast: bool,
    pub font_size_percent: u16,
    pub reduced_motion: bool,
    pub learning_enabled: bool,
    pub focused: Option<FocusTarget>,
}

/// Messages emitted by the drawer.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    HighContrastToggled(bool),
    FontSizeChanged(u16),
    ReducedMotionToggled(bool),
    LearningToggled(bool),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Close,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    HighContrastToggled(bool),
    FontSizeChanged(u16),
    ReducedMotionToggled(bool),
    LearningToggled(bool),
}

/// Process a drawer message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Close => Event::Close,
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeSelected(mode),
        Message::HighContrastToggled(on) => Event::HighContrastToggled(on),
        Message::FontSizeChanged(percent) => {
            Event::FontSizeChanged(percent.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX))
        }
        Message::ReducedMotionToggled(on) => Event::ReducedMotionToggled(on),
        Message::LearningToggled(on) => Event::LearningToggled(on),
    }
}

/// Render the settings drawer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let close_style = if ctx.focused == Some(FocusTarget::DrawerClose) {
        styles::button::focused
    } else {
        styles::button::unselected
    };
    let title_row = Row::new()
        .spacing(spacing::SM)
        .push(
            Container::new(Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_SM))
                .width(Length::Fill),
        )
        .push(
            button(Text::new("✕").size(typography::BODY))
                .on_press(Message::Close)
                .padding(spacing::XXS)
                .style(close_style),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(title_row)
        .push(language_section(&ctx))
        .push(theme_section(&ctx))
        .push(accessibility_section(&ctx))
        .push(learning_section(&ctx));

    Container::new(content)
        .width(Length::Fixed(sizing::DRAWER_WIDTH))
        .height(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut section = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("select-language-label")).size(typography::BODY));

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translated language name, e.g. "language-name-en-US"
        let translated_name = ctx.i18n.tr(&format!("language-name-{}", locale));
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let style = if ctx.i18n.current_locale() == locale {
            styles::button::selected
        } else if ctx.focused == Some(FocusTarget::DrawerLanguage) {
            styles::button::focused
        } else {
            styles::button::unselected
        };

        section = section.push(
            button(Text::new(button_text).size(typography::BODY_SM))
                .on_press(Message::LanguageSelected(locale.clone()))
                .padding([spacing::XXS, spacing::XS])
                .style(style),
        );
    }

    section.into()
}

fn theme_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut modes = Row::new().spacing(spacing::XXS);
    for (mode, key) in [
        (ThemeMode::Light, "settings-theme-light"),
        (ThemeMode::Dark, "settings-theme-dark"),
        (ThemeMode::System, "settings-theme-system"),
    ] {
        let style = if mode == ctx.theme_mode {
            styles::button::selected
        } else if ctx.focused == Some(FocusTarget::DrawerThemeMode) {
            styles::button::focused
        } else {
            styles::button::unselected
        };
        modes = modes.push(
            button(Text::new(ctx.i18n.tr(key)).size(typography::BODY_SM))
                .on_press(Message::ThemeModeSelected(mode))
                .padding([spacing::XXS, spacing::XS])
                .style(style),
        );
    }

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("settings-theme-label")).size(typography::BODY))
        .push(modes)
        .into()
}

fn accessibility_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let font_label = Text::new(ctx.i18n.tr_with_args(
        "settings-font-size",
        &[("percent", &ctx.font_size_percent.to_string())],
    ))
    .size(typography::BODY_SM);

    let font_slider = slider(
        f32::from(FONT_SIZE_MIN)..=f32::from(FONT_SIZE_MAX),
        f32::from(ctx.font_size_percent),
        |value| Message::FontSizeChanged(value.round() as u16),
    )
    .step(5.0)
    .width(Length::Fill);

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("settings-accessibility-label")).size(typography::BODY))
        .push(
            checkbox(ctx.high_contrast)
                .label(ctx.i18n.tr("settings-high-contrast"))
                .on_toggle(Message::HighContrastToggled)
                .text_size(typography::BODY_SM),
        )
        .push(
            checkbox(ctx.reduced_motion)
                .label(ctx.i18n.tr("settings-reduced-motion"))
                .on_toggle(Message::ReducedMotionToggled)
                .text_size(typography::BODY_SM),
        )
        .push(font_label)
        .push(font_slider)
        .into()
}

fn learning_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("settings-learning-label")).size(typography::BODY))
        .push(
            checkbox(ctx.learning_enabled)
                .label(ctx.i18n.tr("settings-learning-toggle"))
                .on_toggle(Message::LearningToggled)
                .text_size(typography::BODY_SM),
        )
        .push(Text::new(ctx.i18n.tr("settings-learning-hint")).size(typography::CAPTION))
        .into()
}
