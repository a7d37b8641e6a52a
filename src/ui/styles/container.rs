// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the settings drawer and the tour card.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card surface for showcase entries and feature tiles.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Monospace snippet pane inside an expanded showcase card.
pub fn code_block(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    let background = if is_light {
        palette::GRAY_100
    } else {
        Color::from_rgb(0.08, 0.08, 0.08)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette::GRAY_700,
        },
        ..Default::default()
    }
}

/// Elevated header bar, shown once the page has scrolled past the top.
pub fn elevated_header(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Flat header bar for the top of the page.
pub fn flat_header(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        shadow: shadow::NONE,
        ..Default::default()
    }
}
