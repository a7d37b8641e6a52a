// SPDX-License-Identifier: MPL-2.0
//! Page header: brand, section navigation, theme toggle, reading progress.
//!
//! The header reacts to scroll state: flat at the top of the page, elevated
//! once scrolled, and hidden entirely while scrolling down. The reading
//! progress bar stays attached to the top edge in every state and thickens
//! while scrolling is in flight.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::panel::FocusTarget;
use crate::ui::scroll_chrome::{HeaderState, RegionId};
use crate::ui::styles;
use iced::widget::{button, progress_bar, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: HeaderState,
    /// Reading progress, 0.0 to 100.0.
    pub progress: f32,
    /// Whether the progress bar is in its pulse state.
    pub pulsing: bool,
    /// Effective appearance, for the theme toggle glyph.
    pub is_dark: bool,
    pub settings_open: bool,
    /// Keyboard focus while no panel is open.
    pub focused: Option<FocusTarget>,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    ToggleTheme,
    OpenSettings,
    NavigateTo(RegionId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    ToggleTheme,
    OpenSettings,
    NavigateTo(RegionId),
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ToggleTheme => Event::ToggleTheme,
        Message::OpenSettings => Event::OpenSettings,
        Message::NavigateTo(region) => Event::NavigateTo(region),
    }
}

/// Render the header with its progress bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let bar_height = if ctx.pulsing {
        sizing::PROGRESS_BAR_PULSE_HEIGHT
    } else {
        sizing::PROGRESS_BAR_HEIGHT
    };
    let progress = progress_bar(0.0..=100.0, ctx.progress)
        .girth(bar_height)
        .length(Length::Fill);

    let mut content = Column::new().width(Length::Fill).push(progress);

    // The bar itself stays while scrolling down; only the toolbar hides.
    if ctx.state != HeaderState::Hidden {
        content = content.push(toolbar(&ctx));
    }

    content.into()
}

fn toolbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_MD);

    let mut nav = Row::new().spacing(spacing::XS);
    for region in RegionId::ALL {
        nav = nav.push(
            button(Text::new(ctx.i18n.tr(region.name_key())).size(typography::BODY))
                .on_press(Message::NavigateTo(region))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::unselected),
        );
    }

    let theme_glyph = if ctx.is_dark { "☀" } else { "🌙" };
    let theme_style = if ctx.focused == Some(FocusTarget::ThemeToggle) {
        styles::button::focused
    } else {
        styles::button::unselected
    };
    let theme_toggle = button(Text::new(theme_glyph).size(typography::BODY_LG))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(theme_style);

    let menu_style = if ctx.settings_open {
        styles::button::selected
    } else if ctx.focused == Some(FocusTarget::MenuButton) {
        styles::button::focused
    } else {
        styles::button::unselected
    };
    let menu = button(Text::new("☰").size(typography::BODY_LG))
        .on_press(Message::OpenSettings)
        .padding(spacing::XS)
        .style(menu_style);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::XS, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .push(brand)
        .push(Container::new(nav).width(Length::Fill))
        .push(theme_toggle)
        .push(menu);

    let style = match ctx.state {
        HeaderState::AtTop => styles::container::flat_header,
        _ => styles::container::elevated_header,
    };

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .style(style)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn context(i18n: &I18n, state: HeaderState) -> ViewContext<'_> {
        ViewContext {
            i18n,
            state,
            progress: 42.0,
            pulsing: false,
            is_dark: true,
            settings_open: false,
            focused: None,
        }
    }

    #[test]
    fn header_view_renders_in_every_scroll_state() {
        let i18n = I18n::default();
        for state in [HeaderState::AtTop, HeaderState::Visible, HeaderState::Hidden] {
            let _element = view(context(&i18n, state));
        }
    }

    #[test]
    fn messages_map_straight_to_events() {
        assert!(matches!(update(Message::ToggleTheme), Event::ToggleTheme));
        assert!(matches!(update(Message::OpenSettings), Event::OpenSettings));
        assert!(matches!(
            update(Message::NavigateTo(RegionId::Contact)),
            Event::NavigateTo(RegionId::Contact)
        ));
    }
}
