// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a single scrollable column (hero, features, showcase,
//! contact) under a fixed header, with the settings drawer, the learning
//! card, and toasts stacked on top as overlays.

use super::{config, notifications, Message};
use crate::i18n::fluent::I18n;
use crate::ui::announcer::{Announcer, Politeness};
use crate::ui::contact::{self, ContactForm};
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::header;
use crate::ui::panel::{FocusTarget, PanelState};
use crate::ui::scroll_chrome::ScrollChrome;
use crate::ui::settings;
use crate::ui::showcase::{self, Showcase};
use crate::ui::styles;
use crate::ui::theming::ThemeState;
use crate::ui::tour::{FeatureCard, Tour, FEATURE_CARDS};
use iced::widget::{button, scrollable, Column, Container, Id, Row, Stack, Text};
use iced::{alignment, Border, Element, Length, Theme};

/// Identifier of the page scrollable, shared with `operation::snap_to`.
pub fn page_scroll_id() -> Id {
    Id::new("page")
}

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a config::Config,
    pub theme: &'a ThemeState,
    pub scroll: &'a ScrollChrome,
    pub panel: &'a PanelState,
    pub contact: &'a ContactForm,
    pub showcase: &'a Showcase,
    pub tour: &'a Tour,
    pub announcer: &'a Announcer,
    pub notifications: &'a notifications::Manager,
    /// Header control focused after a drawer close.
    pub page_focus: Option<FocusTarget>,
}

/// Renders the whole page with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let scale = f32::from(ctx.config.accessibility.clamped_font_size_percent()) / 100.0;

    let header_view = header::view(header::ViewContext {
        i18n: ctx.i18n,
        state: ctx.scroll.header(),
        progress: ctx.scroll.progress(),
        pulsing: ctx.scroll.is_pulsing(),
        is_dark: ctx.theme.is_dark(),
        settings_open: ctx.panel.is_open(),
        focused: ctx.page_focus,
    })
    .map(Message::Header);

    let page = scrollable(
        Column::new()
            .spacing(spacing::XXL)
            .padding(spacing::XL)
            .push(view_hero(ctx.i18n, scale))
            .push(view_features(ctx.i18n, ctx.tour, scale))
            .push(
                showcase::view(showcase::ViewContext {
                    i18n: ctx.i18n,
                    showcase: ctx.showcase,
                })
                .map(Message::Showcase),
            )
            .push(
                contact::view(contact::ViewContext {
                    i18n: ctx.i18n,
                    form: ctx.contact,
                })
                .map(Message::Contact),
            ),
    )
    .id(page_scroll_id())
    .on_scroll(Message::PageScrolled)
    .width(Length::Fill)
    .height(Length::Fill);

    let base = Column::new()
        .push(header_view)
        .push(page)
        .push(view_live_region(ctx.announcer))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(base);

    if ctx.panel.is_open() {
        layers = layers.push(view_drawer(&ctx));
    }

    if let Some(card) = ctx.tour.focused() {
        layers = layers.push(view_tour_card(ctx.i18n, card));
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(
            notifications::Toast::view_overlay(ctx.notifications, ctx.i18n)
                .map(Message::Notification),
        );
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}

fn view_hero(i18n: &I18n, scale: f32) -> Element<'_, Message> {
    let cta = button(Text::new(i18n.tr("hero-cta")).size(typography::BODY_LG * scale))
        .style(styles::button::primary)
        .padding([spacing::SM, spacing::LG])
        .on_press(Message::Header(header::Message::NavigateTo(
            crate::ui::scroll_chrome::RegionId::Showcase,
        )));

    Column::new()
        .spacing(spacing::MD)
        .padding([spacing::XXL, 0.0])
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(Text::new(i18n.tr("hero-title")).size(typography::TITLE_LG * scale))
        .push(Text::new(i18n.tr("hero-subtitle")).size(typography::BODY_LG * scale))
        .push(cta)
        .into()
}

fn view_features<'a>(i18n: &'a I18n, tour: &'a Tour, scale: f32) -> Element<'a, Message> {
    let focused_id = tour.focused().map(|card| card.id);

    let mut grid = Column::new().spacing(spacing::MD);
    for pair in FEATURE_CARDS.chunks(2) {
        let mut row = Row::new().spacing(spacing::MD);
        for card in pair {
            row = row.push(view_feature_card(i18n, card, focused_id == Some(card.id), scale));
        }
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr("features-title")).size(typography::TITLE_MD * scale))
        .push(grid)
        .into()
}

fn view_feature_card<'a>(
    i18n: &'a I18n,
    card: &FeatureCard,
    highlighted: bool,
    scale: f32,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr(card.title_key)).size(typography::TITLE_SM * scale))
        .push(Text::new(i18n.tr(card.description_key)).size(typography::BODY * scale));

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::FillPortion(1))
        .style(move |theme: &Theme| {
            let mut style = styles::container::card(theme);
            if highlighted {
                style.border = Border {
                    color: palette::PRIMARY_500,
                    width: border::WIDTH_LG,
                    radius: radius::MD.into(),
                };
            }
            style
        })
        .into()
}

/// Bottom status strip mirroring the screen-reader live region.
fn view_live_region(announcer: &Announcer) -> Element<'_, Message> {
    let Some(announcement) = announcer.current() else {
        return Container::new(Text::new("").size(typography::CAPTION))
            .width(Length::Fill)
            .into();
    };

    let color = match announcement.politeness {
        Politeness::Assertive => palette::ERROR_500,
        Politeness::Polite => palette::GRAY_400,
    };

    Container::new(
        Text::new(announcement.text.as_str())
            .size(typography::CAPTION)
            .color(color),
    )
    .padding([spacing::XXS, spacing::MD])
    .width(Length::Fill)
    .into()
}

fn view_drawer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let drawer = settings::view(settings::ViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme.mode(),
        high_contrast: ctx.config.accessibility.high_contrast,
        font_size_percent: ctx.config.accessibility.font_size_percent,
        reduced_motion: ctx.config.accessibility.reduced_motion,
        learning_enabled: ctx.tour.is_enabled(),
        focused: ctx.panel.focused(),
    })
    .map(Message::Settings);

    Container::new(
        Container::new(drawer)
            .width(sizing::DRAWER_WIDTH)
            .height(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .into()
}

fn view_tour_card<'a>(i18n: &'a I18n, card: FeatureCard) -> Element<'a, Message> {
    use crate::ui::tour;

    let controls = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("tour-previous")).size(typography::BODY))
                .style(styles::button::unselected)
                .on_press(Message::Tour(tour::Message::FocusPrev)),
        )
        .push(
            button(Text::new(i18n.tr("tour-next")).size(typography::BODY))
                .style(styles::button::unselected)
                .on_press(Message::Tour(tour::Message::FocusNext)),
        )
        .push(
            button(Text::new(i18n.tr("tour-dismiss")).size(typography::BODY))
                .style(styles::button::primary)
                .on_press(Message::Tour(tour::Message::Exit)),
        );

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr(card.title_key)).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr(card.description_key)).size(typography::BODY))
        .push(controls);

    Container::new(
        Container::new(content)
            .width(sizing::TOUR_CARD_WIDTH)
            .padding(spacing::LG)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Bottom)
    .padding(spacing::XL)
    .into()
}
