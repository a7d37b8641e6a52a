// SPDX-License-Identifier: MPL-2.0
//! Animation showcase: category tabs, expandable cards, snippet panes.
//!
//! The showcase renders the catalog one category at a time. Expanding a
//! card reveals a live preview, the snippet panes (style, markup, script),
//! copy-to-clipboard, and for transition-based entries the duration/easing
//! customization controls.

pub mod preview;
pub mod snippet;

pub use snippet::Easing;

use crate::catalog::{self, CatalogEntry, Category};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::Deadline;
use crate::ui::styles;
use iced::widget::{button, canvas, slider, Column, Container, Row, Text};
use iced::{Element, Font, Length};
use preview::Preview;
use std::time::{Duration, Instant};

/// Simulated load time when switching categories.
pub const CATEGORY_LOADING: Duration = Duration::from_millis(500);

/// How long the copy button reads "Copied!".
pub const COPY_CONFIRMATION: Duration = Duration::from_secs(2);

/// Duration slider bounds, in tenths of a second.
const DURATION_MIN_TENTHS: u8 = 1;
const DURATION_MAX_TENTHS: u8 = 20;
const DURATION_DEFAULT_TENTHS: u8 = 5;

/// Snippet panes of an expanded card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeTab {
    #[default]
    Style,
    Markup,
    Script,
}

impl CodeTab {
    /// Tabs available for an entry, in display order.
    #[must_use]
    pub fn available(entry: &CatalogEntry) -> Vec<CodeTab> {
        let mut tabs = vec![CodeTab::Style, CodeTab::Markup];
        if entry.script.is_some() {
            tabs.push(CodeTab::Script);
        }
        tabs
    }

    /// i18n key for the tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            CodeTab::Style => "showcase-tab-style",
            CodeTab::Markup => "showcase-tab-markup",
            CodeTab::Script => "showcase-tab-script",
        }
    }
}

/// Showcase state.
#[derive(Debug, Clone)]
pub struct Showcase {
    category: Category,
    loading: Deadline,
    expanded: Option<&'static str>,
    code_tab: CodeTab,
    duration_tenths: u8,
    easing: Easing,
    copied: Deadline,
    anim_started: Option<Instant>,
    /// Raw fraction through the current preview cycle.
    progress: f32,
    /// Previews hold their final frame instead of animating.
    reduced_motion: bool,
}

impl Default for Showcase {
    fn default() -> Self {
        Self {
            category: Category::default(),
            loading: Deadline::idle(),
            expanded: None,
            code_tab: CodeTab::default(),
            duration_tenths: DURATION_DEFAULT_TENTHS,
            easing: Easing::default(),
            copied: Deadline::idle(),
            anim_started: None,
            progress: 0.0,
            reduced_motion: false,
        }
    }
}

/// Messages handled by the showcase.
#[derive(Debug, Clone)]
pub enum Message {
    SelectCategory(Category),
    NextCategory,
    PrevCategory,
    ToggleCard(&'static str),
    SelectTab(CodeTab),
    NextTab,
    PrevTab,
    DurationChanged(f32),
    EasingSelected(Easing),
    CopySnippet,
    Replay,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The active category changed (persist it, announce after loading).
    CategoryChanged(Category),
    /// Write this text to the clipboard.
    CopyRequested(String),
    /// The preview restarted.
    Replayed(&'static str),
}

impl Showcase {
    /// Restores the showcase on a persisted category.
    #[must_use]
    pub fn with_category(category: Category) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    /// Mirrors the accessibility setting; expanded previews jump straight
    /// to their final frame while it is on.
    pub fn set_reduced_motion(&mut self, on: bool) {
        self.reduced_motion = on;
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_pending()
    }

    #[must_use]
    pub fn expanded_entry(&self) -> Option<&'static CatalogEntry> {
        self.expanded.and_then(catalog::find)
    }

    #[must_use]
    pub fn code_tab(&self) -> CodeTab {
        self.code_tab
    }

    #[must_use]
    pub fn duration_secs(&self) -> f32 {
        f32::from(self.duration_tenths) / 10.0
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    #[must_use]
    pub fn shows_copy_confirmation(&self) -> bool {
        self.copied.is_pending()
    }

    /// Whether timed state needs tick polling.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        if self.loading.is_pending() || self.copied.is_pending() {
            return true;
        }
        match self.expanded_entry() {
            Some(entry) => {
                // A pinned preview settles after the tick that pins it.
                let looping = entry.motion.repeats && !self.reduced_motion;
                self.anim_started.is_some() && (looping || self.progress < 1.0)
            }
            None => false,
        }
    }

    /// Snippet text of the active tab, with customization applied to the
    /// style pane of transition-based entries.
    #[must_use]
    pub fn active_snippet(&self) -> Option<String> {
        let entry = self.expanded_entry()?;
        match self.code_tab {
            CodeTab::Style if entry.customizable => Some(snippet::customize(
                entry.style,
                self.duration_secs(),
                self.easing,
            )),
            CodeTab::Style => Some(entry.style.to_string()),
            CodeTab::Markup => Some(entry.markup.to_string()),
            CodeTab::Script => entry.script.map(str::to_string),
        }
    }

    /// Eased progress for the expanded preview.
    #[must_use]
    pub fn preview_progress(&self) -> f32 {
        let easing = match self.expanded_entry() {
            Some(entry) if entry.customizable => self.easing,
            _ => Easing::Ease,
        };
        easing.eval(self.progress)
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::SelectCategory(category) => {
                if category == self.category {
                    return Event::None;
                }
                self.category = category;
                self.expanded = None;
                self.anim_started = None;
                self.loading.schedule(now, CATEGORY_LOADING);
                Event::CategoryChanged(category)
            }
            Message::NextCategory => {
                self.update(Message::SelectCategory(self.category.next()), now)
            }
            Message::PrevCategory => {
                self.update(Message::SelectCategory(self.category.prev()), now)
            }
            Message::ToggleCard(id) => {
                if self.expanded == Some(id) {
                    self.expanded = None;
                    self.anim_started = None;
                } else if catalog::find(id).is_some() {
                    self.expanded = Some(id);
                    self.code_tab = CodeTab::Style;
                    self.anim_started = Some(now);
                    self.progress = 0.0;
                    self.copied.cancel();
                }
                Event::None
            }
            Message::SelectTab(tab) => {
                if let Some(entry) = self.expanded_entry() {
                    if CodeTab::available(entry).contains(&tab) {
                        self.code_tab = tab;
                    }
                }
                Event::None
            }
            Message::NextTab => {
                self.cycle_tab(1);
                Event::None
            }
            Message::PrevTab => {
                self.cycle_tab(-1);
                Event::None
            }
            Message::DurationChanged(secs) => {
                let tenths = (secs * 10.0).round() as i32;
                self.duration_tenths = tenths
                    .clamp(i32::from(DURATION_MIN_TENTHS), i32::from(DURATION_MAX_TENTHS))
                    as u8;
                Event::None
            }
            Message::EasingSelected(easing) => {
                self.easing = easing;
                Event::None
            }
            Message::CopySnippet => match self.active_snippet() {
                Some(text) => {
                    self.copied.schedule(now, COPY_CONFIRMATION);
                    Event::CopyRequested(text)
                }
                None => Event::None,
            },
            Message::Replay => {
                if let Some(id) = self.expanded {
                    self.anim_started = Some(now);
                    self.progress = 0.0;
                    Event::Replayed(id)
                } else {
                    Event::None
                }
            }
        }
    }

    /// Polls timed state. Returns `true` when category loading finished
    /// on this tick (the parent announces the category).
    pub fn tick(&mut self, now: Instant) -> bool {
        self.copied.fire(now);
        self.advance_preview(now);
        self.loading.fire(now)
    }

    fn advance_preview(&mut self, now: Instant) {
        let Some(started) = self.anim_started else {
            return;
        };
        let Some(entry) = self.expanded_entry() else {
            return;
        };

        if self.reduced_motion {
            self.progress = 1.0;
            return;
        }

        // Customizable entries honor the duration control; the rest run at
        // their native speed.
        let cycle_ms = if entry.customizable {
            u64::from(self.duration_tenths) * 100
        } else {
            entry.motion.duration_ms
        }
        .max(1);

        let elapsed_ms = now.saturating_duration_since(started).as_millis() as u64;
        self.progress = if entry.motion.repeats {
            (elapsed_ms % cycle_ms) as f32 / cycle_ms as f32
        } else {
            (elapsed_ms as f32 / cycle_ms as f32).min(1.0)
        };
    }

    fn cycle_tab(&mut self, direction: i32) {
        let Some(entry) = self.expanded_entry() else {
            return;
        };
        let tabs = CodeTab::available(entry);
        let current = tabs
            .iter()
            .position(|t| *t == self.code_tab)
            .unwrap_or(0) as i32;
        let len = tabs.len() as i32;
        let next = (current + direction).rem_euclid(len);
        self.code_tab = tabs[next as usize];
    }
}

/// Contextual data needed to render the showcase.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub showcase: &'a Showcase,
}

/// Render the showcase section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(ctx.i18n.tr("showcase-title")).size(typography::TITLE_MD))
        .push(category_tabs(&ctx));

    if ctx.showcase.is_loading() {
        content = content.push(
            Container::new(Text::new(ctx.i18n.tr("showcase-loading")).size(typography::BODY))
                .padding(spacing::XL)
                .center_x(Length::Fill),
        );
        return content.into();
    }

    for entry in catalog::entries(ctx.showcase.category()) {
        content = content.push(card_view(&ctx, entry));
    }

    content.into()
}

fn category_tabs<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut tabs = Row::new().spacing(spacing::XS);
    for category in Category::ALL {
        let label = Text::new(ctx.i18n.tr(category.label_key())).size(typography::BODY);
        let style = if category == ctx.showcase.category() {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        tabs = tabs.push(
            button(label)
                .on_press(Message::SelectCategory(category))
                .padding([spacing::XS, spacing::SM])
                .style(style),
        );
    }
    tabs.into()
}

fn card_view<'a>(ctx: &ViewContext<'a>, entry: &'static CatalogEntry) -> Element<'a, Message> {
    let expanded = ctx.showcase.expanded_entry().map(|e| e.id) == Some(entry.id);

    let header = button(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(ctx.i18n.tr(entry.name_key)).size(typography::TITLE_SM))
            .push(Text::new(ctx.i18n.tr(entry.description_key)).size(typography::BODY_SM)),
    )
    .on_press(Message::ToggleCard(entry.id))
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::unselected);

    let mut card = Column::new().push(header);

    if expanded {
        card = card.push(expanded_view(ctx, entry));
    }

    Container::new(card)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn expanded_view<'a>(ctx: &ViewContext<'a>, entry: &'static CatalogEntry) -> Element<'a, Message> {
    let showcase = ctx.showcase;

    let preview = canvas(Preview::new(entry.motion.kind, showcase.preview_progress()))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DEMO_PREVIEW_HEIGHT));

    // Snippet pane tabs
    let mut tabs = Row::new().spacing(spacing::XXS);
    for tab in CodeTab::available(entry) {
        let style = if tab == showcase.code_tab() {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        tabs = tabs.push(
            button(Text::new(ctx.i18n.tr(tab.label_key())).size(typography::CAPTION))
                .on_press(Message::SelectTab(tab))
                .padding([spacing::XXS, spacing::XS])
                .style(style),
        );
    }

    let snippet_text = showcase.active_snippet().unwrap_or_default();
    let code = Container::new(
        Text::new(snippet_text)
            .font(Font::MONOSPACE)
            .size(typography::CODE),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::code_block);

    let copy_label = if showcase.shows_copy_confirmation() {
        ctx.i18n.tr("showcase-copied")
    } else {
        ctx.i18n.tr("showcase-copy")
    };
    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(copy_label).size(typography::BODY_SM))
                .on_press(Message::CopySnippet)
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("showcase-replay")).size(typography::BODY_SM))
                .on_press(Message::Replay)
                .style(styles::button::unselected),
        );

    let mut details = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .push(preview)
        .push(tabs)
        .push(code)
        .push(actions);

    if entry.customizable {
        details = details.push(customization_view(ctx));
    }

    details.into()
}

fn customization_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let showcase = ctx.showcase;

    let duration_label = Text::new(ctx.i18n.tr_with_args(
        "showcase-duration",
        &[("seconds", &format!("{:.1}", showcase.duration_secs()))],
    ))
    .size(typography::BODY_SM);

    let duration_slider = slider(0.1..=2.0, showcase.duration_secs(), Message::DurationChanged)
        .step(0.1)
        .width(Length::Fill);

    let mut easings = Row::new().spacing(spacing::XXS);
    for easing in Easing::ALL {
        let style = if easing == showcase.easing() {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        easings = easings.push(
            button(Text::new(easing.css()).size(typography::CAPTION))
                .on_press(Message::EasingSelected(easing))
                .padding([spacing::XXS, spacing::XS])
                .style(style),
        );
    }

    Column::new()
        .spacing(spacing::XS)
        .push(duration_label)
        .push(duration_slider)
        .push(easings)
        .into()
}
