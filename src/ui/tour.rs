// SPDX-License-Identifier: MPL-2.0
//! Learning mode: guided keyboard navigation over the feature cards.
//!
//! When enabled, arrow keys walk the feature cards, Enter or Space reads
//! the focused card out, and Escape (or `L`) leaves the mode. Advancing
//! past the last card wraps back to the first; stepping back from the
//! first stays put and reports the boundary. The enabled flag persists
//! across sessions.

/// A feature card presented on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub id: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
}

/// The landing page's feature cards, in page order.
pub const FEATURE_CARDS: &[FeatureCard] = &[
    FeatureCard {
        id: "smooth-theming",
        title_key: "feature-smooth-theming-title",
        description_key: "feature-smooth-theming-desc",
    },
    FeatureCard {
        id: "live-previews",
        title_key: "feature-live-previews-title",
        description_key: "feature-live-previews-desc",
    },
    FeatureCard {
        id: "copy-ready-snippets",
        title_key: "feature-copy-ready-snippets-title",
        description_key: "feature-copy-ready-snippets-desc",
    },
    FeatureCard {
        id: "accessible-by-default",
        title_key: "feature-accessible-by-default-title",
        description_key: "feature-accessible-by-default-desc",
    },
];

/// Messages handled by learning mode.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Toggle,
    FocusNext,
    FocusPrev,
    Select,
    Exit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    /// Mode flipped; the new state should be persisted and announced.
    Toggled { enabled: bool },
    /// A card gained keyboard focus.
    Focused(FeatureCard),
    /// Focus moved past the last card and landed back on the first.
    Wrapped(FeatureCard),
    /// Backwards from the first card: focus stays where it is.
    AtStart,
    /// The focused card was selected (read its description out).
    Selected(FeatureCard),
}

/// Learning mode state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tour {
    enabled: bool,
    /// Index into [`FEATURE_CARDS`]; `None` until the first arrow key.
    focus: Option<usize>,
}

impl Tour {
    /// Restores the persisted enabled flag.
    #[must_use]
    pub fn with_enabled(enabled: bool) -> Self {
        Self {
            enabled,
            focus: None,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn focused(&self) -> Option<FeatureCard> {
        self.focus.map(|i| FEATURE_CARDS[i])
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toggle => {
                self.enabled = !self.enabled;
                if !self.enabled {
                    self.focus = None;
                }
                Event::Toggled {
                    enabled: self.enabled,
                }
            }
            Message::Exit => {
                if self.enabled {
                    self.update(Message::Toggle)
                } else {
                    Event::None
                }
            }
            Message::FocusNext => {
                if !self.enabled || FEATURE_CARDS.is_empty() {
                    return Event::None;
                }
                match self.focus {
                    None => {
                        self.focus = Some(0);
                        Event::Focused(FEATURE_CARDS[0])
                    }
                    Some(i) if i + 1 == FEATURE_CARDS.len() => {
                        self.focus = Some(0);
                        Event::Wrapped(FEATURE_CARDS[0])
                    }
                    Some(i) => {
                        self.focus = Some(i + 1);
                        Event::Focused(FEATURE_CARDS[i + 1])
                    }
                }
            }
            Message::FocusPrev => {
                if !self.enabled || FEATURE_CARDS.is_empty() {
                    return Event::None;
                }
                match self.focus {
                    None => {
                        let last = FEATURE_CARDS.len() - 1;
                        self.focus = Some(last);
                        Event::Focused(FEATURE_CARDS[last])
                    }
                    Some(0) => Event::AtStart,
                    Some(i) => {
                        self.focus = Some(i - 1);
                        Event::Focused(FEATURE_CARDS[i - 1])
                    }
                }
            }
            Message::Select => match (self.enabled, self.focused()) {
                (true, Some(card)) => Event::Selected(card),
                _ => Event::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_reports_state() {
        let mut tour = Tour::default();
        assert!(matches!(
            tour.update(Message::Toggle),
            Event::Toggled { enabled: true }
        ));
        assert!(tour.is_enabled());
        assert!(matches!(
            tour.update(Message::Toggle),
            Event::Toggled { enabled: false }
        ));
    }

    #[test]
    fn disabling_resets_focus() {
        let mut tour = Tour::with_enabled(true);
        tour.update(Message::FocusNext);
        assert!(tour.focused().is_some());

        tour.update(Message::Toggle);
        assert!(tour.focused().is_none());
    }

    #[test]
    fn first_arrow_key_lands_on_an_end() {
        let mut tour = Tour::with_enabled(true);
        tour.update(Message::FocusNext);
        assert_eq!(tour.focused().map(|c| c.id), Some(FEATURE_CARDS[0].id));

        let mut tour = Tour::with_enabled(true);
        tour.update(Message::FocusPrev);
        assert_eq!(
            tour.focused().map(|c| c.id),
            Some(FEATURE_CARDS[FEATURE_CARDS.len() - 1].id)
        );
    }

    #[test]
    fn next_past_the_last_card_wraps_to_the_first() {
        let mut tour = Tour::with_enabled(true);
        for _ in 0..FEATURE_CARDS.len() {
            tour.update(Message::FocusNext);
        }
        let event = tour.update(Message::FocusNext);
        assert!(matches!(event, Event::Wrapped(card) if card.id == FEATURE_CARDS[0].id));
        assert_eq!(tour.focused().map(|c| c.id), Some(FEATURE_CARDS[0].id));
    }

    #[test]
    fn prev_at_the_first_card_stays_put() {
        let mut tour = Tour::with_enabled(true);
        tour.update(Message::FocusNext);
        assert_eq!(tour.focused().map(|c| c.id), Some(FEATURE_CARDS[0].id));

        let event = tour.update(Message::FocusPrev);
        assert!(matches!(event, Event::AtStart));
        assert_eq!(tour.focused().map(|c| c.id), Some(FEATURE_CARDS[0].id));
    }

    #[test]
    fn select_requires_focus_and_enabled_mode() {
        let mut tour = Tour::with_enabled(true);
        assert!(matches!(tour.update(Message::Select), Event::None));

        tour.update(Message::FocusNext);
        assert!(matches!(tour.update(Message::Select), Event::Selected(_)));

        let mut disabled = Tour::default();
        assert!(matches!(disabled.update(Message::FocusNext), Event::None));
        assert!(matches!(disabled.update(Message::Select), Event::None));
    }

    #[test]
    fn escape_only_acts_while_enabled() {
        let mut tour = Tour::default();
        assert!(matches!(tour.update(Message::Exit), Event::None));

        let mut enabled = Tour::with_enabled(true);
        assert!(matches!(
            enabled.update(Message::Exit),
            Event::Toggled { enabled: false }
        ));
    }
}
