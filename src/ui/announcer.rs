// SPDX-License-Identifier: MPL-2.0
//! Screen-reader style announcement channel.
//!
//! Components never format status text themselves; they push announcements
//! here and the status strip renders the latest one. A short history is kept
//! so users can review announcements they missed.

use std::collections::VecDeque;

/// How many past announcements are retained for review.
const HISTORY_LIMIT: usize = 8;

/// Urgency of an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Politeness {
    /// Announced when convenient; does not interrupt.
    #[default]
    Polite,
    /// Announced immediately, replacing whatever is pending.
    Assertive,
}

/// A single announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub politeness: Politeness,
}

/// Announcement state: the live message plus a bounded history.
#[derive(Debug, Clone, Default)]
pub struct Announcer {
    current: Option<Announcement>,
    history: VecDeque<Announcement>,
}

impl Announcer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes an announcement.
    ///
    /// A polite announcement never displaces a live assertive one; it still
    /// enters the history. Assertive announcements always replace the
    /// current message.
    pub fn announce(&mut self, text: impl Into<String>, politeness: Politeness) {
        let announcement = Announcement {
            text: text.into(),
            politeness,
        };

        let displaced = match (&self.current, politeness) {
            (Some(live), Politeness::Polite) if live.politeness == Politeness::Assertive => false,
            _ => true,
        };
        if displaced {
            self.current = Some(announcement.clone());
        }

        self.history.push_back(announcement);
        while self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
    }

    /// Convenience wrapper for polite announcements.
    pub fn polite(&mut self, text: impl Into<String>) {
        self.announce(text, Politeness::Polite);
    }

    /// Convenience wrapper for assertive announcements.
    pub fn assertive(&mut self, text: impl Into<String>) {
        self.announce(text, Politeness::Assertive);
    }

    /// The live announcement, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Announcement> {
        self.current.as_ref()
    }

    /// Clears the live announcement. History is untouched.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Past announcements, oldest first.
    #[must_use]
    pub fn history(&self) -> impl Iterator<Item = &Announcement> {
        self.history.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn announce_sets_current_message() {
        let mut announcer = Announcer::new();
        announcer.polite("theme changed");
        assert_eq!(
            announcer.current().map(|a| a.text.as_str()),
            Some("theme changed")
        );
    }

    #[test]
    fn polite_does_not_displace_live_assertive() {
        let mut announcer = Announcer::new();
        announcer.assertive("form error");
        announcer.polite("scrolled to features");

        assert_eq!(
            announcer.current().map(|a| a.text.as_str()),
            Some("form error")
        );
        // The polite one is still recorded.
        assert_eq!(announcer.history().count(), 2);
    }

    #[test]
    fn assertive_replaces_anything() {
        let mut announcer = Announcer::new();
        announcer.assertive("first");
        announcer.assertive("second");
        assert_eq!(announcer.current().map(|a| a.text.as_str()), Some("second"));
    }

    #[test]
    fn history_is_bounded() {
        let mut announcer = Announcer::new();
        for i in 0..20 {
            announcer.polite(format!("message {}", i));
        }
        assert_eq!(announcer.history().count(), HISTORY_LIMIT);
        // Oldest entries were dropped.
        assert_eq!(
            announcer.history().next().map(|a| a.text.as_str()),
            Some("message 12")
        );
    }

    #[test]
    fn clear_keeps_history() {
        let mut announcer = Announcer::new();
        announcer.polite("hello");
        announcer.clear();
        assert!(announcer.current().is_none());
        assert_eq!(announcer.history().count(), 1);
    }
}
