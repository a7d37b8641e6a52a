// SPDX-License-Identifier: MPL-2.0
//! Modal panel state with a contained focus ring.
//!
//! While a panel (the settings drawer, the tour card) is open, keyboard
//! focus cycles through the panel's own controls and never escapes to the
//! page behind it. Closing the panel restores focus to the control that
//! opened it.

/// Focusable controls, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    // Header
    ThemeToggle,
    MenuButton,
    // Settings drawer controls
    DrawerClose,
    DrawerLanguage,
    DrawerThemeMode,
    DrawerHighContrast,
    DrawerFontSize,
    DrawerReducedMotion,
    DrawerLearningMode,
    // Tour card controls
    TourPrevious,
    TourNext,
    TourDismiss,
}

/// A cyclic ring of focus targets with one active position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusRing {
    targets: Vec<FocusTarget>,
    active: usize,
}

impl FocusRing {
    #[must_use]
    pub fn new(targets: Vec<FocusTarget>) -> Self {
        Self { targets, active: 0 }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// The focused target, or `None` for an empty ring.
    #[must_use]
    pub fn focused(&self) -> Option<FocusTarget> {
        self.targets.get(self.active).copied()
    }

    /// Moves focus forward, wrapping past the last target. No-op when empty.
    pub fn next(&mut self) {
        if !self.targets.is_empty() {
            self.active = (self.active + 1) % self.targets.len();
        }
    }

    /// Moves focus backward, wrapping before the first target. No-op when empty.
    pub fn prev(&mut self) {
        if !self.targets.is_empty() {
            self.active = (self.active + self.targets.len() - 1) % self.targets.len();
        }
    }

    /// Focuses a specific target if it belongs to the ring.
    pub fn focus(&mut self, target: FocusTarget) {
        if let Some(index) = self.targets.iter().position(|t| *t == target) {
            self.active = index;
        }
    }
}

/// Open/closed state of a modal panel plus its focus bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    open: bool,
    return_focus: Option<FocusTarget>,
    ring: FocusRing,
}

impl PanelState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the panel, remembering where focus came from. Focus lands on
    /// the ring's first target.
    pub fn open(&mut self, ring: Vec<FocusTarget>, opener: Option<FocusTarget>) {
        self.open = true;
        self.return_focus = opener;
        self.ring = FocusRing::new(ring);
    }

    /// Closes the panel. Returns the control focus should go back to.
    pub fn close(&mut self) -> Option<FocusTarget> {
        self.open = false;
        self.ring = FocusRing::default();
        self.return_focus.take()
    }

    #[must_use]
    pub fn focused(&self) -> Option<FocusTarget> {
        if self.open {
            self.ring.focused()
        } else {
            None
        }
    }

    /// Tab within the panel. Focus wraps and never leaves the ring.
    pub fn focus_next(&mut self) {
        if self.open {
            self.ring.next();
        }
    }

    /// Shift+Tab within the panel.
    pub fn focus_prev(&mut self) {
        if self.open {
            self.ring.prev();
        }
    }

    pub fn focus(&mut self, target: FocusTarget) {
        if self.open {
            self.ring.focus(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawer_ring() -> Vec<FocusTarget> {
        vec![
            FocusTarget::DrawerClose,
            FocusTarget::DrawerLanguage,
            FocusTarget::DrawerThemeMode,
        ]
    }

    #[test]
    fn open_focuses_first_target() {
        let mut panel = PanelState::default();
        panel.open(drawer_ring(), Some(FocusTarget::MenuButton));
        assert!(panel.is_open());
        assert_eq!(panel.focused(), Some(FocusTarget::DrawerClose));
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut panel = PanelState::default();
        panel.open(drawer_ring(), None);

        panel.focus_prev();
        assert_eq!(panel.focused(), Some(FocusTarget::DrawerThemeMode));

        panel.focus_next();
        assert_eq!(panel.focused(), Some(FocusTarget::DrawerClose));
        panel.focus_next();
        panel.focus_next();
        panel.focus_next();
        assert_eq!(panel.focused(), Some(FocusTarget::DrawerClose));
    }

    #[test]
    fn close_restores_opener_focus() {
        let mut panel = PanelState::default();
        panel.open(drawer_ring(), Some(FocusTarget::MenuButton));
        assert_eq!(panel.close(), Some(FocusTarget::MenuButton));
        assert!(!panel.is_open());
        assert_eq!(panel.focused(), None);
    }

    #[test]
    fn close_without_opener_returns_none() {
        let mut panel = PanelState::default();
        panel.open(drawer_ring(), None);
        assert_eq!(panel.close(), None);
    }

    #[test]
    fn empty_ring_is_a_no_op() {
        let mut panel = PanelState::default();
        panel.open(Vec::new(), None);
        assert_eq!(panel.focused(), None);
        panel.focus_next();
        panel.focus_prev();
        assert_eq!(panel.focused(), None);
    }

    #[test]
    fn focus_targets_outside_the_ring_are_ignored() {
        let mut panel = PanelState::default();
        panel.open(drawer_ring(), None);
        panel.focus(FocusTarget::TourNext);
        assert_eq!(panel.focused(), Some(FocusTarget::DrawerClose));

        panel.focus(FocusTarget::DrawerThemeMode);
        assert_eq!(panel.focused(), Some(FocusTarget::DrawerThemeMode));
    }
}
