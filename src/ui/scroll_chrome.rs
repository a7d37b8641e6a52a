// SPDX-License-Identifier: MPL-2.0
//! Scroll-linked page chrome: reading progress, pulse, and header slide.
//!
//! All scroll-driven visuals live in one state machine fed by viewport
//! offsets. The progress bar thickens briefly while the user is actively
//! scrolling, and the header hides on downward scroll past its own height
//! then reappears on any upward scroll.

use crate::ui::design_tokens::sizing;
use crate::ui::state::Deadline;
use std::time::{Duration, Instant};

/// How long after the last scroll event the progress pulse persists.
pub const PULSE_CLEAR: Duration = Duration::from_millis(250);

/// Page regions in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionId {
    #[default]
    Hero,
    Features,
    Showcase,
    Contact,
}

impl RegionId {
    pub const ALL: [RegionId; 4] = [
        RegionId::Hero,
        RegionId::Features,
        RegionId::Showcase,
        RegionId::Contact,
    ];

    /// Scroll ratio (0.0 to 1.0) at which the region starts.
    #[must_use]
    pub fn anchor(self) -> f32 {
        match self {
            RegionId::Hero => 0.0,
            RegionId::Features => 0.33,
            RegionId::Showcase => 0.6,
            RegionId::Contact => 1.0,
        }
    }

    /// i18n key for the region name used in announcements and the tour.
    #[must_use]
    pub fn name_key(self) -> &'static str {
        match self {
            RegionId::Hero => "region-hero",
            RegionId::Features => "region-features",
            RegionId::Showcase => "region-showcase",
            RegionId::Contact => "region-contact",
        }
    }
}

/// Header visibility as driven by scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderState {
    /// Page is at (or near) the top; header has no shadow.
    #[default]
    AtTop,
    /// Header shown, elevated above content.
    Visible,
    /// Header slid out of view.
    Hidden,
}

/// Scroll-linked chrome state.
#[derive(Debug, Clone, Default)]
pub struct ScrollChrome {
    /// Read progress through the page, 0.0 to 100.0.
    progress: f32,
    /// Last absolute offset, used for direction detection.
    last_offset: f32,
    header: HeaderState,
    pulse: Deadline,
}

impl ScrollChrome {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a scroll event: the absolute offset and the total scrollable
    /// distance. Values outside the document are clamped.
    pub fn on_scroll(&mut self, offset: f32, scrollable: f32, now: Instant) {
        self.progress = if scrollable > 0.0 {
            (offset / scrollable * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        let delta = offset - self.last_offset;
        self.header = if offset <= sizing::HEADER_HEIGHT {
            HeaderState::AtTop
        } else if delta > 0.0 {
            HeaderState::Hidden
        } else if delta < 0.0 {
            HeaderState::Visible
        } else {
            self.header
        };
        self.last_offset = offset;

        self.pulse.schedule(now, PULSE_CLEAR);
    }

    /// Clears the pulse once scrolling has been quiet long enough.
    /// Returns `true` on the tick where it clears.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.pulse.fire(now)
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the progress bar is in its thickened pulse state.
    #[must_use]
    pub fn is_pulsing(&self) -> bool {
        self.pulse.is_pending()
    }

    #[must_use]
    pub fn header(&self) -> HeaderState {
        self.header
    }

    /// Region the viewport currently sits in, from the scroll ratio.
    #[must_use]
    pub fn active_region(&self) -> RegionId {
        let ratio = self.progress / 100.0;
        let mut active = RegionId::Hero;
        for region in RegionId::ALL {
            if ratio >= region.anchor() {
                active = region;
            }
        }
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_to_percentage_range() {
        let now = Instant::now();
        let mut chrome = ScrollChrome::new();

        chrome.on_scroll(-50.0, 1000.0, now);
        assert_eq!(chrome.progress(), 0.0);

        chrome.on_scroll(1500.0, 1000.0, now);
        assert_eq!(chrome.progress(), 100.0);
    }

    #[test]
    fn zero_scrollable_distance_reads_as_start() {
        let mut chrome = ScrollChrome::new();
        chrome.on_scroll(0.0, 0.0, Instant::now());
        assert_eq!(chrome.progress(), 0.0);
    }

    #[test]
    fn header_hides_on_downward_scroll_and_returns_on_upward() {
        let now = Instant::now();
        let mut chrome = ScrollChrome::new();

        chrome.on_scroll(400.0, 1000.0, now);
        assert_eq!(chrome.header(), HeaderState::Hidden);

        chrome.on_scroll(350.0, 1000.0, now);
        assert_eq!(chrome.header(), HeaderState::Visible);
    }

    #[test]
    fn header_is_flat_near_the_top() {
        let now = Instant::now();
        let mut chrome = ScrollChrome::new();

        chrome.on_scroll(400.0, 1000.0, now);
        chrome.on_scroll(10.0, 1000.0, now);
        assert_eq!(chrome.header(), HeaderState::AtTop);
    }

    #[test]
    fn pulse_clears_after_quiet_period() {
        let now = Instant::now();
        let mut chrome = ScrollChrome::new();

        chrome.on_scroll(100.0, 1000.0, now);
        assert!(chrome.is_pulsing());

        // Continued scrolling keeps the pulse alive past the first window.
        chrome.on_scroll(150.0, 1000.0, now + Duration::from_millis(200));
        assert!(!chrome.tick(now + PULSE_CLEAR));
        assert!(chrome.is_pulsing());

        assert!(chrome.tick(now + Duration::from_millis(200) + PULSE_CLEAR));
        assert!(!chrome.is_pulsing());
    }

    #[test]
    fn active_region_follows_scroll_ratio() {
        let now = Instant::now();
        let mut chrome = ScrollChrome::new();

        chrome.on_scroll(0.0, 1000.0, now);
        assert_eq!(chrome.active_region(), RegionId::Hero);

        chrome.on_scroll(400.0, 1000.0, now);
        assert_eq!(chrome.active_region(), RegionId::Features);

        chrome.on_scroll(700.0, 1000.0, now);
        assert_eq!(chrome.active_region(), RegionId::Showcase);

        chrome.on_scroll(1000.0, 1000.0, now);
        assert_eq!(chrome.active_region(), RegionId::Contact);
    }
}
