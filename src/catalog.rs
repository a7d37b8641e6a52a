// SPDX-License-Identifier: MPL-2.0
//! Immutable catalog of animation demos.
//!
//! The catalog is the data layer of the showcase: a fixed set of entries
//! grouped by category. Each entry carries the style rule, the markup it
//! applies to, and an optional script snippet, plus a [`Motion`] spec that
//! drives the live canvas preview. Display customization (duration, easing)
//! never mutates catalog data; it only rewrites the *displayed* snippet.

/// Animation categories, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Transitions,
    Keyframes,
    Scroll,
    Interactive,
    Text,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Transitions,
        Category::Keyframes,
        Category::Scroll,
        Category::Interactive,
        Category::Text,
    ];

    /// i18n key for the category tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Category::Transitions => "category-transitions",
            Category::Keyframes => "category-keyframes",
            Category::Scroll => "category-scroll",
            Category::Interactive => "category-interactive",
            Category::Text => "category-text",
        }
    }

    /// Stable identifier used for persisted state.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Category::Transitions => "transitions",
            Category::Keyframes => "keyframes",
            Category::Scroll => "scroll",
            Category::Interactive => "interactive",
            Category::Text => "text",
        }
    }

    /// Parses a persisted identifier back into a category.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Next category in tab order, wrapping past the end.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous category in tab order, wrapping before the start.
    #[must_use]
    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// How a preview animates its demo shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Fade,
    Scale,
    SlideLeft,
    Rotate,
    ColorShift,
    Pulse,
    Shake,
    Bounce,
    Spin,
    FadeInScale,
    RevealUp,
    RevealLeft,
    RevealRight,
    Float,
    Grow,
    Glow,
    Ripple,
    Typewriter,
    GradientText,
    LetterSpacing,
    Blur,
}

/// Preview motion spec for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub kind: MotionKind,
    /// Base duration of one cycle in milliseconds.
    pub duration_ms: u64,
    /// Whether the preview loops (infinite animations) or plays once.
    pub repeats: bool,
}

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable identifier (also used to select an expanded card).
    pub id: &'static str,
    /// i18n key for the display name.
    pub name_key: &'static str,
    /// i18n key for the one-line description.
    pub description_key: &'static str,
    /// Style rule snippet.
    pub style: &'static str,
    /// Markup snippet the rule applies to.
    pub markup: &'static str,
    /// Optional script snippet.
    pub script: Option<&'static str>,
    /// Preview motion spec.
    pub motion: Motion,
    /// Whether the entry is transition-based and accepts duration/easing
    /// customization of its displayed snippet.
    pub customizable: bool,
}

/// Returns the entries of a category, in display order.
#[must_use]
pub fn entries(category: Category) -> &'static [CatalogEntry] {
    match category {
        Category::Transitions => TRANSITIONS,
        Category::Keyframes => KEYFRAMES,
        Category::Scroll => SCROLL,
        Category::Interactive => INTERACTIVE,
        Category::Text => TEXT,
    }
}

/// Looks an entry up by identifier across all categories.
#[must_use]
pub fn find(id: &str) -> Option<&'static CatalogEntry> {
    Category::ALL
        .iter()
        .flat_map(|c| entries(*c).iter())
        .find(|e| e.id == id)
}

const TRANSITIONS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "fade-in-out",
        name_key: "anim-fade-in-out-name",
        description_key: "anim-fade-in-out-desc",
        style: ".fade-in-out {\n  transition: opacity 0.5s ease;\n}\n\n.fade-in-out:hover {\n  opacity: 0.5;\n}",
        markup: "<div class=\"fade-in-out\">Hover over me</div>",
        script: None,
        motion: Motion {
            kind: MotionKind::Fade,
            duration_ms: 500,
            repeats: false,
        },
        customizable: true,
    },
    CatalogEntry {
        id: "scale-up",
        name_key: "anim-scale-up-name",
        description_key: "anim-scale-up-desc",
        style: ".scale-up {\n  transition: transform 0.5s ease;\n}\n\n.scale-up:hover {\n  transform: scale(1.2);\n}",
        markup: "<div class=\"scale-up\">Hover over me</div>",
        script: None,
        motion: Motion {
            kind: MotionKind::Scale,
            duration_ms: 500,
            repeats: false,
        },
        customizable: true,
    },
    CatalogEntry {
        id: "slide-left",
        name_key: "anim-slide-left-name",
        description_key: "anim-slide-left-desc",
        style: ".slide-left {\n  transition: transform 0.5s ease;\n}\n\n.slide-left:hover {\n  transform: translateX(-20px);\n}",
        markup: "<div class=\"slide-left\">Hover over me</div>",
        script: None,
        motion: Motion {
            kind: MotionKind::SlideLeft,
            duration_ms: 500,
            repeats: false,
        },
        customizable: true,
    },
    CatalogEntry {
        id: "rotate-360",
        name_key: "anim-rotate-360-name",
        description_key: "anim-rotate-360-desc",
        style: ".rotate-360 {\n  transition: transform 0.7s ease;\n}\n\n.rotate-360:hover {\n  transform: rotate(360deg);\n}",
        markup: "<div class=\"rotate-360\">Hover over me</div>",
        script: None,
        motion: Motion {
            kind: MotionKind::Rotate,
            duration_ms: 700,
            repeats: false,
        },
        customizable: true,
    },
    CatalogEntry {
        id: "color-shift",
        name_key: "anim-color-shift-name",
        description_key: "anim-color-shift-desc",
        style: ".color-shift {\n  transition: background-color 0.5s ease,\n              color 0.5s ease,\n              box-shadow 0.5s ease;\n}\n\n.color-shift:hover {\n  background: var(--accent-color);\n  color: white;\n  box-shadow: 0 10px 25px rgba(8, 145, 178, 0.4);\n}",
        markup: "<div class=\"color-shift\">Hover over me</div>",
        script: None,
        motion: Motion {
            kind: MotionKind::ColorShift,
            duration_ms: 500,
            repeats: false,
        },
        customizable: true,
    },
];

const KEYFRAMES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "pulse",
        name_key: "anim-pulse-name",
        description_key: "anim-pulse-desc",
        style: "@keyframes pulse {\n  0%, 100% { transform: scale(1); }\n  50% { transform: scale(1.1); }\n}\n\n.pulse {\n  animation: pulse 1.5s infinite;\n}",
        markup: "<div class=\"pulse\">Pulse Animation</div>",
        script: None,
        motion: Motion {
            kind: MotionKind::Pulse,
            duration_ms: 1500,
            repeats: true,
        },
        customizable: false,
    },
    CatalogEntry {
        id: "shake",
        name_key: "anim-shake-name",
        description_key: "anim-shake-desc",
        style: "@keyframes shake {\n  0%, 100% { transform: translateX(0); }\n  10%, 30%, 50%, 70%, 90% { transform: translateX(-5px); }\n  20%, 40%, 60%, 80% { transform: translateX(5px); }\n}\n\n.shake {\n  animation: shake 0.8s ease-in-out;\n}",
        markup: "<div class=\"shake\">Shake Animation</div>",
        script: Some("// Optionally trigger shake with a script\nconst el = document.querySelector('.shake');\nel.addEventListener('click', () => {\n  el.classList.remove('shake');\n  void el.offsetWidth; // Force reflow\n  el.classList.add('shake');\n});"),
        motion: Motion {
            kind: MotionKind::Shake,
            duration_ms: 800,
            repeats: false,
        },
        customizable: false,
    },
    CatalogEntry {
        id: "bounce",
        name_key: "anim-bounce-name",
        description_key: "anim-bounce-desc",
        style: "@keyframes bounce {\n  0%, 20%, 50%, 80%, 100% { transform: translateY(0); }\n  40% { transform: translateY(-20px); }\n  60% { transform: translateY(-10px); }\n}\n\n.bounce {\n  animation: bounce 2s infinite;\n}",
        markup: "<div class=\"bounce\">Bounce Animation</div>",
        script: None,
        motion: Motion {
            kind: MotionKind::Bounce,
            duration_ms: 2000,
            repeats: true,
        },
        customizable: false,
    },
    CatalogEntry {
        id: "spin",
        name_key: "anim-spin-name",
        description_key: "anim-spin-desc",
        style: "@keyframes spin {\n  0% { transform: rotate(0deg); }\n  100% { transform: rotate(360deg); }\n}\n\n.spin {\n  animation: spin 2s linear infinite;\n}",
        markup: "<div class=\"spin\">Spin Animation</div>",
        script: None,
        motion: Motion {
            kind: MotionKind::Spin,
            duration_ms: 2000,
            repeats: true,
        },
        customizable: false,
    },
    CatalogEntry {
        id: "fade-in-scale",
        name_key: "anim-fade-in-scale-name",
        description_key: "anim-fade-in-scale-desc",
        style: "@keyframes fadeInScale {\n  0% { opacity: 0; transform: scale(0.8); }\n  100% { opacity: 1; transform: scale(1); }\n}\n\n.fade-in-scale {\n  animation: fadeInScale 1s cubic-bezier(0.4, 0, 0.2, 1);\n}",
        markup: "<div class=\"fade-in-scale\">Fade In Scale</div>",
        script: Some("// Replay the entrance with a script\nfunction replayAnimation(element) {\n  element.classList.remove('fade-in-scale');\n  void element.offsetWidth; // Force reflow\n  element.classList.add('fade-in-scale');\n}"),
        motion: Motion {
            kind: MotionKind::FadeInScale,
            duration_ms: 1000,
            repeats: false,
        },
        customizable: false,
    },
];

const SCROLL: &[CatalogEntry] = &[
    CatalogEntry {
        id: "reveal-on-scroll",
        name_key: "anim-reveal-on-scroll-name",
        description_key: "anim-reveal-on-scroll-desc",
        style: ".reveal-on-scroll {\n  opacity: 0;\n  transform: translateY(30px);\n  transition: opacity 0.8s ease, transform 0.8s ease;\n}\n\n.reveal-on-scroll.visible {\n  opacity: 1;\n  transform: translateY(0);\n}",
        markup: "<div class=\"reveal-on-scroll\">I'll appear when scrolled into view</div>",
        script: Some("// Reveal when entering the viewport\nconst observer = new IntersectionObserver((entries) => {\n  entries.forEach(entry => {\n    if (entry.isIntersecting) {\n      entry.target.classList.add('visible');\n    }\n  });\n}, { threshold: 0.1 });\n\ndocument.querySelectorAll('.reveal-on-scroll')\n  .forEach(el => observer.observe(el));"),
        motion: Motion {
            kind: MotionKind::RevealUp,
            duration_ms: 800,
            repeats: false,
        },
        customizable: false,
    },
    CatalogEntry {
        id: "reveal-from-left",
        name_key: "anim-reveal-from-left-name",
        description_key: "anim-reveal-from-left-desc",
        style: ".reveal-from-left {\n  opacity: 0;\n  transform: translateX(-100px);\n  transition: all 0.8s ease;\n}\n\n.reveal-from-left.visible {\n  opacity: 1;\n  transform: translateX(0);\n}",
        markup: "<div class=\"reveal-from-left\">I'll slide in from the left</div>",
        script: Some("// Reveal when entering the viewport\nconst observer = new IntersectionObserver((entries) => {\n  entries.forEach(entry => {\n    if (entry.isIntersecting) {\n      entry.target.classList.add('visible');\n    }\n  });\n}, { threshold: 0.1 });\n\ndocument.querySelectorAll('.reveal-from-left')\n  .forEach(el => observer.observe(el));"),
        motion: Motion {
            kind: MotionKind::RevealLeft,
            duration_ms: 800,
            repeats: false,
        },
        customizable: false,
    },
    CatalogEntry {
        id: "reveal-from-right",
        name_key: "anim-reveal-from-right-name",
        description_key: "anim-reveal-from-right-desc",
        style: ".reveal-from-right {\n  opacity: 0;\n  transform: translateX(100px);\n  transition: all 0.8s ease;\n}\n\n.reveal-from-right.visible {\n  opacity: 1;\n  transform: translateX(0);\n}",
        markup: "<div class=\"reveal-from-right\">I'll slide in from the right</div>",
        script: Some("// Reveal when entering the viewport\nconst observer = new IntersectionObserver((entries) => {\n  entries.forEach(entry => {\n    if (entry.isIntersecting) {\n      entry.target.classList.add('visible');\n    }\n  });\n}, { threshold: 0.1 });\n\ndocument.querySelectorAll('.reveal-from-right')\n  .forEach(el => observer.observe(el));"),
        motion: Motion {
            kind: MotionKind::RevealRight,
            duration_ms: 800,
            repeats: false,
        },
        customizable: false,
    },
];

const INTERACTIVE: &[CatalogEntry] = &[
    CatalogEntry {
        id: "hover-float",
        name_key: "anim-hover-float-name",
        description_key: "anim-hover-float-desc",
        style: ".hover-float {\n  transition: transform 0.3s ease;\n}\n\n.hover-float:hover {\n  transform: translateY(-10px);\n}",
        markup: "<div class=\"hover-float\">Hover over me</div>",
        script: None,
        motion: Motion {
            kind: MotionKind::Float,
            duration_ms: 300,
            repeats: false,
        },
        customizable: true,
    },
    CatalogEntry {
        id: "hover-grow",
        name_key: "anim-hover-grow-name",
        description_key: "anim-hover-grow-desc",
        style: ".hover-grow {\n  transition: transform 0.3s ease;\n}\n\n.hover-grow:hover {\n  transform: scale(1.1);\n}",
        markup: "<div class=\"hover-grow\">Hover over me</div>",
        script: None,
        motion: Motion {
            kind: MotionKind::Grow,
            duration_ms: 300,
            repeats: false,
        },
        customizable: true,
    },
    CatalogEntry {
        id: "hover-glow",
        name_key: "anim-hover-glow-name",
        description_key: "anim-hover-glow-desc",
        style: ".hover-glow {\n  transition: box-shadow 0.3s ease, transform 0.3s ease;\n}\n\n.hover-glow:hover {\n  box-shadow: 0 0 20px var(--accent-color);\n  transform: translateY(-5px);\n}",
        markup: "<div class=\"hover-glow\">Hover over me</div>",
        script: None,
        motion: Motion {
            kind: MotionKind::Glow,
            duration_ms: 300,
            repeats: false,
        },
        customizable: true,
    },
    CatalogEntry {
        id: "click-ripple",
        name_key: "anim-click-ripple-name",
        description_key: "anim-click-ripple-desc",
        style: ".click-ripple {\n  position: relative;\n  overflow: hidden;\n}\n\n.click-ripple::after {\n  content: \"\";\n  position: absolute;\n  top: 50%;\n  left: 50%;\n  width: 5px;\n  height: 5px;\n  background: rgba(255, 255, 255, 0.5);\n  opacity: 0;\n  border-radius: 100%;\n  transform: scale(1, 1) translate(-50%, -50%);\n  transform-origin: 50% 50%;\n}\n\n.click-ripple.animate::after {\n  animation: ripple 0.6s ease-out;\n}\n\n@keyframes ripple {\n  0% {\n    transform: scale(0, 0) translate(-50%, -50%);\n    opacity: 0.5;\n  }\n  100% {\n    transform: scale(20, 20) translate(-50%, -50%);\n    opacity: 0;\n  }\n}",
        markup: "<div class=\"click-ripple\">Click me</div>",
        script: Some("// Restart the ripple on click\nconst el = document.querySelector('.click-ripple');\nel.addEventListener('click', () => {\n  el.classList.remove('animate');\n  void el.offsetWidth; // Force reflow\n  el.classList.add('animate');\n});"),
        motion: Motion {
            kind: MotionKind::Ripple,
            duration_ms: 600,
            repeats: false,
        },
        customizable: false,
    },
];

const TEXT: &[CatalogEntry] = &[
    CatalogEntry {
        id: "typewriter",
        name_key: "anim-typewriter-name",
        description_key: "anim-typewriter-desc",
        style: "@keyframes typewriter {\n  from { width: 0; }\n  to { width: 100%; }\n}\n\n.typewriter {\n  display: inline-block;\n  overflow: hidden;\n  white-space: nowrap;\n  animation: typewriter 2s steps(40) forwards;\n}",
        markup: "<span class=\"typewriter\">Typing animation effect</span>",
        script: None,
        motion: Motion {
            kind: MotionKind::Typewriter,
            duration_ms: 2000,
            repeats: false,
        },
        customizable: false,
    },
    CatalogEntry {
        id: "gradient-text",
        name_key: "anim-gradient-text-name",
        description_key: "anim-gradient-text-desc",
        style: "@keyframes gradient-text {\n  0% { background-position: 0% 50%; }\n  50% { background-position: 100% 50%; }\n  100% { background-position: 0% 50%; }\n}\n\n.gradient-text {\n  background: linear-gradient(135deg,\n    var(--secondary-color),\n    var(--accent-color),\n    var(--secondary-color));\n  background-size: 200% auto;\n  background-clip: text;\n  color: transparent;\n  animation: gradient-text 3s linear infinite;\n}",
        markup: "<span class=\"gradient-text\">Gradient Text Animation</span>",
        script: None,
        motion: Motion {
            kind: MotionKind::GradientText,
            duration_ms: 3000,
            repeats: true,
        },
        customizable: false,
    },
    CatalogEntry {
        id: "letter-spacing",
        name_key: "anim-letter-spacing-name",
        description_key: "anim-letter-spacing-desc",
        style: ".letter-spacing {\n  transition: letter-spacing 0.5s ease;\n}\n\n.letter-spacing:hover {\n  letter-spacing: 4px;\n}",
        markup: "<span class=\"letter-spacing\">Hover to expand</span>",
        script: None,
        motion: Motion {
            kind: MotionKind::LetterSpacing,
            duration_ms: 500,
            repeats: false,
        },
        customizable: true,
    },
    CatalogEntry {
        id: "text-blur",
        name_key: "anim-text-blur-name",
        description_key: "anim-text-blur-desc",
        style: "@keyframes text-blur {\n  0% { filter: blur(0); }\n  50% { filter: blur(4px); }\n  100% { filter: blur(0); }\n}\n\n.text-blur {\n  animation: text-blur 2s infinite;\n}",
        markup: "<span class=\"text-blur\">Blurry Text Effect</span>",
        script: None,
        motion: Motion {
            kind: MotionKind::Blur,
            duration_ms: 2000,
            repeats: true,
        },
        customizable: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_entries() {
        for category in Category::ALL {
            assert!(
                !entries(category).is_empty(),
                "category {:?} should not be empty",
                category
            );
        }
    }

    #[test]
    fn entry_ids_are_unique_across_categories() {
        let mut seen = std::collections::HashSet::new();
        for category in Category::ALL {
            for entry in entries(category) {
                assert!(seen.insert(entry.id), "duplicate id: {}", entry.id);
            }
        }
    }

    #[test]
    fn find_locates_entries_in_any_category() {
        assert_eq!(find("fade-in-out").map(|e| e.id), Some("fade-in-out"));
        assert_eq!(find("typewriter").map(|e| e.id), Some("typewriter"));
        assert!(find("does-not-exist").is_none());
    }

    #[test]
    fn category_navigation_wraps_around() {
        assert_eq!(Category::Text.next(), Category::Transitions);
        assert_eq!(Category::Transitions.prev(), Category::Text);
        assert_eq!(Category::Transitions.next(), Category::Keyframes);
    }

    #[test]
    fn category_ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_id(category.id()), Some(category));
        }
        assert!(Category::from_id("unknown").is_none());
    }

    #[test]
    fn customizable_entries_carry_a_transition_rule() {
        for category in Category::ALL {
            for entry in entries(category) {
                if entry.customizable {
                    assert!(
                        entry.style.contains("transition:"),
                        "{} is customizable but has no transition rule",
                        entry.id
                    );
                }
            }
        }
    }

    #[test]
    fn repeating_motions_match_infinite_animations() {
        for category in Category::ALL {
            for entry in entries(category) {
                if entry.motion.repeats {
                    assert!(
                        entry.style.contains("infinite"),
                        "{} repeats but its style is not infinite",
                        entry.id
                    );
                }
            }
        }
    }
}
