// SPDX-License-Identifier: MPL-2.0
//! Snippet display customization.
//!
//! Transition-based catalog entries let the user pick a duration and an
//! easing. The customization rewrites the *displayed* snippet only; the
//! catalog stays immutable.

/// Timing curves offered by the duration/easing controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    Linear,
    /// cubic-bezier(0.2, 0.8, 0.2, 1)
    Snappy,
}

impl Easing {
    pub const ALL: [Easing; 5] = [
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::Linear,
        Easing::Snappy,
    ];

    /// The CSS value written into customized snippets.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Easing::Ease => "ease",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::Linear => "linear",
            Easing::Snappy => "cubic-bezier(0.2, 0.8, 0.2, 1)",
        }
    }

    /// Control points of the equivalent cubic bezier curve.
    #[must_use]
    fn control_points(self) -> (f32, f32, f32, f32) {
        match self {
            Easing::Ease => (0.25, 0.1, 0.25, 1.0),
            Easing::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::Snappy => (0.2, 0.8, 0.2, 1.0),
        }
    }

    /// Evaluates the curve at time fraction `t` in `[0, 1]`.
    #[must_use]
    pub fn eval(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if self == Easing::Linear {
            return t;
        }
        let (x1, y1, x2, y2) = self.control_points();

        // Invert x(s) = t by bisection, then evaluate y(s).
        let bezier = |p1: f32, p2: f32, s: f32| {
            let inv = 1.0 - s;
            3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
        };

        let mut lo = 0.0_f32;
        let mut hi = 1.0_f32;
        let mut s = t;
        for _ in 0..24 {
            if bezier(x1, x2, s) < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        bezier(y1, y2, s)
    }
}

/// Rewrites every `transition: ...;` declaration in `style` to use the
/// given duration (seconds) and easing. Styles without a transition
/// declaration pass through untouched.
#[must_use]
pub fn customize(style: &str, duration_secs: f32, easing: Easing) -> String {
    let replacement = format!("transition: all {duration_secs:.1}s {};", easing.css());
    let mut result = String::with_capacity(style.len());
    let mut rest = style;

    while let Some(start) = rest.find("transition:") {
        let after = &rest[start..];
        match after.find(';') {
            Some(end) => {
                result.push_str(&rest[..start]);
                result.push_str(&replacement);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customize_rewrites_the_transition_declaration() {
        let style = ".fade {\n  transition: opacity 0.5s ease;\n}";
        let out = customize(style, 1.2, Easing::Linear);
        assert_eq!(out, ".fade {\n  transition: all 1.2s linear;\n}");
    }

    #[test]
    fn customize_rewrites_multiline_declarations() {
        let style = "a {\n  transition: background-color 0.5s ease,\n              color 0.5s ease;\n}";
        let out = customize(style, 0.3, Easing::Snappy);
        assert_eq!(
            out,
            "a {\n  transition: all 0.3s cubic-bezier(0.2, 0.8, 0.2, 1);\n}"
        );
    }

    #[test]
    fn customize_rewrites_every_occurrence() {
        let style = ".a { transition: x 1s ease; }\n.b { transition: y 2s ease; }";
        let out = customize(style, 0.5, Easing::EaseOut);
        assert_eq!(out.matches("transition: all 0.5s ease-out;").count(), 2);
    }

    #[test]
    fn styles_without_transitions_pass_through() {
        let style = "@keyframes spin { to { transform: rotate(360deg); } }";
        assert_eq!(customize(style, 0.5, Easing::Ease), style);
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in Easing::ALL {
            assert!(easing.eval(0.0).abs() < 1e-3);
            assert!((easing.eval(1.0) - 1.0).abs() < 1e-3);
        }
    }

    #[test]
    fn linear_is_the_identity() {
        assert!((Easing::Linear.eval(0.37) - 0.37).abs() < 1e-4);
    }

    #[test]
    fn ease_in_starts_slow_and_ease_out_starts_fast() {
        let quarter = 0.25;
        assert!(Easing::EaseIn.eval(quarter) < quarter);
        assert!(Easing::EaseOut.eval(quarter) > quarter);
    }

    #[test]
    fn eval_is_monotonic() {
        for easing in Easing::ALL {
            let mut prev = easing.eval(0.0);
            for i in 1..=20 {
                let next = easing.eval(i as f32 / 20.0);
                assert!(next >= prev - 1e-3, "{:?} not monotonic", easing);
                prev = next;
            }
        }
    }
}
