//! Scroll triggers and smooth scrolling.
//!
//! A trigger start reads like `"top 80%"`: fire when the element's top edge
//! reaches 80% of the viewport height, measured from the viewport top.
//! Triggers play once; scrolling back up does not reverse the animation.

use std::fmt;
use std::str::FromStr;

use crate::ease::Ease;
use crate::error::MotionError;

/// Edge of the observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Top edge
    Top,
    /// Vertical midpoint
    Center,
    /// Bottom edge
    Bottom,
}

impl Edge {
    fn fraction(self) -> f64 {
        match self {
            Edge::Top => 0.0,
            Edge::Center => 0.5,
            Edge::Bottom => 1.0,
        }
    }

    fn parse(word: &str) -> Option<Self> {
        match word {
            "top" => Some(Edge::Top),
            "center" => Some(Edge::Center),
            "bottom" => Some(Edge::Bottom),
            _ => None,
        }
    }
}

/// When a scroll trigger fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerStart {
    /// Element edge being watched
    pub edge: Edge,
    /// Viewport line as a fraction of its height (0 = top, 1 = bottom)
    pub viewport: f64,
}

impl TriggerStart {
    /// Whether the element edge sits at or above the viewport line.
    ///
    /// `rect_top` and `rect_height` come from `getBoundingClientRect()`.
    pub fn is_crossed(&self, rect_top: f64, rect_height: f64, viewport_height: f64) -> bool {
        let edge = rect_top + self.edge.fraction() * rect_height.max(0.0);
        edge <= self.viewport * viewport_height
    }
}

impl FromStr for TriggerStart {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MotionError::InvalidTriggerStart(s.to_string());
        let mut words = s.split_whitespace();
        let (Some(edge), Some(line), None) = (words.next(), words.next(), words.next()) else {
            return Err(invalid());
        };

        let edge = Edge::parse(edge).ok_or_else(invalid)?;
        let viewport = match Edge::parse(line) {
            Some(named) => named.fraction(),
            None => line
                .strip_suffix('%')
                .and_then(|pct| pct.parse::<f64>().ok())
                .filter(|pct| (0.0..=100.0).contains(pct))
                .map(|pct| pct / 100.0)
                .ok_or_else(invalid)?,
        };

        Ok(TriggerStart { edge, viewport })
    }
}

impl fmt::Display for TriggerStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = match self.edge {
            Edge::Top => "top",
            Edge::Center => "center",
            Edge::Bottom => "bottom",
        };
        write!(f, "{edge} {}%", self.viewport * 100.0)
    }
}

/// A play-once threshold observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    start: TriggerStart,
    fired: bool,
}

impl ScrollTrigger {
    /// Armed trigger.
    pub fn new(start: TriggerStart) -> Self {
        Self {
            start,
            fired: false,
        }
    }

    /// Returns `true` the first time the element crosses the start line,
    /// `false` before and on every later check.
    pub fn check(&mut self, rect_top: f64, rect_height: f64, viewport_height: f64) -> bool {
        if self.fired || !self.start.is_crossed(rect_top, rect_height, viewport_height) {
            return false;
        }
        self.fired = true;
        true
    }

    /// Whether the trigger already fired.
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// The configured start.
    pub fn start(&self) -> TriggerStart {
        self.start
    }
}

/// Navbar switches to its compact style strictly past the threshold.
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Window scroll position that puts an element just below the fixed navbar.
pub fn anchor_target(element_doc_top: f64, offset: f64) -> f64 {
    (element_doc_top - offset).max(0.0)
}

/// Animated window scroll between two positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    /// Scroll position at start
    pub from: f64,
    /// Scroll position at end
    pub to: f64,
    /// Seconds
    pub duration: f64,
    /// Easing curve
    pub ease: Ease,
}

impl ScrollTween {
    /// Smooth scroll with the page's standard `power3.inOut` ease.
    pub fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            ease: Ease::Power3InOut,
        }
    }

    /// Scroll position `elapsed` seconds in.
    pub fn position_at(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.to;
        }
        let p = self.ease.apply(elapsed / self.duration);
        self.from + (self.to - self.from) * p
    }

    /// Whether the destination has been reached.
    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_percent_and_named_lines() {
        assert_eq!(
            "top 80%".parse::<TriggerStart>(),
            Ok(TriggerStart {
                edge: Edge::Top,
                viewport: 0.8
            })
        );
        assert_eq!(
            "bottom center".parse::<TriggerStart>(),
            Ok(TriggerStart {
                edge: Edge::Bottom,
                viewport: 0.5
            })
        );
        assert_eq!("center top".parse::<TriggerStart>().map(|s| s.viewport), Ok(0.0));
    }

    #[test]
    fn rejects_malformed_starts() {
        for bad in ["top", "top 80", "left 80%", "top 120%", "top 80% extra", ""] {
            assert_eq!(
                bad.parse::<TriggerStart>(),
                Err(MotionError::InvalidTriggerStart(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn top_edge_crossing() {
        let start: TriggerStart = "top 80%".parse().unwrap();
        // viewport 1000px: line at 800px
        assert!(!start.is_crossed(801.0, 300.0, 1000.0));
        assert!(start.is_crossed(800.0, 300.0, 1000.0));
        assert!(start.is_crossed(-2000.0, 300.0, 1000.0));
    }

    #[test]
    fn bottom_edge_uses_height() {
        let start: TriggerStart = "bottom 90%".parse().unwrap();
        assert!(!start.is_crossed(700.0, 300.0, 1000.0));
        assert!(start.is_crossed(600.0, 300.0, 1000.0));
    }

    #[test]
    fn trigger_fires_once() {
        let mut trigger = ScrollTrigger::new("top 85%".parse().unwrap());
        assert!(!trigger.check(900.0, 100.0, 1000.0));
        assert!(!trigger.has_fired());
        assert!(trigger.check(840.0, 100.0, 1000.0));
        assert!(!trigger.check(500.0, 100.0, 1000.0));
        // scrolling back up keeps it fired
        assert!(!trigger.check(2000.0, 100.0, 1000.0));
        assert!(trigger.has_fired());
    }

    #[test]
    fn scrolled_is_strict() {
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
        assert!(!is_scrolled(0.0, 50.0));
    }

    #[test]
    fn anchor_target_respects_navbar_offset() {
        assert_eq!(anchor_target(1200.0, 80.0), 1120.0);
        assert_eq!(anchor_target(40.0, 80.0), 0.0);
    }

    #[test]
    fn smooth_scroll_endpoints() {
        let tween = ScrollTween::new(1000.0, 0.0, 1.0);
        assert_eq!(tween.position_at(0.0), 1000.0);
        assert_eq!(tween.position_at(0.5), 500.0);
        assert_eq!(tween.position_at(1.0), 0.0);
        assert!(tween.is_finished(1.0));
        assert_eq!(ScrollTween::new(10.0, 20.0, 0.0).position_at(0.0), 20.0);
    }

    #[test]
    fn display_round_trips() {
        let start: TriggerStart = "top 50%".parse().unwrap();
        assert_eq!(start.to_string().parse::<TriggerStart>(), Ok(start));
    }
}
