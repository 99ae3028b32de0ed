//! Count-up for stat values.

use crate::ease::Ease;

/// Counts from zero up to `target` over `duration` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    /// Final value
    pub target: u32,
    /// Seconds
    pub duration: f64,
    /// Easing curve
    pub ease: Ease,
}

impl CountUp {
    /// Two-second `power2.out` count, as used by every stat on the page.
    pub fn new(target: u32) -> Self {
        Self {
            target,
            duration: 2.0,
            ease: Ease::Power2Out,
        }
    }

    /// Rounded value `elapsed` seconds in.
    pub fn value_at(&self, elapsed: f64) -> u32 {
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.target;
        }
        let p = self.ease.apply(elapsed / self.duration);
        let value = (self.target as f64 * p).round() as u32;
        value.min(self.target)
    }

    /// Value with its suffix, e.g. `"250+"`.
    pub fn label_at(&self, elapsed: f64, suffix: &str) -> String {
        format!("{}{}", self.value_at(elapsed), suffix)
    }

    /// Whether the target has been reached.
    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_at_zero_and_ends_on_target() {
        let count = CountUp::new(250);
        assert_eq!(count.value_at(0.0), 0);
        assert_eq!(count.value_at(2.0), 250);
        assert_eq!(count.value_at(10.0), 250);
    }

    #[test]
    fn never_decreases() {
        let count = CountUp::new(50);
        let values: Vec<u32> = (0..=40).map(|i| count.value_at(i as f64 * 0.05)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn eases_out() {
        // power2.out is past the halfway mark at half time
        assert!(CountUp::new(100).value_at(1.0) > 50);
    }

    #[test]
    fn labels_carry_suffix() {
        assert_eq!(CountUp::new(15).label_at(5.0, "+"), "15+");
        assert_eq!(CountUp::new(8).label_at(0.0, ""), "0");
    }

    #[test]
    fn zero_target_is_stable() {
        let count = CountUp::new(0);
        assert_eq!(count.value_at(1.0), 0);
        assert!(count.is_finished(2.0));
    }
}
