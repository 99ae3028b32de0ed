//! Testimonial slider index.

use std::time::Duration;

/// Default auto-advance period.
pub const AUTO_ADVANCE: Duration = Duration::from_millis(5000);

/// A user or timer move on the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Next,
    Prev,
    To(usize),
}

/// Index into a fixed list that wraps in both directions.
///
/// An empty carousel has no current item and ignores every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Carousel over `len` items, showing the first.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the visible item, if any.
    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    /// Whether `index` is the visible item (used for the active dot).
    pub fn is_current(&self, index: usize) -> bool {
        self.current() == Some(index)
    }

    /// Advance by one, wrapping to the first item after the last.
    pub fn next(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        Some(self.index)
    }

    /// Step back by one, wrapping to the last item before the first.
    pub fn prev(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.index = (self.index + self.len - 1) % self.len;
        Some(self.index)
    }

    /// Jump to `index`. Out-of-range indices are ignored and return `false`.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    /// Apply `nav` and report whether the visible item changed. Moving onto
    /// the current item (its own dot, or any step with a single item) is a
    /// no-op so the slide-in does not replay.
    pub fn navigate(&mut self, nav: Nav) -> bool {
        let before = self.current();
        match nav {
            Nav::Next => {
                self.next();
            }
            Nav::Prev => {
                self.prev();
            }
            Nav::To(index) => {
                self.go_to(index);
            }
        }
        self.current() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn next_wraps_to_start() {
        let mut carousel = Carousel::new(5);
        let seen: Vec<_> = (0..6).filter_map(|_| carousel.next()).collect();
        assert_eq!(seen, vec![1, 2, 3, 4, 0, 1]);
    }

    #[test]
    fn prev_wraps_to_end() {
        let mut carousel = Carousel::new(5);
        assert_eq!(carousel.prev(), Some(4));
        assert_eq!(carousel.prev(), Some(3));
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.go_to(2));
        assert!(carousel.is_current(2));
        assert!(!carousel.go_to(3));
        assert_eq!(carousel.current(), Some(2));
    }

    #[test]
    fn single_item_stays_put() {
        let mut carousel = Carousel::new(1);
        assert_eq!(carousel.next(), Some(0));
        assert_eq!(carousel.prev(), Some(0));
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.current(), None);
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.prev(), None);
        assert!(!carousel.go_to(0));
        assert!(!carousel.is_current(0));
    }

    #[test]
    fn navigate_reports_changes_only() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.navigate(Nav::Next));
        assert!(!carousel.navigate(Nav::To(1)));
        assert!(!carousel.navigate(Nav::To(7)));
        assert!(carousel.navigate(Nav::Prev));
        assert_eq!(carousel.current(), Some(0));
    }

    #[test]
    fn single_item_never_moves() {
        let mut carousel = Carousel::new(1);
        assert!(!carousel.navigate(Nav::Next));
        assert!(!carousel.navigate(Nav::Prev));
        assert!(!carousel.navigate(Nav::To(0)));
        assert!(!Carousel::new(0).navigate(Nav::Next));
    }

    #[test]
    fn default_period_is_five_seconds() {
        assert_eq!(AUTO_ADVANCE.as_millis(), 5000);
    }
}
