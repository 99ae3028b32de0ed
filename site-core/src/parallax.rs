//! Pointer parallax and floating background orbs for the hero.

use crate::ease::Ease;

/// Maximum parallax travel, in pixels, across the full viewport.
pub const STRENGTH: f64 = 30.0;

/// Offset for the hero visual given the pointer position.
///
/// The pointer at the viewport center yields `(0, 0)`; the corners yield
/// `±strength / 2` on each axis.
pub fn pointer_offset(client_x: f64, client_y: f64, width: f64, height: f64, strength: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (client_x / width - 0.5) * strength,
        (client_y / height - 0.5) * strength,
    )
}

/// Orbs further back in the stack travel further.
pub fn orb_offset((x, y): (f64, f64), index: usize) -> (f64, f64) {
    let depth = (index + 1) as f64 * 0.3;
    (x * depth, y * depth)
}

/// Closed range a random value is mapped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl FloatRange {
    /// Range between two bounds (in either order).
    pub const fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Map `unit` in `[0, 1)` (e.g. `Math.random()`) into the range.
    pub fn pick(&self, unit: f64) -> f64 {
        let unit = if unit.is_nan() { 0.0 } else { unit.clamp(0.0, 1.0) };
        self.min + (self.max - self.min) * unit
    }
}

/// Idle drift for one background orb: a yoyo between the origin and a
/// random offset, repeated forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbDrift {
    /// Horizontal drift target
    pub x: f64,
    /// Vertical drift target
    pub y: f64,
    /// Seconds per half cycle
    pub duration: f64,
    /// Seconds before the drift starts
    pub delay: f64,
}

impl OrbDrift {
    /// Horizontal drift bounds.
    pub const X: FloatRange = FloatRange::new(-20.0, 20.0);
    /// Vertical drift bounds.
    pub const Y: FloatRange = FloatRange::new(-30.0, 30.0);
    /// Half-cycle duration bounds.
    pub const DURATION: FloatRange = FloatRange::new(3.0, 5.0);

    /// Drift for orb `index`, drawing three unit random values from `random`.
    pub fn new(index: usize, mut random: impl FnMut() -> f64) -> Self {
        Self {
            y: Self::Y.pick(random()),
            x: Self::X.pick(random()),
            duration: Self::DURATION.pick(random()),
            delay: index as f64 * 0.2,
        }
    }

    /// Drift offset `elapsed` seconds after the page started.
    pub fn offset_at(&self, elapsed: f64) -> (f64, f64) {
        let p = Ease::SineInOut.apply(yoyo_progress(elapsed - self.delay, self.duration));
        (self.x * p, self.y * p)
    }
}

/// Ping-pong phase in `[0, 1]`: rises over one `duration`, falls over the next.
pub fn yoyo_progress(elapsed: f64, duration: f64) -> f64 {
    if elapsed <= 0.0 || duration <= 0.0 {
        return 0.0;
    }
    let cycle = elapsed / duration;
    let phase = cycle.fract();
    if cycle.floor() as u64 % 2 == 0 {
        phase
    } else {
        1.0 - phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn center_pointer_is_neutral() {
        assert_eq!(pointer_offset(500.0, 400.0, 1000.0, 800.0, STRENGTH), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_half_strength() {
        assert_eq!(pointer_offset(0.0, 0.0, 1000.0, 800.0, STRENGTH), (-15.0, -15.0));
        assert_eq!(pointer_offset(1000.0, 800.0, 1000.0, 800.0, STRENGTH), (15.0, 15.0));
    }

    #[test]
    fn empty_viewport_is_neutral() {
        assert_eq!(pointer_offset(10.0, 10.0, 0.0, 800.0, STRENGTH), (0.0, 0.0));
    }

    #[test]
    fn deeper_orbs_move_more() {
        let (x0, _) = orb_offset((10.0, 10.0), 0);
        let (x2, y2) = orb_offset((10.0, 10.0), 2);
        assert!((x0 - 3.0).abs() < 1e-9);
        assert!((x2 - 9.0).abs() < 1e-9);
        assert!((y2 - 9.0).abs() < 1e-9);
    }

    #[test]
    fn ranges_map_unit_values() {
        let range = FloatRange::new(5.0, 3.0);
        assert_eq!(range.pick(0.0), 3.0);
        assert_eq!(range.pick(0.5), 4.0);
        assert_eq!(range.pick(2.0), 5.0);
    }

    #[test]
    fn yoyo_rises_then_falls() {
        assert_eq!(yoyo_progress(0.0, 2.0), 0.0);
        assert_eq!(yoyo_progress(1.0, 2.0), 0.5);
        assert_eq!(yoyo_progress(3.0, 2.0), 0.5);
        assert!((yoyo_progress(3.5, 2.0) - 0.25).abs() < 1e-9);
        assert_eq!(yoyo_progress(4.0, 2.0), 0.0);
    }

    #[test]
    fn orb_drift_stays_in_bounds() {
        let mut draws = [0.0, 1.0, 0.5].into_iter();
        let drift = OrbDrift::new(2, || draws.next().unwrap_or(0.0));
        assert_eq!(drift.y, -30.0);
        assert_eq!(drift.x, 20.0);
        assert_eq!(drift.duration, 4.0);
        assert!((drift.delay - 0.4).abs() < 1e-9);
        assert_eq!(drift.offset_at(0.0), (0.0, 0.0));
        let (x, y) = drift.offset_at(0.4 + 4.0);
        assert!((x - 20.0).abs() < 1e-9);
        assert!((y + 30.0).abs() < 1e-9);
    }
}
