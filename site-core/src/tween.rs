//! Animatable properties and single tweens.

use crate::ease::Ease;

/// The visual state an animation can drive on an element.
///
/// Offsets are in CSS pixels, rotations in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Props {
    /// Opacity in `[0, 1]`
    pub opacity: f64,
    /// Horizontal offset
    pub x: f64,
    /// Vertical offset
    pub y: f64,
    /// Uniform scale
    pub scale: f64,
    /// Rotation around the z axis
    pub rotate: f64,
    /// Rotation around the x axis (title words flip in with it)
    pub rotate_x: f64,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotate: 0.0,
            rotate_x: 0.0,
        }
    }
}

impl Props {
    /// Identity transform at zero opacity - the usual entrance start state.
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::default()
        }
    }

    /// Replace the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Replace the horizontal offset.
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Replace the vertical offset.
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Replace both offsets.
    pub fn with_xy(self, x: f64, y: f64) -> Self {
        self.with_x(x).with_y(y)
    }

    /// Replace the scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Replace the z rotation.
    pub fn with_rotate(mut self, rotate: f64) -> Self {
        self.rotate = rotate;
        self
    }

    /// Replace the x rotation.
    pub fn with_rotate_x(mut self, rotate_x: f64) -> Self {
        self.rotate_x = rotate_x;
        self
    }

    /// Linear interpolation between two states; `p` is already eased.
    pub fn lerp(from: &Props, to: &Props, p: f64) -> Props {
        let mix = |a: f64, b: f64| a + (b - a) * p;
        Props {
            opacity: mix(from.opacity, to.opacity),
            x: mix(from.x, to.x),
            y: mix(from.y, to.y),
            scale: mix(from.scale, to.scale),
            rotate: mix(from.rotate, to.rotate),
            rotate_x: mix(from.rotate_x, to.rotate_x),
        }
    }

    /// CSS opacity value, clamped (back-eased tweens overshoot).
    pub fn css_opacity(&self) -> String {
        format!("{:.3}", self.opacity.clamp(0.0, 1.0))
    }

    /// CSS `transform` value for this state.
    ///
    /// Identity components are left out so untouched elements get an empty
    /// string and keep whatever their stylesheet says.
    pub fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!("translate({:.2}px, {:.2}px)", self.x, self.y));
        }
        if self.rotate != 0.0 {
            parts.push(format!("rotate({:.2}deg)", self.rotate));
        }
        if self.rotate_x != 0.0 {
            parts.push(format!("rotateX({:.2}deg)", self.rotate_x));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({:.3})", self.scale));
        }
        parts.join(" ")
    }
}

/// A single interpolation from one state to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Start state, applied immediately when the tween is registered
    pub from: Props,
    /// End state
    pub to: Props,
    /// Seconds from start to end
    pub duration: f64,
    /// Easing curve
    pub ease: Ease,
    /// Seconds to wait before starting
    pub delay: f64,
}

impl Tween {
    /// Tween between two explicit states with the default ease and no delay.
    pub fn from_to(from: Props, to: Props, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            ease: Ease::default(),
            delay: 0.0,
        }
    }

    /// Replace the ease.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Replace the delay.
    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Seconds from start (including delay) to end.
    pub fn total(&self) -> f64 {
        self.delay + self.duration
    }

    /// Eased progress at `elapsed` seconds since the tween was started.
    pub fn progress(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if local < 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 || local >= self.duration {
            return 1.0;
        }
        self.ease.apply(local / self.duration)
    }

    /// State at `elapsed` seconds since the tween was started.
    pub fn sample(&self, elapsed: f64) -> Props {
        let p = self.progress(elapsed);
        if p == 1.0 {
            return self.to;
        }
        Props::lerp(&self.from, &self.to, p)
    }

    /// Whether the end state has been reached.
    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fade_up() -> Tween {
        Tween::from_to(Props::hidden().with_y(50.0), Props::default(), 0.8).ease(Ease::Linear)
    }

    #[test]
    fn holds_start_state_during_delay() {
        let tween = fade_up().delay(0.3);
        assert_eq!(tween.sample(0.0), Props::hidden().with_y(50.0));
        assert_eq!(tween.sample(0.29), Props::hidden().with_y(50.0));
    }

    #[test]
    fn interpolates_midway() {
        let mid = fade_up().sample(0.4);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.y - 25.0).abs() < 1e-9);
        assert_eq!(mid.scale, 1.0);
    }

    #[test]
    fn lands_exactly_on_end_state() {
        let tween = fade_up().ease(Ease::BackOut(1.7));
        assert_eq!(tween.sample(0.8), Props::default());
        assert_eq!(tween.sample(5.0), Props::default());
        assert!(tween.is_finished(0.8));
        assert!(!tween.is_finished(0.79));
    }

    #[test]
    fn zero_duration_jumps_after_delay() {
        let tween = Tween::from_to(Props::hidden(), Props::default(), 0.0).delay(0.2);
        assert_eq!(tween.progress(0.1), 0.0);
        assert_eq!(tween.progress(0.2), 1.0);
    }

    #[test]
    fn identity_has_empty_transform() {
        assert_eq!(Props::default().transform(), "");
        assert_eq!(Props::hidden().css_opacity(), "0.000");
    }

    #[test]
    fn transform_lists_changed_components() {
        let props = Props::default()
            .with_xy(5.0, -5.0)
            .with_rotate(5.0)
            .with_scale(1.1);
        assert_eq!(
            props.transform(),
            "translate(5.00px, -5.00px) rotate(5.00deg) scale(1.100)"
        );
        assert_eq!(
            Props::default().with_rotate_x(-45.0).transform(),
            "rotateX(-45.00deg)"
        );
    }

    #[test]
    fn opacity_is_clamped_for_css() {
        assert_eq!(Props::default().with_opacity(1.2).css_opacity(), "1.000");
    }
}
