//! Timelines: tweens placed on a shared clock with relative offsets.
//!
//! A timeline choreographs multi-element entrances (navbar logo, then links,
//! then call-to-action). Each step is positioned either at the current end
//! of the timeline, at an offset from it (`"-=0.3"` overlaps the previous
//! step by 0.3 s), or at an absolute time.
//!
//! Targets are opaque keys (`K`); the caller maps them to DOM nodes.

use std::str::FromStr;

use crate::ease::Ease;
use crate::error::MotionError;
use crate::tween::{Props, Tween};

/// Cue fired by [`hero_entrance`] once the stats have landed.
pub const COUNT_UP_CUE: &str = "count-up";

/// Where a step starts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// At the current end of the timeline
    #[default]
    End,
    /// Offset from the current end (negative overlaps the previous step)
    Relative(f64),
    /// Absolute seconds from the timeline start (after its delay)
    At(f64),
}

impl Position {
    fn resolve(self, end: f64) -> f64 {
        let at = match self {
            Position::End => end,
            Position::Relative(offset) => end + offset,
            Position::At(at) => at,
        };
        at.max(0.0)
    }
}

impl FromStr for Position {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || MotionError::InvalidPosition(s.to_string());
        let number = |n: &str| {
            n.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(invalid)
        };

        if s.is_empty() {
            Ok(Position::End)
        } else if let Some(n) = s.strip_prefix("-=") {
            number(n).map(|v| Position::Relative(-v))
        } else if let Some(n) = s.strip_prefix("+=") {
            number(n).map(Position::Relative)
        } else {
            number(s).map(Position::At)
        }
    }
}

#[derive(Debug, Clone)]
struct Step<K> {
    target: K,
    tween: Tween,
    start: f64,
}

impl<K> Step<K> {
    fn end(&self) -> f64 {
        self.start + self.tween.total()
    }
}

#[derive(Debug, Clone)]
struct Cue {
    at: f64,
    label: String,
}

/// An ordered set of tweens sharing one playhead.
#[derive(Debug, Clone)]
pub struct Timeline<K> {
    delay: f64,
    steps: Vec<Step<K>>,
    cues: Vec<Cue>,
    end: f64,
}

impl<K: Clone + PartialEq> Timeline<K> {
    /// Empty timeline that starts playing `delay` seconds after it is started.
    pub fn new(delay: f64) -> Self {
        Self {
            delay: delay.max(0.0),
            steps: Vec::new(),
            cues: Vec::new(),
            end: 0.0,
        }
    }

    /// Append a tween for `target`.
    pub fn add(&mut self, target: K, tween: Tween, position: Position) -> &mut Self {
        let start = position.resolve(self.end);
        let step = Step {
            target,
            tween,
            start,
        };
        self.end = self.end.max(step.end());
        self.steps.push(step);
        self
    }

    /// Append the same tween for several targets, each starting `each`
    /// seconds after the previous one. The group ends when its last member does.
    pub fn stagger<I>(&mut self, targets: I, tween: Tween, each: f64, position: Position) -> &mut Self
    where
        I: IntoIterator<Item = K>,
    {
        let base = position.resolve(self.end);
        let mut group_end = self.end;
        for (i, target) in targets.into_iter().enumerate() {
            let step = Step {
                target,
                tween,
                start: base + i as f64 * each.max(0.0),
            };
            group_end = group_end.max(step.end());
            self.steps.push(step);
        }
        self.end = group_end;
        self
    }

    /// Place a zero-duration marker; see [`Timeline::cues_between`].
    pub fn call(&mut self, position: Position, label: impl Into<String>) -> &mut Self {
        let at = position.resolve(self.end);
        self.cues.push(Cue {
            at,
            label: label.into(),
        });
        self.end = self.end.max(at);
        self
    }

    /// End time of the last step, relative to the timeline start (excluding delay).
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Start of the first step for `target`, relative to the timeline start
    /// (excluding delay).
    pub fn start_of(&self, target: &K) -> Option<f64> {
        self.steps
            .iter()
            .find(|step| step.target == *target)
            .map(|step| step.start)
    }

    /// Time of the cue named `label`, relative to the timeline start
    /// (excluding delay).
    pub fn cue_at(&self, label: &str) -> Option<f64> {
        self.cues.iter().find(|cue| cue.label == label).map(|cue| cue.at)
    }

    /// Total seconds from start to finish, including the delay.
    pub fn duration(&self) -> f64 {
        self.delay + self.end
    }

    /// Whether the playhead at `elapsed` is past every step.
    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.duration()
    }

    /// Labels of the cues passed while moving the playhead from `prev`
    /// (exclusive; `None` before the first frame) to `now` (inclusive).
    pub fn cues_between(&self, prev: Option<f64>, now: f64) -> Vec<&str> {
        self.cues
            .iter()
            .filter(|cue| {
                let at = self.delay + cue.at;
                prev.is_none_or(|p| at > p) && at <= now
            })
            .map(|cue| cue.label.as_str())
            .collect()
    }

    /// State of every target at `elapsed` seconds since the timeline started.
    ///
    /// Each target appears once, in order of first appearance. A target
    /// takes the state of its latest step that has started; before any of
    /// its steps start it holds the start state of its first step.
    pub fn sample(&self, elapsed: f64) -> Vec<(K, Props)> {
        let local = elapsed - self.delay;
        let mut out: Vec<(K, Props)> = Vec::new();
        for step in &self.steps {
            let started = local >= step.start;
            let props = step.tween.sample(local - step.start);
            match out.iter_mut().find(|(target, _)| *target == step.target) {
                Some(slot) if started => slot.1 = props,
                Some(_) => {}
                None => out.push((step.target.clone(), props)),
            }
        }
        out
    }

    /// Start states of every target, applied before the first frame.
    pub fn initial(&self) -> Vec<(K, Props)> {
        self.sample(f64::NEG_INFINITY)
    }
}

fn rise(y: f64, duration: f64) -> Tween {
    Tween::from_to(Props::hidden().with_y(y), Props::default(), duration)
}

/// Navbar entrance: logo slides in, links drop in one after another while
/// it finishes, and the call-to-action pops in last.
pub fn navbar_entrance<K, I>(logo: Option<K>, links: I, cta: Option<K>) -> Timeline<K>
where
    K: Clone + PartialEq,
    I: IntoIterator<Item = K>,
{
    let mut tl = Timeline::new(0.5);
    if let Some(logo) = logo {
        let tween = Tween::from_to(Props::hidden().with_x(-30.0), Props::default(), 0.6);
        tl.add(logo, tween, Position::End);
    }
    tl.stagger(links, rise(-20.0, 0.4), 0.1, Position::Relative(-0.3));
    if let Some(cta) = cta {
        let tween = Tween::from_to(Props::hidden().with_scale(0.8), Props::default(), 0.4)
            .ease(Ease::BackOut(1.7));
        tl.add(cta, tween, Position::Relative(-0.2));
    }
    tl
}

/// Elements animated by [`hero_entrance`]. Missing ones are skipped.
#[derive(Debug, Clone)]
pub struct HeroTargets<K> {
    pub words: Vec<K>,
    pub subtitle: Option<K>,
    pub description: Option<K>,
    pub buttons: Vec<K>,
    pub stats: Vec<K>,
    pub visual: Option<K>,
}

/// Hero entrance. The title words flip up first, then the copy, buttons
/// and stats follow with overlaps. [`COUNT_UP_CUE`] fires when the last
/// stat lands, and the visual spins in over the tail of the sequence.
pub fn hero_entrance<K: Clone + PartialEq>(targets: HeroTargets<K>) -> Timeline<K> {
    let HeroTargets {
        words,
        subtitle,
        description,
        buttons,
        stats,
        visual,
    } = targets;

    let mut tl = Timeline::new(1.0);
    let flip = Tween::from_to(
        Props::hidden().with_y(60.0).with_rotate_x(-45.0),
        Props::default(),
        0.8,
    );
    tl.stagger(words, flip, 0.15, Position::End);
    if let Some(subtitle) = subtitle {
        tl.add(subtitle, rise(30.0, 0.6), Position::Relative(-0.4));
    }
    if let Some(description) = description {
        tl.add(description, rise(30.0, 0.6), Position::Relative(-0.3));
    }
    tl.stagger(buttons, rise(20.0, 0.5), 0.15, Position::Relative(-0.3))
        .stagger(stats, rise(20.0, 0.5), 0.1, Position::Relative(-0.2))
        .call(Position::End, COUNT_UP_CUE);
    if let Some(visual) = visual {
        let tween = Tween::from_to(
            Props::hidden().with_scale(0.8).with_rotate(-10.0),
            Props::default(),
            1.0,
        );
        tl.add(visual, tween, Position::Relative(-0.8));
    }
    tl
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reveal(duration: f64) -> Tween {
        Tween::from_to(Props::hidden(), Props::default(), duration).ease(Ease::Linear)
    }

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    fn navbar() -> Timeline<&'static str> {
        navbar_entrance(Some("logo"), ["home", "features", "about"], Some("cta"))
    }

    fn hero() -> Timeline<&'static str> {
        hero_entrance(HeroTargets {
            words: vec!["we", "build", "brands"],
            subtitle: Some("subtitle"),
            description: Some("description"),
            buttons: vec!["start", "showreel"],
            stats: vec!["projects", "clients", "years"],
            visual: Some("visual"),
        })
    }

    #[test]
    fn parses_positions() {
        assert_eq!("".parse::<Position>(), Ok(Position::End));
        assert_eq!("-=0.3".parse::<Position>(), Ok(Position::Relative(-0.3)));
        assert_eq!("+=0.25".parse::<Position>(), Ok(Position::Relative(0.25)));
        assert_eq!("1.5".parse::<Position>(), Ok(Position::At(1.5)));
    }

    #[test]
    fn rejects_bad_positions() {
        assert!("-0.3".parse::<Position>().is_err());
        assert!("-=abc".parse::<Position>().is_err());
        assert!("<".parse::<Position>().is_err());
    }

    #[test]
    fn relative_offsets_overlap_previous_step() {
        let tl = navbar();
        // logo 0..0.6, links start 0.3 and end 0.3 + 0.2 + 0.4 = 0.9,
        // cta starts 0.7 and ends 1.1
        assert!((tl.end() - 1.1).abs() < 1e-9);
        assert!((tl.duration() - 1.6).abs() < 1e-9);
    }

    #[test]
    fn everything_hidden_before_delay() {
        let tl = navbar();
        let frame = tl.sample(0.2);
        assert_eq!(frame.len(), 5);
        assert!(frame.iter().all(|(_, p)| p.opacity == 0.0));
        assert_eq!(tl.initial(), frame);
    }

    #[test]
    fn stagger_offsets_each_target() {
        let tl = navbar();
        // 0.5 delay + 0.3 group start + 0.1 stagger: "features" starts at 0.9
        let frame = tl.sample(0.95);
        let opacity = |name: &str| {
            frame
                .iter()
                .find(|(t, _)| *t == name)
                .map(|(_, p)| p.opacity)
                .unwrap()
        };
        assert!(opacity("home") > opacity("features"));
        assert!(opacity("features") > 0.0);
        assert_eq!(opacity("about"), 0.0);
    }

    #[test]
    fn lands_on_end_state() {
        let tl = navbar();
        assert!(tl.is_finished(1.6));
        assert!(tl.sample(1.6).iter().all(|(_, p)| *p == Props::default()));
    }

    #[test]
    fn later_step_takes_over_target_once_started() {
        let mut tl = Timeline::new(0.0);
        tl.add("card", reveal(1.0), Position::End).add(
            "card",
            Tween::from_to(Props::default(), Props::default().with_scale(2.0), 1.0)
                .ease(Ease::Linear),
            Position::End,
        );
        assert_eq!(tl.sample(0.5)[0].1.opacity, 0.5);
        assert_eq!(tl.sample(1.5)[0].1.scale, 1.5);
        assert_eq!(tl.sample(-1.0)[0].1, Props::hidden());
    }

    #[test]
    fn cues_fire_once() {
        let mut tl: Timeline<&str> = Timeline::new(1.0);
        tl.add("stats", reveal(0.5), Position::End)
            .call(Position::End, "count-up");
        assert!(tl.cues_between(None, 1.4).is_empty());
        assert_eq!(tl.cues_between(Some(1.4), 1.5), vec!["count-up"]);
        assert!(tl.cues_between(Some(1.5), 2.0).is_empty());
    }

    #[test]
    fn navbar_steps_overlap() {
        let tl = navbar();
        assert!(close(tl.start_of(&"logo"), 0.0));
        assert!(close(tl.start_of(&"home"), 0.3));
        assert!(close(tl.start_of(&"about"), 0.5));
        assert!(close(tl.start_of(&"cta"), 0.7));
        assert_eq!(tl.start_of(&"missing"), None);
    }

    #[test]
    fn navbar_without_logo_or_cta() {
        let tl = navbar_entrance(None, ["home", "about"], None);
        assert!(close(tl.start_of(&"home"), 0.0));
        assert!(close(Some(tl.end()), 0.5));
        assert_eq!(tl.sample(0.0).len(), 2);
    }

    #[test]
    fn hero_sequence_timing() {
        let tl = hero();
        // words 0, 0.15, 0.3 (end 1.1); subtitle 0.7 (end 1.3);
        // description 1.0 (end 1.6); buttons 1.3, 1.45 (end 1.95);
        // stats 1.75, 1.85, 1.95 (end 2.45); visual 1.65 (end 2.65)
        assert!(close(tl.start_of(&"brands"), 0.3));
        assert!(close(tl.start_of(&"subtitle"), 0.7));
        assert!(close(tl.start_of(&"description"), 1.0));
        assert!(close(tl.start_of(&"showreel"), 1.45));
        assert!(close(tl.start_of(&"projects"), 1.75));
        assert!(close(tl.start_of(&"years"), 1.95));
        assert!(close(tl.start_of(&"visual"), 1.65));
        assert!(close(Some(tl.duration()), 3.65));
    }

    #[test]
    fn count_up_fires_after_stats_before_visual_lands() {
        let tl = hero();
        assert!(close(tl.cue_at(COUNT_UP_CUE), 2.45));
        assert!(tl.cues_between(None, 3.4).is_empty());
        assert_eq!(tl.cues_between(Some(3.4), 3.5), vec![COUNT_UP_CUE]);
        // the visual is still moving when the numbers start counting
        let visual = tl.sample(3.45).into_iter().find(|(t, _)| *t == "visual");
        assert!(visual.is_some_and(|(_, p)| p != Props::default()));
    }

    #[test]
    fn hero_initial_state_hides_everything() {
        let tl = hero();
        let initial = tl.initial();
        assert_eq!(initial.len(), 11);
        assert!(initial.iter().all(|(_, p)| p.opacity == 0.0));
    }

    #[test]
    fn positions_never_start_before_zero() {
        let mut tl = Timeline::new(0.0);
        tl.add("a", reveal(0.2), "-=5".parse().unwrap());
        assert_eq!(tl.end(), 0.2);
    }
}
