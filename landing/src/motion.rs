//! DOM side of the motion core.
//!
//! `virex_core` decides what every element looks like at time `t`; this
//! module owns the clock, writes the resulting styles, and wires scroll
//! triggers to window scroll events. All loops run on
//! `requestAnimationFrame` and stop on their own once finished or once the
//! owning component is gone.

use std::cell::{Cell, RefCell};

use leptos::ev;
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::prelude::*;
use virex_core::ease::Ease;
use virex_core::scroll::{ScrollTrigger, ScrollTween, TriggerStart};
use virex_core::timeline::Timeline;
use virex_core::tween::{Props, Tween};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Wall clock in seconds.
pub fn now() -> f64 {
    js_sys::Date::now() / 1000.0
}

/// Call `frame(elapsed)` once per animation frame until it returns `false`.
pub fn run_frames(frame: impl FnMut(f64) -> bool + 'static) {
    fn step(started: f64, mut frame: Box<dyn FnMut(f64) -> bool>) {
        request_animation_frame(move || {
            if frame(now() - started) {
                step(started, frame);
            }
        });
    }
    step(now(), Box::new(frame));
}

/// Write `props` to the element's inline style.
pub fn apply(el: &HtmlElement, props: &Props) {
    let style = el.style();
    let _ = style.set_property("opacity", &props.css_opacity());
    let _ = style.set_property("transform", &props.transform());
}

/// Elements under `root` matching `selector`, in document order.
pub fn select(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Direct element children of `root`.
pub fn children(root: &Element) -> Vec<HtmlElement> {
    select(root, ":scope > *")
}

/// Visible viewport size in CSS pixels.
pub fn viewport() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

/// Current vertical window scroll.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Run a one-off tween on `el`, starting from `tween.from` immediately.
pub fn play(el: HtmlElement, tween: Tween) {
    apply(&el, &tween.from);
    run_frames(move |elapsed| {
        apply(&el, &tween.sample(elapsed));
        !tween.is_finished(elapsed)
    });
}

/// Play a timeline. Start states are written before the first frame;
/// `on_cue` receives each cue label as the playhead passes it.
pub fn play_timeline(timeline: Timeline<HtmlElement>, mut on_cue: impl FnMut(&str) + 'static) {
    for (el, props) in timeline.initial() {
        apply(&el, &props);
    }
    let mut prev = None;
    run_frames(move |elapsed| {
        for (el, props) in timeline.sample(elapsed) {
            apply(&el, &props);
        }
        for cue in timeline.cues_between(prev, elapsed) {
            on_cue(cue);
        }
        prev = Some(elapsed);
        !timeline.is_finished(elapsed)
    });
}

/// An element state that later tweens pick up from.
///
/// Starting a new tween cancels the one in flight (hover in, then out
/// before the first finished). The state lives in the reactive owner that
/// created it, so loops stop once the component unmounts.
#[derive(Clone, Copy)]
pub struct Motion {
    state: StoredValue<Props>,
    generation: StoredValue<u32>,
}

impl Motion {
    /// Tracker starting at `initial`.
    pub fn new(initial: Props) -> Self {
        Self {
            state: StoredValue::new(initial),
            generation: StoredValue::new(0),
        }
    }

    /// Last written state.
    pub fn current(&self) -> Props {
        self.state.try_get_value().unwrap_or_default()
    }

    fn begin(&self) -> Option<u32> {
        self.generation.try_update_value(|g| {
            *g = g.wrapping_add(1);
            *g
        })
    }

    fn is_live(&self, id: u32) -> bool {
        self.generation.try_get_value() == Some(id)
    }

    fn write(&self, el: &HtmlElement, props: Props) -> bool {
        apply(el, &props);
        self.state.try_update_value(|s| *s = props).is_some()
    }

    /// Tween from the current state to `to`.
    pub fn to(&self, el: HtmlElement, to: Props, duration: f64, ease: Ease) {
        let tween = Tween::from_to(self.current(), to, duration).ease(ease);
        self.play(el, tween);
    }

    /// Run `tween`, replacing whatever this tracker was doing.
    pub fn play(&self, el: HtmlElement, tween: Tween) {
        let Some(id) = self.begin() else {
            return;
        };
        let this = *self;
        run_frames(move |elapsed| {
            if !this.is_live(id) {
                return false;
            }
            this.write(&el, tween.sample(elapsed)) && !tween.is_finished(elapsed)
        });
    }

    /// Drive the element from `frame(elapsed)` until another tween takes
    /// over or the owner is disposed. Used for endless idle motion.
    pub fn drive(&self, el: HtmlElement, frame: impl Fn(f64) -> Props + 'static) {
        let Some(id) = self.begin() else {
            return;
        };
        let this = *self;
        run_frames(move |elapsed| this.is_live(id) && this.write(&el, frame(elapsed)));
    }
}

/// Call `on_enter` once, the first time `el` crosses `start`.
///
/// Checked immediately (sections already in view fire on load) and then on
/// window scroll. The scroll listener is removed as soon as the trigger
/// fires, or with the current reactive owner if it never does.
pub fn on_scroll_enter(el: HtmlElement, start: TriggerStart, on_enter: impl FnOnce() + 'static) {
    let trigger = Cell::new(ScrollTrigger::new(start));
    let on_enter = RefCell::new(Some(on_enter));
    let check = move || {
        let rect = el.get_bounding_client_rect();
        let (_, viewport_height) = viewport();
        let mut t = trigger.get();
        let entered = t.check(rect.top(), rect.height(), viewport_height);
        trigger.set(t);
        if entered {
            if let Some(f) = on_enter.borrow_mut().take() {
                f();
            }
        }
        t.has_fired()
    };

    if check() {
        return;
    }
    let listener = StoredValue::new(None::<WindowListenerHandle>);
    let detach = move || {
        if let Some(handle) = listener.try_update_value(Option::take).flatten() {
            handle.remove();
        }
    };
    let handle = window_event_listener(ev::scroll, move |_| {
        if check() {
            detach();
        }
    });
    listener.set_value(Some(handle));
    on_cleanup(detach);
}

/// Hide `el` in `tween.from` now and play the tween when it scrolls into view.
pub fn reveal_on_scroll(el: HtmlElement, start: TriggerStart, tween: Tween) {
    apply(&el, &tween.from);
    let target = el.clone();
    on_scroll_enter(el, start, move || play(target, tween));
}

thread_local! {
    static SCROLL_GENERATION: Cell<u32> = const { Cell::new(0) };
}

/// Animate the window scroll to `target_y`. A newer call cancels an older one.
pub fn smooth_scroll_to(target_y: f64, duration: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let id = SCROLL_GENERATION.with(|g| {
        g.set(g.get().wrapping_add(1));
        g.get()
    });
    let tween = ScrollTween::new(scroll_y(), target_y, duration);
    run_frames(move |elapsed| {
        if SCROLL_GENERATION.with(Cell::get) != id {
            return false;
        }
        window.scroll_to_with_x_and_y(0.0, tween.position_at(elapsed));
        !tween.is_finished(elapsed)
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn div() -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        document.create_element("div").unwrap().dyn_into().unwrap()
    }

    #[wasm_bindgen_test]
    fn apply_writes_inline_style() {
        let el = div();
        apply(&el, &Props::hidden().with_y(50.0));
        let style = el.style();
        assert_eq!(style.get_property_value("opacity").unwrap(), "0");
        assert_eq!(
            style.get_property_value("transform").unwrap(),
            "translate(0px, 50px)"
        );
    }

    #[wasm_bindgen_test]
    fn select_finds_descendants_in_order() {
        let root = div();
        root.set_inner_html(r#"<span class="w">a</span><p><span class="w">b</span></p>"#);
        let words: Vec<String> = select(&root, ".w")
            .iter()
            .filter_map(|el| el.text_content())
            .collect();
        assert_eq!(words, vec!["a", "b"]);
        assert_eq!(children(&root).len(), 2);
    }

    fn scroll_event() {
        let event = web_sys::Event::new("scroll").unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn scroll_enter_fires_once() {
        let owner = Owner::new();
        let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
        let el = div();
        el.style().set_property("position", "absolute").unwrap();
        el.style().set_property("top", "100000px").unwrap();
        body.append_with_node_1(&el).unwrap();

        let fired = std::rc::Rc::new(Cell::new(0));
        let count = fired.clone();
        let start: TriggerStart = "top 80%".parse().unwrap();
        owner.with(|| on_scroll_enter(el.clone(), start, move || count.set(count.get() + 1)));
        assert_eq!(fired.get(), 0);

        el.style().set_property("top", "0px").unwrap();
        scroll_event();
        assert_eq!(fired.get(), 1);
        scroll_event();
        assert_eq!(fired.get(), 1);

        el.remove();
    }
}
