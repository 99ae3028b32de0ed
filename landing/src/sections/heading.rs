//! Section heading shared by most sections, plus its scroll reveal.

use leptos::prelude::*;
use virex_core::content::SectionHeader;
use virex_core::scroll::{Edge, TriggerStart};
use virex_core::tween::{Props, Tween};
use web_sys::HtmlElement;

use crate::{console, motion};

#[component]
pub fn SectionHeading(header: SectionHeader) -> impl IntoView {
    view! {
        <div class="section-header">
            <span class="section-label">{header.label}</span>
            <h2 class="section-title">
                {header.title}
                " "
                <span class="gradient-text">{header.accent}</span>
            </h2>
            <p class="section-description">{header.description}</p>
        </div>
    }
}

/// Fade the `.section-header` inside `section` up from 50px once the
/// section top reaches 80% of the viewport.
pub fn reveal_heading(section: &HtmlElement) {
    let Some(header) = motion::select(section, ".section-header").into_iter().next() else {
        return;
    };
    let tween = Tween::from_to(Props::hidden().with_y(50.0), Props::default(), 0.8);
    motion::apply(&header, &tween.from);
    motion::on_scroll_enter(section.clone(), start("top 80%"), move || {
        motion::play(header, tween)
    });
}

/// Parse a trigger start written in source, logging and falling back to
/// `top 80%` on a typo.
pub fn start(text: &str) -> TriggerStart {
    text.parse().unwrap_or_else(|err| {
        console::warn(&format!("{err}; using top 80%"));
        TriggerStart {
            edge: Edge::Top,
            viewport: 0.8,
        }
    })
}
