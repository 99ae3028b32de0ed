// Virex Landing Page - Leptos 0.8 Edition
// Developed by the Virex Team (c)2025

mod console;
mod icons;
mod motion;
mod sections;

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use sections::*;
use virex_core::content::SiteContent;
use virex_core::scroll::anchor_target;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    match SiteContent::embedded() {
        Ok(site) => {
            console::banner(&site.config.brand);
            leptos::mount::mount_to_body(move || view! { <App site=site /> });
        }
        Err(err) => console::error(&format!("site content failed to load: {err}")),
    }
}

/// Site content shared by every section.
pub fn use_site() -> Arc<SiteContent> {
    expect_context::<Arc<SiteContent>>()
}

#[component]
fn App(site: SiteContent) -> impl IntoView {
    let offset = site.config.nav_scroll_offset_px;
    let secs = site.config.smooth_scroll_secs;
    provide_context(Arc::new(site));

    // In-page anchors scroll smoothly and stop below the fixed navbar.
    let handle = window_event_listener(ev::click, move |event| {
        let Some(anchor) = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a[href^='#']").ok().flatten())
        else {
            return;
        };
        let Some(hash) = anchor.get_attribute("href").filter(|h| h.len() > 1) else {
            return;
        };
        let Some(target) = document().query_selector(&hash).ok().flatten() else {
            console::warn(&format!("no section for anchor {hash}"));
            return;
        };
        event.prevent_default();
        let top = target.get_bounding_client_rect().top() + motion::scroll_y();
        motion::smooth_scroll_to(anchor_target(top, offset), secs);
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="app">
            <Navbar />
            <main>
                <Hero />
                <Features />
                <About />
                <Services />
                <Portfolio />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
