use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use virex_core::scroll::is_scrolled;
use virex_core::timeline::navbar_entrance;

use crate::icons::Icon;
use crate::{motion, use_site};

fn navbar_class(scrolled: bool, menu_open: bool) -> String {
    let mut class = String::from("navbar");
    if scrolled {
        class.push_str(" navbar--scrolled");
    }
    if menu_open {
        class.push_str(" navbar--mobile-open");
    }
    class
}

#[component]
pub fn Navbar() -> impl IntoView {
    let site = use_site();
    let threshold = site.config.scrolled_threshold_px;
    let brand = site.config.brand.clone();
    let logo_src = site.config.logo_src.clone();
    let whatsapp = site.config.whatsapp_url.clone();
    let links = site.nav_links.clone();

    let (scrolled, set_scrolled) = signal(is_scrolled(motion::scroll_y(), threshold));
    let (menu_open, set_menu_open) = signal(false);
    let nav_ref = NodeRef::<html::Nav>::new();

    let handle = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(is_scrolled(motion::scroll_y(), threshold));
    });
    on_cleanup(move || handle.remove());

    Effect::new(move || {
        let Some(nav) = nav_ref.get() else {
            return;
        };
        let first = |selector: &str| motion::select(&nav, selector).into_iter().next();
        let tl = navbar_entrance(
            first(".navbar__logo"),
            motion::select(&nav, ".navbar__link"),
            first(".navbar__cta"),
        );
        motion::play_timeline(tl, |_| {});
    });

    view! {
        <nav node_ref=nav_ref class=move || navbar_class(scrolled.get(), menu_open.get())>
            <div class="navbar__container container">
                <a href="#home" class="navbar__logo">
                    <img src=logo_src alt=brand.clone() class="navbar__logo-img" />
                    <span class="navbar__logo-text">{brand}</span>
                </a>

                <div class=move || {
                    if menu_open.get() { "navbar__links navbar__links--open" } else { "navbar__links" }
                }>
                    {links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="navbar__link"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    <span class="navbar__link-text">{link.name}</span>
                                    <span class="navbar__link-indicator"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="navbar__actions">
                    <a
                        href=whatsapp
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-primary navbar__cta"
                    >
                        <span>"Get Started"</span>
                    </a>
                    <button
                        class="navbar__mobile-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            let name = if menu_open.get() { "x" } else { "menu" };
                            view! { <Icon name=name /> }
                        }}
                    </button>
                </div>
            </div>
        </nav>
    }
}
