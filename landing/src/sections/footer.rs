use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use virex_core::contact::validate_email;
use virex_core::tween::{Props, Tween};

use super::heading::start;
use crate::icons::Icon;
use crate::{console, motion, use_site};

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let footer = site.footer.clone();
    let brand = site.config.brand.clone();
    let logo_src = site.config.logo_src.clone();
    let scroll_secs = site.config.smooth_scroll_secs;
    let year = js_sys::Date::new_0().get_full_year();

    let footer_ref = NodeRef::<html::Footer>::new();
    let email = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Result<String, String>>);

    Effect::new(move || {
        let Some(el) = footer_ref.get() else {
            return;
        };
        if let Some(content) = motion::select(&el, ".footer__content").into_iter().next() {
            let tween = Tween::from_to(Props::hidden().with_y(30.0), Props::default(), 0.8);
            motion::apply(&content, &tween.from);
            motion::on_scroll_enter(el, start("top 90%"), move || motion::play(content, tween));
        }
    });

    let subscribe = move |event: ev::SubmitEvent| {
        event.prevent_default();
        let address = email.get_untracked();
        match validate_email(&address) {
            Ok(()) => {
                console::info(&format!("newsletter signup: {}", address.trim()));
                email.set(String::new());
                notice.set(Some(Ok("You're subscribed.".to_string())));
            }
            Err(err) => notice.set(Some(Err(err.to_string()))),
        }
    };

    view! {
        <footer class="footer" node_ref=footer_ref>
            <div class="footer__gradient-border"></div>

            <div class="container">
                <div class="footer__content">
                    <div class="footer__main">
                        <div class="footer__brand">
                            <a href="#home" class="footer__logo">
                                <img src=logo_src alt=brand.clone() />
                                <span>{brand.clone()}</span>
                            </a>
                            <p class="footer__tagline">{footer.tagline}</p>
                            <div class="footer__newsletter">
                                <h4>{footer.newsletter_title}</h4>
                                <form class="footer__newsletter-form" on:submit=subscribe novalidate=true>
                                    <input
                                        type="email"
                                        placeholder="Enter your email"
                                        prop:value=move || email.get()
                                        on:input=move |event| {
                                            email.set(event_target_value(&event));
                                            notice.set(None);
                                        }
                                    />
                                    <button type="submit" class="btn btn-primary">
                                        "Subscribe"
                                    </button>
                                </form>
                                {move || {
                                    notice
                                        .get()
                                        .map(|notice| {
                                            let (class, text) = match notice {
                                                Ok(text) => ("footer__notice", text),
                                                Err(text) => ("footer__notice footer__notice--error", text),
                                            };
                                            view! { <p class=class>{text}</p> }
                                        })
                                }}
                            </div>
                        </div>

                        <div class="footer__links">
                            {footer
                                .columns
                                .into_iter()
                                .map(|column| {
                                    view! {
                                        <div class="footer__links-column">
                                            <h4>{column.title}</h4>
                                            <ul>
                                                {column
                                                    .links
                                                    .into_iter()
                                                    .map(|link| {
                                                        view! {
                                                            <li>
                                                                <a href=link.href>{link.name}</a>
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="footer__bottom">
                        <p class="footer__copyright">
                            {format!("© {year} {brand}. All rights reserved. Made with ")}
                            <Icon name="heart" size=14 filled=true class="footer__heart" />
                            {format!(" by {}", footer.credit)}
                        </p>

                        <button
                            class="footer__scroll-top"
                            aria-label="Scroll to top"
                            on:click=move |_| motion::smooth_scroll_to(0.0, scroll_secs)
                        >
                            <Icon name="arrow-up" size=20 />
                        </button>
                    </div>
                </div>
            </div>
        </footer>
    }
}
