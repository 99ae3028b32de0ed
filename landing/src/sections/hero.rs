use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use virex_core::counter::CountUp;
use virex_core::ease::Ease;
use virex_core::parallax::{OrbDrift, STRENGTH, orb_offset, pointer_offset};
use virex_core::timeline::{COUNT_UP_CUE, HeroTargets, hero_entrance};
use virex_core::tween::Props;

use crate::icons::Icon;
use crate::motion::{self, Motion};
use crate::{console, use_site};

const ORBS: [&str; 3] = ["purple", "cyan", "green"];

/// Unmounting only touches the body style when the modal still holds the lock.
fn holds_scroll_lock(video_open: Option<bool>) -> bool {
    video_open == Some(true)
}

fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().body() {
        let value = if locked { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", value);
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let site = use_site();
    let hero = site.hero.clone();
    let whatsapp = site.config.whatsapp_url.clone();
    let logo_src = site.config.logo_src.clone();
    let brand = site.config.brand.clone();
    let showreel_src = site.config.showreel_src.clone();

    let section_ref = NodeRef::<html::Section>::new();
    let visual_ref = NodeRef::<html::Div>::new();
    let video_ref = NodeRef::<html::Video>::new();
    let (video_open, set_video_open) = signal(false);

    // One label per stat, rewritten by the count-up.
    let stats: Vec<(RwSignal<String>, CountUp, String)> = hero
        .stats
        .iter()
        .map(|stat| {
            let count = CountUp::new(stat.value);
            (
                RwSignal::new(count.label_at(0.0, &stat.suffix)),
                count,
                stat.suffix.clone(),
            )
        })
        .collect();
    let labels: Vec<RwSignal<String>> = stats.iter().map(|(label, _, _)| *label).collect();

    let visual_motion = Motion::new(Props::default());
    let tracks: Vec<Motion> = ORBS.iter().map(|_| Motion::new(Props::default())).collect();
    let drift_motions: Vec<Motion> = ORBS.iter().map(|_| Motion::new(Props::default())).collect();

    Effect::new(move || {
        let Some(section) = section_ref.get() else {
            return;
        };

        let first = |selector: &str| motion::select(&section, selector).into_iter().next();
        let children = |selector: &str| -> Vec<web_sys::HtmlElement> {
            motion::select(&section, selector)
                .into_iter()
                .flat_map(|group| motion::children(&group))
                .collect()
        };
        let tl = hero_entrance(HeroTargets {
            words: motion::select(&section, ".hero__title-word"),
            subtitle: first(".hero__subtitle"),
            description: first(".hero__description"),
            buttons: children(".hero__buttons"),
            stats: children(".hero__stats"),
            visual: first(".hero__visual"),
        });

        let stats = stats.clone();
        motion::play_timeline(tl, move |cue| {
            if cue != COUNT_UP_CUE {
                return;
            }
            for (label, count, suffix) in stats.iter().cloned() {
                motion::run_frames(move |elapsed| {
                    let text = count.label_at(elapsed, &suffix);
                    label.try_update(|l| *l = text).is_some() && !count.is_finished(elapsed)
                });
            }
        });

        let orbs = motion::select(&section, ".hero__orb");
        for (index, (orb, drift_motion)) in orbs.into_iter().zip(drift_motions.iter()).enumerate() {
            let drift = OrbDrift::new(index, js_sys::Math::random);
            drift_motion.drive(orb, move |elapsed| {
                let (x, y) = drift.offset_at(elapsed);
                Props::default().with_xy(x, y)
            });
        }
    });

    let handle = window_event_listener(ev::mousemove, move |event| {
        let (width, height) = motion::viewport();
        let (x, y) = pointer_offset(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            width,
            height,
            STRENGTH,
        );
        if let Some(visual) = visual_ref.get_untracked() {
            visual_motion.to(visual.into(), Props::default().with_xy(x, y), 1.0, Ease::Power2Out);
        }
        let Some(section) = section_ref.get_untracked() else {
            return;
        };
        for (index, (track, track_motion)) in motion::select(&section, ".hero__orb-track")
            .into_iter()
            .zip(tracks.iter())
            .enumerate()
        {
            let (ox, oy) = orb_offset((x, y), index);
            track_motion.to(track, Props::default().with_xy(ox, oy), 1.5, Ease::Power2Out);
        }
    });
    on_cleanup(move || handle.remove());

    let open_video = move |_: ev::MouseEvent| {
        set_video_open.set(true);
        set_body_scroll_locked(true);
    };
    let close_video = move || {
        if let Some(video) = video_ref.get_untracked() {
            if let Err(err) = video.pause() {
                console::warn(&format!("showreel did not pause: {err:?}"));
            }
            video.set_current_time(0.0);
        }
        set_video_open.set(false);
        set_body_scroll_locked(false);
    };

    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && video_open.get_untracked() {
            close_video();
        }
    });
    on_cleanup(move || {
        escape.remove();
        if holds_scroll_lock(video_open.try_get_untracked()) {
            set_body_scroll_locked(false);
        }
    });

    view! {
        <section id="home" class="hero" node_ref=section_ref>
            <div class="hero__bg">
                <div class="hero__grid bg-grid"></div>
                {ORBS
                    .iter()
                    .map(|color| {
                        view! {
                            <div class="hero__orb-track">
                                <div class=format!("hero__orb hero__orb--{color}")></div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="hero__container container">
                <div class="hero__content">
                    <div class="hero__badge">
                        <Icon name="sparkles" size=16 />
                        <span>{hero.badge.clone()}</span>
                    </div>

                    <h1 class="hero__title">
                        {hero
                            .title_words
                            .iter()
                            .map(|word| {
                                view! {
                                    <span class="hero__title-word" class:gradient-text=word.gradient>
                                        {word.text.clone()}
                                    </span>
                                    " "
                                }
                            })
                            .collect_view()}
                    </h1>

                    <p class="hero__subtitle">{hero.subtitle.clone()}</p>
                    <p class="hero__description">{hero.description.clone()}</p>

                    <div class="hero__buttons">
                        <a
                            href=whatsapp
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-primary hero__btn"
                        >
                            {hero.primary_cta.clone()}
                            <Icon name="arrow-right" size=18 />
                        </a>
                        <button class="btn btn-secondary hero__btn hero__btn--play" on:click=open_video>
                            <div class="hero__play-icon">
                                <Icon name="play" size=16 filled=true />
                            </div>
                            {hero.showreel_cta.clone()}
                        </button>
                    </div>

                    <div class="hero__stats">
                        {hero
                            .stats
                            .iter()
                            .zip(labels)
                            .enumerate()
                            .map(|(i, (stat, label))| {
                                view! {
                                    {(i > 0).then(|| view! { <div class="hero__stat-divider"></div> })}
                                    <div class="hero__stat">
                                        <span class="hero__stat-value gradient-text">
                                            {move || label.get()}
                                        </span>
                                        <span class="hero__stat-label">{stat.label.clone()}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="hero__visual">
                    <div class="hero__visual-wrapper" node_ref=visual_ref>
                        {hero
                            .visual_cards
                            .iter()
                            .enumerate()
                            .map(|(i, card)| {
                                view! {
                                    <div class=format!("hero__visual-card hero__visual-card--{}", i + 1)>
                                        <div class="hero__visual-card-inner">
                                            <div class="hero__visual-icon">
                                                <Icon name=card.icon.clone() />
                                            </div>
                                            <span>{card.label.clone()}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="hero__visual-center">
                            <img src=logo_src alt=brand class="hero__logo-main" />
                        </div>
                    </div>
                </div>
            </div>

            <div class="hero__scroll-indicator">
                <div class="hero__scroll-mouse">
                    <div class="hero__scroll-wheel"></div>
                </div>
                <span>"Scroll to explore"</span>
            </div>

            <Show when=move || video_open.get()>
                <div class="video-modal" on:click=move |_| close_video()>
                    <div class="video-modal__overlay"></div>
                    <div class="video-modal__content" on:click=|event| event.stop_propagation()>
                        <button
                            class="video-modal__close"
                            aria-label="Close video"
                            on:click=move |_| close_video()
                        >
                            <Icon name="x" size=24 />
                        </button>
                        <div class="video-modal__wrapper">
                            <video
                                node_ref=video_ref
                                src=showreel_src.clone()
                                controls=true
                                autoplay=true
                                class="video-modal__video"
                            >
                                "Your browser does not support the video tag."
                            </video>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::holds_scroll_lock;

    #[test]
    fn unmount_releases_lock_only_when_open() {
        assert!(holds_scroll_lock(Some(true)));
        assert!(!holds_scroll_lock(Some(false)));
        assert!(!holds_scroll_lock(None));
    }
}
