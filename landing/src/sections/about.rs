use leptos::html;
use leptos::prelude::*;
use virex_core::counter::CountUp;
use virex_core::tween::{Props, Tween};
use web_sys::HtmlElement;

use super::heading::start;
use crate::icons::Icon;
use crate::{motion, use_site};

/// Fade a stat card in, then count its value up from zero.
fn reveal_stat(card: HtmlElement, tween: Tween, count: CountUp, value: RwSignal<u32>) {
    motion::apply(&card, &tween.from);
    let trigger = card.clone();
    motion::on_scroll_enter(trigger, start("top 90%"), move || {
        motion::run_frames(move |elapsed| {
            motion::apply(&card, &tween.sample(elapsed));
            let counting = elapsed - tween.total();
            if counting < 0.0 {
                return true;
            }
            value.try_update(|v| *v = count.value_at(counting)).is_some()
                && !count.is_finished(counting)
        });
    });
}

#[component]
pub fn About() -> impl IntoView {
    let site = use_site();
    let about = site.about.clone();
    let whatsapp = site.config.whatsapp_url.clone();
    let logo_src = site.config.logo_src.clone();
    let team_alt = site.footer.credit.clone();

    let section_ref = NodeRef::<html::Section>::new();
    let values: Vec<RwSignal<u32>> = about.stats.iter().map(|_| RwSignal::new(0)).collect();
    let counts: Vec<CountUp> = about.stats.iter().map(|stat| CountUp::new(stat.value)).collect();

    let stat_values = values.clone();
    Effect::new(move || {
        let Some(section) = section_ref.get() else {
            return;
        };

        let image = motion::select(&section, ".about__image").into_iter().next();
        let image_tween = Tween::from_to(
            Props::hidden().with_x(-80.0).with_scale(0.9),
            Props::default(),
            1.0,
        );
        let content: Vec<(HtmlElement, Tween)> = motion::select(&section, ".about__content")
            .into_iter()
            .flat_map(|content| motion::children(&content))
            .enumerate()
            .map(|(i, child)| {
                let tween = Tween::from_to(Props::hidden().with_x(50.0), Props::default(), 0.8)
                    .delay(i as f64 * 0.15);
                (child, tween)
            })
            .collect();

        if let Some(image) = &image {
            motion::apply(image, &image_tween.from);
        }
        for (child, tween) in &content {
            motion::apply(child, &tween.from);
        }
        motion::on_scroll_enter(section.clone(), start("top 70%"), move || {
            if let Some(image) = image {
                motion::play(image, image_tween);
            }
            for (child, tween) in content {
                motion::play(child, tween);
            }
        });

        let cards = motion::select(&section, ".about__stat");
        for (index, ((card, count), value)) in cards
            .into_iter()
            .zip(counts.iter().copied())
            .zip(stat_values.iter().copied())
            .enumerate()
        {
            let tween = Tween::from_to(Props::hidden().with_y(30.0), Props::default(), 0.6)
                .delay(index as f64 * 0.1);
            reveal_stat(card, tween, count, value);
        }
    });

    view! {
        <section id="about" class="about" node_ref=section_ref>
            <div class="about__bg">
                <div class="bg-grid"></div>
                <div class="bg-gradient-blur purple" style="top: 10%; left: -15%;"></div>
                <div class="bg-gradient-blur green" style="bottom: 10%; right: -10%;"></div>
            </div>

            <div class="container">
                <div class="about__wrapper">
                    <div class="about__image">
                        <div class="about__image-wrapper">
                            <div class="about__image-main">
                                <div class="about__image-placeholder">
                                    <img src=logo_src alt=team_alt />
                                </div>
                            </div>
                            <div class="about__image-accent about__image-accent--1"></div>
                            <div class="about__image-accent about__image-accent--2"></div>
                            <div class="about__experience-badge">
                                <span class="about__experience-value">{about.experience_value}</span>
                                <span class="about__experience-text">{about.experience_text}</span>
                            </div>
                        </div>
                    </div>

                    <div class="about__content">
                        <span class="section-label">{about.label}</span>
                        <h2 class="about__title">
                            {about.title}
                            " "
                            <span class="gradient-text">{about.accent}</span>
                        </h2>
                        {about
                            .paragraphs
                            .into_iter()
                            .map(|p| view! { <p class="about__description">{p}</p> })
                            .collect_view()}
                        <div class="about__highlights">
                            {about
                                .highlights
                                .into_iter()
                                .map(|h| {
                                    view! {
                                        <div class="about__highlight">
                                            <div class="about__highlight-check">"✓"</div>
                                            <span>{h}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <a
                            href=whatsapp
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-primary about__btn"
                        >
                            {about.cta}
                        </a>
                    </div>
                </div>

                <div class="about__stats">
                    {about
                        .stats
                        .into_iter()
                        .zip(values)
                        .map(|(stat, value)| {
                            view! {
                                <div class="about__stat">
                                    <div class="about__stat-icon">
                                        {stat.icon.map(|name| view! { <Icon name=name size=24 /> })}
                                    </div>
                                    <div class="about__stat-content">
                                        <span class="about__stat-value gradient-text">
                                            {move || value.get()}
                                        </span>
                                        <span class="about__stat-suffix gradient-text">{stat.suffix}</span>
                                        <span class="about__stat-label">{stat.label}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
