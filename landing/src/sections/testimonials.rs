use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use virex_core::carousel::{Carousel, Nav};
use virex_core::content::Testimonial;
use virex_core::tween::{Props, Tween};

use super::heading::{SectionHeading, reveal_heading, start};
use crate::icons::Icon;
use crate::motion::{self, Motion};
use crate::{console, use_site};

fn dot_class(active: bool) -> &'static str {
    if active {
        "testimonials__dot testimonials__dot--active"
    } else {
        "testimonials__dot"
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let site = use_site();
    let testimonials = site.testimonials.clone();
    let interval = Duration::from_millis(u64::from(site.config.carousel_interval_ms));
    let items = testimonials.items;

    let carousel = RwSignal::new(Carousel::new(items.len()));
    let section_ref = NodeRef::<html::Section>::new();
    let slider_ref = NodeRef::<html::Div>::new();
    let slide_motion = Motion::new(Props::default());

    match set_interval_with_handle(
        move || {
            carousel.try_maybe_update(|c| (c.navigate(Nav::Next), ()));
        },
        interval,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => console::warn(&format!("testimonial auto-advance disabled: {err:?}")),
    }

    Effect::new(move || {
        let Some(section) = section_ref.get() else {
            return;
        };
        reveal_heading(&section);
        if let Some(wrapper) = motion::select(&section, ".testimonials__slider-wrapper").into_iter().next() {
            let tween = Tween::from_to(Props::hidden().with_y(40.0), Props::default(), 0.8);
            motion::apply(&wrapper, &tween.from);
            motion::on_scroll_enter(section, start("top 70%"), move || motion::play(wrapper, tween));
        }
    });

    // Only moves that change the index notify, so this runs once per slide.
    Effect::new(move || {
        carousel.track();
        if let Some(slider) = slider_ref.get() {
            let tween = Tween::from_to(Props::hidden().with_x(30.0), Props::default(), 0.5);
            slide_motion.play(slider.into(), tween);
        }
    });

    let count = items.len();
    let slide = move || {
        carousel
            .get()
            .current()
            .and_then(|i| items.get(i).cloned())
            .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
    };

    view! {
        <section id="testimonials" class="testimonials" node_ref=section_ref>
            <div class="testimonials__bg">
                <div class="bg-gradient-blur purple" style="top: 10%; left: -10%;"></div>
                <div class="bg-gradient-blur cyan" style="bottom: 10%; right: -5%;"></div>
            </div>

            <div class="container">
                <SectionHeading header=testimonials.header />

                <div class="testimonials__slider-wrapper">
                    <div class="testimonials__slider" node_ref=slider_ref>
                        {slide}
                    </div>

                    <div class="testimonials__controls">
                        <button
                            class="testimonials__arrow"
                            aria-label="Previous"
                            on:click=move |_| {
                                carousel.maybe_update(|c| c.navigate(Nav::Prev));
                            }
                        >
                            <Icon name="chevron-left" size=24 />
                        </button>

                        <div class="testimonials__dots">
                            {(0..count)
                                .map(|index| {
                                    view! {
                                        <button
                                            class=move || dot_class(carousel.get().is_current(index))
                                            aria-label=format!("Go to slide {}", index + 1)
                                            on:click=move |_| {
                                                carousel.maybe_update(|c| c.navigate(Nav::To(index)));
                                            }
                                        ></button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <button
                            class="testimonials__arrow"
                            aria-label="Next"
                            on:click=move |_| {
                                carousel.maybe_update(|c| c.navigate(Nav::Next));
                            }
                        >
                            <Icon name="chevron-right" size=24 />
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let initial = testimonial.initial();
    view! {
        <div class=format!("testimonial-card testimonial-card--{}", testimonial.color.class_suffix())>
            <div class="testimonial-card__quote">
                <Icon name="quote" size=48 />
            </div>

            <div class="testimonial-card__rating">
                {(0..testimonial.rating)
                    .map(|_| view! { <Icon name="star" size=20 filled=true /> })
                    .collect_view()}
            </div>

            <p class="testimonial-card__content">{testimonial.content}</p>

            <div class="testimonial-card__author">
                <div class="testimonial-card__avatar">{initial}</div>
                <div class="testimonial-card__info">
                    <h4 class="testimonial-card__name">{testimonial.name}</h4>
                    <p class="testimonial-card__role">{testimonial.role}</p>
                </div>
            </div>
        </div>
    }
}
