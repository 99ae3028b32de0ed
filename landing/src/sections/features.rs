use leptos::html;
use leptos::prelude::*;
use virex_core::content::Feature;
use virex_core::ease::Ease;
use virex_core::tween::{Props, Tween};

use super::heading::{SectionHeading, reveal_heading, start};
use crate::icons::Icon;
use crate::motion::{self, Motion};
use crate::use_site;

#[component]
pub fn Features() -> impl IntoView {
    let features = use_site().features.clone();
    let section_ref = NodeRef::<html::Section>::new();

    Effect::new(move || {
        let Some(section) = section_ref.get() else {
            return;
        };
        reveal_heading(&section);
        for (index, card) in motion::select(&section, ".feature-card").into_iter().enumerate() {
            let tween = Tween::from_to(
                Props::hidden().with_y(60.0).with_scale(0.9),
                Props::default(),
                0.6,
            )
            .delay(index as f64 * 0.1);
            motion::reveal_on_scroll(card, start("top 85%"), tween);
        }
    });

    view! {
        <section id="features" class="features" node_ref=section_ref>
            <div class="features__bg">
                <div class="bg-gradient-blur purple" style="top: 20%; right: -10%;"></div>
                <div class="bg-gradient-blur cyan" style="bottom: 10%; left: -5%;"></div>
            </div>

            <div class="container">
                <SectionHeading header=features.header />
                <div class="features__grid">
                    {features
                        .items
                        .into_iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    let icon_ref = NodeRef::<html::Div>::new();
    let glow_ref = NodeRef::<html::Div>::new();
    let icon_motion = Motion::new(Props::default());
    let glow_motion = Motion::new(Props::hidden());

    let hover = move |on: bool| {
        if let Some(icon) = icon_ref.get_untracked() {
            let to = if on {
                Props::default().with_scale(1.1).with_rotate(5.0)
            } else {
                Props::default()
            };
            icon_motion.to(icon.into(), to, 0.3, Ease::Power2Out);
        }
        if let Some(glow) = glow_ref.get_untracked() {
            let to = if on {
                Props::default().with_scale(1.2)
            } else {
                Props::hidden()
            };
            glow_motion.to(glow.into(), to, 0.4, Ease::Power2Out);
        }
    };

    view! {
        <div
            class=format!("feature-card feature-card--{}", feature.color.class_suffix())
            on:mouseenter=move |_| hover(true)
            on:mouseleave=move |_| hover(false)
        >
            <div class="feature-card__glow" node_ref=glow_ref></div>
            <div class="feature-card__content">
                <div class="feature-card__icon" node_ref=icon_ref>
                    <Icon name=feature.icon size=28 />
                </div>
                <h3 class="feature-card__title">{feature.title}</h3>
                <p class="feature-card__description">{feature.description}</p>
            </div>
            <div class="feature-card__border"></div>
        </div>
    }
}
