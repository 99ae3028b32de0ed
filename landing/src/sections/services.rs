use leptos::html;
use leptos::prelude::*;
use virex_core::content::Service;
use virex_core::ease::Ease;
use virex_core::tween::{Props, Tween};

use super::heading::{SectionHeading, reveal_heading, start};
use crate::icons::Icon;
use crate::motion::{self, Motion};
use crate::use_site;

/// Cards reveal row by row on a three-column grid.
fn card_delay(index: usize) -> f64 {
    (index % 3) as f64 * 0.15
}

#[component]
pub fn Services() -> impl IntoView {
    let services = use_site().services.clone();
    let section_ref = NodeRef::<html::Section>::new();

    Effect::new(move || {
        let Some(section) = section_ref.get() else {
            return;
        };
        reveal_heading(&section);
        for (index, card) in motion::select(&section, ".service-card").into_iter().enumerate() {
            let tween = Tween::from_to(Props::hidden().with_y(60.0), Props::default(), 0.7)
                .delay(card_delay(index));
            motion::reveal_on_scroll(card, start("top 85%"), tween);
        }
    });

    view! {
        <section id="services" class="services" node_ref=section_ref>
            <div class="services__bg">
                <div class="bg-gradient-blur purple" style="top: -10%; right: -5%;"></div>
                <div class="bg-gradient-blur cyan" style="bottom: -10%; left: -5%;"></div>
            </div>

            <div class="container">
                <SectionHeading header=services.header />
                <div class="services__grid">
                    {services
                        .items
                        .into_iter()
                        .map(|service| view! { <ServiceCard service=service /> })
                        .collect_view()}
                </div>

                <div class="services__cta">
                    <p>{services.cta_text}</p>
                    <a href="#contact" class="btn btn-primary">
                        {services.cta_label}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    let arrow_ref = NodeRef::<html::Span>::new();
    let arrow_motion = Motion::new(Props::default());
    let nudge = move |to: Props| {
        if let Some(arrow) = arrow_ref.get_untracked() {
            arrow_motion.to(arrow.into(), to, 0.3, Ease::Power2Out);
        }
    };

    view! {
        <div
            class=format!("service-card service-card--{}", service.color.class_suffix())
            on:mouseenter=move |_| nudge(Props::default().with_xy(5.0, -5.0))
            on:mouseleave=move |_| nudge(Props::default())
        >
            <div class="service-card__header">
                <div class="service-card__icon">
                    <Icon name=service.icon size=28 />
                </div>
                <span class="service-card__arrow" node_ref=arrow_ref>
                    <Icon name="arrow-up-right" size=20 />
                </span>
            </div>

            <h3 class="service-card__title">{service.title}</h3>
            <p class="service-card__description">{service.description}</p>

            <ul class="service-card__features">
                {service.features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
            </ul>

            <div class="service-card__glow"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::card_delay;

    #[test]
    fn delay_restarts_every_row() {
        let delays: Vec<f64> = (0..6).map(card_delay).collect();
        assert_eq!(delays, vec![0.0, 0.15, 0.3, 0.0, 0.15, 0.3]);
    }
}
