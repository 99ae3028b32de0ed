use leptos::html;
use leptos::prelude::*;
use virex_core::content::{Filter, Project};
use virex_core::timeline::{Position, Timeline};
use virex_core::tween::{Props, Tween};

use super::heading::{SectionHeading, reveal_heading, start};
use crate::icons::Icon;
use crate::{motion, use_site};

fn filter_class(filter: Filter, active: Filter) -> &'static str {
    if filter == active {
        "portfolio__filter portfolio__filter--active"
    } else {
        "portfolio__filter"
    }
}

/// Stagger the visible grid items in.
fn replay_grid(grid: &web_sys::Element) {
    let mut tl = Timeline::new(0.0);
    tl.stagger(
        motion::select(grid, ".portfolio__item"),
        Tween::from_to(
            Props::hidden().with_scale(0.9).with_y(30.0),
            Props::default(),
            0.5,
        ),
        0.1,
        Position::End,
    );
    motion::play_timeline(tl, |_| {});
}

#[component]
pub fn Portfolio() -> impl IntoView {
    let site = use_site();
    let portfolio = site.portfolio.clone();
    let section_ref = NodeRef::<html::Section>::new();
    let grid_ref = NodeRef::<html::Div>::new();
    let (filter, set_filter) = signal(Filter::All);

    Effect::new(move || {
        let Some(section) = section_ref.get() else {
            return;
        };
        reveal_heading(&section);
        let buttons = motion::select(&section, ".portfolio__filters button");
        let tween = Tween::from_to(Props::hidden().with_y(20.0), Props::default(), 0.5);
        for button in &buttons {
            motion::apply(button, &tween.from);
        }
        motion::on_scroll_enter(section, start("top 75%"), move || {
            for (i, button) in buttons.into_iter().enumerate() {
                motion::play(button, tween.delay(i as f64 * 0.1));
            }
        });
    });

    // Replays on every filter change, one frame after the grid re-rendered.
    Effect::new(move || {
        let active = filter.get();
        let Some(grid) = grid_ref.get() else {
            return;
        };
        request_animation_frame(move || {
            if filter.try_get_untracked() == Some(active) {
                replay_grid(&grid);
            }
        });
    });

    view! {
        <section id="portfolio" class="portfolio" node_ref=section_ref>
            <div class="portfolio__bg">
                <div class="bg-grid"></div>
                <div class="bg-gradient-blur cyan" style="top: 20%; right: -15%;"></div>
                <div class="bg-gradient-blur purple" style="bottom: 20%; left: -10%;"></div>
            </div>

            <div class="container">
                <SectionHeading header=portfolio.header />

                <div class="portfolio__filters">
                    {Filter::ALL
                        .into_iter()
                        .map(|f| {
                            view! {
                                <button
                                    class=move || filter_class(f, filter.get())
                                    on:click=move |_| set_filter.set(f)
                                >
                                    {f.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="portfolio__grid" node_ref=grid_ref>
                    {move || {
                        site
                            .projects_for(filter.get())
                            .into_iter()
                            .cloned()
                            .map(|project| view! { <ProjectCard project=project /> })
                            .collect_view()
                    }}
                </div>

                <div class="portfolio__cta">
                    <a href="#contact" class="btn btn-secondary">
                        {portfolio.cta_label}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div
            class=format!("portfolio__item portfolio__item--{}", project.color.class_suffix())
            style="opacity: 0"
        >
            <div class="portfolio__image">
                <img src=project.image alt=project.title.clone() class="portfolio__image-img" />
                <div class="portfolio__image-overlay"></div>
                <div class="portfolio__actions">
                    <button class="portfolio__action" aria-label="View project">
                        <Icon name="external-link" size=18 />
                    </button>
                    <button class="portfolio__action" aria-label="View code">
                        <Icon name="github" size=18 />
                    </button>
                </div>
            </div>

            <div class="portfolio__content">
                <span class="portfolio__category">{project.category.as_str()}</span>
                <h3 class="portfolio__title">{project.title}</h3>
                <p class="portfolio__description">{project.description}</p>
                <div class="portfolio__tags">
                    {project
                        .tags
                        .into_iter()
                        .map(|tag| view! { <span class="portfolio__tag">{tag}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::filter_class;
    use virex_core::content::{Category, Filter};

    #[test]
    fn only_the_active_filter_is_highlighted() {
        let web = Filter::Only(Category::Web);
        assert_eq!(filter_class(web, web), "portfolio__filter portfolio__filter--active");
        assert_eq!(filter_class(Filter::All, web), "portfolio__filter");
    }
}
