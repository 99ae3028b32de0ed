//! Checks on the bundled site content and the motion specs built from it.

use pretty_assertions::assert_eq;
use virex_core::carousel::Carousel;
use virex_core::content::{Filter, SiteContent};
use virex_core::counter::CountUp;
use virex_core::scroll::ScrollTrigger;

#[test]
fn embedded_content_is_valid() {
    let site = SiteContent::embedded().expect("bundled content must validate");
    assert_eq!(site.config.brand, "VIREX");
    assert_eq!(site.config.carousel_interval_ms, 5000);
    assert_eq!(site.config.nav_scroll_offset_px, 80.0);
}

#[test]
fn every_section_is_reachable_from_nav() {
    let site = SiteContent::embedded().unwrap();
    let anchors: Vec<&str> = site.nav_links.iter().map(|l| l.href.as_str()).collect();
    assert_eq!(
        anchors,
        vec!["#home", "#features", "#about", "#services", "#portfolio", "#contact"]
    );
}

#[test]
fn page_inventory() {
    let site = SiteContent::embedded().unwrap();
    assert_eq!(site.features.items.len(), 6);
    assert_eq!(site.services.items.len(), 6);
    assert_eq!(site.portfolio.projects.len(), 6);
    assert_eq!(site.testimonials.items.len(), 5);
    assert_eq!(site.about.stats.len(), 4);
    assert_eq!(site.hero.stats.len(), 3);
    assert_eq!(site.footer.columns.len(), 4);
}

#[test]
fn each_category_filter_has_projects() {
    let site = SiteContent::embedded().unwrap();
    for filter in Filter::ALL {
        assert!(
            !site.projects_for(filter).is_empty(),
            "filter {filter} shows nothing"
        );
    }
}

#[test]
fn carousel_cycles_through_every_testimonial() {
    let site = SiteContent::embedded().unwrap();
    let len = site.testimonials.items.len();
    let mut carousel = Carousel::new(len);
    let mut seen = vec![carousel.current().unwrap()];
    for _ in 1..len {
        seen.push(carousel.next().unwrap());
    }
    seen.sort_unstable();
    assert_eq!(seen, (0..len).collect::<Vec<_>>());
    assert_eq!(carousel.next(), Some(0));
}

#[test]
fn hero_stats_count_up_to_their_labels() {
    let site = SiteContent::embedded().unwrap();
    let labels: Vec<String> = site
        .hero
        .stats
        .iter()
        .map(|s| CountUp::new(s.value).label_at(2.0, &s.suffix))
        .collect();
    assert_eq!(labels, vec!["250+", "50+", "15+"]);
}

#[test]
fn section_triggers_parse() {
    for start in ["top 80%", "top 85%", "top 70%", "top 75%", "top 90%"] {
        let trigger = ScrollTrigger::new(start.parse().expect(start));
        assert!(!trigger.has_fired());
    }
}
