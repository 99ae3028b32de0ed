//! Site copy and runtime configuration.
//!
//! Everything the page says lives in `content/site.json`, embedded at
//! compile time and deserialized into the types below. Sections receive
//! their slice of [`SiteContent`] and never hard-code copy.
//!
//! ```rust
//! use virex_core::content::{Filter, SiteContent};
//!
//! let site = SiteContent::embedded().unwrap();
//! let web = site.projects_for(Filter::parse("web").unwrap());
//! assert!(web.iter().all(|p| p.category.as_str() == "web"));
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

const EMBEDDED: &str = include_str!("../content/site.json");

/// Brand colour used to tint cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Purple tint
    Purple,
    /// Blue tint
    Blue,
    /// Cyan tint
    Cyan,
    /// Green tint
    Green,
}

impl Accent {
    /// BEM modifier suffix, e.g. `feature-card--purple`.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Accent::Purple => "purple",
            Accent::Blue => "blue",
            Accent::Cyan => "cyan",
            Accent::Green => "green",
        }
    }
}

/// Portfolio project category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Websites and web apps
    Web,
    /// Brand identity work
    Branding,
    /// Mobile apps
    Mobile,
    /// Campaigns
    Marketing,
}

impl Category {
    /// Lowercase name, as shown on the project card.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Branding => "branding",
            Category::Mobile => "mobile",
            Category::Marketing => "marketing",
        }
    }
}

/// Portfolio filter button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// Show every project
    #[default]
    All,
    /// Show one category
    Only(Category),
}

impl Filter {
    /// Filter buttons in display order.
    pub const ALL: [Filter; 5] = [
        Filter::All,
        Filter::Only(Category::Web),
        Filter::Only(Category::Branding),
        Filter::Only(Category::Mobile),
        Filter::Only(Category::Marketing),
    ];

    /// Lowercase key (`"all"`, `"web"`, ...).
    pub fn key(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(category) => category.as_str(),
        }
    }

    /// Parse a lowercase key.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Button text: the key with its first letter capitalized.
    pub fn label(self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Whether `project` is shown under this filter.
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => project.category == category,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Runtime configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Wordmark shown next to the logo
    pub brand: String,
    /// Logo image path
    pub logo_src: String,
    /// Showreel video path
    pub showreel_src: String,
    /// "Get Started" destination
    pub whatsapp_url: String,
    /// Contact email
    pub email: String,
    /// Office location
    pub location: String,
    /// Height of the fixed navbar, subtracted from anchor scroll targets
    pub nav_scroll_offset_px: f64,
    /// Scroll distance after which the navbar turns compact
    pub scrolled_threshold_px: f64,
    /// Testimonial auto-advance period
    pub carousel_interval_ms: u32,
    /// Duration of smooth anchor scrolling
    pub smooth_scroll_secs: f64,
}

/// A text link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link text
    pub name: String,
    /// Target, usually an in-page anchor
    pub href: String,
}

/// A counted-up statistic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Icon name (about section only)
    #[serde(default)]
    pub icon: Option<String>,
    /// Final value
    pub value: u32,
    /// Text after the number
    #[serde(default)]
    pub suffix: String,
    /// Caption
    pub label: String,
}

/// Eyebrow, title and blurb heading a section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeader {
    /// Small uppercase label
    pub label: String,
    /// Plain part of the title
    pub title: String,
    /// Gradient part of the title
    pub accent: String,
    /// Paragraph under the title
    pub description: String,
}

/// One word of the hero headline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleWord {
    /// The word
    pub text: String,
    /// Rendered with the gradient fill
    #[serde(default)]
    pub gradient: bool,
}

/// Card floating around the hero logo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualCard {
    /// Icon name
    pub icon: String,
    /// Caption
    pub label: String,
}

/// Hero section copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Badge above the headline
    pub badge: String,
    /// Headline, animated word by word
    pub title_words: Vec<TitleWord>,
    /// Line under the headline
    pub subtitle: String,
    /// Paragraph under the subtitle
    pub description: String,
    /// Primary button text
    pub primary_cta: String,
    /// Showreel button text
    pub showreel_cta: String,
    /// Count-up stats
    pub stats: Vec<Stat>,
    /// Cards around the logo
    pub visual_cards: Vec<VisualCard>,
}

/// Feature card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Icon name
    pub icon: String,
    /// Card title
    pub title: String,
    /// Card body
    pub description: String,
    /// Tint
    pub color: Accent,
}

/// Features section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    /// Section heading
    pub header: SectionHeader,
    /// Cards
    pub items: Vec<Feature>,
}

/// About section copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    /// Eyebrow
    pub label: String,
    /// Plain part of the title
    pub title: String,
    /// Gradient part of the title
    pub accent: String,
    /// Body paragraphs
    pub paragraphs: Vec<String>,
    /// Checkmarked highlights
    pub highlights: Vec<String>,
    /// Button text
    pub cta: String,
    /// Badge value ("8+")
    pub experience_value: String,
    /// Badge caption
    pub experience_text: String,
    /// Count-up stats
    pub stats: Vec<Stat>,
}

/// Service card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Icon name
    pub icon: String,
    /// Card title
    pub title: String,
    /// Card body
    pub description: String,
    /// Bullet list
    pub features: Vec<String>,
    /// Tint
    pub color: Accent,
}

/// Services section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Services {
    /// Section heading
    pub header: SectionHeader,
    /// Cards
    pub items: Vec<Service>,
    /// Text above the call-to-action
    pub cta_text: String,
    /// Call-to-action button text
    pub cta_label: String,
}

/// Portfolio project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub title: String,
    /// Filter category
    pub category: Category,
    /// Short blurb
    pub description: String,
    /// Technology/discipline tags
    pub tags: Vec<String>,
    /// Cover image URL
    pub image: String,
    /// Tint
    pub color: Accent,
}

/// Portfolio section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Section heading
    pub header: SectionHeader,
    /// Projects in display order
    pub projects: Vec<Project>,
    /// Button under the grid
    pub cta_label: String,
}

/// Client testimonial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Client name
    pub name: String,
    /// Client role
    pub role: String,
    /// Quote
    pub content: String,
    /// Stars, 1..=5
    pub rating: u8,
    /// Tint
    pub color: Accent,
}

impl Testimonial {
    /// Avatar letter: the first character of the name.
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |c| c.to_string())
    }
}

/// Testimonials section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonials {
    /// Section heading
    pub header: SectionHeader,
    /// Slides
    pub items: Vec<Testimonial>,
}

/// Contact channel card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Icon name
    pub icon: String,
    /// Card title
    pub title: String,
    /// Displayed value
    pub value: String,
    /// Link target
    pub link: String,
}

/// Social network link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon name
    pub icon: String,
    /// Link target
    pub href: String,
    /// Accessible label
    pub label: String,
}

/// Contact section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Section heading
    pub header: SectionHeader,
    /// Channel cards
    pub info: Vec<ContactInfo>,
    /// Social links
    pub social: Vec<SocialLink>,
    /// Form heading
    pub form_title: String,
    /// Form blurb
    pub form_subtitle: String,
}

/// Footer link column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    /// Column heading
    pub title: String,
    /// Links
    pub links: Vec<NavLink>,
}

/// Footer copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Paragraph under the logo
    pub tagline: String,
    /// Newsletter heading
    pub newsletter_title: String,
    /// Link columns
    pub columns: Vec<FooterColumn>,
    /// Name in the "made with love by" line
    pub credit: String,
}

/// All page copy plus runtime config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Runtime configuration
    pub config: SiteConfig,
    /// Navbar links
    pub nav_links: Vec<NavLink>,
    /// Hero section
    pub hero: Hero,
    /// Features section
    pub features: Features,
    /// About section
    pub about: About,
    /// Services section
    pub services: Services,
    /// Portfolio section
    pub portfolio: Portfolio,
    /// Testimonials section
    pub testimonials: Testimonials,
    /// Contact section
    pub contact: Contact,
    /// Footer
    pub footer: Footer,
}

impl SiteContent {
    /// The content bundled with the page.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED)
    }

    /// Parse and validate a content document.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Check the invariants the page relies on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.testimonials.items.is_empty() {
            return Err(ContentError::NoTestimonials);
        }
        if let Some(t) = self
            .testimonials
            .items
            .iter()
            .find(|t| !(1..=5).contains(&t.rating))
        {
            return Err(ContentError::InvalidRating {
                name: t.name.clone(),
                rating: t.rating,
            });
        }

        let mut seen = HashSet::new();
        for link in &self.nav_links {
            if !link.href.starts_with('#') || link.href.len() < 2 {
                return Err(ContentError::NotAnAnchor(link.href.clone()));
            }
            if !seen.insert(link.href.as_str()) {
                return Err(ContentError::DuplicateAnchor(link.href.clone()));
            }
        }

        if self.config.carousel_interval_ms == 0 {
            return Err(ContentError::ZeroInterval);
        }
        Ok(())
    }

    /// Projects shown under `filter`, in declaration order.
    pub fn projects_for(&self, filter: Filter) -> Vec<&Project> {
        self.portfolio
            .projects
            .iter()
            .filter(|p| filter.matches(p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn site() -> SiteContent {
        SiteContent::embedded().expect("embedded content")
    }

    #[test]
    fn filter_labels_are_capitalized() {
        let labels: Vec<String> = Filter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "Web", "Branding", "Mobile", "Marketing"]);
    }

    #[test]
    fn filter_keys_parse_back() {
        for filter in Filter::ALL {
            assert_eq!(Filter::parse(filter.key()), Some(filter));
        }
        assert_eq!(Filter::parse("print"), None);
    }

    #[test]
    fn all_filter_keeps_every_project_in_order() {
        let site = site();
        let titles: Vec<&str> = site
            .projects_for(Filter::All)
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        let expected: Vec<&str> = site.portfolio.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn category_filter_preserves_order() {
        let site = site();
        let titles: Vec<&str> = site
            .projects_for(Filter::Only(Category::Branding))
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Zenith Finance", "Roast & Brew"]);
    }

    #[test]
    fn initial_handles_non_latin_names() {
        let site = site();
        assert_eq!(site.testimonials.items[0].initial(), "م");
    }

    #[test]
    fn empty_name_gets_placeholder_initial() {
        let mut t = site().testimonials.items[0].clone();
        t.name = "  ".into();
        assert_eq!(t.initial(), "?");
    }

    #[test]
    fn rejects_empty_testimonials() {
        let mut site = site();
        site.testimonials.items.clear();
        assert!(matches!(site.validate(), Err(ContentError::NoTestimonials)));
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let mut site = site();
        site.testimonials.items[1].rating = 6;
        assert!(matches!(
            site.validate(),
            Err(ContentError::InvalidRating { rating: 6, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_or_external_nav_links() {
        let mut site = site();
        site.nav_links[1].href = "#home".into();
        assert!(matches!(site.validate(), Err(ContentError::DuplicateAnchor(h)) if h == "#home"));

        let mut site = self::site();
        site.nav_links[0].href = "https://example.com".into();
        assert!(matches!(site.validate(), Err(ContentError::NotAnAnchor(_))));
    }

    #[test]
    fn rejects_zero_interval() {
        let mut site = site();
        site.config.carousel_interval_ms = 0;
        assert!(matches!(site.validate(), Err(ContentError::ZeroInterval)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteContent::from_json("{\"config\": 1}"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn accent_suffixes_match_serde_names() {
        for accent in [Accent::Purple, Accent::Blue, Accent::Cyan, Accent::Green] {
            let json = serde_json::to_string(&accent).unwrap();
            assert_eq!(json, format!("\"{}\"", accent.class_suffix()));
        }
    }
}
