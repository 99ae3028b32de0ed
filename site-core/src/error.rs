//! Error types for content loading, motion parsing and form validation.

use thiserror::Error;

/// Failure to load or validate the site content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The JSON document could not be deserialized.
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    /// The testimonial carousel needs at least one entry.
    #[error("site content has no testimonials")]
    NoTestimonials,
    /// A testimonial rating is outside 1..=5.
    #[error("testimonial from {name} has rating {rating}, expected 1..=5")]
    InvalidRating {
        /// Author of the offending testimonial
        name: String,
        /// Rating found in the content
        rating: u8,
    },
    /// Navigation links must point at in-page anchors.
    #[error("nav link {0:?} is not an in-page anchor")]
    NotAnAnchor(String),
    /// Two navigation links share the same anchor.
    #[error("duplicate nav anchor {0:?}")]
    DuplicateAnchor(String),
    /// The carousel interval must be positive.
    #[error("carousel interval must be greater than zero")]
    ZeroInterval,
}

/// Failure to parse an animation description.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    /// Ease name not in the supported set.
    #[error("unknown ease {0:?}")]
    UnknownEase(String),
    /// Timeline position was not `-=N`, `+=N` or an absolute number.
    #[error("invalid timeline position {0:?}")]
    InvalidPosition(String),
    /// Scroll trigger start was not `<edge> <viewport>`.
    #[error("invalid scroll trigger start {0:?}")]
    InvalidTriggerStart(String),
}

/// Contact or newsletter form rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required field was left blank.
    #[error("{0} is required")]
    Missing(&'static str),
    /// The email address does not look like one.
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
}
