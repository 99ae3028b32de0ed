//! # virex-core
//!
//! Content model and motion core behind the Virex landing page.
//!
//! The landing crate renders sections with Leptos and drives the DOM; every
//! decision about *what* moves *where* and *when* lives here, free of any
//! browser dependency, so it can be tested natively.
//!
//! ## Architecture
//!
//! - [`content`] - site copy and runtime config, embedded as JSON
//! - [`ease`] - easing curves
//! - [`tween`] - animatable properties and single tweens
//! - [`timeline`] - ordered tween sequences with relative offsets
//! - [`scroll`] - scroll trigger thresholds and smooth scrolling
//! - [`carousel`] - testimonial slider index
//! - [`counter`] - count-up for stat values
//! - [`parallax`] - pointer parallax and floating orbs
//! - [`contact`] - contact/newsletter form state and validation
//!
//! ## Quick Start
//!
//! ```rust
//! use virex_core::content::SiteContent;
//! use virex_core::timeline::{Position, Timeline};
//! use virex_core::tween::{Props, Tween};
//!
//! let site = SiteContent::embedded().expect("bundled content is valid");
//! assert_eq!(site.config.brand, "VIREX");
//!
//! let mut tl = Timeline::new(0.5);
//! tl.add("logo", Tween::from_to(Props::hidden().with_x(-30.0), Props::default(), 0.6), Position::End);
//! assert!((tl.duration() - 1.1).abs() < 1e-9);
//! ```

#![warn(missing_docs)]

pub mod carousel;
pub mod contact;
pub mod content;
pub mod counter;
pub mod ease;
pub mod error;
pub mod parallax;
pub mod scroll;
pub mod timeline;
pub mod tween;

pub use error::{ContentError, FormError, MotionError};
