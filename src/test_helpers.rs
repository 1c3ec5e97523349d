//! Shared test utilities for the site-hydrate test suite.
//!
//! Provides canned content documents, slideshow image lists, a scripted
//! [`ContentSource`] and a small helper for reading `active` markers back
//! out of rendered markup.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let source = StaticSource::status(404);
//! let html = render_slides(&sample_images(3), 1).into_string();
//! assert_eq!(active_positions(&html, "slide"), vec![1]);
//! ```

use crate::content::{Brand, ContentDocument, ContentSource, Fetched, Legal, LoadError, SiteInfo};
use crate::slideshow::SlideImage;
use std::io;

// =========================================================================
// Content fixtures
// =========================================================================

/// A document with every field set.
pub fn sample_content() -> ContentDocument {
    ContentDocument {
        site: Some(SiteInfo {
            logo: Some("img/logo.svg".into()),
            name: Some("Riverside Growers".into()),
            brand: Some(Brand {
                primary: Some("#1F4E3D".into()),
                accent: Some("#F59E0B".into()),
                bg: Some("#FFFBEB".into()),
            }),
        }),
        legal: Some(Legal {
            scio: Some("SC049876".into()),
            oscr_badge: Some("img/oscr.png".into()),
        }),
    }
}

/// `n` images named `img/slide-1.jpg` onward, every other one captioned.
pub fn sample_images(n: usize) -> Vec<SlideImage> {
    (1..=n)
        .map(|i| SlideImage {
            src: format!("img/slide-{i}.jpg"),
            alt: Some(format!("Slide {i}")),
            caption: (i % 2 == 1).then(|| format!("Caption {i}")),
        })
        .collect()
}

// =========================================================================
// Scripted content source
// =========================================================================

/// Answers every fetch with the same canned outcome.
pub struct StaticSource {
    outcome: Option<Fetched>,
}

impl StaticSource {
    pub fn ok(body: &str) -> Self {
        Self {
            outcome: Some(Fetched {
                status: 200,
                body: body.to_string(),
            }),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            outcome: Some(Fetched {
                status,
                body: String::new(),
            }),
        }
    }

    /// Every fetch fails as a transport error would.
    pub fn failing() -> Self {
        Self { outcome: None }
    }
}

impl ContentSource for StaticSource {
    fn fetch(&self, _resource: &str) -> Result<Fetched, LoadError> {
        self.outcome.clone().ok_or_else(|| {
            LoadError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))
        })
    }
}

// =========================================================================
// Markup inspection
// =========================================================================

/// Positions (among elements whose first class is `class`) that also carry
/// `active`, in document order.
pub fn active_positions(html: &str, class: &str) -> Vec<usize> {
    html.match_indices(r#"class=""#)
        .filter_map(|(start, m)| {
            let rest = &html[start + m.len()..];
            let value = &rest[..rest.find('"')?];
            let mut tokens = value.split_whitespace();
            (tokens.next() == Some(class)).then(|| tokens.any(|t| t == "active"))
        })
        .enumerate()
        .filter(|(_, active)| *active)
        .map(|(i, _)| i)
        .collect()
}
