//! # site-hydrate
//!
//! Hydrates the static pages of a small charity site with shared content.
//! One JSON document (`data/content.json`) carries the site name, logo,
//! brand colors and charity registration; every page applies it to the
//! header, footer and theme variables it already has, and pages with photo
//! galleries run slideshows on top.
//!
//! # Page Load
//!
//! ```text
//! 1. Load      data/content.json  →  ContentDocument   (empty on any failure)
//! 2. Brand     brand colors       →  --brand … --card-border on the page root
//! 3. Header    logo, name, nav    →  #logo, #siteName, #site-menu, .menu-toggle
//! 4. Footer    year, name, legal  →  #year, #footerName, #scio, #oscrBadge
//! ```
//!
//! Slideshows are started separately by the pages that have them, through
//! [`Page::init_slideshow`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`escape`] | HTML escaping for content-document text |
//! | [`color`] | Hex parsing and linear color mixing |
//! | [`content`] | Content document model, sources, fail-open loader |
//! | [`theme`] | Page theme variables and the brand applier |
//! | [`header`] | Logo, site name, navigation, menu toggle |
//! | [`footer`] | Year, site name, charity registration |
//! | [`slideshow`] | Slideshow widget and its state machine |
//! | [`timer`] | Interval timers on a virtual clock |
//! | [`dom`] | The element model page bindings are made of |
//! | [`page`] | Page bindings, events, and the page runtime |
//! | [`bootstrap`] | The page-load sequence |
//! | [`config`] | `site-hydrate.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Fail-Open Everywhere
//!
//! Everything here is presentational. A missing content file, a missing
//! element or a malformed color must never stop a page from rendering, so
//! each component degrades on its own: the loader returns an empty document,
//! builders skip absent regions, and bad colors mix as white. Failures are
//! logged, never returned.
//!
//! ## Explicit Page Bindings
//!
//! Builders never look anything up. A [`PageBindings`] value holds an
//! optional entry for every region, built once per page and handed to each
//! builder, so "this page has no header" is a `None` rather than a failed
//! query.
//!
//! ## Virtual Clock
//!
//! Slideshow timers live on a [`timer::TimerQueue`] owned by the page. Time
//! only moves when [`Page::advance`] is called, which makes auto-advance,
//! hover-pause and restart behavior deterministic to test.
//!
//! ## Maud for Markup
//!
//! Navigation links and slides are rendered with maud, so every interpolated
//! value is escaped by construction.

pub mod bootstrap;
pub mod color;
pub mod config;
pub mod content;
pub mod dom;
pub mod escape;
pub mod footer;
pub mod header;
pub mod output;
pub mod page;
pub mod slideshow;
pub mod theme;
pub mod timer;

pub use bootstrap::{bootstrap, hydrate};
pub use color::{hex_to_rgb, mix};
pub use content::{ContentDocument, ContentSource, FileSource, HttpSource, load_content};
pub use escape::escape;
pub use footer::build_footer;
pub use header::build_header;
pub use page::{Page, PageBindings, PageEvent};
pub use slideshow::{SlideImage, Slideshow};
pub use theme::{ResolvedTheme, ThemeVars, apply_brand};

#[cfg(test)]
pub(crate) mod test_helpers;
