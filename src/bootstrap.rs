//! Page-load sequence.
//!
//! ```text
//! load content ──▶ apply brand ──▶ build header ──▶ build footer
//! ```
//!
//! The fetch is the only step that waits on anything. Once it settles (with
//! a document or an empty one) the remaining steps run back to back, each a
//! no-op for whatever its part of the page lacks.

use crate::config::HydrateConfig;
use crate::content::{ContentSource, load_content};
use crate::footer::build_footer;
use crate::header::build_header;
use crate::page::{Page, PageBindings};
use crate::theme::{ResolvedTheme, ThemeVars, apply_brand};
use log::{info, warn};

/// Run the page-load sequence against `page`.
///
/// The loaded document is kept on the page for later readers, replacing
/// whatever an earlier run left there.
pub fn bootstrap(
    page: &mut Page,
    source: &dyn ContentSource,
    config: &HydrateConfig,
) -> ResolvedTheme {
    let content = load_content(source, &config.content.resource);

    let theme = apply_brand(&mut page.theme, content.brand(), &config.brand);
    let path = page.bindings.path.clone();
    build_header(page.bindings.header.as_mut(), &path, &content);
    build_footer(&mut page.bindings.footer, &content);

    info!(
        "hydrated {} ({})",
        if path.is_empty() { "/" } else { path.as_str() },
        if content.is_empty() {
            "page defaults"
        } else {
            "content document"
        }
    );
    page.resolved = Some(theme.clone());
    page.content = Some(content);
    theme
}

/// Initial theme variables for a page.
///
/// Reads the configured stylesheet through `source`; without one, or when it
/// cannot be fetched, the page starts with no variables and brand
/// resolution falls through to the configured defaults.
pub fn seed_theme(source: &dyn ContentSource, config: &HydrateConfig) -> ThemeVars {
    let Some(stylesheet) = config.theme.stylesheet.as_deref() else {
        return ThemeVars::new();
    };
    match source.fetch(stylesheet) {
        Ok(fetched) if fetched.is_success() => ThemeVars::from_css(&fetched.body),
        Ok(fetched) => {
            warn!("stylesheet {stylesheet} returned status {}", fetched.status);
            ThemeVars::new()
        }
        Err(e) => {
            warn!("stylesheet {stylesheet} unavailable: {e}");
            ThemeVars::new()
        }
    }
}

/// Build a page from its bindings, seed its theme and bootstrap it.
pub fn hydrate(
    bindings: PageBindings,
    source: &dyn ContentSource,
    config: &HydrateConfig,
) -> Page {
    let theme = seed_theme(source, config);
    let mut page = Page::new(bindings, theme).with_slideshow_interval(config.slideshow.interval());
    bootstrap(&mut page, source, config);
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{StaticSource, sample_content};
    use crate::theme::{ACCENT, BRAND, CARD};

    fn content_json() -> String {
        serde_json::to_string(&sample_content()).unwrap()
    }

    #[test]
    fn applies_every_component() {
        let source = StaticSource::ok(&content_json());
        let page = hydrate(
            PageBindings::complete("/contact.html"),
            &source,
            &HydrateConfig::default(),
        );

        assert_eq!(page.theme().get(BRAND), Some("#1F4E3D"));
        assert_eq!(page.theme().get(ACCENT), Some("#F59E0B"));
        let header = page.header().unwrap();
        assert_eq!(header.site_name.as_ref().unwrap().text(), "Riverside Growers");
        assert!(
            header
                .menu
                .as_ref()
                .unwrap()
                .inner_html()
                .contains(r#"<a class="active" href="contact.html">"#)
        );
        assert_eq!(page.footer().scio.as_ref().unwrap().text(), "SC049876");
        assert_eq!(page.content(), Some(&sample_content()));
        assert_eq!(page.resolved_theme().unwrap().brand, "#1F4E3D");
    }

    #[test]
    fn missing_content_keeps_page_working() {
        let source = StaticSource::status(404);
        let mut page = Page::new(
            PageBindings::complete("/"),
            ThemeVars::from_css(":root { --brand: #222222; }"),
        );
        let theme = bootstrap(&mut page, &source, &HydrateConfig::default());

        assert_eq!(theme.brand, "#222222");
        assert_eq!(theme.accent, "#22C55E");
        assert!(page.content().unwrap().is_empty());
        assert!(page.dispatch(crate::page::PageEvent::MenuToggle));
    }

    #[test]
    fn numeric_name_does_not_discard_brand() {
        let source = StaticSource::ok(
            r##"{"site":{"name":42,"brand":{"primary":"#112233"}},"legal":{"scio":"SC1"}}"##,
        );
        let page = hydrate(PageBindings::complete("/"), &source, &HydrateConfig::default());
        assert_eq!(page.theme().get(BRAND), Some("#112233"));
        assert_eq!(page.footer().scio.as_ref().unwrap().text(), "SC1");
        assert_eq!(page.footer().name.as_ref().unwrap().text(), "42");
    }

    #[test]
    fn page_without_regions_still_gets_theme() {
        let source = StaticSource::ok(&content_json());
        let page = hydrate(PageBindings::new("/"), &source, &HydrateConfig::default());
        assert!(page.header().is_none());
        assert_eq!(page.theme().len(), 6);
        assert!(page.theme().get(CARD).is_some());
    }

    #[test]
    fn seed_theme_without_stylesheet_is_empty() {
        let source = StaticSource::ok(":root { --brand: #000000; }");
        assert!(seed_theme(&source, &HydrateConfig::default()).is_empty());
    }

    #[test]
    fn seed_theme_reads_stylesheet() {
        let source = StaticSource::ok(":root { --brand: #000000; }");
        let mut config = HydrateConfig::default();
        config.theme.stylesheet = Some("css/site.css".into());
        assert_eq!(seed_theme(&source, &config).get(BRAND), Some("#000000"));
    }

    #[test]
    fn seed_theme_tolerates_failures() {
        let mut config = HydrateConfig::default();
        config.theme.stylesheet = Some("css/site.css".into());
        assert!(seed_theme(&StaticSource::status(404), &config).is_empty());
        assert!(seed_theme(&StaticSource::failing(), &config).is_empty());
    }
}
