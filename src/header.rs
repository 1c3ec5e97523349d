//! Site header: logo, site name, navigation and the mobile menu toggle.
//!
//! The navigation is a fixed list of five pages. The link whose `href`
//! matches the last segment of the current path (case-insensitively) gets
//! the `active` class; a path ending in `/` counts as `index.html`.

use crate::content::ContentDocument;
use crate::dom::Element;
use log::debug;
use maud::{Markup, html};

/// One entry of the site navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Home",
        href: "index.html",
    },
    NavLink {
        label: "Programmes",
        href: "programmes.html",
    },
    NavLink {
        label: "Get involved",
        href: "get-involved.html",
    },
    NavLink {
        label: "Gallery",
        href: "gallery.html",
    },
    NavLink {
        label: "Contact",
        href: "contact.html",
    },
];

/// Class added to the menu while it is expanded.
pub const OPEN_CLASS: &str = "open";

/// The header region of a page. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRegion {
    /// `#site-menu`
    pub menu: Option<Element>,
    /// `#logo`
    pub logo: Option<Element>,
    /// `#siteName`
    pub site_name: Option<Element>,
    /// `.menu-toggle`
    pub toggle: Option<Element>,
    toggle_wired: bool,
}

impl HeaderRegion {
    /// A header with every part present and empty.
    pub fn complete() -> Self {
        Self {
            menu: Some(Element::new()),
            logo: Some(Element::new()),
            site_name: Some(Element::new()),
            toggle: Some(Element::new().with_text("Menu")),
            toggle_wired: false,
        }
    }

    pub fn is_toggle_wired(&self) -> bool {
        self.toggle_wired
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(|m| m.has_class(OPEN_CLASS))
    }

    /// Handle one activation of the menu toggle.
    ///
    /// Returns the new open state, or `None` when the toggle was never wired.
    pub fn toggle_menu(&mut self) -> Option<bool> {
        if !self.toggle_wired {
            return None;
        }
        let (Some(menu), Some(toggle)) = (self.menu.as_mut(), self.toggle.as_mut()) else {
            return None;
        };
        let open = menu.toggle_class(OPEN_CLASS);
        toggle.set_attr("aria-expanded", if open { "true" } else { "false" });
        toggle.set_text(if open { "Close" } else { "Menu" });
        Some(open)
    }
}

/// Last path segment, lowercased; empty becomes `index.html`. Any query or
/// fragment is dropped first.
pub fn current_page(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segment = path.rsplit('/').next().unwrap_or_default();
    if segment.is_empty() {
        "index.html".to_string()
    } else {
        segment.to_lowercase()
    }
}

/// Index into [`NAV_LINKS`] of the active link, if any matches.
pub fn active_link(path: &str) -> Option<usize> {
    let here = current_page(path);
    NAV_LINKS
        .iter()
        .position(|link| link.href.eq_ignore_ascii_case(&here))
}

/// Render the navigation links for the page at `path`.
pub fn render_nav(path: &str) -> Markup {
    let active = active_link(path);
    html! {
        @for (idx, link) in NAV_LINKS.iter().enumerate() {
            a class=(if Some(idx) == active { "active" } else { "" }) href=(link.href) {
                (link.label)
            }
        }
    }
}

/// Populate the header from the content document.
///
/// Logo and site name are only overwritten when the content supplies them.
/// The menu toggle is wired once, and only when the menu exists too.
pub fn build_header(header: Option<&mut HeaderRegion>, path: &str, content: &ContentDocument) {
    let Some(header) = header else {
        return;
    };

    if let (Some(logo), Some(src)) = (header.logo.as_mut(), content.logo()) {
        logo.set_attr("src", src);
    }
    if let (Some(el), Some(name)) = (header.site_name.as_mut(), content.site_name()) {
        el.set_text(name);
    }

    if let Some(menu) = header.menu.as_mut() {
        let nav = render_nav(path).into_string();
        debug!("nav for {path:?}: {nav}");
        menu.set_inner_html(nav);
        if header.toggle.is_some() {
            header.toggle_wired = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_content;

    fn active_labels(path: &str) -> Vec<&'static str> {
        let html = render_nav(path).into_string();
        NAV_LINKS
            .iter()
            .filter(|l| html.contains(&format!(r#"<a class="active" href="{}">"#, l.href)))
            .map(|l| l.label)
            .collect()
    }

    #[test]
    fn programmes_page_marks_programmes() {
        assert_eq!(active_labels("/programmes.html"), vec!["Programmes"]);
    }

    #[test]
    fn empty_segment_marks_home() {
        assert_eq!(active_labels("/"), vec!["Home"]);
        assert_eq!(active_labels(""), vec!["Home"]);
        assert_eq!(active_labels("/site/"), vec!["Home"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(active_labels("/site/Gallery.HTML"), vec!["Gallery"]);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(active_labels("/contact.html?ref=nav"), vec!["Contact"]);
        assert_eq!(active_labels("/gallery.html#spring"), vec!["Gallery"]);
        assert_eq!(active_labels("/?lang=gd"), vec!["Home"]);
        assert_eq!(current_page("/a/b.html?x=/c.html"), "b.html");
    }

    #[test]
    fn unknown_page_marks_nothing() {
        assert!(active_labels("/news.html").is_empty());
        assert_eq!(active_link("/news.html"), None);
    }

    #[test]
    fn nav_renders_all_links_in_order() {
        let html = render_nav("/").into_string();
        let positions: Vec<usize> = NAV_LINKS
            .iter()
            .map(|l| html.find(l.href).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("<a ").count(), 5);
        assert!(html.contains(r#"<a class="" href="contact.html">Contact</a>"#));
    }

    #[test]
    fn missing_header_is_noop() {
        build_header(None, "/", &sample_content());
    }

    #[test]
    fn populates_logo_name_and_menu() {
        let mut header = HeaderRegion::complete();
        build_header(Some(&mut header), "/gallery.html", &sample_content());
        assert_eq!(
            header.logo.as_ref().unwrap().attr("src"),
            Some("img/logo.svg")
        );
        assert_eq!(header.site_name.as_ref().unwrap().text(), "Riverside Growers");
        assert!(
            header
                .menu
                .as_ref()
                .unwrap()
                .inner_html()
                .contains(r#"<a class="active" href="gallery.html">Gallery</a>"#)
        );
    }

    #[test]
    fn absent_fields_leave_defaults() {
        let mut header = HeaderRegion::complete();
        header.logo = Some(Element::new().with_attr("src", "default.png"));
        header.site_name = Some(Element::new().with_text("Default"));
        build_header(Some(&mut header), "/", &ContentDocument::default());
        assert_eq!(header.logo.unwrap().attr("src"), Some("default.png"));
        assert_eq!(header.site_name.unwrap().text(), "Default");
    }

    #[test]
    fn empty_fields_leave_defaults() {
        let mut header = HeaderRegion::complete();
        header.logo = Some(Element::new().with_attr("src", "default.png"));
        header.site_name = Some(Element::new().with_text("Default Name"));
        let content =
            ContentDocument::from_json(r#"{"site": {"name": "", "logo": ""}}"#).unwrap();
        build_header(Some(&mut header), "/", &content);
        assert_eq!(header.logo.unwrap().attr("src"), Some("default.png"));
        assert_eq!(header.site_name.unwrap().text(), "Default Name");
    }

    #[test]
    fn toggle_flips_state_and_label() {
        let mut header = HeaderRegion::complete();
        build_header(Some(&mut header), "/", &ContentDocument::default());

        assert_eq!(header.toggle_menu(), Some(true));
        assert!(header.is_menu_open());
        let toggle = header.toggle.as_ref().unwrap();
        assert_eq!(toggle.attr("aria-expanded"), Some("true"));
        assert_eq!(toggle.text(), "Close");

        assert_eq!(header.toggle_menu(), Some(false));
        assert!(!header.is_menu_open());
        let toggle = header.toggle.as_ref().unwrap();
        assert_eq!(toggle.attr("aria-expanded"), Some("false"));
        assert_eq!(toggle.text(), "Menu");
    }

    #[test]
    fn toggle_without_menu_is_not_wired() {
        let mut header = HeaderRegion::complete();
        header.menu = None;
        build_header(Some(&mut header), "/", &ContentDocument::default());
        assert!(!header.is_toggle_wired());
        assert_eq!(header.toggle_menu(), None);
    }

    #[test]
    fn toggle_before_build_does_nothing() {
        let mut header = HeaderRegion::complete();
        assert_eq!(header.toggle_menu(), None);
        assert!(!header.is_menu_open());
    }

    #[test]
    fn rebuilding_keeps_single_toggle_handler() {
        let mut header = HeaderRegion::complete();
        build_header(Some(&mut header), "/", &ContentDocument::default());
        build_header(Some(&mut header), "/", &ContentDocument::default());
        assert_eq!(header.toggle_menu(), Some(true));
    }

    #[test]
    fn current_page_takes_last_segment() {
        assert_eq!(current_page("/a/b/Contact.html"), "contact.html");
        assert_eq!(current_page("contact.html"), "contact.html");
        assert_eq!(current_page("/a/b/"), "index.html");
    }
}
