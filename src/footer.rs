//! Site footer: copyright year, site name and charity registration.

use crate::content::ContentDocument;
use crate::dom::Element;
use chrono::{Datelike, Local};

/// Footer targets. Each is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterRegion {
    /// `#year`
    pub year: Option<Element>,
    /// `#footerName`
    pub name: Option<Element>,
    /// `#scio`
    pub scio: Option<Element>,
    /// `#oscrBadge`
    pub oscr_badge: Option<Element>,
}

impl FooterRegion {
    pub fn complete() -> Self {
        Self {
            year: Some(Element::new()),
            name: Some(Element::new()),
            scio: Some(Element::new()),
            oscr_badge: Some(Element::new()),
        }
    }
}

/// Populate the footer, stamping the current calendar year.
pub fn build_footer(footer: &mut FooterRegion, content: &ContentDocument) {
    build_footer_for_year(footer, content, Local::now().year());
}

/// Populate the footer with an explicit year.
pub fn build_footer_for_year(footer: &mut FooterRegion, content: &ContentDocument, year: i32) {
    if let Some(el) = footer.year.as_mut() {
        el.set_text(&year.to_string());
    }
    if let (Some(el), Some(name)) = (footer.name.as_mut(), content.site_name()) {
        el.set_text(name);
    }
    if let (Some(el), Some(scio)) = (footer.scio.as_mut(), content.scio()) {
        el.set_text(scio);
    }
    if let (Some(el), Some(src)) = (footer.oscr_badge.as_mut(), content.oscr_badge()) {
        el.set_attr("src", src);
    }
}
