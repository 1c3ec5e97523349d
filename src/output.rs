//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Hydrate
//!
//! ```text
//! Content
//!     Source: data/content.json
//!     Site: Riverside Growers
//!
//! Theme
//!     --accent: #F59E0B
//!     --bg: #FFFBEB
//!     ...
//!
//! Navigation
//! 001 Home → index.html
//! 002 Programmes → programmes.html (active)
//!     ...
//!
//! Footer
//!     Year: 2026
//!     Name: Riverside Growers
//!     SCIO: SC049876
//!     Badge: img/oscr.png
//! ```
//!
//! ## Slideshow
//!
//! ```text
//! hero (3 slides, running)
//!     001 Volunteers → img/a.jpg
//!     002 Photo → img/b.jpg (active)
//!         Caption: Harvest day
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::dom::Element;
use crate::header::{NAV_LINKS, active_link};
use crate::page::Page;
use crate::slideshow::{Slideshow, TimerState};
use crate::theme::ThemeVars;

const INDENT: &str = "    ";

/// `001 label → target`, with an `(active)` suffix when selected.
fn entry_line(index: usize, label: &str, target: &str, active: bool) -> String {
    let suffix = if active { " (active)" } else { "" };
    format!("{index:03} {label} → {target}{suffix}")
}

// ============================================================================
// Sections
// ============================================================================

/// One line per theme variable, in name order.
pub fn format_theme(vars: &ThemeVars) -> Vec<String> {
    let mut lines = vec!["Theme".to_string()];
    let css = vars.to_css();
    lines.extend(
        css.lines()
            .filter(|l| l.trim_start().starts_with("--"))
            .map(|l| format!("{INDENT}{}", l.trim().trim_end_matches(';'))),
    );
    lines
}

/// The five navigation links with the active one flagged.
pub fn format_nav(path: &str) -> Vec<String> {
    let active = active_link(path);
    let mut lines = vec!["Navigation".to_string()];
    lines.extend(
        NAV_LINKS
            .iter()
            .enumerate()
            .map(|(i, link)| entry_line(i + 1, link.label, link.href, Some(i) == active)),
    );
    lines
}

fn element_line(label: &str, el: Option<&Element>, value: impl Fn(&Element) -> &str) -> String {
    match el {
        Some(el) if !value(el).is_empty() => format!("{INDENT}{label}: {}", value(el)),
        Some(_) => format!("{INDENT}{label}: (unset)"),
        None => format!("{INDENT}{label}: (absent)"),
    }
}

/// Full report of a bootstrapped page.
pub fn format_hydrate_output(page: &Page, resource: &str) -> Vec<String> {
    let mut lines = vec!["Content".to_string()];
    lines.push(format!("{INDENT}Source: {resource}"));
    match page.content() {
        Some(doc) if !doc.is_empty() => {
            if let Some(name) = doc.site_name() {
                lines.push(format!("{INDENT}Site: {name}"));
            }
        }
        _ => lines.push(format!("{INDENT}(unavailable, page defaults used)")),
    }

    lines.push(String::new());
    lines.extend(format_theme(page.theme()));

    lines.push(String::new());
    match page.header() {
        Some(header) => {
            lines.push("Header".to_string());
            lines.push(element_line("Logo", header.logo.as_ref(), |e| {
                e.attr("src").unwrap_or_default()
            }));
            lines.push(element_line("Name", header.site_name.as_ref(), Element::text));
            lines.push(String::new());
            if header.menu.is_some() {
                lines.extend(format_nav(&page.bindings().path));
            }
        }
        None => lines.push("Header: (absent)".to_string()),
    }

    let footer = page.footer();
    lines.push(String::new());
    lines.push("Footer".to_string());
    lines.push(element_line("Year", footer.year.as_ref(), Element::text));
    lines.push(element_line("Name", footer.name.as_ref(), Element::text));
    lines.push(element_line("SCIO", footer.scio.as_ref(), Element::text));
    lines.push(element_line("Badge", footer.oscr_badge.as_ref(), |e| {
        e.attr("src").unwrap_or_default()
    }));
    lines
}

pub fn print_hydrate_output(page: &Page, resource: &str) {
    for line in format_hydrate_output(page, resource) {
        println!("{}", line);
    }
}

/// Slide listing for one slideshow.
pub fn format_slideshow_output(show: &Slideshow) -> Vec<String> {
    let state = match show.state() {
        TimerState::Running => "running",
        TimerState::Stopped => "stopped",
    };
    let mut lines = vec![format!("{} ({} slides, {})", show.id(), show.len(), state)];
    for (i, image) in show.images().iter().enumerate() {
        lines.push(format!(
            "{}{}",
            INDENT,
            entry_line(i + 1, image.alt_text(), &image.src, i == show.index())
        ));
        if let Some(caption) = image.caption_text() {
            lines.push(format!("{INDENT}{INDENT}Caption: {caption}"));
        }
    }
    lines
}

pub fn print_slideshow_output(show: &Slideshow) {
    for line in format_slideshow_output(show) {
        println!("{}", line);
    }
}
