//! Page-wide theme variables and the brand applier.
//!
//! The page root carries six CSS custom properties that every stylesheet
//! reads: `--brand`, `--brand-dark`, `--accent`, `--bg`, `--card` and
//! `--card-border`. They start from the stylesheet's own declarations and are
//! overwritten once per page load by [`apply_brand`]. `card` and
//! `card-border` are never supplied directly; they are mixed from `bg` and
//! `accent`.

use crate::color::mix;
use crate::config::BrandDefaults;
use crate::content::Brand;
use log::debug;
use std::collections::BTreeMap;

pub const BRAND: &str = "brand";
pub const BRAND_DARK: &str = "brand-dark";
pub const ACCENT: &str = "accent";
pub const BG: &str = "bg";
pub const CARD: &str = "card";
pub const CARD_BORDER: &str = "card-border";

/// Ratio of accent mixed into `bg` for `card`.
pub const CARD_MIX: f64 = 0.08;
/// Ratio of accent mixed into `card` for `card-border`.
pub const CARD_BORDER_MIX: f64 = 0.15;

/// Custom properties on the page root, keyed without the leading `--`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeVars {
    vars: BTreeMap<String, String>,
}

impl ThemeVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every `--name: value` declaration in a stylesheet.
    ///
    /// Later declarations win, as they would in the cascade for a single
    /// selector. Comments are skipped; anything that is not a custom
    /// property is ignored.
    pub fn from_css(css: &str) -> Self {
        let mut vars = Self::new();
        let css = strip_comments(css);
        for decl in css.split(['{', '}', ';']) {
            let Some((name, value)) = decl.split_once(':') else {
                continue;
            };
            let Some(name) = name.trim().strip_prefix("--") else {
                continue;
            };
            if !name.is_empty() {
                vars.set(name, value.trim());
            }
        }
        vars
    }

    /// Current value, trimmed. Empty values read as unset.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.vars.insert(name.to_string(), value.into());
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Render as a `:root { ... }` block.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.vars {
            css.push_str(&format!("    --{name}: {value};\n"));
        }
        css.push('}');
        css
    }
}

fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// The six theme colors after brand resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    pub brand: String,
    pub brand_dark: String,
    pub accent: String,
    pub bg: String,
    pub card: String,
    pub card_border: String,
}

impl ResolvedTheme {
    fn write_to(&self, vars: &mut ThemeVars) {
        vars.set(BRAND, &self.brand);
        vars.set(BRAND_DARK, &self.brand_dark);
        vars.set(ACCENT, &self.accent);
        vars.set(BG, &self.bg);
        vars.set(CARD, &self.card);
        vars.set(CARD_BORDER, &self.card_border);
    }
}

/// Resolve brand colors and write all six variables onto `vars`.
///
/// Each of primary, accent and bg comes from the brand if supplied (and
/// non-empty), else from the variable already on the page, else from
/// `defaults`. There is no separate dark variant: `brand-dark` repeats
/// primary. Colors are not validated; a malformed one mixes as white.
pub fn apply_brand(
    vars: &mut ThemeVars,
    brand: Option<&Brand>,
    defaults: &BrandDefaults,
) -> ResolvedTheme {
    let supplied = brand.cloned().unwrap_or_default();
    let primary = resolve(supplied.primary, vars, BRAND, &defaults.primary);
    let accent = resolve(supplied.accent, vars, ACCENT, &defaults.accent);
    let bg = resolve(supplied.bg, vars, BG, &defaults.bg);

    let card = mix(&bg, &accent, CARD_MIX);
    let card_border = mix(&card, &accent, CARD_BORDER_MIX);

    let theme = ResolvedTheme {
        brand_dark: primary.clone(),
        brand: primary,
        accent,
        bg,
        card,
        card_border,
    };
    debug!("resolved theme: {theme:?}");
    theme.write_to(vars);
    theme
}

fn resolve(given: Option<String>, vars: &ThemeVars, var: &str, fallback: &str) -> String {
    given
        .filter(|s| !s.is_empty())
        .or_else(|| vars.get(var).map(String::from))
        .unwrap_or_else(|| fallback.to_string())
}
