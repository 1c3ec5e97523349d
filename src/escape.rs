//! HTML escaping for externally sourced text.
//!
//! Content-document strings (site names, captions, alt text) are untrusted.
//! Everything that lands in markup goes through maud's escaper, which replaces
//! `&`, `<`, `>` and `"` with entities and leaves every other character,
//! backslash included, untouched. These functions expose that same escaper
//! for callers building markup outside a `html!` block.

use maud::html;
use serde_json::Value;

/// Escape a string for HTML text content or a double-quoted attribute.
pub fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

/// Escape an optional string. Absent values become the empty string.
pub fn escape_opt(text: Option<&str>) -> String {
    text.map(escape).unwrap_or_default()
}

/// Escape an arbitrary JSON value by its string form.
///
/// `null` renders as the empty string; strings render without quotes; every
/// other value uses its JSON text (`42`, `true`, `[1,2]`).
pub fn escape_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => escape(s),
        other => escape(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/a&gt;"
        );
    }

    #[test]
    fn backslash_passes_through() {
        assert_eq!(escape(r"C:\photos\a.jpg"), r"C:\photos\a.jpg");
    }

    #[test]
    fn output_never_contains_raw_special_characters() {
        let nasty = r#"<<script>>"&&"'\"#;
        let escaped = escape(nasty);
        // Every '&' left must begin one of the four entities
        let stripped = escaped
            .replace("&amp;", "")
            .replace("&lt;", "")
            .replace("&gt;", "")
            .replace("&quot;", "");
        assert!(!stripped.contains(['&', '<', '>', '"']));
    }

    #[test]
    fn absent_is_empty() {
        assert_eq!(escape_opt(None), "");
        assert_eq!(escape_value(&Value::Null), "");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_opt(Some("Gallery")), "Gallery");
    }

    #[test]
    fn json_values_use_string_form() {
        assert_eq!(escape_value(&json!("a<b")), "a&lt;b");
        assert_eq!(escape_value(&json!(2024)), "2024");
        assert_eq!(escape_value(&json!(true)), "true");
    }

    #[test]
    fn single_quote_is_not_escaped() {
        assert_eq!(escape("it's"), "it's");
    }
}
