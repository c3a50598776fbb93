//! Chunk syntax: the `@INLINE` marker and `[[+field]]` placeholders.

use crate::domain::model::{Fields, TemplateRef};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Marks a template parameter whose remaining text is the chunk body itself.
pub const INLINE_PREFIX: &str = "@INLINE";

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[\+([A-Za-z0-9_.\-]+)\]\]").expect("placeholder pattern is valid")
});

impl TemplateRef {
    /// Parses a `tpl`-style parameter. Blank values mean no template.
    ///
    /// `@INLINE` must be followed by one whitespace character, which is
    /// dropped; everything after it is the body, verbatim.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim_start();
        if value.trim_end().is_empty() {
            return None;
        }

        if let Some(rest) = value.strip_prefix(INLINE_PREFIX) {
            let mut chars = rest.chars();
            if chars.next().is_some_and(char::is_whitespace) {
                return Some(TemplateRef::Inline(chars.as_str().to_string()));
            }
        }

        Some(TemplateRef::Named(value.trim_end().to_string()))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TemplateRef::Inline(_) => "inline",
            TemplateRef::Named(_) => "named",
        }
    }
}

/// Replaces every `[[+name]]` token with its field value. Tokens without a
/// matching field are dropped, the way the CMS parser strips unset placeholders.
pub fn substitute_placeholders(body: &str, fields: &Fields) -> String {
    PLACEHOLDER
        .replace_all(body, |caps: &Captures| {
            fields.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_inline() {
        assert_eq!(
            TemplateRef::parse("@INLINE <li>[[+name]]</li>"),
            Some(TemplateRef::Inline("<li>[[+name]]</li>".to_string()))
        );
        assert_eq!(
            TemplateRef::parse("@INLINE\n<li>[[+name]]</li>\n"),
            Some(TemplateRef::Inline("<li>[[+name]]</li>\n".to_string()))
        );
        assert_eq!(
            TemplateRef::parse("@INLINE  two spaces"),
            Some(TemplateRef::Inline(" two spaces".to_string()))
        );
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(
            TemplateRef::parse("contentTypeRow"),
            Some(TemplateRef::Named("contentTypeRow".to_string()))
        );
        // No separator after the marker, so this is a chunk name.
        assert_eq!(
            TemplateRef::parse("@INLINEchunk"),
            Some(TemplateRef::Named("@INLINEchunk".to_string()))
        );
        assert_eq!(
            TemplateRef::parse(" rowTpl \n"),
            Some(TemplateRef::Named("rowTpl".to_string()))
        );
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(TemplateRef::parse(""), None);
        assert_eq!(TemplateRef::parse("   "), None);
    }

    #[test]
    fn test_substitute_placeholders() {
        let f = fields(&[("name", "HTML"), ("mime_type", "text/html")]);
        assert_eq!(
            substitute_placeholders("<b>[[+name]]</b> ([[+mime_type]])", &f),
            "<b>HTML</b> (text/html)"
        );
    }

    #[test]
    fn test_unknown_placeholders_are_removed() {
        let f = fields(&[("name", "HTML")]);
        assert_eq!(
            substitute_placeholders("[[+name]][[+missing]]!", &f),
            "HTML!"
        );
    }

    #[test]
    fn test_non_placeholder_tags_are_untouched() {
        let f = fields(&[("name", "HTML")]);
        assert_eq!(
            substitute_placeholders("[[*pagetitle]] [[~1]] [[+name]]", &f),
            "[[*pagetitle]] [[~1]] HTML"
        );
    }

    #[test]
    fn test_values_are_not_reparsed() {
        let f = fields(&[("a", "[[+b]]"), ("b", "oops")]);
        assert_eq!(substitute_placeholders("[[+a]]", &f), "[[+b]]");
    }
}
