//! Attribute storage that keeps "absent" distinct from "empty".

use std::borrow::Cow;

use quick_xml::escape::{resolve_html5_entity, unescape_with};
use quick_xml::events::BytesStart;

/// Attributes of a single element, in source order.
///
/// Names are stored ASCII-lowercased and looked up case-insensitively, as
/// HTML does. A valueless attribute (`<code-pane linenums>`) is present with
/// an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `name`, or `None` if the attribute is absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether `name` is present, regardless of its value.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set `name` to `value`, replacing any existing value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            entry.1 = value;
        } else {
            self.entries.push((name.to_ascii_lowercase(), value));
        }
    }

    /// Iterate over `(name, value)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read attributes from a start tag.
    ///
    /// Unquoted and valueless attributes are accepted. When a name repeats,
    /// the first occurrence wins. Character references in values are decoded,
    /// including HTML5 named entities; a value that fails to decode is kept
    /// raw.
    pub(crate) fn from_start(start: &BytesStart<'_>) -> Self {
        let mut attributes = Self::default();
        let mut raw_attrs = start.html_attributes();
        raw_attrs.with_checks(false);

        for attr in raw_attrs.flatten() {
            let name = String::from_utf8_lossy(attr.key.as_ref()).to_ascii_lowercase();
            if attributes.contains(&name) {
                continue;
            }
            let raw = String::from_utf8_lossy(&attr.value);
            let value = unescape_with(&raw, resolve_html5_entity)
                .map_or_else(|_| raw.to_string(), Cow::into_owned);
            attributes.entries.push((name, value));
        }

        attributes
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quick_xml::events::Event;
    use quick_xml::reader::Reader;

    use super::*;

    fn parse_start(tag: &str) -> Attributes {
        let mut reader = Reader::from_str(tag);
        match reader.read_event().unwrap() {
            Event::Start(e) | Event::Empty(e) => Attributes::from_start(&e),
            other => panic!("expected start tag, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_vs_empty() {
        let attrs = parse_start(r#"<code-pane title="">"#);
        assert_eq!(attrs.get("title"), Some(""));
        assert_eq!(attrs.get("language"), None);
    }

    #[test]
    fn test_valueless_attribute_is_empty() {
        let attrs = parse_start("<code-pane linenums>");
        assert_eq!(attrs.get("linenums"), Some(""));
    }

    #[test]
    fn test_unquoted_and_single_quoted_values() {
        let attrs = parse_start("<code-pane language=ts title='Main file'>");
        assert_eq!(attrs.get("language"), Some("ts"));
        assert_eq!(attrs.get("title"), Some("Main file"));
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let attrs = parse_start(r#"<code-pane LineNums="5">"#);
        assert_eq!(attrs.get("linenums"), Some("5"));
        assert_eq!(attrs.get("LINENUMS"), Some("5"));
        assert_eq!(attrs.iter().next(), Some(("linenums", "5")));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let attrs = parse_start(r#"<code-pane title="first" title="second">"#);
        assert_eq!(attrs.get("title"), Some("first"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_entities_are_decoded() {
        let attrs = parse_start(r#"<code-pane title="A &amp; B&nbsp;&#x43;">"#);
        assert_eq!(attrs.get("title"), Some("A & B\u{a0}C"));
    }

    #[test]
    fn test_unknown_entity_keeps_raw_value() {
        let attrs = parse_start(r#"<code-pane title="a &bogus; b">"#);
        assert_eq!(attrs.get("title"), Some("a &bogus; b"));
    }

    #[test]
    fn test_set_replaces_existing() {
        let mut attrs = Attributes::new();
        assert!(attrs.is_empty());
        attrs.set("LineNums", "1");
        attrs.set("linenums", "false");
        assert_eq!(attrs.get("linenums"), Some("false"));
        assert_eq!(attrs.len(), 1);
    }
}
