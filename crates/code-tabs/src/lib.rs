//! Tabbed code samples for embedded documentation markup.
//!
//! A `<code-tabs>` element in a documentation page holds several
//! `<code-pane>` elements, each describing one code sample. This crate turns
//! the host's original inner markup into an ordered [`TabGroup`] of
//! [`TabRecord`]s that a tab widget can render without further processing.
//!
//! ```html
//! <code-tabs linenums="1">
//!   <code-pane title="app.ts" language="ts" path="src/app.ts" region="imports">...</code-pane>
//!   <code-pane title="app.html" linenums="false">...</code-pane>
//! </code-tabs>
//! ```
//!
//! # Attribute resolution
//!
//! - `linenums` on a pane wins whenever present, even when empty. Otherwise
//!   the host's `linenums` applies, which may itself be absent.
//! - `path` and `region` default to `""`.
//! - `class`, `language` and `title` stay `None` when absent and are never
//!   inherited from the host.
//!
//! # Trust
//!
//! Content is author-supplied and treated as trusted. It is parsed only to
//! locate panes and read their attributes; pane markup is copied verbatim
//! into [`TabRecord::code`] and never sanitized or executed.
//!
//! # Example
//!
//! ```
//! use code_tabs::HostElement;
//!
//! let document = r#"<code-tabs linenums="1">
//! <code-pane title="A" language="ts">let x=1;</code-pane>
//! <code-pane title="B">let y=2;</code-pane>
//! </code-tabs>"#;
//!
//! let hosts = HostElement::find_all(document);
//! let group = hosts[0].build_tab_group();
//!
//! assert_eq!(group.len(), 2);
//! assert_eq!(group.tabs()[1].title(), Some("B"));
//! assert_eq!(group.tabs()[1].line_number_spec(), Some("1"));
//! ```

mod attributes;
mod extractor;
mod host;
mod markup;
mod names;
mod record;

pub use attributes::Attributes;
pub use extractor::TabExtractor;
pub use host::HostElement;
pub use names::{HOST_TAG, LINE_NUMBERS_ATTR, MarkupNames, PANE_TAG};
pub use record::{TabGroup, TabRecord};

/// Line-numbering default declared on `host`, using the default names.
pub fn resolve_default_line_number_spec(host: &HostElement) -> Option<String> {
    TabExtractor::new().resolve_default_line_number_spec(host)
}

/// Extract `<code-pane>` records from `content_html`, in document order.
pub fn extract_tabs(
    content_html: &str,
    default_line_number_spec: Option<&str>,
) -> Vec<TabRecord> {
    TabExtractor::new().extract_tabs(content_html, default_line_number_spec)
}

/// Build the tab group for `host` from `content_html`.
pub fn build_tab_group(host: &HostElement, content_html: &str) -> TabGroup {
    TabExtractor::new().build_tab_group(host, content_html)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PANES: &str = r#"<code-pane title="A" language="ts">let x=1;</code-pane><code-pane title="B">let y=2;</code-pane>"#;

    fn host_with_default(default: &str) -> HostElement {
        HostElement::new("").with_attribute(LINE_NUMBERS_ATTR, default)
    }

    #[test]
    fn test_build_tab_group_resolves_default_once() {
        let group = build_tab_group(&host_with_default("1"), PANES);

        assert_eq!(group.default_line_number_spec(), Some("1"));
        let specs: Vec<_> = group.iter().map(TabRecord::line_number_spec).collect();
        assert_eq!(specs, vec![Some("1"), Some("1")]);
    }

    #[test]
    fn test_free_functions_agree_with_extractor() {
        let host = host_with_default("1");
        let default = resolve_default_line_number_spec(&host);

        assert_eq!(default.as_deref(), Some("1"));
        assert_eq!(
            extract_tabs(PANES, default.as_deref()),
            build_tab_group(&host, PANES).into_tabs()
        );
    }

    #[test]
    fn test_host_without_default() {
        let group = build_tab_group(&HostElement::new(""), PANES);

        assert_eq!(group.default_line_number_spec(), None);
        assert!(group.iter().all(|tab| tab.line_number_spec().is_none()));
    }

    #[test]
    fn test_empty_content_is_empty_group() {
        let group = build_tab_group(&host_with_default("1"), "");

        assert!(group.is_empty());
        assert_eq!(group.default_line_number_spec(), Some("1"));
    }

    #[test]
    fn test_content_without_panes_is_empty_group() {
        let group = build_tab_group(&HostElement::new(""), "<p>Just prose</p>");
        assert!(group.is_empty());
    }

    #[test]
    fn test_document_to_groups() {
        let document = r#"<article>
<code-tabs linenums="1">
  <code-pane title="A">a</code-pane>
  <code-pane title="B" linenums="false">b</code-pane>
</code-tabs>
<code-tabs>
  <code-pane title="C" class="avoid">c</code-pane>
</code-tabs>
</article>"#;
        let groups: Vec<TabGroup> = HostElement::find_all(document)
            .iter()
            .map(HostElement::build_tab_group)
            .collect();

        assert_eq!(groups.len(), 2);
        let specs: Vec<_> = groups[0].iter().map(TabRecord::line_number_spec).collect();
        assert_eq!(specs, vec![Some("1"), Some("false")]);
        assert_eq!(groups[1].tabs()[0].style_class(), Some("avoid"));
        assert_eq!(groups[1].tabs()[0].line_number_spec(), None);
    }
}
