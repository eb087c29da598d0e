//! Host elements that carry code tabs content.

use crate::attributes::Attributes;
use crate::extractor::TabExtractor;
use crate::markup::find_elements;
use crate::names::MarkupNames;
use crate::record::TabGroup;

/// The element hosting a tab group.
///
/// Holds the host's own attributes and `code_tabs_content`, the original
/// inner markup of the host captured before any other processing. The content
/// is author-supplied and trusted: it is inspected structurally and passed
/// through to [`TabRecord::code`](crate::TabRecord::code) without sanitization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostElement {
    attributes: Attributes,
    code_tabs_content: String,
}

impl HostElement {
    /// Create a host with the given content and no attributes.
    #[must_use]
    pub fn new(code_tabs_content: impl Into<String>) -> Self {
        Self {
            attributes: Attributes::new(),
            code_tabs_content: code_tabs_content.into(),
        }
    }

    /// Set an attribute on the host.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Find every outermost `<code-tabs>` element in `document`.
    ///
    /// Each host's content is its inner markup, verbatim.
    pub fn find_all(document: &str) -> Vec<Self> {
        Self::find_all_named(document, &MarkupNames::default())
    }

    pub(crate) fn find_all_named(document: &str, names: &MarkupNames) -> Vec<Self> {
        let hosts: Vec<Self> = find_elements(document, &names.host_tag)
            .into_iter()
            .map(|element| Self {
                attributes: element.attributes,
                code_tabs_content: element.inner.to_owned(),
            })
            .collect();
        tracing::debug!(host_count = hosts.len(), tag = %names.host_tag, "Found tab hosts");
        hosts
    }

    /// Value of attribute `name`, or `None` if absent.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Original inner markup of the host.
    pub fn code_tabs_content(&self) -> &str {
        &self.code_tabs_content
    }

    /// Build the tab group from this host's own content.
    pub fn build_tab_group(&self) -> TabGroup {
        TabExtractor::new().build_tab_group(self, &self.code_tabs_content)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_find_all_captures_attributes_and_content() {
        let document = r#"<h1>Guide</h1>
<code-tabs linenums="1"><code-pane title="A">a</code-pane></code-tabs>
<p>Between</p>
<code-tabs><code-pane title="B">b</code-pane></code-tabs>"#;
        let hosts = HostElement::find_all(document);

        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[0].attribute("linenums"), Some("1"));
        assert_eq!(
            hosts[0].code_tabs_content(),
            r#"<code-pane title="A">a</code-pane>"#
        );
        assert_eq!(hosts[1].attribute("linenums"), None);
        assert_eq!(
            hosts[1].code_tabs_content(),
            r#"<code-pane title="B">b</code-pane>"#
        );
    }

    #[test]
    fn test_find_all_without_hosts() {
        assert!(HostElement::find_all("<p>No tabs here</p>").is_empty());
    }

    #[test]
    fn test_build_tab_group_uses_own_content() {
        let host = HostElement::new(r"<code-pane>a</code-pane><code-pane>b</code-pane>")
            .with_attribute("linenums", "false");
        let group = host.build_tab_group();

        assert_eq!(group.len(), 2);
        assert_eq!(group.default_line_number_spec(), Some("false"));
        assert_eq!(group.tabs()[1].code(), "b");
        assert_eq!(group.tabs()[1].line_number_spec(), Some("false"));
    }

    #[test]
    fn test_with_attribute() {
        let host = HostElement::new("").with_attribute("linenums", "");
        assert_eq!(host.attribute("linenums"), Some(""));
        assert_eq!(host.attributes().len(), 1);
    }
}
