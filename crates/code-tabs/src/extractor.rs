//! Conversion of host content into tab records.

use crate::host::HostElement;
use crate::markup::find_elements;
use crate::names::MarkupNames;
use crate::record::{TabGroup, TabRecord};

/// Extracts code panes from host content.
///
/// Each call scans its input with a fresh reader and keeps no state between
/// calls, so building the same group twice yields identical results.
///
/// # Example
///
/// ```
/// use code_tabs::{HostElement, TabExtractor};
///
/// let host = HostElement::new("").with_attribute("linenums", "1");
/// let content = r#"<code-pane title="A" language="ts">let x=1;</code-pane>
/// <code-pane title="B" linenums="false">let y=2;</code-pane>"#;
///
/// let group = TabExtractor::new().build_tab_group(&host, content);
///
/// assert_eq!(group.len(), 2);
/// assert_eq!(group.tabs()[0].line_number_spec(), Some("1"));
/// assert_eq!(group.tabs()[1].line_number_spec(), Some("false"));
/// assert_eq!(group.tabs()[1].language(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TabExtractor {
    names: MarkupNames,
}

impl TabExtractor {
    /// Create an extractor for `<code-tabs>` / `<code-pane>` / `linenums`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom marker names.
    #[must_use]
    pub fn with_names(names: MarkupNames) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &MarkupNames {
        &self.names
    }

    /// Line-numbering default declared on the host, if any.
    pub fn resolve_default_line_number_spec(&self, host: &HostElement) -> Option<String> {
        host.attribute(&self.names.line_numbers_attr)
            .map(str::to_owned)
    }

    /// Extract one record per pane in `content_html`, in document order.
    ///
    /// Panes are matched anywhere in the fragment. A pane nested inside
    /// another pane is part of the outer pane's code, not a tab of its own.
    /// Malformed markup never fails: unmatched panes simply produce no records.
    pub fn extract_tabs(
        &self,
        content_html: &str,
        default_line_number_spec: Option<&str>,
    ) -> Vec<TabRecord> {
        find_elements(content_html, &self.names.pane_tag)
            .iter()
            .map(|pane| {
                TabRecord::from_pane(
                    &pane.attributes,
                    pane.inner,
                    &self.names.line_numbers_attr,
                    default_line_number_spec,
                )
            })
            .collect()
    }

    /// Build the tab group for `host` from `content_html`.
    ///
    /// The host default is read once, before any pane is processed.
    pub fn build_tab_group(&self, host: &HostElement, content_html: &str) -> TabGroup {
        let default_line_number_spec = self.resolve_default_line_number_spec(host);
        let tabs = self.extract_tabs(content_html, default_line_number_spec.as_deref());
        tracing::debug!(
            tab_count = tabs.len(),
            default_line_number_spec = ?default_line_number_spec,
            "Built tab group"
        );
        TabGroup::new(tabs, default_line_number_spec)
    }

    /// Find host elements in a full document using this extractor's names.
    pub fn find_hosts(&self, document: &str) -> Vec<HostElement> {
        HostElement::find_all_named(document, &self.names)
    }
}
