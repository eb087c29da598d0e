//! Tab records produced by extraction.

use crate::attributes::Attributes;
use crate::names::{CLASS_ATTR, LANGUAGE_ATTR, PATH_ATTR, REGION_ATTR, TITLE_ATTR};

/// One code sample, ready for a tab widget.
///
/// Built once during extraction and never mutated afterwards. `line_number_spec`
/// is already resolved against the container default, so consumers must not
/// apply any further inheritance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TabRecord {
    #[cfg_attr(feature = "serde", serde(rename = "class"))]
    style_class: Option<String>,
    code: String,
    language: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "linenums"))]
    line_number_spec: Option<String>,
    path: String,
    region: String,
    title: Option<String>,
}

impl TabRecord {
    /// Build a record from a pane's attributes and inner markup.
    ///
    /// A pane's own line-numbering attribute wins whenever it is present, even
    /// when empty; otherwise the container default applies.
    pub(crate) fn from_pane(
        attributes: &Attributes,
        code: &str,
        line_numbers_attr: &str,
        default_line_number_spec: Option<&str>,
    ) -> Self {
        let owned = |name: &str| attributes.get(name).map(str::to_owned);

        Self {
            style_class: owned(CLASS_ATTR),
            code: code.to_owned(),
            language: owned(LANGUAGE_ATTR),
            line_number_spec: attributes
                .get(line_numbers_attr)
                .or(default_line_number_spec)
                .map(str::to_owned),
            path: owned(PATH_ATTR).unwrap_or_default(),
            region: owned(REGION_ATTR).unwrap_or_default(),
            title: owned(TITLE_ATTR),
        }
    }

    /// CSS class(es) for both the tab label and the rendered sample.
    pub fn style_class(&self) -> Option<&str> {
        self.style_class.as_deref()
    }

    /// Raw inner markup of the sample.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Language hint for highlighting; `None` means infer downstream.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Resolved line-numbering directive.
    pub fn line_number_spec(&self) -> Option<&str> {
        self.line_number_spec.as_deref()
    }

    /// Source file the sample was taken from, or `""`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Named region within [`path`](Self::path), or `""`.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Tab label.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

/// Ordered tabs of one host element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TabGroup {
    tabs: Vec<TabRecord>,
    #[cfg_attr(feature = "serde", serde(rename = "linenumsDefault"))]
    default_line_number_spec: Option<String>,
}

impl TabGroup {
    pub(crate) fn new(tabs: Vec<TabRecord>, default_line_number_spec: Option<String>) -> Self {
        Self {
            tabs,
            default_line_number_spec,
        }
    }

    /// Tabs in document order.
    pub fn tabs(&self) -> &[TabRecord] {
        &self.tabs
    }

    /// Line-numbering default read from the host element.
    pub fn default_line_number_spec(&self) -> Option<&str> {
        self.default_line_number_spec.as_deref()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TabRecord> {
        self.tabs.iter()
    }

    /// Consume the group, returning its tabs.
    pub fn into_tabs(self) -> Vec<TabRecord> {
        self.tabs
    }
}

impl<'a> IntoIterator for &'a TabGroup {
    type Item = &'a TabRecord;
    type IntoIter = std::slice::Iter<'a, TabRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.tabs.iter()
    }
}
