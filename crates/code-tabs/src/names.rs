//! Element and attribute names recognized in embedded markup.

/// Default tag of the hosting element.
pub const HOST_TAG: &str = "code-tabs";

/// Default tag of a single code sample inside a host.
pub const PANE_TAG: &str = "code-pane";

/// Default attribute carrying the line-numbering directive.
pub const LINE_NUMBERS_ATTR: &str = "linenums";

pub(crate) const CLASS_ATTR: &str = "class";
pub(crate) const LANGUAGE_ATTR: &str = "language";
pub(crate) const PATH_ATTR: &str = "path";
pub(crate) const REGION_ATTR: &str = "region";
pub(crate) const TITLE_ATTR: &str = "title";

/// Marker names used to locate hosts and panes.
///
/// [`MarkupNames::default`] yields `code-tabs`, `code-pane` and `linenums`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNames {
    /// Tag of the hosting element.
    pub host_tag: String,
    /// Tag of each code sample element.
    pub pane_tag: String,
    /// Attribute carrying the line-numbering directive, on both host and panes.
    pub line_numbers_attr: String,
}

impl Default for MarkupNames {
    fn default() -> Self {
        Self {
            host_tag: HOST_TAG.to_owned(),
            pane_tag: PANE_TAG.to_owned(),
            line_numbers_attr: LINE_NUMBERS_ATTR.to_owned(),
        }
    }
}
