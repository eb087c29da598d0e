//! Best-effort structural scan of HTML fragments.
//!
//! Locates elements by tag name without building a tree. The reader is
//! configured for HTML-ish input: end tags are not checked against their
//! start tags, stray end tags are tolerated, and a bare `&` in text is kept
//! as text. A `<` that HTML reads as text (`a < b`, `x <= 1`) is blanked out
//! before the reader sees it. Only the tag being searched for is tracked for
//! nesting, so void elements such as `<br>` never need closing.

use std::borrow::Cow;

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::attributes::Attributes;

/// An element matched by [`find_elements`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element<'a> {
    pub(crate) attributes: Attributes,
    /// Inner markup, sliced verbatim from the input.
    pub(crate) inner: &'a str,
}

/// Element whose end tag has not been seen yet.
struct OpenElement {
    attributes: Attributes,
    inner_start: usize,
    /// Same-name elements opened inside this one.
    depth: usize,
}

/// Find every outermost `tag` element in `html`, in document order.
///
/// Elements nested inside a match belong to the match's inner markup and are
/// not reported separately. An element without an end tag extends to the end
/// of the input. A syntax error stops the scan; whatever was matched up to
/// that point is returned.
///
/// A self-closing `<code-pane/>` is reported as an element with empty inner
/// markup. Browsers ignore the `/` on custom elements and would make the
/// following siblings its children; this scan deliberately does not.
pub(crate) fn find_elements<'a>(html: &'a str, tag: &str) -> Vec<Element<'a>> {
    let scanned = mask_text_lt(html);
    let mut reader = Reader::from_str(&scanned);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.allow_dangling_amp = true;

    let mut elements = Vec::new();
    let mut open: Option<OpenElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if is_tag(e.name().as_ref(), tag) => match open.as_mut() {
                Some(current) => current.depth += 1,
                None => {
                    open = Some(OpenElement {
                        attributes: Attributes::from_start(&e),
                        inner_start: offset(reader.buffer_position(), html),
                        depth: 0,
                    });
                }
            },
            Ok(Event::Empty(e)) if open.is_none() && is_tag(e.name().as_ref(), tag) => {
                elements.push(Element {
                    attributes: Attributes::from_start(&e),
                    inner: "",
                });
            }
            Ok(Event::End(e)) if is_tag(e.name().as_ref(), tag) => {
                let Some(current) = open.as_mut() else {
                    continue;
                };
                if current.depth > 0 {
                    current.depth -= 1;
                    continue;
                }
                let tag_end = offset(reader.buffer_position(), html);
                let inner_end = html[..tag_end].rfind("</").unwrap_or(tag_end);
                if let Some(current) = open.take() {
                    elements.push(current.close(html, inner_end));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    position = reader.error_position(),
                    "Stopped scanning malformed markup"
                );
                break;
            }
        }
    }

    if let Some(current) = open {
        elements.push(current.close(html, html.len()));
    }

    elements
}

impl OpenElement {
    fn close(self, html: &str, inner_end: usize) -> Element<'_> {
        Element {
            attributes: self.attributes,
            inner: html.get(self.inner_start..inner_end).unwrap_or_default(),
        }
    }
}

fn is_tag(name: &[u8], tag: &str) -> bool {
    name.eq_ignore_ascii_case(tag.as_bytes())
}

/// Copy of `html` with every `<` that cannot open markup replaced by a space.
///
/// HTML treats `<` as text unless an ASCII letter, `/`, `!` or `?` follows it.
/// The XML reader would instead read a tag up to the next `>`, swallowing
/// end tags along the way. Markup is skipped over whole so that `<` inside
/// quoted attribute values and comments is left alone. Byte offsets are
/// unchanged, so reader positions index into the original input.
fn mask_text_lt(html: &str) -> Cow<'_, str> {
    let bytes = html.as_bytes();
    let mut masked: Option<Vec<u8>> = None;
    let mut pos = 0;

    while let Some(found) = bytes[pos..].iter().position(|&b| b == b'<') {
        let lt = pos + found;
        match bytes.get(lt + 1) {
            Some(&next) if next.is_ascii_alphabetic() || matches!(next, b'/' | b'!' | b'?') => {
                pos = markup_end(bytes, lt);
            }
            _ => {
                masked.get_or_insert_with(|| bytes.to_vec())[lt] = b' ';
                pos = lt + 1;
            }
        }
    }

    match masked {
        Some(masked) => String::from_utf8(masked).map_or(Cow::Borrowed(html), Cow::Owned),
        None => Cow::Borrowed(html),
    }
}

/// Offset just past the markup starting at `start`, or the input length.
fn markup_end(bytes: &[u8], start: usize) -> usize {
    let rest = &bytes[start..];
    let closer: Option<&[u8]> = if rest.starts_with(b"<!--") {
        Some(b"-->")
    } else if rest.starts_with(b"<![CDATA[") {
        Some(b"]]>")
    } else if rest.starts_with(b"<?") {
        Some(b"?>")
    } else {
        None
    };

    if let Some(closer) = closer {
        return rest
            .windows(closer.len())
            .position(|w| w == closer)
            .map_or(bytes.len(), |i| start + i + closer.len());
    }

    let mut quote = None;
    for (i, &b) in rest.iter().enumerate().skip(1) {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return start + i + 1,
            (None, _) => {}
        }
    }
    bytes.len()
}

/// Clamp a reader position to a byte offset into `html`.
fn offset(position: u64, html: &str) -> usize {
    usize::try_from(position).map_or(html.len(), |pos| pos.min(html.len()))
}
