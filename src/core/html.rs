// src/core/html.rs
use select::document::Document;
use select::predicate::Name;

/// Text content of the `index`-th `<script>` element in document order.
pub fn nth_script_text(doc: &str, index: usize) -> Option<String> {
    Document::from(doc)
        .find(Name("script"))
        .nth(index)
        .map(|node| node.text())
}

/// Slice between the first `open` and the first `close` after it.
/// Both markers are excluded.
pub fn slice_between<'a>(s: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = s.find(open)? + open.len();
    let end = s[start..].find(close)? + start;
    Some(&s[start..end])
}
