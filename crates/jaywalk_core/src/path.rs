//! Path rendering.
//!
//! Paths are a compatibility surface consumers match on, so the format
//! is fixed: object members join onto their parent with `/`, array
//! elements append a bracketed zero-based decimal index, and no
//! separator is inserted before a bracket. The traversal root is the
//! empty path and is never rendered with a leading separator, e.g.
//! `book[0]/title` and `[0][0]`.

/// Joins the member name `key` onto `parent`.
pub(crate) fn join_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}/{key}")
    }
}

/// Joins the element `index` onto `parent`.
pub(crate) fn join_index(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}
