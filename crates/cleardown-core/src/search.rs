//! Plain-text search
//!
//! Finds every occurrence of a query inside rendered text. Used by callers
//! that highlight search hits in a cleared document, where the hit offsets
//! must refer to the flattened string.

/// Byte offsets of every occurrence of `query` in `text`, in order.
///
/// Occurrences may overlap (`"aa"` occurs twice in `"aaa"`). Matching is
/// ASCII-case-insensitive when `ignore_case` is set; other characters always
/// compare exactly, which keeps the reported offsets valid for `text`. An
/// empty query or empty text yields no hits.
pub fn indexes_of(text: &str, query: &str, ignore_case: bool) -> Vec<usize> {
    let mut hits = Vec::new();
    if text.is_empty() || query.is_empty() || query.len() > text.len() {
        return hits;
    }

    for start in 0..=(text.len() - query.len()) {
        if !text.is_char_boundary(start) || !text.is_char_boundary(start + query.len()) {
            continue;
        }
        let window = &text[start..start + query.len()];
        let hit = if ignore_case {
            window.eq_ignore_ascii_case(query)
        } else {
            window == query
        };
        if hit {
            hits.push(start);
        }
    }
    hits
}
