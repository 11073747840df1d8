//! The markdown pattern set.
//!
//! One pattern per markup kind, assembled in fixed priority order. The five
//! line-anchored forms are regular expressions compiled once. The delimiter
//! run forms and the bracket forms are hand-written scanners, since their
//! adjacency conditions are lookaround assertions the regex engine does not
//! support.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Kind, Pattern};

static UNORDERED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[*+-] .+$").expect("unordered list pattern"));
static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6} .+$").expect("header pattern"));
static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^> .+$").expect("quote pattern"));
static HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[-_*]{3}$").expect("horizontal rule pattern"));
static ORDERED_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\d+\. .+$").expect("ordered list pattern"));

/// Build the markdown pattern table in priority order.
pub fn markdown_patterns() -> Vec<Pattern> {
    vec![
        Pattern::new(Kind::UnorderedListItem, |text, from| {
            find_line(&UNORDERED_LIST, text, from)
        }),
        Pattern::new(Kind::Header, |text, from| find_line(&HEADER, text, from)),
        Pattern::new(Kind::Quote, |text, from| find_line(&QUOTE, text, from)),
        Pattern::new(Kind::Italic, |text, from| {
            find_delimited(text, from, &['*', '_'], 1, false, false)
        }),
        Pattern::new(Kind::Bold, |text, from| {
            find_delimited(text, from, &['*', '_'], 2, false, false)
        }),
        Pattern::new(Kind::Strike, |text, from| {
            find_delimited(text, from, &['~'], 2, false, false)
        }),
        Pattern::new(Kind::Rule, |text, from| {
            find_line(&HORIZONTAL_RULE, text, from)
        }),
        Pattern::new(Kind::InlineCode, |text, from| {
            find_delimited(text, from, &['`'], 1, false, true)
        }),
        Pattern::new(Kind::BlockCode, |text, from| {
            find_delimited(text, from, &['`'], 3, true, true)
        }),
        Pattern::new(Kind::OrderedListItem, |text, from| {
            find_line(&ORDERED_LIST, text, from)
        }),
        Pattern::new(Kind::Image, |text, from| find_bracketed(text, from, true)),
        Pattern::new(Kind::Link, |text, from| find_bracketed(text, from, false)),
    ]
}

fn find_line(pattern: &Regex, text: &str, from: usize) -> Option<(usize, usize)> {
    pattern
        .find_at(text, from)
        .map(|found| (found.start(), found.end()))
}

/// Find the leftmost `marker`-delimited span at or after `from`.
///
/// `width` is the delimiter run length, `multiline` lets the content cross
/// line breaks and `code` forbids a whitespace first content character.
fn find_delimited(
    text: &str,
    from: usize,
    markers: &[char],
    width: usize,
    multiline: bool,
    code: bool,
) -> Option<(usize, usize)> {
    for (offset, c) in text[from..].char_indices() {
        let at = from + offset;
        if markers.contains(&c) {
            if let Some(end) = delimited_span(text, at, c, width, multiline, code) {
                return Some((at, end));
            }
        }
    }
    None
}

/// Try to match a delimited span whose opening run starts exactly at `at`.
/// Returns the end offset one past the closing run.
fn delimited_span(
    text: &str,
    at: usize,
    marker: char,
    width: usize,
    multiline: bool,
    code: bool,
) -> Option<usize> {
    // a run continuing an earlier occurrence of the marker never opens a span
    if text[..at].ends_with(marker) {
        return None;
    }
    let run = text[at..].chars().take_while(|&c| c == marker).count();
    // opener and closer back to back form a legal span with empty inner
    // text. A doubled single-character delimiter is excluded: `**` reads as
    // an opener of the two-character form, never as an empty span.
    if width > 1 && run == 2 * width {
        return Some(at + 2 * width);
    }
    if run != width {
        return None;
    }
    let content = at + width;
    let first = text[content..].chars().next()?;
    if code && first.is_whitespace() {
        return None;
    }
    for (offset, c) in text[content..].char_indices() {
        let position = content + offset;
        if c == '\n' && !multiline {
            return None;
        }
        if c == marker && closes_at(text, position, marker, width) {
            return Some(position + width);
        }
    }
    None
}

/// Whether a closing run sits at `at`: `width` markers not followed by the
/// marker again.
fn closes_at(text: &str, at: usize, marker: char, width: usize) -> bool {
    let run = text[at..].chars().take_while(|&c| c == marker).count();
    run == width
}

/// Find the leftmost `[label](dest)` link or `![alt](dest)` image at or
/// after `from`.
fn find_bracketed(text: &str, from: usize, image: bool) -> Option<(usize, usize)> {
    for (offset, c) in text[from..].char_indices() {
        let at = from + offset;
        let opens = if image {
            c == '!' && text[at + 1..].starts_with('[')
        } else {
            c == '[' && !text[..at].ends_with('[')
        };
        if opens {
            if let Some(end) = bracket_span(text, at, image) {
                return Some((at, end));
            }
        }
    }
    None
}

/// Try to match a bracket pair construct starting exactly at `at`.
///
/// Both parts sit on one line. The label's closing bracket is the rightmost
/// `]` directly followed by `(` whose parenthesized part still closes before
/// the line ends; the closing parenthesis is the rightmost `)` not followed
/// by another `)`. A link needs at least one character in each part, an
/// image allows both to be empty.
fn bracket_span(text: &str, at: usize, image: bool) -> Option<usize> {
    let open = if image { at + 1 } else { at };
    let line_end = text[open..].find('\n').map_or(text.len(), |p| open + p);
    let line = text[open..line_end].as_bytes();
    let min_close = if image { 1 } else { 2 };
    for close in (min_close..line.len()).rev() {
        if line[close] != b']' || line.get(close + 1) != Some(&b'(') {
            continue;
        }
        let min_end = close + 2 + usize::from(!image);
        for end in (min_end..line.len()).rev() {
            if line[end] == b')' && line.get(end + 1) != Some(&b')') {
                return Some(open + end + 1);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::Patterns;
    use super::*;

    fn first(text: &str) -> Option<(Kind, usize, usize)> {
        Patterns::new()
            .find_next(text, 0)
            .map(|found| (found.kind, found.start, found.end))
    }

    #[test]
    fn test_unordered_list_lines() {
        assert_eq!(first("* item"), Some((Kind::UnorderedListItem, 0, 6)));
        assert_eq!(first("+ item"), Some((Kind::UnorderedListItem, 0, 6)));
        assert_eq!(first("- item"), Some((Kind::UnorderedListItem, 0, 6)));
        assert_eq!(first("a * b"), None);
        assert_eq!(first("*item"), None);
    }

    #[test]
    fn test_header_lines() {
        assert_eq!(first("# one"), Some((Kind::Header, 0, 5)));
        assert_eq!(first("###### six"), Some((Kind::Header, 0, 10)));
        assert_eq!(first("####### seven"), None);
        assert_eq!(first("#nospace"), None);
        assert_eq!(first("# "), None);
        assert_eq!(first("text\n## two"), Some((Kind::Header, 5, 11)));
    }

    #[test]
    fn test_quote_lines() {
        assert_eq!(first("> wise"), Some((Kind::Quote, 0, 6)));
        assert_eq!(first(">tight"), None);
    }

    #[test]
    fn test_horizontal_rule_lines() {
        assert_eq!(first("***"), Some((Kind::Rule, 0, 3)));
        assert_eq!(first("---"), Some((Kind::Rule, 0, 3)));
        assert_eq!(first("___"), Some((Kind::Rule, 0, 3)));
        // any mix of the three characters counts
        assert_eq!(first("*-_"), Some((Kind::Rule, 0, 3)));
        assert_eq!(first("----"), None);
        assert_eq!(first("before\n---"), Some((Kind::Rule, 7, 10)));
    }

    #[test]
    fn test_ordered_list_lines() {
        assert_eq!(first("10. item"), Some((Kind::OrderedListItem, 0, 8)));
        assert_eq!(first("3.item"), None);
        assert_eq!(first("see 1. x"), None);
    }

    #[test]
    fn test_italic_spans() {
        assert_eq!(first("*x*"), Some((Kind::Italic, 0, 3)));
        assert_eq!(first("_x_"), Some((Kind::Italic, 0, 3)));
        assert_eq!(first("a *two words* b"), Some((Kind::Italic, 2, 13)));
        assert_eq!(first("*unclosed"), None);
    }

    #[test]
    fn test_bold_spans() {
        assert_eq!(first("**x**"), Some((Kind::Bold, 0, 5)));
        assert_eq!(first("__x__"), Some((Kind::Bold, 0, 5)));
    }

    #[test]
    fn test_doubled_run_is_not_an_italic_span() {
        // `**` opens bold; a lone pair with no closer is plain text
        assert_eq!(first("**"), None);
        assert_eq!(first("``"), None);
    }

    #[test]
    fn test_back_to_back_delimiters_make_empty_spans() {
        assert_eq!(first("****"), Some((Kind::Bold, 0, 4)));
        assert_eq!(first("~~~~"), Some((Kind::Strike, 0, 4)));
    }

    #[test]
    fn test_odd_delimiter_runs_do_not_match() {
        assert_eq!(first("a***b"), None);
        assert_eq!(first("***a***"), None);
        assert_eq!(first("******"), None);
    }

    #[test]
    fn test_lazy_close_keeps_trailing_marker_in_content() {
        // the closing run is the earliest one not extended by the marker
        assert_eq!(first("**a***"), Some((Kind::Bold, 0, 6)));
        assert_eq!(first("*a**b*"), Some((Kind::Italic, 0, 4)));
    }

    #[test]
    fn test_strike_spans() {
        assert_eq!(first("~~gone~~"), Some((Kind::Strike, 0, 8)));
        assert_eq!(first("~~open"), None);
        assert_eq!(first("~~~x~~"), None);
    }

    #[test]
    fn test_inline_code_spans() {
        assert_eq!(first("`x`"), Some((Kind::InlineCode, 0, 3)));
        assert_eq!(first("`let x = 1;`"), Some((Kind::InlineCode, 0, 12)));
        assert_eq!(first("` x`"), None);
        assert_eq!(first("``x``"), None);
    }

    #[test]
    fn test_inline_code_stays_on_one_line() {
        assert_eq!(first("`a\nb`"), None);
    }

    #[test]
    fn test_block_code_spans() {
        assert_eq!(first("```code```"), Some((Kind::BlockCode, 0, 10)));
        assert_eq!(first("```a\nb```"), Some((Kind::BlockCode, 0, 9)));
        assert_eq!(first("``` x```"), None);
    }

    #[test]
    fn test_link_matches() {
        assert_eq!(first("[title](http://x.com)"), Some((Kind::Link, 0, 21)));
        assert_eq!(first("a [x](u) b"), Some((Kind::Link, 2, 8)));
        // label and destination both need content
        assert_eq!(first("[](u)"), None);
        assert_eq!(first("[a]()"), None);
        assert_eq!(first("[a] (u)"), None);
    }

    #[test]
    fn test_link_label_may_contain_brackets() {
        // the label closes at the rightmost bracket followed by a group
        assert_eq!(first("[[x]](u)"), Some((Kind::Link, 0, 8)));
    }

    #[test]
    fn test_image_matches() {
        assert_eq!(first("![alt](http://x.png)"), Some((Kind::Image, 0, 20)));
        // alt and destination may be empty for images
        assert_eq!(first("![](u)"), Some((Kind::Image, 0, 6)));
        assert_eq!(first("![a]()"), Some((Kind::Image, 0, 6)));
        assert_eq!(first("!(u)[a]"), None);
    }

    #[test]
    fn test_image_beats_link_on_the_same_region() {
        assert_eq!(first("![a](u)"), Some((Kind::Image, 0, 7)));
    }

    #[test]
    fn test_leftmost_occurrence_wins() {
        assert_eq!(first("a [x](u) **b**"), Some((Kind::Link, 2, 8)));
    }

    #[test]
    fn test_table_order_breaks_same_start_ties() {
        // the whole line is a list item even though an italic span also
        // starts at position zero
        assert_eq!(first("* a* b"), Some((Kind::UnorderedListItem, 0, 6)));
    }
}
