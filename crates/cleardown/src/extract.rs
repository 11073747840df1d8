//! Helpers that pull the interesting parts out of matched markup.

/// Parts of a matched image: `![alt](url "title")`.
pub(crate) struct ImageParts<'a> {
    pub alt: &'a str,
    pub url: &'a str,
    pub title: Option<&'a str>,
}

/// Count the leading `#` characters of a matched header line.
pub(crate) fn header_level(matched: &str) -> u8 {
    matched.chars().take_while(|&c| c == '#').count() as u8
}

/// The numeric marker of an ordered list line, dot included.
pub(crate) fn ordered_marker(matched: &str) -> Option<&str> {
    let dot = matched.find('.')?;
    Some(&matched[..=dot])
}

/// Split a matched link into label and destination.
///
/// The split point is the rightmost `](` that leaves at least one character
/// on each side, mirroring how the pattern matched in the first place.
pub(crate) fn link_parts(matched: &str) -> Option<(&str, &str)> {
    if matched.len() < 5 || !matched.starts_with('[') || !matched.ends_with(')') {
        return None;
    }
    let bytes = matched.as_bytes();
    for j in (2..=matched.len() - 4).rev() {
        if bytes[j] == b']' && bytes[j + 1] == b'(' {
            return Some((&matched[1..j], &matched[j + 2..matched.len() - 1]));
        }
    }
    None
}

/// Split a matched image into alt text, url and optional title.
pub(crate) fn image_parts(matched: &str) -> Option<ImageParts<'_>> {
    if matched.len() < 5 || !matched.starts_with("![") || !matched.ends_with(')') {
        return None;
    }
    let bytes = matched.as_bytes();
    for j in (2..=matched.len() - 3).rev() {
        if bytes[j] == b']' && bytes[j + 1] == b'(' {
            let alt = &matched[2..j];
            let destination = &matched[j + 2..matched.len() - 1];
            let (url, title) = split_title(destination);
            return Some(ImageParts { alt, url, title });
        }
    }
    None
}

/// Split a trailing ` "title"` group off an image destination. Without one,
/// or with a blank title, the destination is the url as a whole.
fn split_title(destination: &str) -> (&str, Option<&str>) {
    if !destination.ends_with('"') {
        return (destination, None);
    }
    let body = &destination[..destination.len() - 1];
    let open = match body.rfind('"') {
        Some(open) if open >= 1 && body[..open].ends_with(' ') => open,
        _ => return (destination, None),
    };
    let title = &body[open + 1..];
    if title.trim().is_empty() {
        return (destination, None);
    }
    (&destination[..open - 1], Some(title))
}
