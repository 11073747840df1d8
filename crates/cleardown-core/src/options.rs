//! Configuration options for markdown serialization

/// Options for writing an element tree back out as markdown.
///
/// The defaults are the canonical delimiters, chosen so that serializing a
/// freshly parsed canonical document reproduces it byte for byte.
#[derive(Debug, Clone)]
pub struct Options {
    /// Horizontal rule string
    pub hr: String,

    /// Bullet list marker
    pub bullet_list_marker: char,

    /// Fence string for block code
    pub fence: String,

    /// Emphasis delimiter
    pub em_delimiter: char,

    /// Strong delimiter
    pub strong_delimiter: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            hr: "***".to_string(),
            bullet_list_marker: '*',
            fence: "```".to_string(),
            em_delimiter: '*',
            strong_delimiter: "**".to_string(),
        }
    }
}
