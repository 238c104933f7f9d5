//! Literal-text regex helpers.
//!
//! User input is always escaped before it becomes a pattern, so queries and
//! confirmation fields never behave as regular expressions.

use regex::{Regex, RegexBuilder};

/// Escape `text` so it matches itself literally.
#[must_use]
pub fn literal_pattern(text: &str) -> String {
    regex::escape(text)
}

/// Characters with syntactic meaning in a browser `pattern` attribute.
const PATTERN_SYNTAX: &[char] = &[
    '^', '$', '\\', '.', '*', '+', '?', '(', ')', '[', ']', '{', '}', '|',
];

/// Escape `text` for use as an HTML `pattern` attribute.
///
/// Browsers compile the attribute in unicode-sets mode, which rejects identity
/// escapes such as `\#` or `\-`, so only pattern syntax characters are escaped.
#[must_use]
pub fn attribute_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if PATTERN_SYNTAX.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Case-insensitive literal substring matcher.
#[derive(Clone, Debug)]
pub struct LiteralMatcher {
    regex: Option<Regex>,
    needle: String,
}

impl LiteralMatcher {
    /// Build a matcher for `query`. An empty query matches everything.
    #[must_use]
    pub fn case_insensitive(query: &str) -> Self {
        let regex = RegexBuilder::new(&literal_pattern(query))
            .case_insensitive(true)
            .build()
            .ok();
        Self {
            regex,
            needle: query.to_lowercase(),
        }
    }

    /// Whether `text` contains the query.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().map_or_else(
            || text.to_lowercase().contains(&self.needle),
            |regex| regex.is_match(text),
        )
    }
}

/// Evaluate an HTML `pattern` attribute against `value`.
///
/// Browsers anchor the pattern to the whole value and ignore patterns that do
/// not compile, which is mirrored here.
#[must_use]
pub fn html_pattern_matches(pattern: &str, value: &str) -> bool {
    Regex::new(&format!("^(?:{pattern})$")).map_or(true, |regex| regex.is_match(value))
}
