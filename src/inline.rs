//! Inline emphasis and line-break rewriting.

use regex::Regex;
use std::sync::LazyLock;

/// Token that separates lines in formatted output
pub const LINE_BREAK: &str = "<br />";

// Emphasis never spans a line boundary.
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^\r\n]+?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^\r\n]+?)\*").unwrap());

/// Rewrites `**bold**` and `*italic*` and replaces every newline with [`LINE_BREAK`].
///
/// Bold has to run first, otherwise `**x**` would be misread as italics.
/// Markers without a closing partner are left untouched.
pub fn format_inline(text: &str) -> String {
    let bolded = BOLD.replace_all(text, "<strong>${1}</strong>");
    let emphasized = ITALIC.replace_all(&bolded, "<em>${1}</em>");
    emphasized.replace('\n', LINE_BREAK)
}
