//! Heading outline extraction for tables of contents
//!
//! Headings are found with a line-oriented scan of the raw markdown, so a
//! `#` line inside a fenced code block is reported like any other heading.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

lazy_static! {
    // `\s+` may cross a line break, so "#\nText" is a level-1 heading "Text"
    static ref HEADING_RE: Regex = Regex::new(r"(?m)^(#{1,6})\s+(.+)$").unwrap();
    static ref NON_SLUG_RE: Regex = Regex::new(r"[^[:word:]\s-]").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref HYPHENS_RE: Regex = Regex::new(r"-+").unwrap();
}

/// One entry of a document outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Anchor id, unique within one extraction
    pub id: String,
    /// Heading text, trimmed
    pub text: String,
    /// Number of leading `#` characters (1-6)
    pub level: u8,
}

/// Extract a flat, document-ordered outline from markdown text
pub fn extract_headings(content: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut used_ids: HashSet<String> = HashSet::new();

    for caps in HEADING_RE.captures_iter(content) {
        let level = caps[1].len() as u8;
        let text = caps[2].trim().to_string();
        let id = unique_id(slugify(&text), &used_ids);

        used_ids.insert(id.clone());
        headings.push(Heading { id, text, level });
    }

    headings
}

/// Turn heading text into an anchor slug.
///
/// Lowercases, drops everything except ASCII word characters, whitespace and
/// hyphens, then turns whitespace runs into `-` and squeezes repeated `-`.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = NON_SLUG_RE.replace_all(&lower, "");
    let hyphenated = WHITESPACE_RE.replace_all(&stripped, "-");
    HYPHENS_RE.replace_all(&hyphenated, "-").into_owned()
}

/// Append the first free `-N` suffix when `base` is taken
fn unique_id(base: String, used: &HashSet<String>) -> String {
    if !used.contains(&base) {
        return base;
    }
    (1..)
        .map(|counter| format!("{}-{}", base, counter))
        .find(|candidate| !used.contains(candidate))
        .unwrap_or(base)
}
