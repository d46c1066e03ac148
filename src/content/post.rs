//! Post model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use super::heading::{extract_headings, Heading};

/// A blog post loaded from `<id>.<slug>.md`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Numeric prefix of the filename, `None` when it has no digits
    pub id: Option<i64>,

    /// Filename without the `.md` extension
    pub slug: String,

    /// Post title
    pub title: String,

    /// Words of the filename's slug segment
    pub subtitle: String,

    /// Short summary from front-matter
    pub description: String,

    /// Presentation color from the palette
    pub color: String,

    /// Markdown body, front-matter stripped
    pub content: String,

    /// Publication date
    pub date: Option<DateTime<Local>>,

    /// Post tags
    pub tags: Vec<String>,

    /// Full source file path
    pub full_source: PathBuf,

    /// Custom front-matter fields, nested so they never shadow the fields above
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Create a post from its filename and title
    pub fn new(file_name: &str, title: String, default_subtitle: &str) -> Self {
        Self {
            id: parse_id(file_name),
            slug: file_name
                .strip_suffix(".md")
                .unwrap_or(file_name)
                .to_string(),
            title,
            subtitle: parse_subtitle(file_name, default_subtitle),
            description: String::new(),
            color: String::new(),
            content: String::new(),
            date: None,
            tags: Vec::new(),
            full_source: PathBuf::from(file_name),
            extra: HashMap::new(),
        }
    }

    /// Outline of the post body
    pub fn headings(&self) -> Vec<Heading> {
        extract_headings(&self.content)
    }

    /// Whether `id` names this post, compared as decimal text.
    /// A post without a numeric id matches nothing.
    pub fn matches_id(&self, id: &str) -> bool {
        self.id.map(|n| n.to_string() == id).unwrap_or(false)
    }
}

/// Leading integer of the text before the first `.`
///
/// Accepts leading whitespace and a sign, then reads digits until the first
/// non-digit, so `"12abc"` gives 12 and `"abc"` gives `None`.
fn parse_id(file_name: &str) -> Option<i64> {
    let prefix = file_name.split('.').next().unwrap_or("").trim_start();
    let (negative, digits) = match prefix.as_bytes().first() {
        Some(b'-') => (true, &prefix[1..]),
        Some(b'+') => (false, &prefix[1..]),
        _ => (false, prefix),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;

    Some(if negative { -value } else { value })
}

/// Second `.`-separated segment with hyphens read as spaces
fn parse_subtitle(file_name: &str, default_subtitle: &str) -> String {
    file_name
        .split('.')
        .nth(1)
        .map(|segment| segment.replace('-', " "))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default_subtitle.to_string())
}
