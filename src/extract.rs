//! Candidate string extraction from Dart source text.
//!
//! Extraction is pattern-based, not AST-based: an ordered list of
//! recognizers scans the raw file text for quoted literals in positions
//! that usually hold user-visible text. False positives and negatives are
//! an accepted approximation of this approach.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::rewrite::ACCESSOR_SUFFIX;

/// Literals shorter than this are never worth migrating.
const MIN_LITERAL_CHARS: usize = 2;

/// Attribute names whose quoted values are treated as user-visible text.
pub const DEFAULT_CHECKED_ATTRIBUTES: &[&str] = &[
    "label", "hintText", "hint", "title", "subtitle", "tooltip", "message",
];

// Text('string') / Text("string")
static TEXT_WIDGET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Text\(\s*["'](.+?)["']\s*(?:,|\))"#).unwrap());

// AppBar(title: Text('string'))
static APP_BAR_TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"AppBar\(\s*title:\s*Text\(\s*["'](.+?)["']\s*\)"#).unwrap());

/// One occurrence of a literal eligible for migration.
///
/// `line` is 1-based. `context` is a short window of surrounding lines for
/// human review; it plays no part in matching.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub text: String,
    pub line: usize,
    pub context: String,
}

/// Ordered recognizer list for likely user-facing literals.
///
/// Patterns are tried in order: the `Text(` widget pattern, one pattern per
/// checked attribute name, then the compound `AppBar(title: Text(...))`
/// pattern. Overlapping recognizers may report the same literal more than
/// once; duplicates are deliberately not removed here, downstream consumers
/// must tolerate them.
pub struct Extractor {
    patterns: Vec<Regex>,
}

impl Extractor {
    pub fn new(checked_attributes: &[String]) -> Result<Self> {
        let mut patterns = vec![TEXT_WIDGET_REGEX.clone()];

        for attr in checked_attributes {
            let source = format!(r#"{}:\s*["'](.+?)["']\s*(?:,|\))"#, regex::escape(attr));
            let pattern = Regex::new(&source)
                .with_context(|| format!("Invalid checked attribute: \"{}\"", attr))?;
            patterns.push(pattern);
        }

        patterns.push(APP_BAR_TITLE_REGEX.clone());
        Ok(Self { patterns })
    }

    /// Extract candidates from one file's full text.
    ///
    /// Candidates are ordered by pattern, then by document order within
    /// each pattern.
    pub fn extract(&self, content: &str) -> Vec<Candidate> {
        let lines: Vec<&str> = content.split('\n').collect();
        let mut candidates = Vec::new();

        for pattern in &self.patterns {
            for caps in pattern.captures_iter(content) {
                let (Some(whole), Some(group)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                let text = group.as_str();
                if is_excluded(text) {
                    continue;
                }

                let line = content[..whole.start()].matches('\n').count() + 1;
                candidates.push(Candidate {
                    text: text.to_string(),
                    line,
                    context: context_window(&lines, line),
                });
            }
        }

        candidates
    }
}

/// A matched literal is dropped when it looks like a computed expression
/// (leading `$` or `{`), is too short to be meaningful text, or already
/// contains the localization accessor.
fn is_excluded(text: &str) -> bool {
    text.starts_with('$')
        || text.starts_with('{')
        || text.chars().count() < MIN_LITERAL_CHARS
        || text.contains(ACCESSOR_SUFFIX)
}

/// Three-line window around the 1-based `line`, joined with newlines.
fn context_window(lines: &[&str], line: usize) -> String {
    let start = line.saturating_sub(2);
    let end = (line + 1).min(lines.len());
    lines[start..end].join("\n")
}
