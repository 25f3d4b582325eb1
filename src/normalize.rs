//! Candidate normalization.
//!
//! Turns raw strings emitted by lookup sources into validated [`Candidate`]s.
//! Normalization is pure and total: malformed input yields `None`, never an
//! error, so a misbehaving source can only ever contribute nothing.

use regex::Regex;
use std::sync::OnceLock;

use crate::locale::Candidate;

// "2 letters, optionally a separator and 2 more letters", case-insensitive
static CODE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn code_pattern() -> &'static Regex {
    CODE_PATTERN.get_or_init(|| Regex::new(r"^(?i)([a-z]{2})(?:-([a-z]{2}))?$").unwrap())
}

/// Repair malformed separators: every run of non-ASCII-letter characters
/// becomes a single hyphen, and leading/trailing separators are stripped.
fn trim_code(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());

    for ch in raw.chars() {
        if ch.is_ascii_alphabetic() {
            cleaned.push(ch);
        } else if !cleaned.is_empty() && !cleaned.ends_with('-') {
            cleaned.push('-');
        }
    }

    cleaned.trim_end_matches('-').to_string()
}

/// Normalize a raw candidate string from the named lookup source.
///
/// Returns `None` when the string does not clean up to a 2-letter language
/// code with an optional 2-letter region. The language segment is folded to
/// lowercase and the region to uppercase, so "DE-ch" and "de_CH" normalize
/// to the same candidate.
pub fn normalize(raw: &str, source: &str) -> Option<Candidate> {
    let cleaned = trim_code(raw);
    let captures = code_pattern().captures(&cleaned)?;

    let language = captures.get(1)?.as_str().to_ascii_lowercase();
    let region = captures
        .get(2)
        .map(|region| region.as_str().to_ascii_uppercase());

    Some(Candidate {
        language,
        region,
        source: source.to_string(),
    })
}
