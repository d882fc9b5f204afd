use std::collections::HashSet;

use crate::core::tables::is_stop_word;

/// Join optional text fields into a single lowercase blob separated by spaces
pub fn text_blob<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Decode a JSON-encoded tag array into space-separated text
///
/// Malformed input decodes to an empty string.
pub fn decode_tags(tags: Option<&str>) -> String {
    tags.and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
        .map(|tags| tags.join(" "))
        .unwrap_or_default()
}

/// Count how many terms occur as substrings of the blob
#[inline]
pub fn count_matches(blob: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| blob.contains(*term)).count()
}

/// Whether any term occurs in both blobs
#[inline]
pub fn shares_any(left: &str, right: &str, terms: &[&str]) -> bool {
    terms
        .iter()
        .any(|term| left.contains(*term) && right.contains(*term))
}

/// Extract a normalized keyword set from free text
///
/// Lowercases, replaces non-alphanumeric characters with spaces, and drops
/// tokens of two characters or fewer as well as stop words.
pub fn extract_keywords(text: &str) -> HashSet<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| token.len() > 2 && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Jaccard similarity |A ∩ B| / |A ∪ B| of two keyword sets
pub fn jaccard_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Parse a free-text funding amount such as "500k" or "$2M"
///
/// Everything except digits, `k`, `m`, `b` and `.` is stripped. The leading
/// numeric prefix is the base value and a trailing suffix scales it.
/// Unparseable input yields 0.
pub fn parse_funding_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(*c, 'k' | 'm' | 'b' | '.'))
        .collect();

    let base = leading_number(&cleaned);
    if base <= 0.0 {
        return 0.0;
    }

    let multiplier = match cleaned.chars().last() {
        Some('k') => 1_000.0,
        Some('m') => 1_000_000.0,
        Some('b') => 1_000_000_000.0,
        _ => 1.0,
    };

    base * multiplier
}

/// Parse the longest `digits[.digits]` prefix, or 0 when there is none
fn leading_number(s: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    for (idx, c) in s.char_indices() {
        match c {
            '0'..='9' => end = idx + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = idx + 1;
            }
            _ => break,
        }
    }

    s[..end].parse::<f64>().unwrap_or(0.0)
}
