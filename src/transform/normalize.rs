//! Rack-space identifier normalization.

/// Quote characters stripped from rack-space labels.
const QUOTE_CHARS: [char; 3] = ['\'', '"', '`'];

/// Canonicalize a rack-space label.
///
/// Removes every quote character, trims surrounding whitespace and
/// upper-cases the rest. Both the main file and the pattern file go through
/// this so their codes compare equal.
pub fn normalize_rack_space(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let stripped: String = raw.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect();
    stripped.trim().to_uppercase()
}
