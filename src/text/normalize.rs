// Lexical normalization — raw article text to lowercase word tokens.
//
// Whitespace of any kind (newlines, tabs) becomes a single-space delimiter,
// and everything that isn't a letter is dropped. Splitting happens on single
// spaces, so runs of delimiters leave empty tokens behind. Those are harmless:
// the profiler's minimum-length filter discards them.

/// Normalize text into a sequence of lowercase, letters-only tokens.
///
/// Never fails. Text with no letters at all (including empty input) produces
/// an empty sequence.
pub fn normalize(text: &str) -> Vec<String> {
    // Lowercase first: case mapping can emit combining marks (e.g. "İ" -> "i\u{307}")
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some(' ')
            } else if c.is_alphabetic() {
                Some(c)
            } else {
                // Punctuation, symbols, digits and combining marks
                None
            }
        })
        .collect();

    if cleaned.trim().is_empty() {
        return Vec::new();
    }

    cleaned.split(' ').map(str::to_string).collect()
}

/// Number of characters in a token, counted in Unicode scalar values.
pub fn token_len(token: &str) -> usize {
    token.chars().count()
}
