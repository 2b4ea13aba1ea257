/// Lowercase ASCII alphanumerics, keep whitespace, and turn every other
/// character into a single space.
///
/// Classification is ASCII only: a non-ASCII character becomes one space.
pub fn normalize(line: &str) -> String {
    line.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else if is_space(ch) {
                ch
            } else {
                ' '
            }
        })
        .collect()
}

/// Split cleaned text on runs of whitespace. Never yields empty tokens.
pub fn tokenize(cleaned: &str) -> Vec<String> {
    cleaned.split_whitespace().map(str::to_string).collect()
}

// Matches the classic `isspace` set, which includes vertical tab.
fn is_space(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0b'
}
