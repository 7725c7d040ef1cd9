pub trait TokenNormalizer {
    fn normalize(&self, raw: &str) -> String;
}

/// Strips non-word characters from both ends of a token, optionally
/// lowercasing it first.
///
/// A word character is any Unicode alphanumeric or `_`, so accented letters
/// at the edges are kept (`"café"` stays `"café"`). Case folding happens
/// before trimming, so marks produced by lowercasing are trimmed as well.
/// Interior punctuation survives:
/// `"(don't!)"` becomes `"don't"`. A token made only of punctuation becomes
/// the empty string.
#[derive(Debug, Clone, Copy)]
pub struct EdgeTrimNormalizer {
    pub lowercase: bool,
}

impl Default for EdgeTrimNormalizer {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn trim_edges(token: &str) -> &str {
    token.trim_matches(|c: char| !is_word_char(c))
}

impl TokenNormalizer for EdgeTrimNormalizer {
    fn normalize(&self, raw: &str) -> String {
        if self.lowercase {
            trim_edges(&raw.to_lowercase()).to_string()
        } else {
            trim_edges(raw).to_string()
        }
    }
}
