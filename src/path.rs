//! Key-path tokenization for nested JSON decoding.

use std::fmt;

/// A single segment of a key path, used as a lookup key into one level
/// of a JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyToken(String);

impl KeyToken {
    /// Creates a token for the given key name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The key name used for container lookup.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parsed key path: an ordered sequence of key tokens, outermost key
/// first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    tokens: Vec<KeyToken>,
}

impl KeyPath {
    /// Parses a dot-separated path (e.g. `"nested.post.embedded_post"`)
    /// into its key tokens.
    ///
    /// Splitting is on the literal `.` with no escaping, so a key that
    /// itself contains a dot cannot be addressed. Empty segments from
    /// leading, trailing, or doubled dots are skipped, so `"a..b"`
    /// tokenizes the same as `"a.b"`. An empty or delimiter-only path
    /// yields zero tokens; the decoder rejects that as
    /// [`EmptyKeyPath`](crate::KeyPathError::EmptyKeyPath) rather than
    /// decoding at the document root.
    pub fn parse(path: &str) -> Self {
        let tokens = path
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(KeyToken::new)
            .collect();
        Self { tokens }
    }

    /// The tokens of this path, outermost first.
    pub fn tokens(&self) -> &[KeyToken] {
        &self.tokens
    }

    /// Whether the path contains no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Splits the path into its non-final tokens and the final token,
    /// or `None` if the path is empty.
    pub fn split_last(&self) -> Option<(&[KeyToken], &KeyToken)> {
        let (last, inner) = self.tokens.split_last()?;
        Some((inner, last))
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(token.name())?;
        }
        Ok(())
    }
}
