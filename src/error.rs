//! Error types for key-path decoding.

use std::fmt;

/// Errors that can occur while decoding a value at a key path.
#[derive(Debug)]
pub enum KeyPathError {
    /// The decoder was used without a key path configured.
    MissingKeyPath,
    /// The key path tokenized to zero segments (empty or delimiter-only
    /// input).
    EmptyKeyPath,
    /// A non-final path segment did not address a nested object: the
    /// key was absent from the current container, or its value was not
    /// itself an object.
    NestedContainer {
        /// The key that failed to resolve.
        key: String,
        /// The dot-joined path walked successfully before the failure;
        /// empty when the failure was at the document root.
        at: String,
    },
    /// The typed decode failed: malformed JSON, a non-object document
    /// root, a missing final key, or a value of the wrong shape at the
    /// final key.
    Decode {
        /// The full key path being decoded.
        path: String,
        /// The underlying deserialization error.
        source: serde_json::Error,
    },
}

impl fmt::Display for KeyPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPathError::MissingKeyPath => {
                write!(f, "no key path configured on the decoder")
            }
            KeyPathError::EmptyKeyPath => {
                write!(f, "key path contains no segments")
            }
            KeyPathError::NestedContainer { key, at } if at.is_empty() => {
                write!(f, "no nested object at key '{}' in the document root", key)
            }
            KeyPathError::NestedContainer { key, at } => {
                write!(f, "no nested object at key '{}' under '{}'", key, at)
            }
            KeyPathError::Decode { path, source } => {
                write!(f, "failed to decode value at key path '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for KeyPathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KeyPathError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}
