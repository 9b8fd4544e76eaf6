//! Decoding of typed values located at a key path inside a JSON
//! document.

use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};

use crate::error::KeyPathError;
use crate::path::{KeyPath, KeyToken};

/// A JSON decoder configured with the key path at which to decode.
///
/// The path is set once at construction and never mutated afterward;
/// `decode` takes `&self` and keeps all per-call state on the stack, so
/// a single decoder may serve concurrent decode calls from multiple
/// threads without synchronization.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    key_path: Option<KeyPath>,
}

impl Decoder {
    /// Creates a decoder with no key path configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dot-separated key path at which to decode.
    pub fn key_path(mut self, path: &str) -> Self {
        self.key_path = Some(KeyPath::parse(path));
        self
    }

    /// Decodes a value of type `T` at the configured key path from raw
    /// JSON bytes.
    ///
    /// Fails with [`KeyPathError::MissingKeyPath`] if no path was
    /// configured, and with [`KeyPathError::EmptyKeyPath`] if the
    /// configured path tokenized to zero segments.
    pub fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, KeyPathError> {
        let key_path = self.key_path.as_ref().ok_or(KeyPathError::MissingKeyPath)?;
        let (inner, last) = key_path.split_last().ok_or(KeyPathError::EmptyKeyPath)?;

        let document: Map<String, Value> =
            serde_json::from_slice(data).map_err(|source| KeyPathError::Decode {
                path: key_path.to_string(),
                source,
            })?;

        let container = walk(&document, inner)?;
        decode_final(container, last, key_path)
    }
}

/// Decodes a value of type `T` located at `key_path` inside the JSON
/// document `data`.
///
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Post {
///     title: String,
/// }
///
/// let data = br#"{"nested": {"post": {"title": "What is this"}}}"#;
/// let post: Post = json_keypath::from_slice(data, "nested.post")?;
/// assert_eq!(post.title, "What is this");
/// # Ok::<(), json_keypath::KeyPathError>(())
/// ```
pub fn from_slice<T: DeserializeOwned>(data: &[u8], key_path: &str) -> Result<T, KeyPathError> {
    Decoder::new().key_path(key_path).decode(data)
}

/// Decodes a value of type `T` located at `key_path` inside the JSON
/// document `data`.
pub fn from_str<T: DeserializeOwned>(data: &str, key_path: &str) -> Result<T, KeyPathError> {
    from_slice(data.as_bytes(), key_path)
}

/// Descends through nested objects, one key per token, and returns the
/// container addressed by the full token sequence.
fn walk<'a>(
    root: &'a Map<String, Value>,
    tokens: &[KeyToken],
) -> Result<&'a Map<String, Value>, KeyPathError> {
    let mut container = root;
    for (depth, token) in tokens.iter().enumerate() {
        container = container
            .get(token.name())
            .and_then(Value::as_object)
            .ok_or_else(|| KeyPathError::NestedContainer {
                key: token.name().to_string(),
                at: joined(&tokens[..depth]),
            })?;
    }
    Ok(container)
}

/// Decodes `T` at the final token from the final container. The value's
/// internal structure is entirely up to `T`'s own `Deserialize` impl.
fn decode_final<T: DeserializeOwned>(
    container: &Map<String, Value>,
    last: &KeyToken,
    key_path: &KeyPath,
) -> Result<T, KeyPathError> {
    let value = container.get(last.name()).ok_or_else(|| KeyPathError::Decode {
        path: key_path.to_string(),
        source: serde_json::Error::custom(format!("missing key `{}`", last.name())),
    })?;
    T::deserialize(value).map_err(|source| KeyPathError::Decode {
        path: key_path.to_string(),
        source,
    })
}

fn joined(tokens: &[KeyToken]) -> String {
    tokens
        .iter()
        .map(KeyToken::name)
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &[u8] = br#"{
        "post": {"title": "Hello", "likes": 20},
        "flag": true,
        "nested": {"post": {"title": "Inner"}}
    }"#;

    #[test]
    fn test_decode_without_key_path_fails() {
        let result: Result<String, _> = Decoder::new().decode(DOC);
        assert!(matches!(result, Err(KeyPathError::MissingKeyPath)));
    }

    #[test]
    fn test_decode_empty_key_path_fails() {
        let result: Result<String, _> = from_slice(DOC, "");
        assert!(matches!(result, Err(KeyPathError::EmptyKeyPath)));
    }

    #[test]
    fn test_decode_delimiter_only_key_path_fails() {
        let result: Result<String, _> = from_slice(DOC, "..");
        assert!(matches!(result, Err(KeyPathError::EmptyKeyPath)));
    }

    #[test]
    fn test_decode_scalar_leaf() {
        let title: String = from_slice(DOC, "post.title").unwrap();
        assert_eq!(title, "Hello");

        let likes: u32 = from_slice(DOC, "post.likes").unwrap();
        assert_eq!(likes, 20);

        let flag: bool = from_slice(DOC, "flag").unwrap();
        assert!(flag);
    }

    #[test]
    fn test_missing_nested_container_reports_key_and_prefix() {
        let result: Result<String, _> = from_slice(DOC, "nested.missing.title");
        match result {
            Err(KeyPathError::NestedContainer { key, at }) => {
                assert_eq!(key, "missing");
                assert_eq!(at, "nested");
            }
            other => panic!("expected NestedContainer, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_container_at_root_reports_empty_prefix() {
        let result: Result<String, _> = from_slice(DOC, "absent.title");
        match result {
            Err(KeyPathError::NestedContainer { key, at }) => {
                assert_eq!(key, "absent");
                assert_eq!(at, "");
            }
            other => panic!("expected NestedContainer, got {:?}", other),
        }
    }

    #[test]
    fn test_scalar_at_non_final_segment_fails() {
        // "title" resolves to a string, not a nested object
        let result: Result<String, _> = from_slice(DOC, "post.title.detail");
        match result {
            Err(KeyPathError::NestedContainer { key, at }) => {
                assert_eq!(key, "title");
                assert_eq!(at, "post");
            }
            other => panic!("expected NestedContainer, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_final_key_fails_as_decode_error() {
        let result: Result<String, _> = from_slice(DOC, "post.detail");
        match result {
            Err(KeyPathError::Decode { path, .. }) => assert_eq!(path, "post.detail"),
            other => panic!("expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_scalar_type_fails_as_decode_error() {
        let result: Result<u32, _> = from_slice(DOC, "post.title");
        assert!(matches!(result, Err(KeyPathError::Decode { .. })));
    }

    #[test]
    fn test_malformed_json_fails_as_decode_error() {
        let result: Result<String, _> = from_slice(b"{not json", "post.title");
        assert!(matches!(result, Err(KeyPathError::Decode { .. })));
    }

    #[test]
    fn test_non_object_root_fails_as_decode_error() {
        let result: Result<String, _> = from_slice(b"[1, 2, 3]", "post.title");
        assert!(matches!(result, Err(KeyPathError::Decode { .. })));
    }

    #[test]
    fn test_decoder_is_reusable_across_documents() {
        let decoder = Decoder::new().key_path("post.title");
        let first: String = decoder.decode(DOC).unwrap();
        let second: String = decoder
            .decode(br#"{"post": {"title": "Another"}}"#)
            .unwrap();
        assert_eq!(first, "Hello");
        assert_eq!(second, "Another");
    }
}
