//! Decode a typed value nested at a dot-separated key path inside a
//! JSON document.
//!
//! Client code that receives envelope-style JSON (a payload wrapped in
//! layers of metadata) usually has to define a wrapper type per nesting
//! level just to reach the part it cares about. This crate decodes the
//! inner payload directly: supply the target type, the raw document,
//! and a path of object keys joined with `.`.
//!
//! ```
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Post {
//!     title: String,
//! }
//!
//! let data = br#"{
//!     "status": "ok",
//!     "nested": {"post": {"title": "What is this"}}
//! }"#;
//!
//! let post: Post = json_keypath::from_slice(data, "nested.post")?;
//! assert_eq!(post.title, "What is this");
//!
//! // A path may also terminate at a scalar value.
//! let title: String = json_keypath::from_slice(data, "nested.post.title")?;
//! assert_eq!(title, "What is this");
//! # Ok::<(), json_keypath::KeyPathError>(())
//! ```
//!
//! Paths are split on the literal `.` only; array indices, wildcards,
//! and escaping are not supported. Failures are reported as
//! [`KeyPathError`] values that identify the offending key and the path
//! walked so far.

pub mod decoder;
pub mod error;
pub mod path;

pub use decoder::{from_slice, from_str, Decoder};
pub use error::KeyPathError;
pub use path::{KeyPath, KeyToken};
