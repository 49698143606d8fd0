//! Typed JSON resources.
//!
//! Point a [`ResourceDir`] at a directory, ask for a file by name, and get
//! back any `serde` type. Every failure comes back as a [`ResourceError`]
//! naming the file and the step that failed:
//!
//! | Variant | Cause |
//! |---------|-------|
//! | [`ResourceError::NotFound`] | No such file under the root |
//! | [`ResourceError::Io`] | File exists but can't be read |
//! | [`ResourceError::Syntax`] | Not valid JSON |
//! | [`ResourceError::Data`] | Missing key, wrong type, or missing value |
//!
//! # Logging
//!
//! Emits `tracing` events: `debug` when a file is read, `warn` when a decode
//! fails. Install a subscriber to see them.

#![warn(missing_docs)]

mod decode;
mod dir;
mod error;
mod options;

pub use decode::decode_str;
pub use dir::ResourceDir;
pub use error::ResourceError;
pub use options::{DecodeOptions, KeyStrategy};
