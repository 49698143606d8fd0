//! Error types for resource decoding.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A resource could not be located, read, or decoded.
///
/// Every variant names the resource so the message stands on its own.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No file with that name exists under the resource root, or the name
    /// tried to escape it.
    #[error("failed to locate {name} in {}", .root.display())]
    NotFound {
        /// Requested resource name.
        name: String,
        /// Resource root that was searched.
        root: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("failed to load {name}")]
    Io {
        /// Requested resource name.
        name: String,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The contents are not valid JSON.
    #[error("failed to decode {name}: invalid JSON ({source})")]
    Syntax {
        /// Requested resource name.
        name: String,
        /// Parser error with line and column.
        source: serde_json::Error,
    },

    /// Valid JSON that does not match the target type: a missing key, a type
    /// mismatch, or a missing value.
    #[error("failed to decode {name}: {source}")]
    Data {
        /// Requested resource name.
        name: String,
        /// Deserializer error naming the field or type.
        source: serde_json::Error,
    },
}

impl ResourceError {
    /// Returns the name of the resource this error is about.
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound { name, .. }
            | Self::Io { name, .. }
            | Self::Syntax { name, .. }
            | Self::Data { name, .. } => name,
        }
    }

    /// Sorts a `serde_json` failure into [`Syntax`](Self::Syntax) or
    /// [`Data`](Self::Data).
    pub(crate) fn from_json(name: &str, source: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let name = name.to_owned();
        match source.classify() {
            Category::Data => Self::Data { name, source },
            Category::Syntax | Category::Eof | Category::Io => Self::Syntax { name, source },
        }
    }
}
