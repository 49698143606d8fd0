//! A directory of named resources.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::decode::decode_slice;
use crate::error::ResourceError;
use crate::options::DecodeOptions;

/// A directory whose files are addressed by relative name.
///
/// Plays the role of an application bundle: callers ask for `"stars.json"`
/// and get a typed value back, or an error saying which step failed.
///
/// # Example
///
/// ```no_run
/// use serde::Deserialize;
/// use trove_resource::ResourceDir;
///
/// #[derive(Deserialize)]
/// struct Palette {
///     name: String,
///     colors: Vec<String>,
/// }
///
/// let resources = ResourceDir::new("assets");
/// let palettes: Vec<Palette> = resources.decode("palettes.json")?;
/// # Ok::<(), trove_resource::ResourceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDir {
    root: PathBuf,
}

impl ResourceDir {
    /// Creates a resource directory rooted at `root`.
    ///
    /// The root is not checked until a resource is requested.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `name` to a file under the root.
    ///
    /// `name` must be a relative path made of plain components; `..`,
    /// absolute paths, and prefixes are refused. Symlinks are followed, but
    /// the resolved file must still lie inside the resolved root.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the name is refused, no
    /// regular file exists at the resolved path, or a symlink leads outside
    /// the root.
    pub fn locate(&self, name: &str) -> Result<PathBuf, ResourceError> {
        let relative = Path::new(name);
        let plain = !name.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        let path = self.root.join(relative);
        if plain && path.is_file() && self.contains(&path) {
            Ok(path)
        } else {
            Err(ResourceError::NotFound {
                name: name.to_owned(),
                root: self.root.clone(),
            })
        }
    }

    fn contains(&self, path: &Path) -> bool {
        match (self.root.canonicalize(), path.canonicalize()) {
            (Ok(root), Ok(real)) => real.starts_with(root),
            _ => false,
        }
    }

    /// Reads the raw bytes of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] or [`ResourceError::Io`].
    pub fn read(&self, name: &str) -> Result<Vec<u8>, ResourceError> {
        let path = self.locate(name)?;
        let data = fs::read(&path).map_err(|source| ResourceError::Io {
            name: name.to_owned(),
            source,
        })?;

        debug!(resource = name, path = %path.display(), bytes = data.len(), "loaded resource");
        Ok(data)
    }

    /// Decodes the JSON file `name` into `T` with default options.
    ///
    /// # Errors
    ///
    /// See [`decode_with`](Self::decode_with).
    pub fn decode<T: DeserializeOwned>(&self, name: &str) -> Result<T, ResourceError> {
        self.decode_with(name, &DecodeOptions::default())
    }

    /// Decodes the JSON file `name` into `T`.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::NotFound`] if the file can't be located
    /// - [`ResourceError::Io`] if it can't be read
    /// - [`ResourceError::Syntax`] if it isn't valid JSON
    /// - [`ResourceError::Data`] if the JSON doesn't fit `T`
    pub fn decode_with<T: DeserializeOwned>(
        &self,
        name: &str,
        options: &DecodeOptions,
    ) -> Result<T, ResourceError> {
        let result = self
            .read(name)
            .and_then(|data| decode_slice(name, &data, options));

        if let Err(err) = &result {
            warn!(resource = name, error = %err, "resource decode failed");
        }
        result
    }
}
