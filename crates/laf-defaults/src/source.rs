//! Resource lookup for property files.
//!
//! The engine never touches the filesystem directly. Property sets are fetched
//! by name through a [`ResourceLocator`], a capability supplied by the host.
//! Three implementations cover the usual setups:
//!
//! - [`DirLocator`]: reads from one or more directories on disk
//! - [`EmbeddedLocator`]: serves in-memory content, typically `include_str!` bundles
//! - [`LayeredLocator`]: stacks locators, first hit wins
//!
//! # Absence vs. failure
//!
//! A locator distinguishes a missing resource (`Ok(None)`) from one that exists
//! but cannot be read (`Err`). Only the latter aborts a resolution pass.
//!
//! # Example
//!
//! ```rust,ignore
//! use laf_defaults::{builtin, DirLocator, LayeredLocator};
//!
//! let mut dirs = DirLocator::new();
//! dirs.add_dir("./themes")?;
//!
//! // Files in ./themes shadow the bundled themes
//! let locator = LayeredLocator::new().with(dirs).with(builtin::locator());
//! ```

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// Host-supplied capability for looking up named resources.
///
/// Names are `/`-separated relative paths such as `laf/core/DarkLaf.properties`.
pub trait ResourceLocator {
    /// Returns the content of the named resource.
    ///
    /// - `Ok(Some(text))` when the resource exists and was read
    /// - `Ok(None)` when the resource does not exist
    /// - `Err(_)` when the resource exists but reading it failed
    fn open(&self, name: &str) -> io::Result<Option<String>>;
}

impl<T: ResourceLocator + ?Sized> ResourceLocator for &T {
    fn open(&self, name: &str) -> io::Result<Option<String>> {
        (**self).open(name)
    }
}

impl<T: ResourceLocator + ?Sized> ResourceLocator for Box<T> {
    fn open(&self, name: &str) -> io::Result<Option<String>> {
        (**self).open(name)
    }
}

/// Looks resources up in a list of directories.
///
/// Directories are searched in registration order; the first one containing
/// the resource wins. Files are re-read on every lookup.
#[derive(Debug, Clone, Default)]
pub struct DirLocator {
    dirs: Vec<PathBuf>,
}

impl DirLocator {
    /// Creates a locator with no directories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory to search.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DirectoryNotFound`] if the path doesn't exist or
    /// isn't a directory.
    pub fn add_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(LoadError::DirectoryNotFound {
                path: path.to_path_buf(),
            });
        }
        self.dirs.push(path.to_path_buf());
        Ok(())
    }

    /// Returns the registered directories.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

impl ResourceLocator for DirLocator {
    fn open(&self, name: &str) -> io::Result<Option<String>> {
        for dir in &self.dirs {
            let path = name
                .split('/')
                .filter(|part| !part.is_empty())
                .fold(dir.clone(), |acc, part| acc.join(part));

            if path.is_file() {
                tracing::debug!(resource = name, path = %path.display(), "reading resource");
                return std::fs::read_to_string(&path).map(Some);
            }
        }
        Ok(None)
    }
}

/// Serves resources from memory.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedLocator {
    entries: HashMap<String, String>,
}

impl EmbeddedLocator {
    /// Creates an empty locator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a locator from `(name, content)` pairs.
    ///
    /// ```rust
    /// use laf_defaults::{EmbeddedLocator, ResourceLocator};
    ///
    /// let locator = EmbeddedLocator::from_entries(&[
    ///     ("laf/core/Laf.properties", "Button.arc = 6"),
    /// ]);
    /// assert!(locator.open("laf/core/Laf.properties").unwrap().is_some());
    /// assert!(locator.open("laf/core/Missing.properties").unwrap().is_none());
    /// ```
    pub fn from_entries(entries: &[(&str, &str)]) -> Self {
        let mut locator = Self::new();
        for (name, content) in entries {
            locator.add(*name, *content);
        }
        locator
    }

    /// Adds or replaces a resource.
    pub fn add(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(name.into(), content.into());
    }

    /// Builder-style variant of [`add`](Self::add).
    pub fn with(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.add(name, content);
        self
    }

    /// Number of resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no resources are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceLocator for EmbeddedLocator {
    fn open(&self, name: &str) -> io::Result<Option<String>> {
        Ok(self.entries.get(name).cloned())
    }
}

/// Stacks several locators; earlier layers shadow later ones.
///
/// A read error in any layer that holds the resource is returned immediately
/// rather than falling through to later layers.
#[derive(Default)]
pub struct LayeredLocator {
    layers: Vec<Box<dyn ResourceLocator + Send + Sync>>,
}

impl LayeredLocator {
    /// Creates a locator with no layers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer with lower priority than the existing ones.
    pub fn push<L>(&mut self, layer: L)
    where
        L: ResourceLocator + Send + Sync + 'static,
    {
        self.layers.push(Box::new(layer));
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with<L>(mut self, layer: L) -> Self
    where
        L: ResourceLocator + Send + Sync + 'static,
    {
        self.push(layer);
        self
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if there are no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl std::fmt::Debug for LayeredLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredLocator")
            .field("layers", &self.layers.len())
            .finish()
    }
}

impl ResourceLocator for LayeredLocator {
    fn open(&self, name: &str) -> io::Result<Option<String>> {
        for layer in &self.layers {
            if let Some(content) = layer.open(name)? {
                return Ok(Some(content));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct FailingLocator;

    impl ResourceLocator for FailingLocator {
        fn open(&self, _name: &str) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    fn write_file(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_dir_locator_reads_nested_resource() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "laf/core/DarkLaf.properties", "a=1");

        let mut locator = DirLocator::new();
        locator.add_dir(temp.path()).unwrap();

        let content = locator.open("laf/core/DarkLaf.properties").unwrap();
        assert_eq!(content.as_deref(), Some("a=1"));
    }

    #[test]
    fn test_dir_locator_missing_resource_is_none() {
        let temp = TempDir::new().unwrap();
        let mut locator = DirLocator::new();
        locator.add_dir(temp.path()).unwrap();

        assert!(locator.open("nope.properties").unwrap().is_none());
    }

    #[test]
    fn test_dir_locator_first_dir_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_file(first.path(), "t.properties", "from=first");
        write_file(second.path(), "t.properties", "from=second");

        let mut locator = DirLocator::new();
        locator.add_dir(first.path()).unwrap();
        locator.add_dir(second.path()).unwrap();

        assert_eq!(
            locator.dirs(),
            vec![first.path().to_path_buf(), second.path().to_path_buf()]
        );
        assert_eq!(
            locator.open("t.properties").unwrap().as_deref(),
            Some("from=first")
        );
    }

    #[test]
    fn test_dir_locator_falls_through_to_later_dir() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_file(second.path(), "t.properties", "from=second");

        let mut locator = DirLocator::new();
        locator.add_dir(first.path()).unwrap();
        locator.add_dir(second.path()).unwrap();

        assert_eq!(
            locator.open("t.properties").unwrap().as_deref(),
            Some("from=second")
        );
    }

    #[test]
    fn test_dir_locator_rejects_missing_dir() {
        let mut locator = DirLocator::new();
        let result = locator.add_dir("/definitely/not/a/real/dir");
        assert!(matches!(result, Err(LoadError::DirectoryNotFound { .. })));
        assert!(locator.dirs().is_empty());
    }

    #[test]
    fn test_dir_locator_invalid_utf8_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bad.properties"), [0xff, 0xfe, 0x00]).unwrap();

        let mut locator = DirLocator::new();
        locator.add_dir(temp.path()).unwrap();

        assert!(locator.open("bad.properties").is_err());
    }

    #[test]
    fn test_embedded_locator() {
        let locator = EmbeddedLocator::new().with("a.properties", "k=v");
        assert_eq!(locator.len(), 1);
        assert_eq!(
            locator.open("a.properties").unwrap().as_deref(),
            Some("k=v")
        );
        assert!(locator.open("b.properties").unwrap().is_none());
    }

    #[test]
    fn test_layered_locator_priority() {
        let top = EmbeddedLocator::new().with("t.properties", "from=top");
        let bottom = EmbeddedLocator::new()
            .with("t.properties", "from=bottom")
            .with("only.properties", "from=bottom");

        let locator = LayeredLocator::new().with(top).with(bottom);

        assert_eq!(
            locator.open("t.properties").unwrap().as_deref(),
            Some("from=top")
        );
        assert_eq!(
            locator.open("only.properties").unwrap().as_deref(),
            Some("from=bottom")
        );
        assert!(locator.open("none.properties").unwrap().is_none());
    }

    #[test]
    fn test_layered_locator_propagates_errors() {
        let locator = LayeredLocator::new()
            .with(FailingLocator)
            .with(EmbeddedLocator::new().with("t.properties", "k=v"));

        assert!(locator.open("t.properties").is_err());
    }

    #[test]
    fn test_locator_through_reference_and_box() {
        let embedded = EmbeddedLocator::new().with("t.properties", "k=v");
        let by_ref: &dyn ResourceLocator = &embedded;
        assert!(by_ref.open("t.properties").unwrap().is_some());

        let boxed: Box<dyn ResourceLocator> = Box::new(embedded.clone());
        assert!(boxed.open("t.properties").unwrap().is_some());
    }
}
