use std::{borrow::Cow, collections::HashMap, path::Path};

#[cfg(feature = "fs_access")]
use std::path::PathBuf;

use super::Error;

/// A trait for providing file contents.
pub trait FileProvider {
    /// Reads the contents of the file at the given path as bytes.
    ///
    /// # Errors
    /// - If an error occurs while reading the file.
    /// - If the file does not exist.
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<[u8]>, Error>;

    /// Reads the contents of the file at the given path.
    ///
    /// # Errors
    /// - If an error occurs while reading the file.
    /// - If the file does not exist.
    /// - If the file is not valid UTF-8.
    fn read_str<P: AsRef<Path>>(&self, path: P) -> Result<Cow<str>, Error> {
        let bytes = self.read_bytes(path)?;
        let string = std::str::from_utf8(&bytes)?.to_string();
        Ok(Cow::Owned(string))
    }
}

/// Provides file contents from the file system.
#[cfg(feature = "fs_access")]
#[derive(Debug, Clone)]
pub struct FsProvider {
    /// The root directory to base paths off of.
    root: PathBuf,
}

#[cfg(feature = "fs_access")]
impl Default for FsProvider {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

#[cfg(feature = "fs_access")]
impl<P> From<P> for FsProvider
where
    P: Into<PathBuf>,
{
    fn from(root: P) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(feature = "fs_access")]
impl FileProvider for FsProvider {
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<[u8]>, Error> {
        let full_path = self.root.join(path);
        std::fs::read(full_path)
            .map(Cow::Owned)
            .map_err(|err| Error::IoError(err.to_string()))
    }

    fn read_str<P: AsRef<Path>>(&self, path: P) -> Result<Cow<str>, Error> {
        let full_path = self.root.join(path);
        std::fs::read_to_string(full_path)
            .map(Cow::Owned)
            .map_err(|err| Error::IoError(err.to_string()))
    }
}

/// Provides file contents from an in-memory map of paths to sources.
///
/// Documentation hosts usually hold the page sources in memory instead of on
/// disk, and tests use this provider to avoid touching the file system.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    files: HashMap<String, String>,
}

impl MemoryProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given path and contents to the provider.
    ///
    /// Replaces the previous contents if the path was already present.
    pub fn add_file(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl FileProvider for MemoryProvider {
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<[u8]>, Error> {
        normalize_path_str(path).map_or_else(
            || Err(Error::IoError("Invalid path".to_string())),
            |path| {
                self.files
                    .get(&path)
                    .ok_or_else(|| Error::IoError("File not found".to_string()))
                    .map(|content| Cow::Borrowed(content.as_bytes()))
            },
        )
    }

    fn read_str<P: AsRef<Path>>(&self, path: P) -> Result<Cow<str>, Error> {
        normalize_path_str(path).map_or_else(
            || Err(Error::IoError("Invalid path".to_string())),
            |path| {
                self.files
                    .get(&path)
                    .ok_or_else(|| Error::IoError("File not found".to_string()))
                    .map(|content| Cow::Borrowed(content.as_str()))
            },
        )
    }
}

fn normalize_path_str<P: AsRef<Path>>(path: P) -> Option<String> {
    let mut err = false;
    let res = path
        .as_ref()
        .to_str()?
        .split('/')
        .fold(Vec::new(), |mut acc, el| match el {
            "." | "" => acc,
            ".." => {
                let popped = acc.pop();
                if popped.is_none() {
                    err = true;
                }
                acc
            }
            _ => {
                acc.push(el);
                acc
            }
        })
        .join("/");

    if err {
        None
    } else {
        Some(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path_str("a/b/c"), Some("a/b/c".to_string()));
        assert_eq!(normalize_path_str("a/b/../c"), Some("a/c".to_string()));
        assert_eq!(normalize_path_str("./a/b/c"), Some("a/b/c".to_string()));
        assert_eq!(normalize_path_str("../a/b/c"), None);
    }

    #[test]
    fn test_memory_provider() {
        let mut dir = MemoryProvider::new();
        dir.add_file("foo.fst", "foo");
        dir.add_file("bar/baz.fsti", "bar, baz");

        assert_eq!(dir.read_str("foo.fst").unwrap().into_owned(), "foo");
        assert_eq!(
            dir.read_str("bar/baz.fsti").unwrap().into_owned(),
            "bar, baz"
        );
        assert!(matches!(
            dir.read_str("nonexistent.fst"),
            Err(Error::IoError(_))
        ));
    }
}
