use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

/// Where the renderer gets directory listings from.
pub trait DirSource {
    /// Names of the entries directly inside `path`, in enumeration order.
    fn list(&self, path: &Path) -> Result<Vec<OsString>>;

    /// Whether `path` is a directory. Symlinks are followed.
    fn is_dir(&self, path: &Path) -> Result<bool>;
}

/// The real filesystem. Entries come back in whatever order `read_dir` yields.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDirSource;

impl DirSource for OsDirSource {
    fn list(&self, path: &Path) -> Result<Vec<OsString>> {
        let read_dir = fs::read_dir(path).map_err(|e| TreeError::access(path, e))?;

        read_dir
            .map(|entry| {
                entry
                    .map(|e| e.file_name())
                    .map_err(|e| TreeError::access(path, e))
            })
            .collect()
    }

    fn is_dir(&self, path: &Path) -> Result<bool> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(err) => {
                // A link whose target can't be resolved still exists as an entry
                let is_link = fs::symlink_metadata(path)
                    .map(|m| m.file_type().is_symlink())
                    .unwrap_or(false);
                if is_link {
                    tracing::trace!(path = %path.display(), error = %err, "Unresolvable symlink");
                    Ok(false)
                } else {
                    Err(TreeError::access(path, err))
                }
            }
        }
    }
}

/// In-memory directory tree with insertion-ordered children.
///
/// Gives tests a deterministic enumeration order and lets them inject the
/// failures the real filesystem only produces under races or permissions.
#[derive(Debug, Clone, Default)]
pub struct MemDirSource {
    dirs: HashMap<PathBuf, Vec<OsString>>,
    files: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
}

impl MemDirSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory, creating missing ancestors.
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), true);
        self
    }

    /// Add a file, creating missing ancestors.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.insert(path.as_ref(), false);
        self
    }

    /// Add a directory that exists but cannot be listed.
    pub fn with_unreadable_dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.insert(path, true);
        self.unreadable.insert(path.to_path_buf());
        self
    }

    /// List a name in its parent that no longer exists, as if it was
    /// removed between listing and classification.
    pub fn with_stale_entry(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            self.insert(parent, true);
            if let Some(children) = self.dirs.get_mut(parent) {
                children.push(name.to_os_string());
            }
        }
        self
    }

    fn insert(&mut self, path: &Path, is_dir: bool) {
        if self.dirs.contains_key(path) || self.files.contains(path) {
            return;
        }

        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            if !parent.as_os_str().is_empty() {
                self.insert(parent, true);
            }
            if let Some(children) = self.dirs.get_mut(parent) {
                children.push(name.to_os_string());
            }
        }

        if is_dir {
            self.dirs.insert(path.to_path_buf(), Vec::new());
        } else {
            self.files.insert(path.to_path_buf());
        }
    }
}

impl DirSource for MemDirSource {
    fn list(&self, path: &Path) -> Result<Vec<OsString>> {
        if self.unreadable.contains(path) {
            return Err(TreeError::access(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
            ));
        }

        match self.dirs.get(path) {
            Some(children) => Ok(children.clone()),
            None if self.files.contains(path) => Err(TreeError::access(
                path,
                io::Error::other("Not a directory"),
            )),
            None => Err(TreeError::access(
                path,
                io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            )),
        }
    }

    fn is_dir(&self, path: &Path) -> Result<bool> {
        if self.dirs.contains_key(path) {
            Ok(true)
        } else if self.files.contains(path) {
            Ok(false)
        } else {
            Err(TreeError::access(
                path,
                io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            ))
        }
    }
}
