//! The file store a TOC is generated from and written back to.
//!
//! Paths inside a vault are `/`-separated and relative to the vault root;
//! the root folder itself has the empty path. [`Vault`] is the only way
//! the TOC engine touches storage, so a host can plug in its own store.
//! Two stores ship with the crate: [`local::LocalVault`] over a directory
//! on disk and [`memory::MemoryVault`] held entirely in memory.

pub mod local;
pub mod memory;

use std::future::Future;
use thiserror::Error;

pub const MARKDOWN_EXTENSION: &str = "md";

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("invalid vault path: {0}")]
    InvalidPath(String),

    #[error("not a file: {0}")]
    NotAFile(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A file in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    /// Vault-relative path, including the extension.
    pub path: String,
    /// Last path segment, including the extension.
    pub name: String,
}

impl FileEntry {
    pub fn new(path: &str) -> Self {
        let path = normalize_path(path);
        let name = last_segment(&path).to_string();
        Self { path, name }
    }

    /// Path of the folder holding this file (empty for the vault root).
    pub fn parent_path(&self) -> &str {
        parent_path(&self.path)
    }

    pub fn parent(&self) -> Folder {
        Folder::new(self.parent_path())
    }
}

/// A folder in the vault. The root folder has an empty `path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Folder {
    pub path: String,
    pub name: String,
}

impl Folder {
    pub fn new(path: &str) -> Self {
        let path = normalize_path(path);
        let name = last_segment(&path).to_string();
        Self { path, name }
    }

    /// The vault root, displayed under `name`.
    pub fn root(name: &str) -> Self {
        Self {
            path: String::new(),
            name: name.to_string(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Prefix every descendant path starts with: `"<path>/"`, or `""` at the root.
    pub fn prefix(&self) -> String {
        if self.is_root() {
            String::new()
        } else {
            format!("{}/", self.path)
        }
    }

    /// Joins a child name onto this folder's path.
    pub fn child_path(&self, name: &str) -> String {
        format!("{}{name}", self.prefix())
    }
}

/// Whatever currently occupies a vault path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    File(FileEntry),
    Folder(Folder),
}

/// Storage contract the TOC engine runs against.
///
/// Enumeration and lookup are synchronous; reads and writes are async so
/// stores backed by slow I/O can be driven concurrently.
pub trait Vault {
    /// All markdown files in the vault.
    fn markdown_files(&self) -> Result<Vec<FileEntry>, VaultError>;

    /// The file or folder at `path`, if any.
    fn entry_at(&self, path: &str) -> Result<Option<Entry>, VaultError>;

    /// Full text of `file`, reflecting the last write.
    fn read(&self, file: &FileEntry) -> impl Future<Output = Result<String, VaultError>> + Send;

    /// Creates a new file. Fails if the parent folder is missing or the path is taken.
    fn create(
        &self,
        path: &str,
        content: &str,
    ) -> impl Future<Output = Result<FileEntry, VaultError>> + Send;

    /// Replaces the content of an existing file.
    fn modify(
        &self,
        file: &FileEntry,
        content: &str,
    ) -> impl Future<Output = Result<(), VaultError>> + Send;
}

/// Strips surrounding slashes; `"/"` and `"."` become the root path.
pub fn normalize_path(path: &str) -> String {
    match path.trim_matches('/') {
        "." => String::new(),
        trimmed => trimmed.to_string(),
    }
}

pub fn is_markdown_path(path: &str) -> bool {
    last_segment(path)
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext == MARKDOWN_EXTENSION)
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn parent_path(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(parent, _)| parent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_entry_splits_name_and_parent() {
        let file = FileEntry::new("Projects/Sub/Note.md");
        assert_eq!(file.name, "Note.md");
        assert_eq!(file.parent_path(), "Projects/Sub");
        assert_eq!(file.parent().name, "Sub");

        let top = FileEntry::new("A.md");
        assert_eq!(top.parent_path(), "");
        assert!(top.parent().is_root());
    }

    #[test]
    fn folder_prefix_is_empty_at_root() {
        assert_eq!(Folder::root("vault").prefix(), "");
        assert_eq!(Folder::new("Projects").prefix(), "Projects/");
        assert_eq!(Folder::new("/Projects/").child_path("x.md"), "Projects/x.md");
        assert!(Folder::new("/").is_root());
    }

    #[test]
    fn markdown_detection_uses_extension() {
        assert!(is_markdown_path("a/b/Note.md"));
        assert!(!is_markdown_path("a/b/Note.MD"));
        assert!(!is_markdown_path("a/b/image.png"));
        assert!(!is_markdown_path("a/.md"));
        assert!(!is_markdown_path("md"));
    }
}
