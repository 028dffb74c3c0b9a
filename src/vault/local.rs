use crate::vault::{Entry, FileEntry, Folder, Vault, VaultError, is_markdown_path, normalize_path};
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::{DirEntry, WalkDir};

/// A vault backed by a directory on disk.
///
/// Dot-files and dot-directories (e.g. `.obsidian`, `.git`) are invisible
/// to enumeration.
pub struct LocalVault {
    pub root: PathBuf,
    pub name: String,
}

impl LocalVault {
    /// Opens an existing vault directory.
    ///
    /// - Returns [`VaultError::NotFound`] if `root` does not exist.
    /// - Returns [`VaultError::InvalidPath`] if `root` is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, VaultError> {
        let root = root.into();

        if !root.exists() {
            return Err(VaultError::NotFound(root.display().to_string()));
        }

        if !root.is_dir() {
            return Err(VaultError::InvalidPath(root.display().to_string()));
        }

        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self { root, name })
    }

    /// The vault root as a [`Folder`].
    pub fn root_folder(&self) -> Folder {
        Folder::root(&self.name)
    }

    /// Maps a vault path onto the filesystem.
    ///
    /// Rejects anything that could escape the root (`..`, absolute paths).
    fn resolve(&self, path: &str) -> Result<PathBuf, VaultError> {
        let path = normalize_path(path);
        let relative = Path::new(&path);

        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(VaultError::InvalidPath(path));
        }

        Ok(self.root.join(relative))
    }

    /// Turns an on-disk path under the root back into a vault path.
    fn vault_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()?;
        Some(parts.join("/"))
    }

    /// Writes data to a temp file next to `path` and renames it in place,
    /// so the target is never left half-written.
    fn write_atomic(path: &Path, data: &[u8], clobber: bool) -> io::Result<()> {
        let dir = path
            .parent()
            .ok_or_else(|| io::Error::new(ErrorKind::InvalidInput, "path has no parent"))?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(data)?;

        if clobber {
            tmp.persist(path).map_err(|e| e.error)?;
        } else {
            tmp.persist_noclobber(path).map_err(|e| e.error)?;
        }
        Ok(())
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

impl Vault for LocalVault {
    fn markdown_files(&self) -> Result<Vec<FileEntry>, VaultError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
        {
            let entry = entry.map_err(|e| VaultError::Io(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            match self.vault_path(entry.path()) {
                Some(path) if is_markdown_path(&path) => files.push(FileEntry::new(&path)),
                Some(_) => {}
                None => log::warn!("skipping non UTF-8 path: {}", entry.path().display()),
            }
        }

        log::debug!("found {} markdown files in {}", files.len(), self.root.display());
        Ok(files)
    }

    fn entry_at(&self, path: &str) -> Result<Option<Entry>, VaultError> {
        let disk_path = self.resolve(path)?;

        let metadata = match fs::metadata(&disk_path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let path = normalize_path(path);
        if metadata.is_dir() {
            if path.is_empty() {
                return Ok(Some(Entry::Folder(self.root_folder())));
            }
            Ok(Some(Entry::Folder(Folder::new(&path))))
        } else {
            Ok(Some(Entry::File(FileEntry::new(&path))))
        }
    }

    async fn read(&self, file: &FileEntry) -> Result<String, VaultError> {
        let disk_path = self.resolve(&file.path)?;

        tokio::fs::read_to_string(&disk_path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => VaultError::NotFound(file.path.clone()),
                _ => VaultError::Io(e),
            })
    }

    async fn create(&self, path: &str, content: &str) -> Result<FileEntry, VaultError> {
        let disk_path = self.resolve(path)?;
        let file = FileEntry::new(path);

        if file.name.is_empty() {
            return Err(VaultError::InvalidPath(file.path));
        }

        match disk_path.parent() {
            Some(parent) if parent.is_dir() => {}
            _ => return Err(VaultError::NotFound(file.parent_path().to_string())),
        }

        Self::write_atomic(&disk_path, content.as_bytes(), false).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => VaultError::AlreadyExists(file.path.clone()),
            _ => VaultError::Io(e),
        })?;

        Ok(file)
    }

    async fn modify(&self, file: &FileEntry, content: &str) -> Result<(), VaultError> {
        let disk_path = self.resolve(&file.path)?;

        if disk_path.is_dir() {
            return Err(VaultError::NotAFile(file.path.clone()));
        }
        if !disk_path.exists() {
            return Err(VaultError::NotFound(file.path.clone()));
        }

        Self::write_atomic(&disk_path, content.as_bytes(), true)?;
        Ok(())
    }
}
