use crate::vault::{Entry, FileEntry, Folder, Vault, VaultError, is_markdown_path, normalize_path};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct State {
    files: BTreeMap<String, String>,
    folders: BTreeSet<String>,
}

/// A vault held entirely in memory.
///
/// Useful for hosts that own note storage themselves and only want the
/// TOC engine. Adding a file creates its ancestor folders; creating one
/// through [`Vault::create`] does not.
#[derive(Default)]
pub struct MemoryVault {
    name: String,
    state: Mutex<State>,
}

impl MemoryVault {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            state: Mutex::default(),
        }
    }

    pub fn root_folder(&self) -> Folder {
        Folder::root(&self.name)
    }

    /// Adds a folder and all of its ancestors.
    pub fn add_folder(&self, path: &str) {
        let path = normalize_path(path);
        let mut state = self.lock();
        Self::insert_ancestors(&mut state, &path);
        if !path.is_empty() {
            state.folders.insert(path);
        }
    }

    /// Adds (or replaces) a file, creating its ancestor folders.
    pub fn add_file(&self, path: &str, content: &str) {
        let path = normalize_path(path);
        let mut state = self.lock();
        Self::insert_ancestors(&mut state, &path);
        state.files.insert(path, content.to_string());
    }

    /// Current content of the file at `path`.
    pub fn content(&self, path: &str) -> Option<String> {
        self.lock().files.get(&normalize_path(path)).cloned()
    }

    fn insert_ancestors(state: &mut State, path: &str) {
        let mut end = 0;
        while let Some(offset) = path[end..].find('/') {
            end += offset;
            state.folders.insert(path[..end].to_string());
            end += 1;
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Vault for MemoryVault {
    fn markdown_files(&self) -> Result<Vec<FileEntry>, VaultError> {
        Ok(self
            .lock()
            .files
            .keys()
            .filter(|path| is_markdown_path(path))
            .map(|path| FileEntry::new(path))
            .collect())
    }

    fn entry_at(&self, path: &str) -> Result<Option<Entry>, VaultError> {
        let path = normalize_path(path);
        if path.is_empty() {
            return Ok(Some(Entry::Folder(self.root_folder())));
        }

        let state = self.lock();
        if state.files.contains_key(&path) {
            Ok(Some(Entry::File(FileEntry::new(&path))))
        } else if state.folders.contains(&path) {
            Ok(Some(Entry::Folder(Folder::new(&path))))
        } else {
            Ok(None)
        }
    }

    async fn read(&self, file: &FileEntry) -> Result<String, VaultError> {
        self.lock()
            .files
            .get(&file.path)
            .cloned()
            .ok_or_else(|| VaultError::NotFound(file.path.clone()))
    }

    async fn create(&self, path: &str, content: &str) -> Result<FileEntry, VaultError> {
        let file = FileEntry::new(path);
        if file.name.is_empty() {
            return Err(VaultError::InvalidPath(file.path));
        }

        let mut state = self.lock();
        if state.files.contains_key(&file.path) || state.folders.contains(&file.path) {
            return Err(VaultError::AlreadyExists(file.path));
        }

        let parent = file.parent_path();
        if !parent.is_empty() && !state.folders.contains(parent) {
            return Err(VaultError::NotFound(parent.to_string()));
        }

        state.files.insert(file.path.clone(), content.to_string());
        Ok(file)
    }

    async fn modify(&self, file: &FileEntry, content: &str) -> Result<(), VaultError> {
        let mut guard = self.lock();
        let state = &mut *guard;
        match state.files.get_mut(&file.path) {
            Some(existing) => {
                *existing = content.to_string();
                Ok(())
            }
            None if state.folders.contains(&file.path) => {
                Err(VaultError::NotAFile(file.path.clone()))
            }
            None => Err(VaultError::NotFound(file.path.clone())),
        }
    }
}
