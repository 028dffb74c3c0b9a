use crate::error::{TocError, TocResult};
use crate::settings::Settings;
use crate::toc::display::{display_label, link_path};
use crate::toc::heading::extract_headings;
use crate::toc::render::{TocEntry, render};
use crate::toc::select::{select_files, toc_path};
use crate::toc::sort::sort_files;
use crate::vault::{Entry, Folder, Vault};
use futures_util::future::join_all;
use std::fmt;

/// Result of a successful TOC run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedToc {
    /// Vault path of the TOC note.
    pub path: String,
    /// `true` if the note was created, `false` if an existing one was overwritten.
    pub created: bool,
    /// Number of notes listed.
    pub entries: usize,
    pub content: String,
}

impl fmt::Display for GeneratedToc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Table of content updated.")
    }
}

/// Generates the TOC note for `folder` and writes it into the vault.
///
/// Note contents are read concurrently; the listing always follows the
/// configured sort order.
///
/// # Errors
/// - [`TocError::EmptySelection`] if no note is left to list; nothing is written
/// - [`TocError::ReadFailure`] if a note cannot be read; nothing is written
/// - [`TocError::PathConflict`] if a folder sits at the TOC path
/// - [`TocError::WriteFailure`] if the vault rejects the write
/// - [`TocError::Vault`] if the vault cannot be enumerated
pub async fn generate_toc<V: Vault>(
    vault: &V,
    settings: &Settings,
    folder: &Folder,
) -> TocResult<GeneratedToc> {
    let title = settings.toc_title();
    let path = toc_path(folder, title);

    let candidates = vault.markdown_files()?;
    let files = select_files(candidates, folder, &path, &settings.exclude_patterns());
    if files.is_empty() {
        log::warn!("no markdown files to list in '{}'", folder.path);
        return Err(TocError::EmptySelection {
            folder: folder.path.clone(),
        });
    }

    let files = sort_files(files, settings.sort_mode);
    let depth = settings.heading_depth();
    let contents = join_all(files.iter().map(|file| vault.read(file))).await;

    let mut entries = Vec::with_capacity(files.len());
    for (file, content) in files.iter().zip(contents) {
        let content = content.map_err(|source| {
            log::error!("failed to read '{}': {source}", file.path);
            TocError::ReadFailure {
                path: file.path.clone(),
                source,
            }
        })?;

        entries.push(TocEntry {
            link: link_path(&file.path).to_string(),
            label: display_label(folder, file, settings.show_primary_folder_name),
            headings: extract_headings(&content, depth),
        });
    }

    let content = render(title, &entries);
    let created = write_toc(vault, &path, &content).await?;

    log::info!(
        "{} '{path}' with {} notes",
        if created { "created" } else { "updated" },
        entries.len()
    );

    Ok(GeneratedToc {
        path,
        created,
        entries: entries.len(),
        content,
    })
}

/// Generates the TOC for the folder holding `active_path`.
///
/// # Errors
/// - [`TocError::NoTarget`] if there is no active path, or it is not a file
///   in a folder of the vault
/// - anything [`generate_toc`] returns
pub async fn generate_toc_for_active_file<V: Vault>(
    vault: &V,
    settings: &Settings,
    active_path: Option<&str>,
) -> TocResult<GeneratedToc> {
    let Some(active_path) = active_path else {
        log::warn!("no active file");
        return Err(TocError::NoTarget);
    };

    let Some(Entry::File(file)) = vault.entry_at(active_path)? else {
        log::warn!("'{active_path}' is not a file in the vault");
        return Err(TocError::NoTarget);
    };

    match vault.entry_at(file.parent_path())? {
        Some(Entry::Folder(folder)) => generate_toc(vault, settings, &folder).await,
        _ => {
            log::warn!("'{}' has no parent folder", file.path);
            Err(TocError::NoTarget)
        }
    }
}

/// Creates or overwrites the TOC note. Returns whether it was created.
async fn write_toc<V: Vault>(vault: &V, path: &str, content: &str) -> TocResult<bool> {
    let written = match vault.entry_at(path)? {
        Some(Entry::Folder(_)) => {
            log::warn!("'{path}' is occupied by a folder, not writing");
            return Err(TocError::PathConflict {
                path: path.to_string(),
            });
        }
        Some(Entry::File(existing)) => vault.modify(&existing, content).await.map(|()| false),
        None => vault.create(path, content).await.map(|_| true),
    };

    written.map_err(|source| {
        log::error!("failed to write '{path}': {source}");
        TocError::WriteFailure {
            path: path.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::memory::MemoryVault;

    #[tokio::test]
    async fn renders_the_reference_document() {
        let vault = MemoryVault::new("vault");
        vault.add_file("A.md", "# H1\ntext\n## H2\n### H3");

        let mut settings = Settings::default();
        settings.max_heading_depth = 2;

        let toc = generate_toc(&vault, &settings, &vault.root_folder())
            .await
            .unwrap();

        let expected = "# Table of content\n\n- [[A|A]]\n\t- [[A#H1|H1]]\n\t\t- [[A#H2|H2]]";
        assert_eq!(toc.content, expected);
        assert_eq!(toc.path, "Table of content.md");
        assert!(toc.created);
        assert_eq!(vault.content("Table of content.md").as_deref(), Some(expected));
    }

    #[tokio::test]
    async fn second_run_overwrites_without_listing_itself() {
        let vault = MemoryVault::new("vault");
        vault.add_file("notes/a.md", "# A");

        let settings = Settings::default();
        let folder = Folder::new("notes");

        let first = generate_toc(&vault, &settings, &folder).await.unwrap();
        let second = generate_toc(&vault, &settings, &folder).await.unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.content, second.content);
        assert_eq!(second.entries, 1);
    }

    #[tokio::test]
    async fn empty_folder_writes_nothing() {
        let vault = MemoryVault::new("vault");
        vault.add_folder("empty");
        vault.add_file("other/a.md", "# A");

        let err = generate_toc(&vault, &Settings::default(), &Folder::new("empty"))
            .await
            .unwrap_err();

        assert!(matches!(err, TocError::EmptySelection { ref folder } if folder == "empty"));
        assert_eq!(vault.content("empty/Table of content.md"), None);
    }

    #[tokio::test]
    async fn folder_at_toc_path_blocks_the_write() {
        let vault = MemoryVault::new("vault");
        vault.add_file("notes/a.md", "# A");
        vault.add_folder("notes/Table of content.md");

        let err = generate_toc(&vault, &Settings::default(), &Folder::new("notes"))
            .await
            .unwrap_err();

        assert!(matches!(err, TocError::PathConflict { .. }));
    }

    #[tokio::test]
    async fn active_file_targets_its_folder() {
        let vault = MemoryVault::new("vault");
        vault.add_file("notes/a.md", "# A");
        vault.add_file("notes/b.md", "# B");
        vault.add_file("c.md", "# C");

        let toc = generate_toc_for_active_file(&vault, &Settings::default(), Some("notes/a.md"))
            .await
            .unwrap();

        assert_eq!(toc.path, "notes/Table of content.md");
        assert_eq!(toc.entries, 2);
    }

    #[tokio::test]
    async fn missing_active_file_is_no_target() {
        let vault = MemoryVault::new("vault");
        vault.add_file("notes/a.md", "# A");
        let settings = Settings::default();

        let none = generate_toc_for_active_file(&vault, &settings, None).await;
        assert!(matches!(none, Err(TocError::NoTarget)));

        let folder = generate_toc_for_active_file(&vault, &settings, Some("notes")).await;
        assert!(matches!(folder, Err(TocError::NoTarget)));

        let gone = generate_toc_for_active_file(&vault, &settings, Some("gone.md")).await;
        assert!(matches!(gone, Err(TocError::NoTarget)));
    }
}
