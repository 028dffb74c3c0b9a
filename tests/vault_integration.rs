use rough_toc::vault::local::LocalVault;
use rough_toc::vault::{Entry, FileEntry, Folder, Vault, VaultError};
use std::fs;
use tempfile::TempDir;

fn vault_with(files: &[(&str, &str)]) -> (TempDir, LocalVault) {
    let tmpdir = TempDir::new().unwrap();
    for (path, content) in files {
        let full = tmpdir.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }
    let vault = LocalVault::open(tmpdir.path()).unwrap();
    (tmpdir, vault)
}

#[test]
fn opening_missing_directory_fails() {
    let tmpdir = TempDir::new().unwrap();
    let result = LocalVault::open(tmpdir.path().join("nope"));
    assert!(matches!(result, Err(VaultError::NotFound(_))));
}

#[test]
fn opening_a_file_fails() {
    let (tmpdir, _) = vault_with(&[("a.md", "")]);
    let result = LocalVault::open(tmpdir.path().join("a.md"));
    assert!(matches!(result, Err(VaultError::InvalidPath(_))));
}

#[test]
fn lists_markdown_files_with_vault_paths() {
    let (_tmpdir, vault) = vault_with(&[
        ("a.md", ""),
        ("Projects/Sub/Note.md", ""),
        ("Projects/image.png", ""),
        (".obsidian/workspace.md", ""),
        ("Projects/.hidden.md", ""),
    ]);

    let mut paths: Vec<_> = vault
        .markdown_files()
        .unwrap()
        .into_iter()
        .map(|f| f.path)
        .collect();
    paths.sort();

    assert_eq!(paths, vec!["Projects/Sub/Note.md", "a.md"]);
}

#[test]
fn entry_at_distinguishes_files_and_folders() {
    let (_tmpdir, vault) = vault_with(&[("Projects/Note.md", "")]);

    assert_eq!(
        vault.entry_at("Projects").unwrap(),
        Some(Entry::Folder(Folder::new("Projects")))
    );
    assert_eq!(
        vault.entry_at("Projects/Note.md").unwrap(),
        Some(Entry::File(FileEntry::new("Projects/Note.md")))
    );
    assert_eq!(vault.entry_at("Projects/Other.md").unwrap(), None);
    assert_eq!(
        vault.entry_at("").unwrap(),
        Some(Entry::Folder(vault.root_folder()))
    );
}

#[test]
fn paths_cannot_escape_the_root() {
    let (_tmpdir, vault) = vault_with(&[]);
    assert!(matches!(
        vault.entry_at("../outside.md"),
        Err(VaultError::InvalidPath(_))
    ));
}

#[tokio::test]
async fn create_read_and_modify() -> Result<(), VaultError> {
    let (tmpdir, vault) = vault_with(&[("Projects/a.md", "")]);

    let file = vault.create("Projects/TOC.md", "first").await?;
    assert_eq!(file.name, "TOC.md");
    assert_eq!(vault.read(&file).await?, "first");

    vault.modify(&file, "second").await?;
    assert_eq!(
        fs::read_to_string(tmpdir.path().join("Projects/TOC.md"))?,
        "second"
    );

    Ok(())
}

#[tokio::test]
async fn create_does_not_clobber() {
    let (_tmpdir, vault) = vault_with(&[("a.md", "keep")]);

    let err = vault.create("a.md", "lost").await.unwrap_err();
    assert!(matches!(err, VaultError::AlreadyExists(_)));
    assert_eq!(vault.read(&FileEntry::new("a.md")).await.unwrap(), "keep");
}

#[tokio::test]
async fn create_needs_an_existing_parent() {
    let (_tmpdir, vault) = vault_with(&[]);

    let err = vault.create("missing/a.md", "x").await.unwrap_err();
    assert!(matches!(err, VaultError::NotFound(p) if p == "missing"));
}

#[tokio::test]
async fn reading_a_missing_file_is_not_found() {
    let (_tmpdir, vault) = vault_with(&[]);

    let err = vault.read(&FileEntry::new("gone.md")).await.unwrap_err();
    assert!(matches!(err, VaultError::NotFound(_)));
}
