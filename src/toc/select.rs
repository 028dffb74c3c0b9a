use crate::settings::DEFAULT_TOC_TITLE;
use crate::vault::{FileEntry, Folder};

const UNSAFE_FILE_NAME_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Vault path of the TOC note for `folder`.
///
/// The file name is `"<title>.md"` with characters that are invalid in
/// file names replaced by `-`.
pub fn toc_path(folder: &Folder, title: &str) -> String {
    folder.child_path(&safe_file_name(&format!("{title}.md")))
}

fn safe_file_name(name: &str) -> String {
    let cleaned = name.replace(UNSAFE_FILE_NAME_CHARS, "-");
    match cleaned.trim() {
        "" => format!("{DEFAULT_TOC_TITLE}.md"),
        trimmed => trimmed.to_string(),
    }
}

/// Whether `path` contains any of `patterns`, ignoring case.
pub fn is_excluded(path: &str, patterns: &[&str]) -> bool {
    let path = path.to_lowercase();
    patterns
        .iter()
        .any(|pattern| path.contains(&pattern.to_lowercase()))
}

/// Keeps the files a TOC for `folder` should list.
///
/// Drops files outside `folder`, the TOC note itself, and any file whose
/// path matches an exclusion pattern.
pub fn select_files(
    files: Vec<FileEntry>,
    folder: &Folder,
    toc_path: &str,
    patterns: &[&str],
) -> Vec<FileEntry> {
    let prefix = folder.prefix();

    files
        .into_iter()
        .filter(|file| file.path.starts_with(&prefix))
        .filter(|file| file.path != toc_path)
        .filter(|file| !is_excluded(&file.path, patterns))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(paths: &[&str]) -> Vec<FileEntry> {
        paths.iter().map(|p| FileEntry::new(p)).collect()
    }

    fn paths(files: &[FileEntry]) -> Vec<&str> {
        files.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn keeps_only_descendants_of_the_folder() {
        let all = files(&["Projects/a.md", "Projects/Sub/b.md", "ProjectsOld/c.md", "d.md"]);
        let selected = select_files(all, &Folder::new("Projects"), "Projects/TOC.md", &[]);
        assert_eq!(paths(&selected), vec!["Projects/a.md", "Projects/Sub/b.md"]);
    }

    #[test]
    fn root_folder_keeps_everything() {
        let all = files(&["a.md", "x/b.md"]);
        let selected = select_files(all, &Folder::root("vault"), "TOC.md", &[]);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn toc_note_is_never_listed() {
        let folder = Folder::new("Projects");
        let toc = toc_path(&folder, DEFAULT_TOC_TITLE);
        let all = files(&["Projects/a.md", "Projects/Table of content.md"]);

        let selected = select_files(all, &folder, &toc, &[]);
        assert_eq!(paths(&selected), vec!["Projects/a.md"]);
    }

    #[test]
    fn exclusions_ignore_case() {
        let all = files(&["n/a.md", "n/IMG/b.md", "n/Assets/c.md", "n/d.md"]);
        let selected = select_files(all, &Folder::new("n"), "n/TOC.md", &["img", "ASSETS"]);
        assert_eq!(paths(&selected), vec!["n/a.md", "n/d.md"]);
    }

    #[test]
    fn toc_path_sanitizes_title() {
        assert_eq!(
            toc_path(&Folder::new("Projects"), "Index"),
            "Projects/Index.md"
        );
        assert_eq!(toc_path(&Folder::root("vault"), "a/b: c?"), "a-b- c-.md");
        assert_eq!(toc_path(&Folder::root("vault"), " Index "), "Index .md");
    }
}
