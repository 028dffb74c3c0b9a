use crate::vault::{FileEntry, Folder};

const MARKDOWN_SUFFIX: &str = ".md";

/// Strips one trailing `.md`, ignoring case.
fn strip_markdown_suffix(s: &str) -> &str {
    let split = s.len().saturating_sub(MARKDOWN_SUFFIX.len());
    match s.get(split..) {
        Some(suffix) if suffix.eq_ignore_ascii_case(MARKDOWN_SUFFIX) => &s[..split],
        _ => s,
    }
}

/// A note's title: its file name without the markdown extension.
pub fn note_title(name: &str) -> &str {
    strip_markdown_suffix(name)
}

/// Link target for a note: its vault path without the markdown extension.
pub fn link_path(path: &str) -> &str {
    strip_markdown_suffix(path)
}

/// Name of the folder directly holding `file`, when that folder is below `root`.
///
/// Files sitting directly in `root` have no primary folder.
pub fn primary_folder_name<'a>(root: &Folder, file: &'a FileEntry) -> Option<&'a str> {
    let prefix = root.prefix();
    let relative = file.path.strip_prefix(&prefix).unwrap_or(file.path.as_str());

    let mut segments = relative.rsplit('/');
    segments.next();
    segments.next().filter(|name| !name.is_empty())
}

/// Label shown next to a note's link in the TOC.
pub fn display_label(root: &Folder, file: &FileEntry, show_primary_folder: bool) -> String {
    let title = note_title(&file.name);

    if !show_primary_folder {
        return title.to_string();
    }

    match primary_folder_name(root, file) {
        Some(primary) => format!("{primary} -> {title}"),
        None => title.to_string(),
    }
}
