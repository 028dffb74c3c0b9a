use crate::settings::SortMode;
use crate::toc::collate::{cmp_digits, leading_number, natural_cmp};
use crate::toc::display::note_title;
use crate::vault::FileEntry;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Sort keys (note titles) computed once per file path for one sort.
struct TitleKeys {
    titles: HashMap<String, String>,
}

impl TitleKeys {
    fn new(files: &[FileEntry]) -> Self {
        let titles = files
            .iter()
            .map(|file| (file.path.clone(), note_title(&file.name).to_string()))
            .collect();
        Self { titles }
    }

    fn get<'a>(&'a self, file: &'a FileEntry) -> &'a str {
        self.titles
            .get(&file.path)
            .map_or_else(|| note_title(&file.name), String::as_str)
    }
}

/// Partition used by [`SortMode::Mixed`]: letters, then digits, then the rest.
fn leading_class(key: &str) -> u8 {
    match key.chars().next() {
        Some(c) if c.is_alphabetic() => 0,
        Some(c) if c.is_ascii_digit() => 1,
        _ => 2,
    }
}

/// Orders two sort keys under `mode`.
pub fn compare_keys(mode: SortMode, a: &str, b: &str) -> Ordering {
    match mode {
        SortMode::Alphabetic => natural_cmp(a, b),
        SortMode::Numeric => match (leading_number(a), leading_number(b)) {
            (Some(x), Some(y)) => cmp_digits(x, y).then_with(|| natural_cmp(a, b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => natural_cmp(a, b),
        },
        SortMode::Mixed => leading_class(a)
            .cmp(&leading_class(b))
            .then_with(|| natural_cmp(a, b)),
    }
}

/// Sorts files by title under `mode`.
///
/// Files with identical titles are ordered by path, so the result never
/// depends on the input order.
pub fn sort_files(mut files: Vec<FileEntry>, mode: SortMode) -> Vec<FileEntry> {
    let keys = TitleKeys::new(&files);

    files.sort_by(|a, b| {
        compare_keys(mode, keys.get(a), keys.get(b)).then_with(|| natural_cmp(&a.path, &b.path))
    });

    log::debug!("sorted {} files ({mode:?})", files.len());
    files
}
