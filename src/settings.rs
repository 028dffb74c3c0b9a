//! Plugin settings and their persistence.
//!
//! Settings are stored as a camelCase JSON object, the same shape a host
//! keeps in its plugin `data.json`. Loading tolerates partial objects:
//! any field that is missing falls back to [`Settings::default`].

use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

pub const DEFAULT_TOC_TITLE: &str = "Table of content";
pub const DEFAULT_HEADING_DEPTH: u8 = 3;
pub const MIN_HEADING_DEPTH: u8 = 1;
pub const MAX_HEADING_DEPTH: u8 = 6;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("config directory not found")]
    NoConfigDir,

    #[error("invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Ordering policy for the notes listed in a TOC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Leading numbers first, by value.
    Numeric,
    Alphabetic,
    /// Letter-led titles, then digit-led, then everything else.
    #[default]
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Title of the TOC note, also used for its file name.
    pub note_title: String,
    /// Deepest heading level listed under each note.
    #[serde(deserialize_with = "deserialize_heading_depth")]
    pub max_heading_depth: u8,
    /// Comma-separated, case-insensitive path substrings to skip.
    pub exclude_patterns: String,
    /// Prefix notes in subfolders with `<folder> -> `.
    pub show_primary_folder_name: bool,
    pub sort_mode: SortMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            note_title: DEFAULT_TOC_TITLE.to_string(),
            max_heading_depth: DEFAULT_HEADING_DEPTH,
            exclude_patterns: String::new(),
            show_primary_folder_name: true,
            sort_mode: SortMode::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a JSON file.
    ///
    /// A missing file yields the defaults; a partial object is completed
    /// with default values.
    ///
    /// # Errors
    /// - [`SettingsError::Io`] if the file exists but cannot be read
    /// - [`SettingsError::Parse`] if the file is not a valid settings object
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        Self::from_json(&data)
    }

    /// Parses a (possibly partial) settings object.
    pub fn from_json(data: &str) -> Result<Self, SettingsError> {
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(data)?)
    }

    /// Persists the full settings object as pretty JSON.
    ///
    /// The parent directory is created if needed and the file is replaced
    /// atomically (tempfile + rename).
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(self)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(path).map_err(|e| SettingsError::Io(e.error))?;

        log::debug!("saved settings to {}", path.display());
        Ok(())
    }

    /// Resolves the default settings file, `<config dir>/rough-toc/settings.json`.
    ///
    /// # Errors
    /// - [`SettingsError::NoConfigDir`] if the platform config directory is unknown
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let config = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
        Ok(config.join("rough-toc").join("settings.json"))
    }

    /// The TOC title, falling back to the default when blank.
    pub fn toc_title(&self) -> &str {
        match self.note_title.trim() {
            "" => DEFAULT_TOC_TITLE,
            title => title,
        }
    }

    /// `max_heading_depth` clamped to the valid heading range.
    pub fn heading_depth(&self) -> u8 {
        clamp_heading_depth(self.max_heading_depth)
    }

    /// Exclusion substrings, trimmed, with empty entries dropped.
    pub fn exclude_patterns(&self) -> Vec<&str> {
        self.exclude_patterns
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    pub fn set_note_title(&mut self, title: &str) {
        self.note_title = if title.is_empty() {
            DEFAULT_TOC_TITLE.to_string()
        } else {
            title.to_string()
        };
    }

    pub fn set_max_heading_depth(&mut self, depth: u8) {
        self.max_heading_depth = clamp_heading_depth(depth);
    }

    pub fn set_exclude_patterns(&mut self, patterns: &str) {
        self.exclude_patterns = patterns.to_string();
    }

    pub fn set_show_primary_folder_name(&mut self, show: bool) {
        self.show_primary_folder_name = show;
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }
}

pub fn clamp_heading_depth(depth: u8) -> u8 {
    depth.clamp(MIN_HEADING_DEPTH, MAX_HEADING_DEPTH)
}

// Hosts store the depth as a plain JSON number; any number is accepted and
// clamped instead of failing the whole settings object.
fn deserialize_heading_depth<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let depth = f64::deserialize(deserializer)?;
    Ok(depth.clamp(f64::from(MIN_HEADING_DEPTH), f64::from(MAX_HEADING_DEPTH)) as u8)
}
