use crate::settings::SettingsError;
use crate::vault::VaultError;
use thiserror::Error;

/// Every way a TOC run can end without writing.
///
/// The `Display` text of each variant is the notice shown to the user.
#[derive(Debug, Error)]
pub enum TocError {
    #[error("No active file found.")]
    NoTarget,

    #[error("No markdown files found in folder.")]
    EmptySelection { folder: String },

    #[error("A folder or non-markdown item blocks the TOC path.")]
    PathConflict { path: String },

    #[error("Failed to read note '{path}'.")]
    ReadFailure {
        path: String,
        #[source]
        source: VaultError,
    },

    #[error("Failed to write Table of content note.")]
    WriteFailure {
        path: String,
        #[source]
        source: VaultError,
    },

    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

pub type TocResult<T> = Result<T, TocError>;
