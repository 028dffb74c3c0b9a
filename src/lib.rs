//! # rough_toc
//!
//! Generates a "table of contents" note for a folder of Markdown notes:
//! every note under the folder, sorted and filtered, with its headings
//! nested below it as wiki links.
//!
//! ## Features
//!
//! - **Folder TOC**: One note listing every Markdown file below a folder, with its headings
//! - **Three sort modes**: Numeric, alphabetic, and mixed (letters, then digits, then symbols)
//! - **Exclusions**: Skip paths by case-insensitive substring
//! - **Pluggable storage**: Runs against any [`vault::Vault`]; on-disk and in-memory stores included
//! - **Atomic writes**: The TOC note is never left half-written
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rough_toc::settings::Settings;
//! use rough_toc::toc::generate_toc;
//! use rough_toc::vault::Folder;
//! use rough_toc::vault::local::LocalVault;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let vault = LocalVault::open("/path/to/vault")?;
//! let settings = Settings::load(&Settings::default_path()?)?;
//!
//! let toc = generate_toc(&vault, &settings, &Folder::new("Projects")).await?;
//! println!("{toc} ({} notes in {})", toc.entries, toc.path);
//! # Ok(())
//! # }
//! ```
//!
//! ## Output
//!
//! ```text
//! # Table of content
//!
//! - [[Projects/Sub/Note|Sub -> Note]]
//! 	- [[Projects/Sub/Note#Heading|Heading]]
//! ```
//!
//! ## Architecture
//!
//! - **[`toc`]**: Selection, sorting, heading extraction, rendering, and the write
//! - **[`vault`]**: The storage contract and its implementations
//! - **[`settings`]**: User settings and their JSON persistence
//! - **[`error`]**: Unified error handling throughout the library
//!
//! ## Error Handling
//!
//! Generation returns [`TocResult<T>`], wrapping [`TocError`]. Each variant's
//! message is the notice to show the user, and no variant leaves a
//! partially written note behind.

pub mod error;
pub mod settings;
pub mod toc;
pub mod vault;

/// Re-exports the most commonly used types for convenience.
pub use error::{TocError, TocResult};
pub use settings::{Settings, SortMode};
pub use toc::{GeneratedToc, generate_toc, generate_toc_for_active_file};
