//! Table-of-contents generation for a vault folder.
//!
//! A run goes through these stages, each in its own module:
//!
//! 1. [`select`] picks the markdown files under the folder, minus the TOC
//!    note itself and anything matching an exclusion pattern.
//! 2. [`sort`] orders them by title under the configured [`SortMode`],
//!    using the number-aware comparator in [`collate`].
//! 3. [`display`] computes each note's label and link target, and
//!    [`heading`] pulls the headings out of its content.
//! 4. [`render`] assembles the note text.
//! 5. [`generate`] ties it together and writes the note back into the vault.
//!
//! [`SortMode`]: crate::settings::SortMode

pub mod collate;
pub mod display;
pub mod generate;
pub mod heading;
pub mod render;
pub mod select;
pub mod sort;

pub use generate::{GeneratedToc, generate_toc, generate_toc_for_active_file};
pub use heading::{Heading, extract_headings};
