use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use rough_toc::vault::local::LocalVault;
use rough_toc::vault::{Entry, Vault};
use rough_toc::{Settings, SortMode, TocError, generate_toc, generate_toc_for_active_file};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a table of contents note for a vault folder")]
struct Cli {
    /// Folder to generate the TOC for, relative to the vault root.
    /// Defaults to the vault root.
    #[arg(conflicts_with = "active")]
    folder: Option<String>,

    /// Root directory of the vault
    #[arg(long, default_value = ".")]
    vault: PathBuf,

    /// Generate the TOC for the folder holding this vault file instead
    #[arg(short, long)]
    active: Option<String>,

    /// Settings file (JSON). Defaults to the user config directory.
    #[arg(short = 'c', long)]
    settings: Option<PathBuf>,

    /// Title of the TOC note, also used as its file name
    #[arg(short = 'T', long)]
    title: Option<String>,

    /// Deepest heading level to list
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=6))]
    depth: Option<u8>,

    /// Comma-separated path substrings to skip
    #[arg(short = 'x', long)]
    exclude: Option<String>,

    /// Sort order of the listed notes
    #[arg(short, long, value_enum)]
    sort: Option<SortArg>,

    /// Do not prefix notes in subfolders with their folder name
    #[arg(long)]
    no_folder_prefix: bool,

    /// Persist the resulting settings
    #[arg(long)]
    save: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Numeric,
    Alphabetic,
    Mixed,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Numeric => SortMode::Numeric,
            SortArg::Alphabetic => SortMode::Alphabetic,
            SortArg::Mixed => SortMode::Mixed,
        }
    }
}

impl Cli {
    /// Applies command-line overrides on top of loaded settings.
    fn merge_into(&self, settings: &mut Settings) {
        if let Some(title) = &self.title {
            settings.set_note_title(title);
        }
        if let Some(depth) = self.depth {
            settings.set_max_heading_depth(depth);
        }
        if let Some(exclude) = &self.exclude {
            settings.set_exclude_patterns(exclude);
        }
        if let Some(sort) = self.sort {
            settings.set_sort_mode(sort.into());
        }
        if self.no_folder_prefix {
            settings.set_show_primary_folder_name(false);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    let settings_path = match &cli.settings {
        Some(path) => path.clone(),
        None => Settings::default_path()?,
    };
    info!("Loading settings from {}", settings_path.display());

    let mut settings = Settings::load(&settings_path)
        .with_context(|| format!("Failed to load settings from {}", settings_path.display()))?;
    cli.merge_into(&mut settings);

    if cli.save {
        settings
            .save(&settings_path)
            .with_context(|| format!("Failed to save settings to {}", settings_path.display()))?;
    }

    let vault = LocalVault::open(&cli.vault)
        .with_context(|| format!("Failed to open vault at {}", cli.vault.display()))?;

    let toc = if cli.active.is_some() {
        generate_toc_for_active_file(&vault, &settings, cli.active.as_deref()).await?
    } else {
        let target = cli.folder.as_deref().unwrap_or("");
        let Some(Entry::Folder(folder)) = vault.entry_at(target)? else {
            return Err(TocError::NoTarget).with_context(|| format!("'{target}' is not a folder"));
        };
        generate_toc(&vault, &settings, &folder).await?
    };

    println!("{toc}");
    info!("Wrote {} notes to {}", toc.entries, toc.path);

    Ok(())
}
