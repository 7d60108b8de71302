//! Résumé library commands (`resume library ...`).

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::{Args, Subcommand};
use resumekit::{MAX_RESUMES, render, to_json_pretty};

use crate::cli::common::RenderFormatArg;
use crate::cli::utils::{
    load_library, load_or_create_library, load_resume, save_library, write_output,
};

/// Supported `resume library` subcommands.
#[derive(Subcommand, Debug)]
pub enum LibraryCommand {
    /// Store a résumé file in the library.
    Add(LibraryAddArgs),
    /// List stored résumés.
    List,
    /// Render a stored résumé (defaults to the selected one).
    Show(LibraryShowArgs),
    /// Remove a stored résumé.
    Remove(LibraryIdArgs),
    /// Mark a stored résumé as selected.
    Select(LibraryIdArgs),
    /// Write a stored résumé back out as JSON.
    Export(LibraryExportArgs),
    /// Show the library audit history.
    Log,
}

/// Arguments for `resume library add`.
#[derive(Args, Debug)]
pub struct LibraryAddArgs {
    /// Résumé JSON file (`-` for stdin).
    pub file: PathBuf,
    /// Display name (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments naming a stored résumé by id.
#[derive(Args, Debug)]
pub struct LibraryIdArgs {
    pub id: String,
}

/// Arguments for `resume library show`.
#[derive(Args, Debug)]
pub struct LibraryShowArgs {
    /// Stored résumé id (defaults to the selection).
    pub id: Option<String>,
    #[arg(long, default_value_t = RenderFormatArg::Text, value_enum)]
    pub format: RenderFormatArg,
}

/// Arguments for `resume library export`.
#[derive(Args, Debug)]
pub struct LibraryExportArgs {
    pub id: String,
    /// Output file path (`-` for stdout).
    #[arg(short = 'o', long = "output", default_value = "-")]
    pub output: PathBuf,
}

/// Execute a library command against the library file at `path`.
pub fn handle(command: LibraryCommand, path: &Path) -> Result<()> {
    match command {
        LibraryCommand::Add(args) => add(args, path),
        LibraryCommand::List => list(path),
        LibraryCommand::Show(args) => show(args, path),
        LibraryCommand::Remove(args) => remove(args, path),
        LibraryCommand::Select(args) => select(args, path),
        LibraryCommand::Export(args) => export(args, path),
        LibraryCommand::Log => log(path),
    }
}

fn add(args: LibraryAddArgs, path: &Path) -> Result<()> {
    let resume = load_resume(&args.file)?;
    let name = display_name(&args);
    let mut library = load_or_create_library(path)?;
    let id = library.add(name, resume)?.id.clone();
    save_library(&mut library, path)?;
    println!(
        "Stored {} as id {} ({}/{} slots used)",
        args.file.display(),
        id,
        library.len(),
        MAX_RESUMES
    );
    Ok(())
}

fn display_name(args: &LibraryAddArgs) -> String {
    if let Some(name) = &args.name {
        return name.clone();
    }
    if args.file.as_os_str() == "-" {
        return "stdin".to_string();
    }
    args.file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string())
}

fn list(path: &Path) -> Result<()> {
    let library = load_library(path)?;
    if library.is_empty() {
        println!("Library {} is empty.", path.display());
        return Ok(());
    }
    let selected = library.header.selected.as_deref();
    for entry in library.entries() {
        let marker = if Some(entry.id.as_str()) == selected {
            '*'
        } else {
            ' '
        };
        println!(
            "{} {:>3}  {:<30} {}  {}",
            marker,
            entry.id,
            entry.name,
            entry.saved_at.format("%Y-%m-%d %H:%M"),
            entry.fingerprint.get(..12).unwrap_or(entry.fingerprint.as_str())
        );
    }
    Ok(())
}

fn show(args: LibraryShowArgs, path: &Path) -> Result<()> {
    let library = load_library(path)?;
    let entry = match args.id.as_deref() {
        Some(id) => library
            .get(id)
            .ok_or_else(|| anyhow!("no résumé with id '{}' in {}", id, path.display()))?,
        None => library
            .selected()
            .ok_or_else(|| anyhow!("no résumé selected in {}", path.display()))?,
    };
    print!("{}", render(&entry.data, args.format.into()));
    Ok(())
}

fn remove(args: LibraryIdArgs, path: &Path) -> Result<()> {
    let mut library = load_library(path)?;
    let removed = library.remove(&args.id)?;
    save_library(&mut library, path)?;
    println!("Removed '{}' (id {})", removed.name, removed.id);
    match library.selected() {
        Some(entry) => println!("Selected: {} (id {})", entry.name, entry.id),
        None => println!("Library is now empty."),
    }
    Ok(())
}

fn select(args: LibraryIdArgs, path: &Path) -> Result<()> {
    let mut library = load_library(path)?;
    library.select(&args.id)?;
    save_library(&mut library, path)?;
    println!("Selected id {}", args.id);
    Ok(())
}

fn export(args: LibraryExportArgs, path: &Path) -> Result<()> {
    let library = load_library(path)?;
    let entry = library
        .get(&args.id)
        .ok_or_else(|| anyhow!("no résumé with id '{}' in {}", args.id, path.display()))?;
    let mut json = to_json_pretty(&entry.data)?;
    json.push('\n');
    write_output(&args.output, &json)
}

fn log(path: &Path) -> Result<()> {
    let library = load_library(path)?;
    if library.header.history.is_empty() {
        println!("No audit events recorded.");
    } else {
        for event in &library.header.history {
            println!("{} {} - {}", event.timestamp, event.actor, event.action);
        }
    }
    Ok(())
}
