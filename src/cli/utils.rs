//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use resumekit::{Library, ResumeData, parse_resume};
use tracing::debug;

/// Read a whole file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return read_stdin();
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Read the entire stdin stream into memory.
pub fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

/// Persist a string either to a file or stdout when `-` is provided.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        io::stdout().write_all(content.as_bytes())?;
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Load and conformance-check a résumé JSON file.
pub fn load_resume(path: &Path) -> Result<ResumeData> {
    let raw = read_input(path)?;
    parse_resume(&raw).with_context(|| format!("failed to load résumé {}", path.display()))
}

/// Load a library file, attaching path context to any error.
pub fn load_library(path: &Path) -> Result<Library> {
    Library::load(path).with_context(|| format!("failed to read library {}", path.display()))
}

/// Load a library file, starting an empty one when it does not exist yet.
pub fn load_or_create_library(path: &Path) -> Result<Library> {
    if path.exists() {
        return load_library(path);
    }
    debug!(path = %path.display(), "library file missing; starting a new one");
    Ok(Library::new())
}

/// Save a library, attaching path context to any error.
pub fn save_library(library: &mut Library, path: &Path) -> Result<()> {
    library
        .save(path)
        .with_context(|| format!("failed to write library {}", path.display()))
}
