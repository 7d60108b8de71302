//! Command-line interface wiring for the `resume` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! submodules, one per command family.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use resumekit::Config;

pub mod ats;
pub mod check;
pub mod common;
pub mod init;
pub mod library;
pub mod render;
pub mod starter;
pub mod utils;

/// Parsed CLI entrypoint for the `resume` binary.
#[derive(Parser, Debug)]
#[command(name = "resume", version, about = "Résumé data toolkit")]
pub struct Cli {
    /// Library file (overrides RESUME_LIBRARY).
    #[arg(long, global = true)]
    pub library: Option<PathBuf>,

    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// High-level command families made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a new résumé file from a starter.
    Init(init::InitArgs),
    /// Check a résumé file for structural conformance and convention issues.
    Check(check::CheckArgs),
    /// Render a résumé as plain text or Markdown.
    Render(render::RenderArgs),
    #[command(subcommand)]
    Ats(ats::AtsCommand),
    #[command(subcommand)]
    Library(library::LibraryCommand),
    #[command(subcommand)]
    Starter(starter::StarterCommand),
}

/// Execute the requested command.
pub fn run(cli: Cli, config: &Config) -> Result<()> {
    let library_path = cli
        .library
        .unwrap_or_else(|| config.library_path.clone());
    match cli.command {
        Command::Init(args) => init::handle(args),
        Command::Check(args) => check::handle(args),
        Command::Render(args) => render::handle(args),
        Command::Ats(cmd) => ats::handle(cmd),
        Command::Library(cmd) => library::handle(cmd, &library_path),
        Command::Starter(cmd) => starter::handle(cmd),
    }
}
