//! Starter discovery commands (`resume starter ...`).

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use resumekit::{StarterRegistry, to_json_pretty};

/// Starter subcommands.
#[derive(Subcommand, Debug)]
pub enum StarterCommand {
    /// List all known starters.
    List,
    /// Print a starter résumé as JSON.
    Show(StarterShowArgs),
}

/// Arguments for `resume starter show`.
#[derive(Args, Debug)]
pub struct StarterShowArgs {
    /// Starter name to display.
    pub name: String,
}

/// Execute a starter command.
pub fn handle(command: StarterCommand) -> Result<()> {
    match command {
        StarterCommand::List => list(),
        StarterCommand::Show(args) => show(args),
    }
}

fn list() -> Result<()> {
    println!("Available starters:");
    for starter in StarterRegistry::list() {
        println!("  - {}: {}", starter.name, starter.description);
    }
    Ok(())
}

fn show(args: StarterShowArgs) -> Result<()> {
    let starter = StarterRegistry::get(&args.name)
        .with_context(|| format!("starter '{}' not found", args.name))?;
    println!("{}", to_json_pretty(&starter.build())?);
    Ok(())
}
