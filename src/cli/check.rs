//! `resume check`: structural conformance followed by convention lints.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use resumekit::{conform, lint};
use serde_json::Value;
use tracing::{info, warn};

use crate::cli::utils::read_input;

/// Arguments for `resume check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Résumé JSON file (`-` for stdin).
    pub file: PathBuf,
    /// Treat convention warnings as failures.
    #[arg(long)]
    pub strict: bool,
}

pub fn handle(args: CheckArgs) -> Result<()> {
    let raw = read_input(&args.file)?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", args.file.display()))?;

    let violations = conform::check(&value);
    if !violations.is_empty() {
        for violation in &violations {
            println!("error: {violation}");
        }
        bail!(
            "{} does not conform: {} violation(s)",
            args.file.display(),
            violations.len()
        );
    }

    let resume = conform::from_value(value)?;
    let report = lint::lint(&resume);
    for finding in &report.findings {
        println!("{finding}");
    }
    let warnings = report.warnings().count();
    if warnings > 0 {
        warn!(warnings, "convention warnings found");
        if args.strict {
            bail!(
                "{} has {} convention warning(s)",
                args.file.display(),
                warnings
            );
        }
    }

    info!(file = %args.file.display(), findings = report.findings.len(), "check finished");
    println!(
        "{}: conforms ({} experience, {} education)",
        args.file.display(),
        resume.experience.len(),
        resume.education.len()
    );
    Ok(())
}
