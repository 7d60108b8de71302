//! ATS scoring commands (`resume ats ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use resumekit::{ats, checklist, role};

use crate::cli::utils::{load_resume, read_input};

/// ATS subcommands.
#[derive(Subcommand, Debug)]
pub enum AtsCommand {
    /// Score the structured résumé against the readiness checklist.
    Checklist(AtsChecklistArgs),
    /// Validate the rendered résumé against a job description.
    Validate(AtsValidateArgs),
}

/// Arguments for `resume ats checklist`.
#[derive(Args, Debug)]
pub struct AtsChecklistArgs {
    /// Résumé JSON file (`-` for stdin).
    pub file: PathBuf,
}

/// Arguments for `resume ats validate`.
#[derive(Args, Debug)]
pub struct AtsValidateArgs {
    /// Résumé JSON file (`-` for stdin).
    pub file: PathBuf,
    /// Job description text file (`-` for stdin).
    #[arg(short = 'j', long = "job")]
    pub job: PathBuf,
    /// Print the full report instead of the summary.
    #[arg(long)]
    pub report: bool,
}

/// Execute an ATS command.
pub fn handle(command: AtsCommand) -> Result<()> {
    match command {
        AtsCommand::Checklist(args) => run_checklist(args),
        AtsCommand::Validate(args) => validate(args),
    }
}

fn run_checklist(args: AtsChecklistArgs) -> Result<()> {
    let resume = load_resume(&args.file)?;
    let report = checklist::evaluate(&resume);
    println!("ATS checklist score: {}/100", report.score);
    for check in &report.passed {
        println!("  [x] {}", check.label);
    }
    for check in &report.failed {
        println!("  [ ] {}", check.label);
    }
    if report.is_perfect() {
        println!("Every check passed.");
    } else {
        println!("Recommendations:");
        for rec in report.recommendations() {
            println!("  - {}", rec);
        }
    }
    Ok(())
}

fn validate(args: AtsValidateArgs) -> Result<()> {
    let resume = load_resume(&args.file)?;
    let job = read_input(&args.job)?;
    let screening = ats::screen(&resume, &job);
    let validation = &screening.validation;

    if let Some(warning) = role::mismatch_warning(&screening.role, &screening.role_match) {
        println!("{warning}");
        println!();
    }

    if args.report {
        print!("{}", validation.report());
    } else {
        let bench = validation.benchmark();
        println!(
            "Estimated ATS score: {}/100 ({})",
            validation.comparison.estimated_ats_score, bench.rating
        );
        println!(
            "Keyword match: {}% (role: {} {}, {})",
            validation.score, screening.role.level, screening.role.kind, screening.job_title
        );
        if !screening.matched.critical_missing.is_empty() {
            println!(
                "Critical keywords missing: {}",
                screening.matched.critical_missing.join(", ")
            );
        }
        for issue in &validation.issues {
            println!("  ! {}", issue);
        }
    }

    if !screening.enhancements.is_empty() {
        println!();
        println!("Suggested additions (adjust to match your actual work):");
        for block in &screening.enhancements {
            println!();
            print!("{block}");
        }
    }
    Ok(())
}
