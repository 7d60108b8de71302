//! `resume render`: plain text or Markdown output.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use resumekit::render;

use crate::cli::common::RenderFormatArg;
use crate::cli::utils::{load_resume, write_output};

/// Arguments for `resume render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Résumé JSON file (`-` for stdin).
    pub file: PathBuf,
    /// Output format.
    #[arg(long, default_value_t = RenderFormatArg::Text, value_enum)]
    pub format: RenderFormatArg,
    /// Output path (`-` for stdout).
    #[arg(short = 'o', long = "output", default_value = "-")]
    pub output: PathBuf,
}

pub fn handle(args: RenderArgs) -> Result<()> {
    let resume = load_resume(&args.file)?;
    let rendered = render(&resume, args.format.into());
    write_output(&args.output, &rendered)?;
    if args.output.as_os_str() != "-" {
        println!(
            "Rendered {} as {:?} -> {}",
            args.file.display(),
            args.format,
            args.output.display()
        );
    }
    Ok(())
}
