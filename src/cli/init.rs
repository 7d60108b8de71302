//! `resume init`: create a résumé file from a starter.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use resumekit::{StarterRegistry, to_json_pretty};
use tracing::info;

use crate::cli::utils::write_output;

/// Arguments for `resume init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output résumé path (JSON, `-` for stdout).
    pub path: PathBuf,
    /// Starter to copy (see `resume starter list`).
    #[arg(short = 's', long, default_value = "minimal")]
    pub starter: String,
    /// Full name to put in the contact block.
    #[arg(long)]
    pub name: Option<String>,
    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

pub fn handle(args: InitArgs) -> Result<()> {
    let starter = StarterRegistry::get(&args.starter)
        .with_context(|| format!("starter '{}' not found", args.starter))?;
    let to_stdout = args.path.as_os_str() == "-";
    if !to_stdout && args.path.exists() && !args.force {
        bail!(
            "{} already exists; pass --force to overwrite",
            args.path.display()
        );
    }

    let mut resume = starter.build();
    if let Some(name) = args.name {
        resume.personal_info.full_name = name;
    }
    let mut json = to_json_pretty(&resume)?;
    json.push('\n');
    write_output(&args.path, &json)?;

    info!(starter = starter.name, "initialized résumé");
    if !to_stdout {
        println!(
            "Created {} from starter '{}'",
            args.path.display(),
            starter.name
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use resumekit::parse_resume;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("me.json");
        let args = |force| InitArgs {
            path: path.clone(),
            starter: "sample".to_string(),
            name: None,
            force,
        };

        handle(args(false)).unwrap();
        let sample = parse_resume(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(sample.experience.len(), 2);

        fs::write(&path, "keep me").unwrap();
        let err = handle(args(false)).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

        handle(InitArgs {
            name: Some("Ada Lovelace".to_string()),
            ..args(true)
        })
        .unwrap();
        let forced = parse_resume(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(forced.personal_info.full_name, "Ada Lovelace");
    }

    #[test]
    fn test_unknown_starter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("me.json");
        let err = handle(InitArgs {
            path: path.clone(),
            starter: "fancy".to_string(),
            name: None,
            force: false,
        })
        .unwrap_err();
        assert!(err.to_string().contains("starter 'fancy' not found"));
        assert!(!path.exists());
    }
}
