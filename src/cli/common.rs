//! Shared clap helper types for CLI commands.

use clap::ValueEnum;
use resumekit::RenderFormat;

/// Output formats accepted by rendering commands.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum RenderFormatArg {
    Text,
    #[value(name = "markdown", alias = "md")]
    Markdown,
}

impl From<RenderFormatArg> for RenderFormat {
    fn from(value: RenderFormatArg) -> RenderFormat {
        match value {
            RenderFormatArg::Text => RenderFormat::Text,
            RenderFormatArg::Markdown => RenderFormat::Markdown,
        }
    }
}
