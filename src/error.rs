use thiserror::Error;

/// Errors raised where résumé data crosses a boundary: parsing, storage and lookup.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("malformed résumé data at '{path}': {reason}")]
    Malformed { path: String, reason: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("library already holds the maximum of {max} résumés")]
    LibraryFull { max: usize },

    #[error("no résumé with id '{0}' in library")]
    UnknownResume(String),

    #[error("unknown starter '{0}'")]
    UnknownStarter(String),

    #[error("library file line {line}: {reason}")]
    LibraryFormat { line: usize, reason: String },
}

pub type Result<T, E = ResumeError> = std::result::Result<T, E>;
