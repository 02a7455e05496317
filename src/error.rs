use std::path::PathBuf;

use thiserror::Error;

/// Batch-level failures: nothing usable came out of the recipe directory.
/// These abort the run; the caller surfaces them and exits non-zero.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("recipe directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("no markdown files found in recipe directory: {0}")]
    NoRecipesFound(PathBuf),
}

/// Per-document failures: a required field is missing or unreadable. The
/// directory scan logs these and skips the file; they never abort the batch.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("missing `# <name>` header")]
    MissingName,

    #[error("missing `- nb portions :` line")]
    MissingPortions,

    #[error("missing `- temps préparation :` line")]
    MissingPrepTime,

    #[error("missing `- temps cuisson :` line")]
    MissingCookTime,

    #[error("unreadable number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
