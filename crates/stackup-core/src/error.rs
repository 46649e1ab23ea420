//! Errors that stop option resolution before anything is written

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Missing application name. Run without arguments for guided setup, or see --help.")]
    MissingAppName,

    #[error("Invalid application name \"{name}\":\n{}", bullet_list(.errors))]
    InvalidName { name: String, errors: Vec<String> },

    #[error("Directory {} already exists. Use --force to generate into it anyway.", .0.display())]
    DirectoryExists(PathBuf),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}

/// Failure whose message the terminal UI has already shown.
///
/// Callers should exit unsuccessfully without printing it again.
#[derive(Debug, Error)]
#[error("error already reported")]
pub struct ErrorReported;

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("  - {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
