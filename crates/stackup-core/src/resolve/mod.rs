//! Turning user input into `ResolvedOptions`
//!
//! Two entry points produce the same result type:
//! - [`resolve_args`] for command-line flags
//! - [`run_wizard`] for the guided setup used when no arguments are given

pub mod args;
pub mod wizard;

use crate::error::ResolveError;
use crate::options::{validate_name, ResolvedOptions};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use args::resolve_args;
pub use wizard::{run_wizard, Prompter};

/// Raw values collected from the command line
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    pub app_name: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub keywords: Vec<String>,
    pub redux: bool,
    pub router: bool,
    pub express: bool,
    pub mongo: bool,
    pub api: Option<String>,
    pub dev_server_port: Option<String>,
    pub api_port: Option<String>,
    pub offline: bool,
    pub force: bool,
    pub sandbox: bool,
    pub skip_install: bool,
    /// Local directory to read templates from instead of the embedded set
    pub template_dir: Option<PathBuf>,
}

/// How the generator was invoked
#[derive(Debug, Clone)]
pub enum Invocation {
    /// No arguments at all: ask the questions interactively
    Wizard,
    /// At least one argument was given
    Flags(GenerateArgs),
}

impl Invocation {
    /// Local template directory requested on the command line, if any
    pub fn template_dir(&self) -> Option<&Path> {
        match self {
            Invocation::Flags(args) => args.template_dir.as_deref(),
            Invocation::Wizard => None,
        }
    }
}

/// Process state the resolvers depend on, captured once at startup
#[derive(Debug, Clone)]
pub struct Environment {
    /// Directory the project is created in
    pub cwd: PathBuf,
    /// Whether the package registry answered the connectivity probe
    pub online: bool,
}

impl Environment {
    pub fn new(cwd: impl Into<PathBuf>, online: bool) -> Self {
        Self {
            cwd: cwd.into(),
            online,
        }
    }

    /// Capture the current working directory
    pub fn current(online: bool) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the current directory")?;
        Ok(Self::new(cwd, online))
    }
}

/// Successful resolution plus the warnings produced along the way
#[derive(Debug, Clone)]
pub struct Resolution {
    pub options: ResolvedOptions,
    pub warnings: Vec<String>,
}

/// Validate a name, returning its warnings or the full list of errors
pub(crate) fn check_name(name: &str) -> Result<Vec<String>, ResolveError> {
    let validation = validate_name(name);
    if validation.is_valid() {
        Ok(validation.warnings)
    } else {
        Err(ResolveError::InvalidName {
            name: name.to_string(),
            errors: validation.errors,
        })
    }
}

/// Refuse to generate into an existing path unless forced
pub(crate) fn check_target_dir(path: &Path, force: bool) -> Result<(), ResolveError> {
    if path.exists() && !force {
        return Err(ResolveError::DirectoryExists(path.to_path_buf()));
    }
    Ok(())
}
