//! Stackup Core - Shared library for the stackup project generator
//!
//! This library turns a project name and a handful of addon flags (Redux,
//! routing, Express, MongoDB) into a ready-to-run React project directory.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Option schema, name validation, template
//!   renderers, the declarative template manifest, runtime detection
//! - **Layer 2: Workflow** - Argument resolver and wizard (both yield
//!   [`ResolvedOptions`]), [`project::generate`], the installer
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use stackup_core::{project, resolve_args, Environment, GenerateArgs, TemplateStore};
//!
//! let args = GenerateArgs {
//!     app_name: Some("my-app".to_string()),
//!     redux: true,
//!     ..Default::default()
//! };
//! let resolution = resolve_args(&args, &Environment::current(true)?)?;
//! project::generate(&TemplateStore::embedded(), &resolution.options).await?;
//! ```

pub mod error;
pub mod options;
pub mod product;
pub mod project;
pub mod render;
pub mod resolve;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{ErrorReported, ResolveError};
pub use options::{validate_name, ResolvedOptions};
pub use product::GeneratorConfig;
pub use resolve::{resolve_args, run_wizard, Environment, GenerateArgs, Invocation, Resolution};
pub use runtime::PackageManager;
pub use templates::{TemplateManifest, TemplateStore};

#[cfg(feature = "tui")]
pub use tui::run;
