//! Template renderers
//!
//! Pure functions from `ResolvedOptions` to file text. The only
//! non-deterministic output is the session secret in the `.env` file.

pub mod bundler;
pub mod env;
pub mod manifest;

use crate::options::ResolvedOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use bundler::render_bundler_config;
pub use env::{render_env, render_env_with_secret};
pub use manifest::render_manifest;

/// A generated file, as referenced from the template manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Renderer {
    Env,
    Manifest,
    BundlerConfig,
}

impl Renderer {
    /// Produce the file contents for these options
    pub fn render(&self, options: &ResolvedOptions) -> Result<String> {
        match self {
            Renderer::Env => Ok(render_env(options)),
            Renderer::Manifest => render_manifest(options).context("Failed to render package.json"),
            Renderer::BundlerConfig => Ok(render_bundler_config(options)),
        }
    }
}
