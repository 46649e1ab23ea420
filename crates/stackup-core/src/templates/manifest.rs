//! Template manifest types and parsing
//!
//! The manifest (`templates/template.yaml`) lists every file a generated
//! project can contain as ordered `(when, source | render, dest)` entries.

use crate::options::ResolvedOptions;
use crate::render::Renderer;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// When a manifest entry applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Every regular (non-sandbox) project
    Always,
    /// MongoDB addon
    Mongo,
    /// Express without MongoDB
    ExpressOnly,
    /// Redux addon (routing implies it)
    Redux,
    /// Routing addon
    Router,
    /// Redux without routing
    ReduxOnly,
    /// Sandbox mode, which replaces everything else
    Sandbox,
}

impl Condition {
    /// Evaluate against resolved options
    pub fn matches(&self, options: &ResolvedOptions) -> bool {
        if options.sandbox {
            return *self == Condition::Sandbox;
        }

        match self {
            Condition::Always => true,
            Condition::Mongo => options.mongo,
            Condition::ExpressOnly => options.server() && !options.mongo,
            Condition::Redux => options.uses_redux(),
            Condition::Router => options.router,
            Condition::ReduxOnly => options.uses_redux() && !options.router,
            Condition::Sandbox => false,
        }
    }
}

/// Where an entry's content comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryContent<'a> {
    /// Copy a template file or directory tree
    Source(&'a str),
    /// Generate the file with a renderer
    Render(Renderer),
}

/// One row of the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub when: Condition,

    /// Template path relative to the templates root (file or directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Renderer producing the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<Renderer>,

    /// Destination relative to the project directory
    pub dest: String,
}

impl ManifestEntry {
    /// The entry's content; exactly one of `source` and `render` must be set
    pub fn content(&self) -> Result<EntryContent<'_>> {
        match (&self.source, self.render) {
            (Some(source), None) => Ok(EntryContent::Source(source)),
            (None, Some(renderer)) => Ok(EntryContent::Render(renderer)),
            (Some(_), Some(_)) => anyhow::bail!(
                "Manifest entry for '{}' has both source and render",
                self.dest
            ),
            (None, None) => anyhow::bail!(
                "Manifest entry for '{}' needs either source or render",
                self.dest
            ),
        }
    }
}

/// Root template manifest (templates/template.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Entries in application order; later entries overwrite earlier ones
    pub entries: Vec<ManifestEntry>,
}

impl TemplateManifest {
    /// Parse a manifest and check every entry
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: TemplateManifest = serde_yaml::from_str(content)?;
        for entry in &manifest.entries {
            entry.content()?;
        }
        Ok(manifest)
    }

    /// Entries that apply to these options, in order
    pub fn plan<'a>(&'a self, options: &ResolvedOptions) -> Vec<&'a ManifestEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.when.matches(options))
            .collect()
    }
}
