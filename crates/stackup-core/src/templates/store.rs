//! Template storage: the set embedded in the binary or a local directory
//!
//! The local source exists for template development: point `--template-dir` at
//! a checkout of `templates/` to try changes without rebuilding.

use super::manifest::TemplateManifest;
use anyhow::{Context, Result};
use include_dir::{include_dir, Dir, DirEntry};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Manifest file name at the templates root
pub const MANIFEST_FILE: &str = "template.yaml";

static EMBEDDED_TEMPLATES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Template source - either embedded or a local directory
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Embedded,
    Local(PathBuf),
}

/// A template file ready to be written
#[derive(Debug, Clone)]
pub struct TemplateFile {
    /// Path relative to the requested source (empty when the source is a file)
    pub relative: PathBuf,
    pub contents: Vec<u8>,
}

/// Reads the manifest and template files from a [`TemplateSource`]
#[derive(Debug, Clone)]
pub struct TemplateStore {
    source: TemplateSource,
}

impl TemplateStore {
    pub fn new(source: TemplateSource) -> Self {
        Self { source }
    }

    /// Templates compiled into the binary
    pub fn embedded() -> Self {
        Self::new(TemplateSource::Embedded)
    }

    /// Templates read from a local directory
    pub fn local(path: PathBuf) -> Self {
        Self::new(TemplateSource::Local(path))
    }

    /// Get the template source
    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Read and parse the root manifest
    pub fn load_manifest(&self) -> Result<TemplateManifest> {
        let content = match &self.source {
            TemplateSource::Embedded => EMBEDDED_TEMPLATES
                .get_file(MANIFEST_FILE)
                .and_then(|f| f.contents_utf8())
                .with_context(|| format!("Embedded templates are missing {}", MANIFEST_FILE))?
                .to_string(),
            TemplateSource::Local(path) => {
                let manifest_path = path.join(MANIFEST_FILE);
                std::fs::read_to_string(&manifest_path)
                    .with_context(|| format!("Failed to read {}", manifest_path.display()))?
            }
        };

        TemplateManifest::parse(&content).context("Failed to parse template manifest")
    }

    /// Every file under `source` (a file or a directory), sorted by path
    pub fn files(&self, source: &str) -> Result<Vec<TemplateFile>> {
        let mut files = match &self.source {
            TemplateSource::Embedded => Self::embedded_files(source)?,
            TemplateSource::Local(path) => Self::local_files(path, source)?,
        };
        files.sort_by(|a, b| a.relative.cmp(&b.relative));
        Ok(files)
    }

    fn embedded_files(source: &str) -> Result<Vec<TemplateFile>> {
        if let Some(file) = EMBEDDED_TEMPLATES.get_file(source) {
            return Ok(vec![TemplateFile {
                relative: PathBuf::new(),
                contents: file.contents().to_vec(),
            }]);
        }

        let dir = EMBEDDED_TEMPLATES
            .get_dir(source)
            .ok_or_else(|| anyhow::anyhow!("Template '{}' not found", source))?;

        let mut files = Vec::new();
        collect_embedded(dir, Path::new(source), &mut files)?;
        Ok(files)
    }

    fn local_files(root: &Path, source: &str) -> Result<Vec<TemplateFile>> {
        let base = root.join(source);

        if base.is_file() {
            let contents = std::fs::read(&base)
                .with_context(|| format!("Failed to read {}", base.display()))?;
            return Ok(vec![TemplateFile {
                relative: PathBuf::new(),
                contents,
            }]);
        }

        if !base.is_dir() {
            anyhow::bail!("Template '{}' not found in {}", source, root.display());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&base) {
            let entry = entry.with_context(|| format!("Failed to walk {}", base.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry.path().strip_prefix(&base)?.to_path_buf();
            let contents = std::fs::read(entry.path())
                .with_context(|| format!("Failed to read {}", entry.path().display()))?;
            files.push(TemplateFile { relative, contents });
        }
        Ok(files)
    }
}

/// Embedded entry paths are relative to the templates root
fn collect_embedded(dir: &Dir<'_>, base: &Path, out: &mut Vec<TemplateFile>) -> Result<()> {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(sub) => collect_embedded(sub, base, out)?,
            DirEntry::File(file) => out.push(TemplateFile {
                relative: file.path().strip_prefix(base)?.to_path_buf(),
                contents: file.contents().to_vec(),
            }),
        }
    }
    Ok(())
}
