//! Template storage, manifest, and assembly
//!
//! This module provides:
//! - The declarative template manifest (`template.yaml`)
//! - Template storage, embedded in the binary or read from a local directory
//! - Assembly of the planned files into a project directory

pub mod copier;
pub mod manifest;
pub mod store;

pub use copier::assemble;
pub use manifest::{Condition, EntryContent, ManifestEntry, TemplateManifest};
pub use store::{TemplateFile, TemplateSource, TemplateStore};
