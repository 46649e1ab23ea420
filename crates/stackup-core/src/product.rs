//! Product configuration trait for CLI binaries
//!
//! This trait defines what a binary built on this library supplies: its
//! identity, where the package registry lives, and the instructions shown once a
//! project has been generated.

use crate::options::ResolvedOptions;
use crate::runtime::PackageManager;

/// Configuration trait for generator binaries
pub trait GeneratorConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for env vars and the user agent)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Registry probed to decide between online and offline installs
    fn default_registry_url(&self) -> &'static str;

    /// Environment variable name for overriding the registry URL
    fn registry_url_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation.
    ///
    /// `installed` is the package manager that installed dependencies, if any.
    fn next_steps(
        &self,
        options: &ResolvedOptions,
        installed: Option<PackageManager>,
    ) -> Vec<String>;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
