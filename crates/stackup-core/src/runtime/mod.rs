//! Runtime detection, connectivity, and dependency installation
//!
//! This module provides:
//! - Node.js and package manager detection
//! - The package registry connectivity probe
//! - The installer that runs the package manager in a generated project

pub mod check;
pub mod connectivity;
pub mod install;

pub use check::{check_node, detect_package_manager, PackageManager, RuntimeInfo};
pub use connectivity::{probe_registry, registry_url};
pub use install::install_dependencies;
