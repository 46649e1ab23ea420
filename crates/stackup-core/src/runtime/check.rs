//! Runtime detection for Node.js and the package managers

use std::fmt;
use std::process::Command;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Yarn,
    Npm,
}

/// Package managers in order of preference
const PACKAGE_MANAGERS: &[PackageManager] = &[PackageManager::Yarn, PackageManager::Npm];

impl PackageManager {
    /// Binary name
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// Arguments for installing dependencies
    pub fn install_args(&self, offline: bool) -> Vec<&'static str> {
        let mut args = vec!["install"];
        if offline {
            args.push("--offline");
        }
        args
    }

    /// Full command line, for display
    pub fn install_command(&self, offline: bool) -> String {
        let mut parts = vec![self.program()];
        parts.extend(self.install_args(offline));
        parts.join(" ")
    }

    /// Command that starts the generated project's dev server
    pub fn run_command(&self, script: &str) -> String {
        match self {
            PackageManager::Yarn => format!("yarn {}", script),
            PackageManager::Npm => format!("npm run {}", script),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if a package manager is available
pub fn check_package_manager(manager: PackageManager) -> RuntimeInfo {
    probe(manager.program(), manager.program())
}

/// Detect the preferred available package manager
pub fn detect_package_manager() -> Option<PackageManager> {
    PACKAGE_MANAGERS
        .iter()
        .copied()
        .find(|pm| check_package_manager(*pm).available)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_args() {
        assert_eq!(PackageManager::Npm.install_args(false), vec!["install"]);
        assert_eq!(
            PackageManager::Yarn.install_args(true),
            vec!["install", "--offline"]
        );
        assert_eq!(
            PackageManager::Npm.install_command(true),
            "npm install --offline"
        );
    }

    #[test]
    fn test_run_command() {
        assert_eq!(PackageManager::Yarn.run_command("dev"), "yarn dev");
        assert_eq!(PackageManager::Npm.run_command("dev"), "npm run dev");
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let info = probe("Nothing", "stackup-definitely-not-a-real-binary");
        assert!(!info.available);
        assert!(info.version.is_none());
    }

    #[test]
    fn test_detected_manager_is_available() {
        if let Some(pm) = detect_package_manager() {
            assert!(check_package_manager(pm).available);
        }
    }
}
