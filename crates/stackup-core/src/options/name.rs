//! Package name validation
//!
//! Follows the npm package naming rules. Errors make a name unusable; warnings
//! flag names that older registries accepted but new packages should avoid.

/// Longest name accepted without a warning
pub const MAX_NAME_LENGTH: usize = 214;

/// Names reserved by the registry
const BLACKLIST: &[&str] = &["node_modules", "favicon.ico"];

/// Node.js core modules; shadowing them is legal but confusing
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// Characters that survive `encodeURIComponent` unchanged besides alphanumerics
const URL_SAFE_PUNCTUATION: &[char] = &['-', '_', '.', '!', '~', '*', '\'', '(', ')'];

/// Characters new package names may no longer contain
const SPECIAL_CHARACTERS: &[char] = &['~', '\'', '!', '(', ')', '*'];

/// Outcome of validating a package name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameValidation {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl NameValidation {
    /// True when the name can be used (warnings are allowed)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate an application name against the package naming rules
pub fn validate_name(name: &str) -> NameValidation {
    let mut result = NameValidation::default();

    if name.is_empty() {
        result
            .errors
            .push("name length must be greater than zero".to_string());
        return result;
    }

    if name.starts_with('.') {
        result.errors.push("name cannot start with a period".to_string());
    }
    if name.starts_with('_') {
        result
            .errors
            .push("name cannot start with an underscore".to_string());
    }
    if name.trim() != name {
        result
            .errors
            .push("name cannot contain leading or trailing spaces".to_string());
    }
    if BLACKLIST.iter().any(|b| b.eq_ignore_ascii_case(name)) {
        result
            .errors
            .push(format!("{} is a blacklisted name", name));
    }
    if !is_url_friendly(name) {
        result
            .errors
            .push("name can only contain URL-friendly characters".to_string());
    }

    if CORE_MODULES.contains(&name.to_lowercase().as_str()) {
        result
            .warnings
            .push(format!("{} is a core module name", name));
    }
    if name.len() > MAX_NAME_LENGTH {
        result.warnings.push(format!(
            "name can no longer contain more than {} characters",
            MAX_NAME_LENGTH
        ));
    }
    if name.to_lowercase() != name {
        result
            .warnings
            .push("name can no longer contain capital letters".to_string());
    }
    if name.contains(SPECIAL_CHARACTERS) {
        result.warnings.push(
            "name can no longer contain special characters (\"~'!()*\")".to_string(),
        );
    }

    result
}

fn is_url_friendly(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || URL_SAFE_PUNCTUATION.contains(&c))
}
