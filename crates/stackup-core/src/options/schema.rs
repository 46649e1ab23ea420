//! Static table of recognized options
//!
//! Both the argument resolver and the wizard read their defaults from here, and
//! the CLI binary declares one clap argument per row.

/// Default port for the bundler dev server
pub const DEFAULT_DEV_SERVER_PORT: u16 = 8080;

/// Default port for the API process
pub const DEFAULT_API_PORT: u16 = 3000;

/// Default proxy path when a server addon is enabled
pub const DEFAULT_API_PATH: &str = "/api";

/// Value type accepted by an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Boolean switch
    Flag,
    /// Free-form string
    Text,
    /// Repeatable string
    List,
    /// Integer in [1, 65535]
    Port,
}

/// Value used when an option is not supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Flag(bool),
    Text(&'static str),
    Port(u16),
    /// No value (absent, empty list, or derived later)
    None,
}

/// Validator for typed options. Returns the parsed port or a reason.
pub type Validator = fn(&str) -> Result<u16, String>;

/// One row of the option table
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
    pub short: Option<char>,
    pub default: DefaultValue,
    pub validator: Option<Validator>,
}

impl OptionSpec {
    const fn flag(name: &'static str, short: Option<char>) -> Self {
        Self {
            name,
            kind: OptionKind::Flag,
            short,
            default: DefaultValue::Flag(false),
            validator: None,
        }
    }

    const fn text(name: &'static str, default: DefaultValue) -> Self {
        Self {
            name,
            kind: OptionKind::Text,
            short: None,
            default,
            validator: None,
        }
    }

    const fn port(name: &'static str, default: u16) -> Self {
        Self {
            name,
            kind: OptionKind::Port,
            short: None,
            default: DefaultValue::Port(default),
            validator: Some(parse_port),
        }
    }

    /// Boolean default for a flag option (false for anything else)
    pub fn default_flag(&self) -> bool {
        matches!(self.default, DefaultValue::Flag(true))
    }

    /// Text default for a text option (empty for anything else)
    pub fn default_text(&self) -> &'static str {
        match self.default {
            DefaultValue::Text(text) => text,
            _ => "",
        }
    }

    /// Port default for a port option (0 for anything else)
    pub fn default_port(&self) -> u16 {
        match self.default {
            DefaultValue::Port(port) => port,
            _ => 0,
        }
    }

    /// Resolve a raw port value against this option.
    ///
    /// Invalid input falls back to the default and yields a warning message.
    pub fn resolve_port(&self, raw: Option<&str>) -> (u16, Option<String>) {
        let default = self.default_port();
        let (Some(raw), Some(validate)) = (raw, self.validator) else {
            return (default, None);
        };

        match validate(raw) {
            Ok(port) => (port, None),
            Err(reason) => (
                default,
                Some(format!(
                    "--{} {}; using default {}",
                    self.name, reason, default
                )),
            ),
        }
    }
}

pub const APP_NAME: OptionSpec = OptionSpec::text("appName", DefaultValue::None);
pub const VERSION: OptionSpec = OptionSpec::flag("version", Some('v'));
pub const HELP: OptionSpec = OptionSpec::flag("help", Some('h'));
pub const TITLE: OptionSpec = OptionSpec::text("title", DefaultValue::None);
pub const AUTHOR: OptionSpec = OptionSpec::text("author", DefaultValue::Text(""));
pub const DESCRIPTION: OptionSpec = OptionSpec::text("description", DefaultValue::None);
pub const EMAIL: OptionSpec = OptionSpec::text("email", DefaultValue::Text(""));
pub const KEYWORDS: OptionSpec = OptionSpec {
    name: "keywords",
    kind: OptionKind::List,
    short: None,
    default: DefaultValue::None,
    validator: None,
};
pub const REDUX: OptionSpec = OptionSpec::flag("redux", Some('x'));
pub const ROUTER: OptionSpec = OptionSpec::flag("router", Some('r'));
pub const EXPRESS: OptionSpec = OptionSpec::flag("express", Some('e'));
pub const MONGO: OptionSpec = OptionSpec::flag("mongo", Some('m'));
pub const API: OptionSpec = OptionSpec::text("api", DefaultValue::None);
pub const DEV_SERVER_PORT: OptionSpec = OptionSpec::port("devServerPort", DEFAULT_DEV_SERVER_PORT);
pub const API_PORT: OptionSpec = OptionSpec::port("apiPort", DEFAULT_API_PORT);
pub const OFFLINE: OptionSpec = OptionSpec::flag("offline", Some('o'));
pub const FORCE: OptionSpec = OptionSpec::flag("force", Some('f'));
pub const SANDBOX: OptionSpec = OptionSpec::flag("sandbox", Some('s'));
pub const SKIP_INSTALL: OptionSpec = OptionSpec::flag("skip-install", None);
pub const TEMPLATE_DIR: OptionSpec = OptionSpec::text("template-dir", DefaultValue::None);

/// Every option understood by the generator, in help order
pub static OPTIONS: &[OptionSpec] = &[
    APP_NAME,
    VERSION,
    HELP,
    TITLE,
    AUTHOR,
    DESCRIPTION,
    EMAIL,
    KEYWORDS,
    REDUX,
    ROUTER,
    EXPRESS,
    MONGO,
    API,
    DEV_SERVER_PORT,
    API_PORT,
    OFFLINE,
    FORCE,
    SANDBOX,
    SKIP_INSTALL,
    TEMPLATE_DIR,
];

/// Look up an option by name
pub fn lookup(name: &str) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|spec| spec.name == name)
}

/// Parse a port number, accepting only integers in [1, 65535]
pub fn parse_port(raw: &str) -> Result<u16, String> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not an integer", raw))?;

    if (1..=i64::from(u16::MAX)).contains(&value) {
        Ok(value as u16)
    } else {
        Err(format!("{} is outside the range 1-65535", value))
    }
}
