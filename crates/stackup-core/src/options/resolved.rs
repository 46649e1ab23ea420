//! The resolved option record consumed by every generation step

use super::schema;
use std::path::{Path, PathBuf};

/// Everything the generator needs to know about one project.
///
/// Built once by the argument resolver or the wizard (through [`OptionsDraft`])
/// and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub app_name: String,
    pub title: String,
    pub description: String,
    pub author: String,
    pub email: String,
    pub keywords: Vec<String>,
    pub redux: bool,
    pub router: bool,
    pub express: bool,
    pub mongo: bool,
    pub api_path: Option<String>,
    pub dev_server_port: u16,
    pub api_port: u16,
    pub offline: bool,
    pub app_dir: PathBuf,
    pub sandbox: bool,
    pub skip_install: bool,
}

impl ResolvedOptions {
    /// True when an API server is generated
    pub fn server(&self) -> bool {
        self.express || self.mongo
    }

    /// True when the state-management subtree is generated
    pub fn uses_redux(&self) -> bool {
        self.redux || self.router
    }
}

/// Raw choices collected before derived fields are computed
#[derive(Debug, Clone)]
pub struct OptionsDraft {
    pub app_name: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: String,
    pub email: String,
    pub keywords: Vec<String>,
    pub redux: bool,
    pub router: bool,
    pub express: bool,
    pub mongo: bool,
    pub api_path: Option<String>,
    pub dev_server_port: u16,
    pub api_port: u16,
    pub offline: bool,
    pub sandbox: bool,
    pub skip_install: bool,
}

impl OptionsDraft {
    /// Draft with every option at its schema default
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            title: None,
            description: None,
            author: schema::AUTHOR.default_text().to_string(),
            email: schema::EMAIL.default_text().to_string(),
            keywords: Vec::new(),
            redux: schema::REDUX.default_flag(),
            router: schema::ROUTER.default_flag(),
            express: schema::EXPRESS.default_flag(),
            mongo: schema::MONGO.default_flag(),
            api_path: None,
            dev_server_port: schema::DEV_SERVER_PORT.default_port(),
            api_port: schema::API_PORT.default_port(),
            offline: schema::OFFLINE.default_flag(),
            sandbox: schema::SANDBOX.default_flag(),
            skip_install: schema::SKIP_INSTALL.default_flag(),
        }
    }

    /// Apply the derivation rules and produce the final record.
    ///
    /// Adjustments that change what the user asked for are reported through
    /// `warnings`.
    pub fn finish(self, cwd: &Path, warnings: &mut Vec<String>) -> ResolvedOptions {
        let mut redux = self.redux;
        let mut router = self.router;
        let mut express = self.express;
        let mut mongo = self.mongo;

        if self.sandbox {
            if redux || router || express || mongo {
                warnings.push("addon flags are ignored in sandbox mode".to_string());
            }
            redux = false;
            router = false;
            express = false;
            mongo = false;
        }

        if router && !redux {
            warnings.push("--router requires --redux; enabling redux".to_string());
            redux = true;
        }
        if mongo && !express {
            warnings.push("--mongo requires --express; enabling express".to_string());
            express = true;
        }

        let server = express || mongo;

        let mut dev_server_port = self.dev_server_port;
        if server && dev_server_port == self.api_port {
            // checked_add only fails at u16::MAX
            dev_server_port = self.api_port.checked_add(1).unwrap_or(u16::MAX - 1);
            warnings.push(format!(
                "dev server port {} collides with the API port; using {}",
                self.api_port, dev_server_port
            ));
        }

        let api_path = match self.api_path {
            _ if self.sandbox => None,
            Some(path) => Some(path),
            None if server => Some(schema::DEFAULT_API_PATH.to_string()),
            None => None,
        };

        let title = non_empty(self.title).unwrap_or_else(|| self.app_name.clone());
        let description = non_empty(self.description).unwrap_or_else(|| title.clone());
        let app_dir = cwd.join(&self.app_name);

        ResolvedOptions {
            app_name: self.app_name,
            title,
            description,
            author: self.author,
            email: self.email,
            keywords: self.keywords,
            redux,
            router,
            express,
            mongo,
            api_path,
            dev_server_port,
            api_port: self.api_port,
            offline: self.offline,
            app_dir,
            sandbox: self.sandbox,
            skip_install: self.skip_install,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
