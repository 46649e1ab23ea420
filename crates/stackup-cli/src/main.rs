//! Stackup CLI - React/Redux/Express project generator

use anyhow::Result;
use clap::Parser;
use stackup_core::{
    ErrorReported, GenerateArgs, GeneratorConfig, Invocation, PackageManager, ResolvedOptions,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

/// Stackup product configuration
#[derive(Clone)]
pub struct StackupConfig;

impl GeneratorConfig for StackupConfig {
    fn name(&self) -> &'static str {
        "stackup"
    }

    fn display_name(&self) -> &'static str {
        "Stackup"
    }

    fn default_registry_url(&self) -> &'static str {
        "https://registry.npmjs.org/"
    }

    fn registry_url_env(&self) -> &'static str {
        "STACKUP_REGISTRY_URL"
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/stackup-dev/stackup#readme"
    }

    fn next_steps(
        &self,
        options: &ResolvedOptions,
        installed: Option<PackageManager>,
    ) -> Vec<String> {
        let mut steps = Vec::new();
        let manager = installed.unwrap_or(PackageManager::Npm);

        // Step 1: cd into the project
        steps.push(format!("cd {}", options.app_name));

        // Step 2: Install dependencies if that did not happen
        if installed.is_none() {
            steps.push(manager.install_command(false));
        }

        // Step 3: Start the dev servers
        if options.server() && !options.sandbox {
            if options.mongo {
                steps.push("Start MongoDB (connection string is mongoURI in .env)".to_string());
            }
            steps.push(format!(
                "{}  (client on :{}, API on :{})",
                manager.run_command("dev"),
                options.dev_server_port,
                options.api_port
            ));
        } else {
            steps.push(format!(
                "{}  (dev server on :{})",
                manager.run_command("start"),
                options.dev_server_port
            ));
        }

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "stackup")]
#[command(about = "Generate a React project with optional Redux, routing, Express and MongoDB")]
#[command(version, disable_version_flag = true)]
pub struct Args {
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: (),

    /// Application name (used for the directory and package name)
    #[arg(value_name = "APP_NAME")]
    pub app_name: Option<String>,

    /// Display title (defaults to the application name)
    #[arg(long)]
    pub title: Option<String>,

    /// Package author
    #[arg(long)]
    pub author: Option<String>,

    /// Package description (defaults to the title)
    #[arg(long)]
    pub description: Option<String>,

    /// Author email
    #[arg(long)]
    pub email: Option<String>,

    /// Package keywords (repeatable or comma-separated)
    #[arg(long, value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// Add Redux state management
    #[arg(short = 'x', long)]
    pub redux: bool,

    /// Add routing (requires --redux)
    #[arg(short, long)]
    pub router: bool,

    /// Add an Express API server
    #[arg(short, long)]
    pub express: bool,

    /// Add MongoDB integration (requires --express)
    #[arg(short, long)]
    pub mongo: bool,

    /// Dev server proxy path for API calls (whitespace is stripped)
    #[arg(long, value_name = "PATH")]
    pub api: Option<String>,

    /// Dev server port (1-65535, default 8080)
    #[arg(long = "devServerPort", alias = "dev-server-port", value_name = "PORT")]
    pub dev_server_port: Option<String>,

    /// API server port (1-65535, default 3000)
    #[arg(long = "apiPort", alias = "api-port", value_name = "PORT")]
    pub api_port: Option<String>,

    /// Install dependencies from the local cache only
    #[arg(short, long)]
    pub offline: bool,

    /// Generate into an existing directory
    #[arg(short, long)]
    pub force: bool,

    /// Generate the minimal sandbox template instead
    #[arg(short, long)]
    pub sandbox: bool,

    /// Do not run the package manager after generating
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Local directory to use for templates instead of the built-in set (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

impl From<Args> for GenerateArgs {
    fn from(args: Args) -> Self {
        GenerateArgs {
            app_name: args.app_name,
            title: args.title,
            author: args.author,
            description: args.description,
            email: args.email,
            keywords: args.keywords,
            redux: args.redux,
            router: args.router,
            express: args.express,
            mongo: args.mongo,
            api: args.api,
            dev_server_port: args.dev_server_port,
            api_port: args.api_port,
            offline: args.offline,
            force: args.force,
            sandbox: args.sandbox,
            skip_install: args.skip_install,
            template_dir: args.template_dir,
        }
    }
}

/// No arguments at all selects the wizard; anything else is parsed as flags
fn invocation<I, T>(raw: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let raw: Vec<OsString> = raw.into_iter().map(Into::into).collect();
    if raw.len() <= 1 {
        Invocation::Wizard
    } else {
        Invocation::Flags(Args::parse_from(raw).into())
    }
}

/// Errors the prompts already printed only set the exit status
fn exit_status(result: Result<()>) -> Result<ExitCode> {
    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is::<ErrorReported>() => Ok(ExitCode::FAILURE),
        Err(e) => Err(e),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let invocation = invocation(std::env::args_os());
    let config = StackupConfig;

    let result = stackup_core::run(&config, invocation).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    exit_status(result)
}
