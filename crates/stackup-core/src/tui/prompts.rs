//! Charm-style CLI prompts using cliclack

use crate::error::{ErrorReported, ResolveError};
use crate::options::ResolvedOptions;
use crate::product::GeneratorConfig;
use crate::project;
use crate::resolve::{resolve_args, run_wizard, Environment, Invocation, Prompter, Resolution};
use crate::runtime::{self, connectivity, PackageManager};
use crate::templates::TemplateStore;
use anyhow::Result;
use console::style;
use std::io;
use std::path::Path;

/// Wizard answers read from the terminal
struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn text(&mut self, prompt: &str, placeholder: &str) -> io::Result<String> {
        cliclack::input(prompt).placeholder(placeholder).interact()
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        cliclack::confirm(prompt).initial_value(default).interact()
    }
}

/// Run the generator: probe, resolve, write files, install
pub async fn run<C: GeneratorConfig>(config: &C, invocation: Invocation) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Probe the registry
    let online = check_connectivity(config).await?;
    let env = Environment::current(online)?;

    // Step 2: Resolve options from flags or the wizard
    let resolution = resolve(&invocation, &env)?;
    for warning in &resolution.warnings {
        cliclack::log::warning(warning)?;
    }
    let options = resolution.options;

    // Step 3: Setup template store
    let store = setup_store(invocation.template_dir())?;

    // Step 4: Create project
    create_project(&store, &options).await?;

    // Step 5: Install dependencies
    let installed = install(&options).await?;

    // Step 6: Show next steps
    print_next_steps(config, &options, installed)?;

    Ok(())
}

async fn check_connectivity<C: GeneratorConfig>(config: &C) -> Result<bool> {
    let url = connectivity::registry_url(config)?;

    let spinner = cliclack::spinner();
    spinner.start("Checking registry connectivity...");

    let online =
        connectivity::probe_registry(&url, config.user_agent(), connectivity::PROBE_TIMEOUT)
            .await;

    if online {
        spinner.stop(format!("Registry reachable ({})", url));
    } else {
        spinner.stop("Registry unreachable");
        cliclack::log::warning("Working offline; dependencies will come from the local cache")?;
    }

    Ok(online)
}

fn resolve(invocation: &Invocation, env: &Environment) -> Result<Resolution> {
    let result = match invocation {
        Invocation::Flags(args) => resolve_args(args, env),
        Invocation::Wizard => run_wizard(&mut ClackPrompter, env),
    };

    match result {
        Ok(resolution) => Ok(resolution),
        Err(ResolveError::Prompt(e)) if e.kind() == io::ErrorKind::Interrupted => {
            cliclack::outro_cancel("Setup cancelled.")?;
            Err(ErrorReported.into())
        }
        Err(e) => {
            cliclack::log::error(e.to_string())?;
            Err(ErrorReported.into())
        }
    }
}

fn setup_store(template_dir: Option<&Path>) -> Result<TemplateStore> {
    let store = match template_dir {
        Some(path) => {
            cliclack::log::info(format!("Using local templates from {}", path.display()))?;
            TemplateStore::local(path.to_path_buf())
        }
        None => TemplateStore::embedded(),
    };

    Ok(store)
}

async fn create_project(store: &TemplateStore, options: &ResolvedOptions) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match project::generate(store, options).await {
        Ok(files) => {
            spinner.stop(format!(
                "Created {} files in {}",
                files.len(),
                options.app_dir.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.error("Failed to create project");
            cliclack::log::error(format!("{:#}", e))?;
            Err(ErrorReported.into())
        }
    }
}

async fn install(options: &ResolvedOptions) -> Result<Option<PackageManager>> {
    if options.skip_install {
        cliclack::log::info("Skipping dependency installation")?;
        return Ok(None);
    }

    let node = runtime::check_node();
    match (&node.version, node.available) {
        (Some(version), true) => cliclack::log::success(format!("{} ({})", node.name, version))?,
        _ => cliclack::log::warning(format!(
            "{} not found; the generated project needs it to run (https://nodejs.org)",
            node.name
        ))?,
    }

    let Some(manager) = runtime::detect_package_manager() else {
        cliclack::log::warning("No package manager found (tried yarn and npm); skipping install")?;
        return Ok(None);
    };

    if options.offline {
        cliclack::log::info(format!("Installing with {} in offline mode", manager))?;
    } else {
        cliclack::log::info(format!("Installing with {}", manager))?;
    }

    if let Err(e) = runtime::install_dependencies(manager, &options.app_dir, options.offline).await
    {
        cliclack::log::error(format!("{:#}", e))?;
        return Err(ErrorReported.into());
    }

    cliclack::log::success("Dependencies installed")?;
    Ok(Some(manager))
}

fn print_next_steps<C: GeneratorConfig>(
    config: &C,
    options: &ResolvedOptions,
    installed: Option<PackageManager>,
) -> Result<()> {
    let steps = config.next_steps(options, installed);

    println!();
    println!("  {}", style("Next steps").bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", style(i + 1).dim(), style(step).cyan());
    }

    cliclack::outro(format!("Happy coding! Docs: {}", config.docs_url()))?;

    Ok(())
}
