//! Resolving command-line flags

use super::{check_name, check_target_dir, Environment, GenerateArgs, Resolution};
use crate::error::ResolveError;
use crate::options::{schema, OptionsDraft};

/// Name used when sandbox mode is requested without an application name
pub const SANDBOX_APP_NAME: &str = "sandbox";

/// Resolve command-line flags into options.
///
/// Nothing is written to disk; the target directory is only checked.
pub fn resolve_args(args: &GenerateArgs, env: &Environment) -> Result<Resolution, ResolveError> {
    let app_name = match (&args.app_name, args.sandbox) {
        (Some(name), _) => name.clone(),
        (None, true) => SANDBOX_APP_NAME.to_string(),
        (None, false) => return Err(ResolveError::MissingAppName),
    };

    let mut warnings = check_name(&app_name)?;

    let (dev_server_port, dev_warning) =
        schema::DEV_SERVER_PORT.resolve_port(args.dev_server_port.as_deref());
    let (api_port, api_warning) = schema::API_PORT.resolve_port(args.api_port.as_deref());
    warnings.extend(dev_warning);
    warnings.extend(api_warning);

    let mut draft = OptionsDraft::new(app_name);
    draft.title = args.title.clone();
    draft.description = args.description.clone();
    if let Some(author) = &args.author {
        draft.author = author.clone();
    }
    if let Some(email) = &args.email {
        draft.email = email.clone();
    }
    draft.keywords = split_keywords(&args.keywords);
    draft.redux = args.redux;
    draft.router = args.router;
    draft.express = args.express;
    draft.mongo = args.mongo;
    draft.api_path = args.api.as_deref().and_then(strip_whitespace);
    draft.dev_server_port = dev_server_port;
    draft.api_port = api_port;
    draft.offline = args.offline || !env.online;
    draft.sandbox = args.sandbox;
    draft.skip_install = args.skip_install;

    let options = draft.finish(&env.cwd, &mut warnings);
    check_target_dir(&options.app_dir, args.force)?;

    Ok(Resolution { options, warnings })
}

/// Remove every whitespace character; an empty result means no path
fn strip_whitespace(raw: &str) -> Option<String> {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    (!stripped.is_empty()).then_some(stripped)
}

/// Keywords may be repeated or comma-separated
fn split_keywords(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|k| k.split(','))
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
