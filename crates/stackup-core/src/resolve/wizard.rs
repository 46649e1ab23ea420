//! Guided setup used when the generator runs without arguments

use super::{check_name, check_target_dir, Environment, Resolution};
use crate::error::ResolveError;
use crate::options::{schema, OptionsDraft};
use std::io;

/// Source of answers for the wizard
pub trait Prompter {
    /// Ask for free text
    fn text(&mut self, prompt: &str, placeholder: &str) -> io::Result<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool>;
}

/// Ask the fixed question sequence and resolve the answers.
///
/// The name is validated and the target directory checked right after the
/// first question, before anything else is asked.
pub fn run_wizard<P: Prompter>(
    prompter: &mut P,
    env: &Environment,
) -> Result<Resolution, ResolveError> {
    let app_name = prompter.text("Application name", "my-app")?;
    let mut warnings = check_name(&app_name)?;
    check_target_dir(&env.cwd.join(&app_name), false)?;

    let redux = prompter.confirm(
        "Add Redux for state management?",
        schema::REDUX.default_flag(),
    )?;
    let router = redux && prompter.confirm("Add routing?", schema::ROUTER.default_flag())?;
    let express = prompter.confirm(
        "Add an Express API server?",
        schema::EXPRESS.default_flag(),
    )?;
    let mongo =
        express && prompter.confirm("Add MongoDB integration?", schema::MONGO.default_flag())?;

    let mut draft = OptionsDraft::new(app_name);
    draft.redux = redux;
    draft.router = router;
    draft.express = express;
    draft.mongo = mongo;
    draft.offline = !env.online;

    let options = draft.finish(&env.cwd, &mut warnings);
    Ok(Resolution { options, warnings })
}
