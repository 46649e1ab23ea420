//! Dependency installation in the generated project

use super::check::PackageManager;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// Run the package manager's install command inside `project_dir`.
///
/// The child gets `project_dir` as its working directory; the generator's own
/// working directory is left alone. Output is streamed as it arrives.
pub async fn install_dependencies(
    manager: PackageManager,
    project_dir: &Path,
    offline: bool,
) -> Result<()> {
    let cmd = manager.install_command(offline);
    println!();
    println!("{} {}", "Running:".dimmed(), cmd.yellow());
    println!();

    let mut child = TokioCommand::new(manager.program())
        .args(manager.install_args(offline))
        .current_dir(project_dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to start {}", manager))?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow::anyhow!("Failed to capture stdout"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| anyhow::anyhow!("Failed to capture stderr"))?;

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();
    let mut stdout_done = false;
    let mut stderr_done = false;

    while !(stdout_done && stderr_done) {
        tokio::select! {
            line = stdout_reader.next_line(), if !stdout_done => {
                match line {
                    Ok(Some(line)) => println!("  {}", line),
                    Ok(None) => stdout_done = true,
                    Err(e) => {
                        eprintln!("{} {}", "Error reading stdout:".red(), e);
                        stdout_done = true;
                    }
                }
            }
            line = stderr_reader.next_line(), if !stderr_done => {
                match line {
                    Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                    Ok(None) => stderr_done = true,
                    Err(e) => {
                        eprintln!("{} {}", "Error reading stderr:".red(), e);
                        stderr_done = true;
                    }
                }
            }
        }
    }

    let status = child
        .wait()
        .await
        .with_context(|| format!("Failed to wait for {}", manager))?;
    println!();

    if status.success() {
        return Ok(());
    }

    let code = status.code().unwrap_or(-1);
    if offline {
        anyhow::bail!(
            "{} failed with exit code {} in offline mode.\n\
             Some packages are probably missing from the local cache. \
             Connect to the network and run `{}` in {}",
            manager,
            code,
            manager.install_command(false),
            project_dir.display()
        );
    }
    anyhow::bail!(
        "{} failed with exit code {}.\nPlease run `{}` manually in {}",
        manager,
        code,
        cmd,
        project_dir.display()
    );
}
