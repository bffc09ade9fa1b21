use crate::errors::{ShellError, ShellResult};
use crate::path;
use crate::redirection::{Redirection, setup_redirection};
use std::os::unix::process::CommandExt;
use std::process::Command;

/// Resolve and execute an external command, blocking until it terminates.
///
/// `args[0]` is the command name; redirection targets apply to the child
/// only. The child's exit status is its own business; only a failure to
/// launch the child is reported as an error here.
pub fn run_external_command(
    args: &[String],
    stdout_redir: &Option<Redirection>,
    stderr_redir: &Option<Redirection>,
) -> ShellResult<()> {
    let Some(name) = args.first() else {
        return Ok(());
    };

    let resolved = path::find(name).ok_or_else(|| ShellError::CommandNotFound(name.clone()))?;

    let mut cmd = Command::new(&resolved);
    cmd.arg0(name).args(&args[1..]);
    setup_redirection(&mut cmd, stdout_redir, stderr_redir)?;

    cmd.status().map_err(|e| {
        ShellError::ExecutionError(format!("failed to execute {}: {}", resolved.display(), e))
    })?;

    Ok(())
}
