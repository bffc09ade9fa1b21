pub mod builtins;
pub mod external;
pub mod registry;

use crate::errors::ShellResult;
use crate::redirection::{Redirection, setup_builtin_redirection};

pub use external::run_external_command;
pub use registry::BUILTINS;

/// What the read loop should do after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Continue,
    Exit,
}

/// Route a cleaned command line to its builtin or external implementation.
///
/// For builtins, redirection swaps the shell's own stdout/stderr for the
/// duration of the call; the guard restores them before this function
/// returns, and a failed builtin's diagnostic is written while the guard is
/// still active so `2>` captures it. External commands never touch the
/// shell's descriptors.
pub fn handle_command(
    args: &[String],
    stdout_redir: &Option<Redirection>,
    stderr_redir: &Option<Redirection>,
) -> ShellResult<LoopAction> {
    let Some(name) = args.first() else {
        return Ok(LoopAction::Continue);
    };

    if BUILTINS.is_builtin(name) {
        let _guard = setup_builtin_redirection(stdout_redir, stderr_redir)?;
        if let Some(Err(e)) = BUILTINS.run(name, &args[1..]) {
            eprintln!("{}", e);
        }
        if BUILTINS.terminates(name) {
            return Ok(LoopAction::Exit);
        }
        return Ok(LoopAction::Continue);
    }

    if let Err(e) = run_external_command(args, stdout_redir, stderr_redir) {
        eprintln!("{}", e);
    }
    Ok(LoopAction::Continue)
}
