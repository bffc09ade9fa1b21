//! A small interactive shell: read a line, tokenize it, dispatch a builtin
//! or spawn an external command, wait, prompt again.

pub mod commands;
pub mod completion;
pub mod errors;
pub mod lexer;
pub mod path;
pub mod redirection;
pub mod repl;

use commands::LoopAction;
use errors::{ShellError, ShellResult};
use repl::{build_editor, handle_command_input};
use rustyline::error::ReadlineError;

/// Main entry point for the interactive read loop.
///
/// One line per iteration, strictly sequential. End of input (Ctrl-D)
/// leaves the loop the same way `exit` does; Ctrl-C cancels the current
/// line and prompts again. Command failures are reported and the loop
/// continues; nothing a command does is fatal to the shell.
pub fn run_shell() -> ShellResult<()> {
    let mut rl = build_editor()?;

    loop {
        match rl.readline("$ ") {
            Ok(line) => match handle_command_input(&line) {
                Ok(LoopAction::Continue) => {}
                Ok(LoopAction::Exit) => break,
                Err(e) => eprintln!("{}", e),
            },
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                return Err(ShellError::InputError(format!("readline error: {}", e)));
            }
        }
    }

    Ok(())
}
