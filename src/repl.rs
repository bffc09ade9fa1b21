use crate::commands::{LoopAction, handle_command};
use crate::completion::ShellCompleter;
use crate::errors::{ShellError, ShellResult};
use crate::lexer;
use crate::redirection::parse_redirection;
use rustyline::config::Configurer;
use rustyline::history::DefaultHistory;
use rustyline::{ColorMode, Config, Editor};

/// Build the line editor used by the interactive loop, with in-session
/// history and first-word tab completion.
pub fn build_editor() -> ShellResult<Editor<ShellCompleter, DefaultHistory>> {
    let config = Config::builder()
        .color_mode(ColorMode::Enabled)
        .auto_add_history(true)
        .build();

    let mut rl = Editor::with_config(config)
        .map_err(|e| ShellError::InputError(format!("failed to create line editor: {}", e)))?;
    rl.set_helper(Some(ShellCompleter));
    rl.set_completion_type(rustyline::CompletionType::List);

    Ok(rl)
}

/// Tokenize one input line, extract redirections, and dispatch it.
///
/// Blank lines (and lines that lex to nothing) dispatch nothing. By the
/// time the command is classified, the argument list holds no redirection
/// operators or target filenames.
pub fn handle_command_input(input: &str) -> ShellResult<LoopAction> {
    let tokens = lexer::tokenize(input);
    if tokens.is_empty() {
        return Ok(LoopAction::Continue);
    }

    let (args, stdout_redir, stderr_redir) = parse_redirection(&tokens)?;
    if args.is_empty() {
        return Ok(LoopAction::Continue);
    }

    handle_command(&args, &stdout_redir, &stderr_redir)
}

#[cfg(test)]
mod tests {
    use super::handle_command_input;
    use crate::commands::LoopAction;

    #[test]
    fn blank_lines_dispatch_nothing() {
        assert_eq!(handle_command_input("").unwrap(), LoopAction::Continue);
        assert_eq!(handle_command_input("   \t ").unwrap(), LoopAction::Continue);
    }

    #[test]
    fn exit_requests_loop_termination() {
        assert_eq!(handle_command_input("exit").unwrap(), LoopAction::Exit);
    }

    #[test]
    fn exit_ignores_arguments() {
        assert_eq!(handle_command_input("exit 5").unwrap(), LoopAction::Exit);
    }

    #[test]
    fn dangling_redirection_operator_is_reported() {
        assert!(handle_command_input("echo >").is_err());
    }
}
