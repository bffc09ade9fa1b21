use crate::commands::registry::Builtin;
use crate::errors::ShellResult;

pub struct ExitCommand;

impl Builtin for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    /// Arguments are accepted and ignored; the shell always leaves with a
    /// successful status.
    fn run(&self, _args: &[String]) -> ShellResult<()> {
        Ok(())
    }

    fn terminates(&self) -> bool {
        true
    }
}
