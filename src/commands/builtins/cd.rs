use crate::commands::registry::Builtin;
use crate::errors::{ShellError, ShellResult};
use std::env;

pub struct CdCommand;

impl Builtin for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn run(&self, args: &[String]) -> ShellResult<()> {
        // A missing argument is a no-op, not an error.
        let Some(arg) = args.first() else {
            return Ok(());
        };

        let target = if arg == "~" {
            match env::var("HOME") {
                Ok(home) => home,
                Err(_) => {
                    return Err(ShellError::InvalidDirectory("cd: HOME not set".to_string()));
                }
            }
        } else {
            arg.clone()
        };

        env::set_current_dir(&target).map_err(|_| {
            ShellError::InvalidDirectory(format!("cd: {}: No such file or directory", target))
        })
    }
}
