use crate::commands::registry::Builtin;
use crate::errors::ShellResult;
use std::env;

pub struct PwdCommand;

impl Builtin for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn run(&self, _args: &[String]) -> ShellResult<()> {
        let current_dir = env::current_dir()?;
        println!("{}", current_dir.display());
        Ok(())
    }
}
