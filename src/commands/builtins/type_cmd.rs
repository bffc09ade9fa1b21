use crate::commands::registry::{BUILTINS, Builtin};
use crate::errors::ShellResult;
use crate::path;

pub struct TypeCommand;

impl Builtin for TypeCommand {
    fn name(&self) -> &'static str {
        "type"
    }

    fn run(&self, args: &[String]) -> ShellResult<()> {
        let name = args.first().map(String::as_str).unwrap_or("");

        if BUILTINS.is_builtin(name) {
            println!("{} is a shell builtin", name);
        } else if let Some(found) = path::find(name) {
            println!("{} is {}", name, found.display());
        } else {
            println!("{}: not found", name);
        }
        Ok(())
    }
}
