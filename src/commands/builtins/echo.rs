use crate::commands::registry::Builtin;
use crate::errors::ShellResult;

pub struct EchoCommand;

impl Builtin for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn run(&self, args: &[String]) -> ShellResult<()> {
        // Every argument is followed by a single space, so the output line
        // ends with a space before the newline.
        let mut line = String::new();
        for arg in args {
            line.push_str(arg);
            line.push(' ');
        }
        println!("{}", line);
        Ok(())
    }
}
