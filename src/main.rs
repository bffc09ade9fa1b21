use clap::Parser;
use crabsh::repl::handle_command_input;
use crabsh::run_shell;
use std::process::ExitCode;

/// A small interactive shell.
#[derive(Parser, Debug)]
#[command(name = "crabsh", version)]
struct ShellArgs {
    /// Run a single command line and exit instead of starting the
    /// interactive loop.
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    command: Option<String>,
}

fn main() -> ExitCode {
    let args = ShellArgs::parse();

    let result = match args.command {
        Some(line) => handle_command_input(&line).map(|_| ()),
        None => run_shell(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
