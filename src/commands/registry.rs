use crate::errors::ShellResult;
use once_cell::sync::Lazy;

/// Trait implemented by every builtin command.
pub trait Builtin: Send + Sync {
    /// The command name, e.g. "echo".
    fn name(&self) -> &'static str;

    /// Run the builtin. `args` holds the arguments after the command name.
    fn run(&self, args: &[String]) -> ShellResult<()>;

    /// Whether invoking this builtin ends the read loop.
    fn terminates(&self) -> bool {
        false
    }
}

/// Immutable lookup table of builtin commands, built once at startup.
pub struct BuiltinRegistry {
    commands: Vec<Box<dyn Builtin>>,
}

impl BuiltinRegistry {
    fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    fn register<C: Builtin + 'static>(&mut self, cmd: C) {
        self.commands.push(Box::new(cmd));
    }

    fn get(&self, name: &str) -> Option<&dyn Builtin> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Check if a command name is a builtin.
    pub fn is_builtin(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All builtin names, for `type` and tab completion.
    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// Run a builtin by name; `None` when the name is not a builtin.
    pub fn run(&self, name: &str, args: &[String]) -> Option<ShellResult<()>> {
        self.get(name).map(|c| c.run(args))
    }

    /// Whether the named builtin requests shell termination.
    pub fn terminates(&self, name: &str) -> bool {
        self.get(name).is_some_and(|c| c.terminates())
    }
}

/// Global registry instance; single point of registration.
pub static BUILTINS: Lazy<BuiltinRegistry> = Lazy::new(|| {
    let mut registry = BuiltinRegistry::new();

    registry.register(super::builtins::ExitCommand);
    registry.register(super::builtins::EchoCommand);
    registry.register(super::builtins::TypeCommand);
    registry.register(super::builtins::PwdCommand);
    registry.register(super::builtins::CdCommand);

    registry
});

#[cfg(test)]
mod tests {
    use super::BUILTINS;

    #[test]
    fn all_five_builtins_are_registered() {
        for name in ["exit", "echo", "type", "pwd", "cd"] {
            assert!(BUILTINS.is_builtin(name), "{name} missing from registry");
        }
        assert_eq!(BUILTINS.names().len(), 5);
    }

    #[test]
    fn unknown_names_are_not_builtins() {
        assert!(!BUILTINS.is_builtin("ls"));
        assert!(!BUILTINS.is_builtin(""));
    }

    #[test]
    fn only_exit_terminates_the_loop() {
        assert!(BUILTINS.terminates("exit"));
        for name in ["echo", "type", "pwd", "cd", "ls"] {
            assert!(!BUILTINS.terminates(name));
        }
    }
}
