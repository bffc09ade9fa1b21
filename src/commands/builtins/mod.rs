mod cd;
mod echo;
mod exit;
mod pwd;
mod type_cmd;

pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use pwd::PwdCommand;
pub use type_cmd::TypeCommand;
