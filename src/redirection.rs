use crate::errors::{ShellError, ShellResult};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, RawFd};
use std::process::{Command, Stdio};

/// Redirection mode (overwrite or append)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectionMode {
    Overwrite,
    Append,
}

/// Target file for one redirected stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirection {
    pub file: String,
    pub mode: RedirectionMode,
}

/// Scan a token sequence for redirection operators and their filename
/// arguments.
///
/// Recognized operators: `>`/`1>` and `>>`/`1>>` for stdout, `2>` and `2>>`
/// for stderr. The operator and the filename that follows it are removed
/// from the returned argument list. If the same stream is redirected more
/// than once, the last occurrence wins. An operator at the end of the line
/// with no filename after it is an error.
pub fn parse_redirection(
    tokens: &[String],
) -> ShellResult<(Vec<String>, Option<Redirection>, Option<Redirection>)> {
    let mut args = Vec::new();
    let mut stdout_redir = None;
    let mut stderr_redir = None;
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        let (stream, mode) = match token.as_str() {
            ">" | "1>" => (&mut stdout_redir, RedirectionMode::Overwrite),
            ">>" | "1>>" => (&mut stdout_redir, RedirectionMode::Append),
            "2>" => (&mut stderr_redir, RedirectionMode::Overwrite),
            "2>>" => (&mut stderr_redir, RedirectionMode::Append),
            _ => {
                args.push(token.clone());
                continue;
            }
        };
        let file = iter.next().ok_or_else(|| {
            ShellError::RedirectionError(format!("expected filename after '{}'", token))
        })?;
        *stream = Some(Redirection {
            file: file.clone(),
            mode,
        });
    }

    Ok((args, stdout_redir, stderr_redir))
}

/// Open a redirection target for writing: created with mode 0644 if absent,
/// truncated unless the redirection appends.
fn open_target(redir: &Redirection) -> ShellResult<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(redir.mode == RedirectionMode::Overwrite)
        .append(redir.mode == RedirectionMode::Append)
        .mode(0o644)
        .open(&redir.file)
        .map_err(|e| {
            ShellError::RedirectionError(format!("failed to open '{}': {}", redir.file, e))
        })
}

/// Install redirection targets as a child command's standard streams.
///
/// The target files are opened in the parent, but they only replace stdout
/// and stderr inside the spawned child.
pub fn setup_redirection(
    cmd: &mut Command,
    stdout_redir: &Option<Redirection>,
    stderr_redir: &Option<Redirection>,
) -> ShellResult<()> {
    if let Some(redir) = stdout_redir {
        cmd.stdout(Stdio::from(open_target(redir)?));
    }
    if let Some(redir) = stderr_redir {
        cmd.stderr(Stdio::from(open_target(redir)?));
    }
    Ok(())
}

/// Scoped stdout/stderr redirection for builtin commands.
///
/// Creating the guard saves the current descriptor with `dup` and installs
/// the target file over it with `dup2`; dropping the guard restores the
/// saved descriptor. Restoration therefore happens on every control path
/// out of the builtin call.
pub struct RedirectionGuard {
    saved: Vec<(RawFd, RawFd)>,
}

impl RedirectionGuard {
    fn redirect(&mut self, fd: RawFd, target: &File) -> ShellResult<()> {
        // Pending buffered output must land on the old descriptor.
        io::stdout().flush()?;

        let saved = unsafe { libc::dup(fd) };
        if saved < 0 {
            return Err(ShellError::IoError(io::Error::last_os_error()));
        }
        if unsafe { libc::dup2(target.as_raw_fd(), fd) } < 0 {
            let err = io::Error::last_os_error();
            unsafe { libc::close(saved) };
            return Err(ShellError::IoError(err));
        }
        self.saved.push((fd, saved));
        Ok(())
    }
}

impl Drop for RedirectionGuard {
    fn drop(&mut self) {
        let _ = io::stdout().flush();
        for (fd, saved) in self.saved.drain(..).rev() {
            unsafe {
                libc::dup2(saved, fd);
                libc::close(saved);
            }
        }
    }
}

/// Redirect the current process's stdout and/or stderr for the duration of
/// a builtin call. The returned guard restores them when dropped.
pub fn setup_builtin_redirection(
    stdout_redir: &Option<Redirection>,
    stderr_redir: &Option<Redirection>,
) -> ShellResult<RedirectionGuard> {
    let mut guard = RedirectionGuard { saved: Vec::new() };
    if let Some(redir) = stdout_redir {
        guard.redirect(libc::STDOUT_FILENO, &open_target(redir)?)?;
    }
    if let Some(redir) = stderr_redir {
        guard.redirect(libc::STDERR_FILENO, &open_target(redir)?)?;
    }
    Ok(guard)
}
