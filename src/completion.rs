use crate::commands::BUILTINS;
use crate::path;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::borrow::Cow;
use std::env;
use std::fs;

/// Tab completion for the command word: builtin names plus executables
/// found in the `PATH` directories.
#[derive(Clone)]
pub struct ShellCompleter;

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];
        let parts: Vec<&str> = input.split_whitespace().collect();

        // Only the first word is completed.
        if parts.len() > 1 || input.ends_with(' ') {
            return Ok((pos, vec![]));
        }
        let prefix = parts.first().copied().unwrap_or("");

        let mut candidates = Vec::new();

        for builtin in BUILTINS.names() {
            if builtin.starts_with(prefix) {
                candidates.push(Pair {
                    display: builtin.to_string(),
                    replacement: builtin.to_string(),
                });
            }
        }

        if let Ok(path_var) = env::var("PATH") {
            for dir in env::split_paths(&path_var) {
                let Ok(entries) = fs::read_dir(dir) else {
                    continue;
                };
                for entry in entries.flatten() {
                    let Ok(file_name) = entry.file_name().into_string() else {
                        continue;
                    };
                    if file_name.starts_with(prefix) && path::is_executable(&entry.path()) {
                        candidates.push(Pair {
                            display: file_name.clone(),
                            replacement: file_name,
                        });
                    }
                }
            }
        }

        candidates.sort_by(|a, b| a.display.cmp(&b.display));
        candidates.dedup_by(|a, b| a.display == b.display);

        // A unique match completes through to the next argument.
        if candidates.len() == 1 {
            candidates[0].replacement.push(' ');
        }

        Ok((pos - prefix.len(), candidates))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }

    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        Cow::Borrowed(prompt)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Borrowed(hint)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: CmdKind) -> bool {
        false
    }
}

impl Validator for ShellCompleter {}

impl Helper for ShellCompleter {}
