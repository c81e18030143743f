//! Process runner abstraction

use crate::error::{CaurError, CaurResult};
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// A program invocation: program, arguments and working directory
///
/// Arguments are kept as `OsString` so paths reach the child unchanged,
/// including names that are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<OsString>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the child in `dir` instead of the current directory
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Executes external programs on behalf of caur
///
/// The system implementation spawns real processes with inherited stdio;
/// tests substitute a recording runner.
pub trait CommandRunner {
    /// Run a command to completion and return its exit code
    fn run(&self, spec: &CommandSpec) -> CaurResult<i32>;

    /// Check whether a program is available on this system
    fn has_program(&self, name: &str) -> bool;
}

/// Run a command and turn a non-zero exit code into an error
pub fn run_checked(runner: &dyn CommandRunner, spec: &CommandSpec) -> CaurResult<()> {
    match runner.run(spec)? {
        0 => Ok(()),
        code => Err(CaurError::CommandFailed {
            command: spec.to_string(),
            code,
        }),
    }
}
