//! Privilege escalation for package manager calls

use crate::process::{CommandRunner, CommandSpec};
use std::ffi::OsString;
use tracing::debug;

/// How commands that need root are wrapped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivilegeHelper {
    /// A wrapper that takes the command as arguments (`sudo`, `doas`)
    Program(String),
    /// `su root -c "<command>"`
    Su,
}

impl PrivilegeHelper {
    /// Pick the first available helper from `preferred`, else fall back to `su`
    pub fn detect<S: AsRef<str>>(runner: &dyn CommandRunner, preferred: &[S]) -> Self {
        let helper = preferred
            .iter()
            .map(|name| name.as_ref())
            .find(|name| runner.has_program(name))
            .map(|name| Self::Program(name.to_string()))
            .unwrap_or(Self::Su);

        debug!("Using privilege helper: {}", helper.name());
        helper
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Program(name) => name,
            Self::Su => "su",
        }
    }

    /// Wrap `command` so it runs as root
    pub fn wrap(&self, command: CommandSpec) -> CommandSpec {
        match self {
            Self::Program(name) => CommandSpec {
                program: name.clone(),
                args: std::iter::once(OsString::from(command.program))
                    .chain(command.args)
                    .collect(),
                cwd: command.cwd,
            },
            Self::Su => {
                let mut line = OsString::from(&command.program);
                for arg in &command.args {
                    line.push(" ");
                    line.push(arg);
                }
                CommandSpec {
                    program: "su".to_string(),
                    args: vec!["root".into(), "-c".into(), line],
                    cwd: command.cwd,
                }
            }
        }
    }
}
