//! Runner that spawns real processes

use crate::error::{CaurError, CaurResult};
use crate::process::runner::{CommandRunner, CommandSpec};
use std::process::{Command, Stdio};
use tracing::debug;

/// Spawns processes attached to the caller's terminal
///
/// Children inherit stdin, stdout and stderr, so prompts from `makepkg`,
/// `sudo` or `pacman` reach the user directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> CaurResult<i32> {
        debug!("Executing: {}", spec);

        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &spec.cwd {
            debug!("  in {}", dir.display());
            command.current_dir(dir);
        }

        let status = command
            .status()
            .map_err(|e| CaurError::command_spawn(spec.to_string(), e))?;

        status.code().ok_or_else(|| CaurError::ProcessSignaled {
            command: spec.to_string(),
        })
    }

    fn has_program(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }
}
