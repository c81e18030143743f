//! CLI command implementations

pub mod clean;
pub mod install;
pub mod remove;

use crate::cache::CacheRoot;
use crate::cli::args::Operation;
use crate::config::Config;
use crate::error::CaurResult;
use crate::process::CommandRunner;
use crate::ui::{Prompter, UiContext};

/// Everything an operation needs besides its targets
pub struct CommandContext<'a> {
    pub config: &'a Config,
    pub cache: &'a CacheRoot,
    pub runner: &'a dyn CommandRunner,
    pub ui: UiContext,
}

/// Run the selected operation
pub fn dispatch(
    operation: &Operation,
    ctx: &CommandContext<'_>,
    prompter: &mut Prompter<'_>,
) -> CaurResult<()> {
    match operation {
        Operation::Install(targets) => install::execute(targets, ctx, prompter),
        Operation::Remove(targets) => remove::execute(targets, ctx),
        Operation::Clean(targets) => clean::execute(targets, ctx),
    }
}
