//! Remove command - uninstall packages with the system package manager

use crate::cli::commands::CommandContext;
use crate::error::CaurResult;
use crate::escalation::PrivilegeHelper;
use crate::package::PackageName;
use crate::process::{run_checked, CommandSpec};
use crate::ui;

/// Remove each target in order, stopping at the first failure
///
/// Whether the package is installed is left to the package manager, which
/// reports on the inherited terminal.
pub fn execute(targets: &[PackageName], ctx: &CommandContext<'_>) -> CaurResult<()> {
    let remove = &ctx.config.remove;
    let helper = PrivilegeHelper::detect(ctx.runner, &remove.helpers);

    for name in targets {
        ui::action(&ctx.ui, &format!("Removing {}...", name));

        let command = CommandSpec::new(&remove.package_manager)
            .args(&remove.args)
            .arg(name.as_str());
        run_checked(ctx.runner, &helper.wrap(command))?;
    }

    Ok(())
}
