//! Clean command - clear cached package recipes

use crate::cli::commands::CommandContext;
use crate::error::CaurResult;
use crate::package::PackageName;
use crate::ui;
use tracing::info;

/// Clear the named cache entries, or every entry when no targets are given
///
/// A missing entry stops the run; entries named before it are already gone.
pub fn execute(targets: &[PackageName], ctx: &CommandContext<'_>) -> CaurResult<()> {
    if targets.is_empty() {
        let removed = ctx.cache.clear_all()?;
        info!(
            "Cleared {} cache entries from {}",
            removed,
            ctx.cache.path().display()
        );
        if removed == 0 {
            ui::step_info(&ctx.ui, "Package cache is already empty");
        } else {
            ui::step_ok(&ctx.ui, &format!("Removed {} cached package(s)", removed));
        }
        return Ok(());
    }

    for name in targets {
        ctx.cache.remove_package(name)?;
        ui::step_ok(&ctx.ui, &format!("Removed cached {}", name));
    }

    Ok(())
}
