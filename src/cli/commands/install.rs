//! Install command - clone, review and build AUR packages

use crate::cli::commands::CommandContext;
use crate::error::{CaurError, CaurResult};
use crate::package::PackageName;
use crate::process::{run_checked, CommandSpec};
use crate::ui::{self, Answer, Prompter};
use std::path::Path;
use tracing::{debug, info, warn};

/// Build recipe expected at the top of every AUR repository
pub const RECIPE_FILE: &str = "PKGBUILD";

/// Install each target in order, stopping at the first failure
pub fn execute(
    targets: &[PackageName],
    ctx: &CommandContext<'_>,
    prompter: &mut Prompter<'_>,
) -> CaurResult<()> {
    for name in targets {
        install_package(name, ctx, prompter)?;
    }
    Ok(())
}

fn install_package(
    name: &PackageName,
    ctx: &CommandContext<'_>,
    prompter: &mut Prompter<'_>,
) -> CaurResult<()> {
    let dir = ctx.cache.package_dir(name);

    if ctx.cache.contains(name) {
        debug!("Using cached recipe in {}", dir.display());
    } else {
        fetch_recipe(name, ctx)?;
    }

    let recipe = dir.join(RECIPE_FILE);
    if !recipe.is_file() {
        discard(name, ctx);
        return Err(CaurError::TargetNotFound(name.to_string()));
    }

    if ctx.ui.auto_yes() {
        debug!("Skipping {} review (--noconfirm)", RECIPE_FILE);
    } else {
        review_recipe(&recipe, ctx, prompter)?;
    }

    let proceed = ctx.ui.auto_yes()
        || prompter.ask("Proceed with installation?")?.is_yes();
    if !proceed {
        info!("Installation of {} cancelled", name);
        return Ok(());
    }

    ui::action(&ctx.ui, &format!("Building {}...", name));
    let build = CommandSpec::new(&ctx.config.build.command)
        .args(&ctx.config.build.args)
        .current_dir(&dir);
    run_checked(ctx.runner, &build)?;

    ui::step_ok(&ctx.ui, &format!("{} installed", name));
    Ok(())
}

/// Create the package directory and clone its recipe repository into it
fn fetch_recipe(name: &PackageName, ctx: &CommandContext<'_>) -> CaurResult<()> {
    let dir = ctx.cache.create_package_dir(name)?;
    let url = ctx.config.aur.clone_url(name);

    ui::action(&ctx.ui, &format!("Cloning {}...", name));
    let clone = CommandSpec::new("git").arg("clone").arg(url).arg(&dir);

    match ctx.runner.run(&clone) {
        Ok(0) => Ok(()),
        Ok(code) => {
            discard(name, ctx);
            Err(CaurError::CloneFailed {
                package: name.to_string(),
                code,
            })
        }
        Err(e) => {
            discard(name, ctx);
            Err(e)
        }
    }
}

fn review_recipe(
    recipe: &Path,
    ctx: &CommandContext<'_>,
    prompter: &mut Prompter<'_>,
) -> CaurResult<()> {
    match prompter.ask(&format!("Check contents of {}?", RECIPE_FILE))? {
        Answer::Yes => {
            let pager = CommandSpec::new(&ctx.config.build.pager).arg(recipe);
            run_checked(ctx.runner, &pager)
        }
        Answer::No => Ok(()),
        Answer::Other(_) | Answer::Eof => Err(CaurError::InvalidInput),
    }
}

/// Remove a partially fetched package directory; the original error wins
fn discard(name: &PackageName, ctx: &CommandContext<'_>) {
    if let Err(e) = ctx.cache.remove_package(name) {
        warn!("Failed to clean up {}: {}", name, e);
    }
}
