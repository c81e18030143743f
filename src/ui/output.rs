//! Output functions for consistent CLI formatting

use super::context::UiContext;
use console::style;

/// Announce an action about to happen (`:: Cloning yay...`)
pub fn action(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        println!("{} {}", style("::").blue().bold(), style(message).bold());
    } else {
        println!(":: {}", message);
    }
}

/// Display a success step
pub fn step_ok(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        println!("{} {}", style("✓").green(), message);
    } else {
        println!("[OK] {}", message);
    }
}

/// Display an info step
pub fn step_info(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        println!("{} {}", style("•").cyan(), message);
    } else {
        println!("[INFO] {}", message);
    }
}
