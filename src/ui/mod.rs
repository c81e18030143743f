//! Terminal interaction: status lines and yes/no prompts
//!
//! Output degrades to plain `[OK]`/`[INFO]` markers when stdout is not a
//! terminal, so piped runs and tests get stable text.

mod context;
mod output;
mod prompts;

pub use context::UiContext;
pub use output::{action, step_info, step_ok};
pub use prompts::{Answer, Prompter};
