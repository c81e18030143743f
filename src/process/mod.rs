//! External process execution
//!
//! Every real piece of work (clone, review, build, remove) is delegated to
//! an external program. Operations describe the program to run as a
//! [`CommandSpec`] and hand it to a [`CommandRunner`], which keeps the
//! install/remove logic independent of actual process spawning.

mod runner;
mod system;

#[cfg(test)]
pub(crate) mod testing;

pub use runner::{run_checked, CommandRunner, CommandSpec};
pub use system::SystemRunner;
