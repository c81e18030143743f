//! caur - a simple AUR helper
//!
//! Clones package recipes from the Arch User Repository into
//! `~/.cache/caur`, lets the user review the PKGBUILD and hands the build
//! to makepkg. Removal goes through pacman behind sudo, doas or su.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod escalation;
pub mod package;
pub mod process;
pub mod ui;

pub use error::{CaurError, CaurResult};
