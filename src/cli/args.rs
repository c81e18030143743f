//! CLI argument definitions using clap derive
//!
//! The command line is pacman-shaped: one operation flag first, then
//! targets. `parse_args` enforces that shape on top of clap and maps clap's
//! errors onto caur's usage errors.

use crate::error::{CaurError, CaurResult};
use crate::package::PackageName;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, ArgGroup, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// A simple AUR helper
///
/// Clones package recipes from the AUR, lets you review the PKGBUILD and
/// builds them with makepkg.
#[derive(Parser, Debug)]
#[command(name = "caur")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "caur <operation> [targets]")]
#[command(group(ArgGroup::new("operation").multiple(false)))]
pub struct Cli {
    /// Install package
    #[arg(short = 'S', group = "operation", help_heading = "Operations")]
    pub sync: bool,

    /// Remove package
    #[arg(short = 'R', group = "operation", help_heading = "Operations")]
    pub remove: bool,

    /// Clear package cache (all packages if no targets are given)
    #[arg(short = 'C', group = "operation", help_heading = "Operations")]
    pub clean: bool,

    /// Package names
    #[arg(value_name = "TARGETS")]
    pub targets: Vec<String>,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(long, env = "CAUR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip the PKGBUILD review and install without asking
    #[arg(long)]
    pub noconfirm: bool,
}

/// The operation selected on the command line, with validated targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `-S`: install each target in order
    Install(Vec<PackageName>),
    /// `-R`: remove each target in order
    Remove(Vec<PackageName>),
    /// `-C`: clear the named cache entries, or all of them when empty
    Clean(Vec<PackageName>),
}

/// Outcome of command line parsing
#[derive(Debug)]
pub enum Parsed {
    /// Run an operation
    Run(Box<Cli>, Operation),
    /// Help or version was requested; printing it is the whole job
    Info(clap::Error),
}

impl Cli {
    /// Resolve the operation flag, then validate targets
    pub fn operation(&self) -> CaurResult<Operation> {
        if self.sync {
            self.targets().and_then(non_empty).map(Operation::Install)
        } else if self.remove {
            self.targets().and_then(non_empty).map(Operation::Remove)
        } else if self.clean {
            self.targets().map(Operation::Clean)
        } else {
            Err(CaurError::NoOperation)
        }
    }

    fn targets(&self) -> CaurResult<Vec<PackageName>> {
        PackageName::parse_all(&self.targets)
    }
}

fn non_empty(targets: Vec<PackageName>) -> CaurResult<Vec<PackageName>> {
    if targets.is_empty() {
        Err(CaurError::NoTargets)
    } else {
        Ok(targets)
    }
}

/// Parse a full argument vector (program name first)
///
/// The first argument after the program name selects the operation by its
/// first flag character, so `-Syu` installs and `-Rs` removes; any further
/// letters in that argument are ignored. A first argument that is not a flag
/// is reported as "no operation specified" before clap looks at it.
pub fn parse_args<I, T>(args: I) -> CaurResult<Parsed>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let first = match args.get(1).map(|arg| arg.to_string_lossy().into_owned()) {
        Some(arg) if arg.starts_with('-') => arg,
        _ => return Err(CaurError::NoOperation),
    };
    args[1] = operation_flag(&first)?.into();

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(Parsed::Info(e));
        }
        Err(e) => return Err(usage_error(&e)),
    };

    let operation = cli.operation()?;
    Ok(Parsed::Run(Box::new(cli), operation))
}

/// Reduce the leading argument to the single flag clap should see
fn operation_flag(first: &str) -> CaurResult<String> {
    if first.starts_with("--") {
        return match first {
            "--help" | "--version" => Ok(first.to_string()),
            _ => Err(CaurError::UnrecognizedOption(first.to_string())),
        };
    }

    match first.chars().nth(1) {
        Some(op @ ('S' | 'R' | 'C' | 'h' | 'V')) => Ok(format!("-{op}")),
        _ => Err(CaurError::UnrecognizedOption(first.to_string())),
    }
}

fn usage_error(err: &clap::Error) -> CaurError {
    match err.kind() {
        ErrorKind::UnknownArgument => match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) => CaurError::UnrecognizedOption(arg.clone()),
            _ => CaurError::Usage("unrecognized option".to_string()),
        },
        ErrorKind::ArgumentConflict => {
            match (err.get(ContextKind::InvalidArg), err.get(ContextKind::PriorArg)) {
                (Some(ContextValue::String(arg)), Some(ContextValue::String(prior)))
                    if arg == prior =>
                {
                    CaurError::Usage(format!("'{}' given more than once", arg))
                }
                _ => CaurError::Usage("only one operation may be used at a time".to_string()),
            }
        }
        _ => {
            let rendered = err.to_string();
            let first_line = rendered.lines().next().unwrap_or("invalid arguments");
            CaurError::Usage(first_line.trim_start_matches("error: ").to_string())
        }
    }
}
