//! caur - a simple AUR helper
//!
//! CLI entry point that dispatches to operations.

use caur::cache::CacheRoot;
use caur::cli::{self, CommandContext, Parsed};
use caur::config::ConfigManager;
use caur::error::CaurResult;
use caur::process::SystemRunner;
use caur::ui::{Prompter, UiContext};
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_usage() {
                eprintln!("caur: {}", e);
            } else {
                eprintln!("{} {}", style("error:").red().bold(), e);
            }
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> CaurResult<()> {
    let (cli, operation) = match cli::parse_args(std::env::args_os())? {
        Parsed::Run(cli, operation) => (cli, operation),
        Parsed::Info(info) => info.exit(),
    };

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("caur=warn"),
        1 => EnvFilter::new("caur=info"),
        _ => EnvFilter::new("caur=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load()?;

    let cache = CacheRoot::detect()?;
    cache.ensure()?;
    debug!("Cache root: {}", cache.path().display());

    let runner = SystemRunner::new();
    let ctx = CommandContext {
        config: &config,
        cache: &cache,
        runner: &runner,
        ui: UiContext::detect().with_auto_yes(cli.noconfirm),
    };
    let mut prompter = Prompter::stdio();

    cli::dispatch(&operation, &ctx, &mut prompter)
}
