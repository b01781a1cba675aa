//! # CLI Layer
//!
//! The REPL is **one possible UI client** for the assistant. It is the only place that:
//! - Reads stdin and writes stdout
//! - Traps Ctrl+C so an interrupted session still saves
//! - Parses launch arguments
//! - Initializes logging
//! - Decides where the data directory is
//!
//! ## Structure
//!
//! - [`run`]: launch sequence (called by `main.rs`)
//! - `args`: clap definitions for launch flags
//! - `input`: stdin and interrupt signals merged into one line stream
//! - `repl`: the read/dispatch/print loop and shutdown saving
//! - `prompt`: interactive elicitation for `add-contact` and `change-contact`
//! - `print`, `styles`: colored output

mod args;
mod input;
mod print;
mod prompt;
mod repl;
mod styles;

use args::{Cli, HOME_ENV};
use assistant_bot::api::BotApi;
use assistant_bot::config::BotConfig;
use assistant_bot::error::{BotError, Result};
use assistant_bot::store::fs::FileStore;
use clap::Parser;
use directories::ProjectDirs;
use input::Console;
use log::{debug, warn};
use repl::Session;
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir, std::env::var_os(HOME_ENV))?;
    debug!("Using data directory {}", data_dir.display());

    let config = BotConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!("Ignoring unreadable config in {}: {}", data_dir.display(), e);
        BotConfig::default()
    });
    let store = FileStore::with_config(data_dir, &config);
    let api = BotApi::new(store, config);

    let stdout = io::stdout();
    let mut session = Session::new(api, Console::start(), stdout.lock());
    session.run()
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();
}

/// `--data-dir` wins, then the environment variable, then the platform data directory.
fn resolve_data_dir(flag: Option<PathBuf>, env: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = env.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "assistant-bot", "assistant-bot")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BotError::Config("Could not determine a data directory".to_string()))
}
