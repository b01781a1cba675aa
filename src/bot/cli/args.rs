use clap::Parser;
use std::path::PathBuf;

/// Environment variable overriding the data directory when `--data-dir` is absent
pub const HOME_ENV: &str = "ASSISTANT_BOT_HOME";

#[derive(Parser, Debug)]
#[command(name = "assistant-bot", bin_name = "assistant-bot", version)]
#[command(
    about = "Interactive assistant for your contacts and notes",
    long_about = "Starts an interactive session. Type 'help' at the prompt to list commands."
)]
pub struct Cli {
    /// Directory holding the address book, notebook and config.json
    #[arg(long, value_name = "PATH", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}
