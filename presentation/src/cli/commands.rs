//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for uni-assist
#[derive(Parser, Debug)]
#[command(name = "uni-assist")]
#[command(author, version, about = "Terminal client for the university information assistant")]
#[command(long_about = r#"
uni-assist talks to the university assistant backend: browse your previous
conversations, continue one, or ask a new question that starts one.

Configuration files are loaded from (in priority order):
1. UNI_ASSIST_* environment variables
2. --config <path>       Explicit config file
3. ./uni-assist.toml     Project-level config
4. ~/.config/uni-assist/config.toml   Global config

Example:
  uni-assist "What are the admission requirements?"
  uni-assist --chat
"#)]
pub struct Cli {
    /// The question to ask (omit and use --chat for interactive mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Path to a config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the in-flight spinner
    #[arg(short, long)]
    pub quiet: bool,
}
