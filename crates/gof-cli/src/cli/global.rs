//! Flags shared by `list`, `run` and `config`.

use std::path::PathBuf;

use clap::{ArgAction, Args};

use crate::output::OutputFormat;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of what the patterns do (-v demo runs, -vv notifications and
    /// snapshots, -vvv everything).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing but errors and JSON payloads.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes (also set by `NO_COLOR`).
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// TOML file to read instead of the default location.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// `auto` follows `output.format`, then whether stdout is a terminal.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}
