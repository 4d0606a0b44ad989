//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No pattern logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use gof_core::catalog::Category;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gof",
    bin_name = "gof",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Classic design patterns, one runnable example each",
    long_about = "gof lists the patterns in the catalogue and runs their \
                  demonstrations, printing what each example observes.",
    after_help = "EXAMPLES:\n\
        \x20 gof list\n\
        \x20 gof list --category behavioral\n\
        \x20 gof run observer memento\n\
        \x20 gof run --all --output-format json",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the patterns in the catalogue.
    #[command(
        visible_alias = "ls",
        about = "List available patterns",
        after_help = "EXAMPLES:\n\
            \x20 gof list\n\
            \x20 gof list --category creational\n\
            \x20 gof list --format json"
    )]
    List(ListArgs),

    /// Run pattern demonstrations.
    #[command(
        visible_alias = "r",
        about = "Run pattern demonstrations",
        after_help = "EXAMPLES:\n\
            \x20 gof run adapter\n\
            \x20 gof run factory-method visitor\n\
            \x20 gof run --all\n\
            \x20 gof run singleton --racers 32"
    )]
    Run(RunArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gof config get demo.singleton_racers\n\
            \x20 gof config list\n\
            \x20 gof config path"
    )]
    Config(ConfigCommands),
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `gof list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show patterns of this category.
    #[arg(short = 'k', long = "category", value_enum, value_name = "CATEGORY")]
    pub category: Option<CategoryArg>,

    /// How to print the list.
    #[arg(short = 'f', long = "format", value_enum, default_value = "table")]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Name, category and intent.
    Table,
    /// Names only, one per line.
    List,
    /// A JSON array.
    Json,
}

/// Pattern categories as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CategoryArg {
    Creational,
    Structural,
    Behavioral,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Creational => Category::Creational,
            CategoryArg::Structural => Category::Structural,
            CategoryArg::Behavioral => Category::Behavioral,
        }
    }
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `gof run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Patterns to run, e.g. `observer` or `factory-method`.
    ///
    /// Defaults to `demo.default_patterns` from the configuration when empty.
    #[arg(value_name = "PATTERN", conflicts_with = "all")]
    pub patterns: Vec<String>,

    /// Run every pattern in the catalogue.
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Threads racing for the thread-safe singleton (overrides config).
    #[arg(long = "racers", value_name = "N", value_parser = clap::value_parser!(u16).range(1..=256))]
    pub racers: Option<u16>,
}

// ── config ────────────────────────────────────────────────────────────────────

/// `gof config` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}
