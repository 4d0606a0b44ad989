//! Implementation of the `gof list` command.

use serde::Serialize;

use gof_core::catalog::{Category, Pattern};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::{OutputFormat, OutputManager},
};

/// JSON row for one catalogue entry.
#[derive(Debug, Serialize)]
struct PatternEntry {
    name: Pattern,
    category: Category,
    intent: &'static str,
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let patterns = select(args.category.map(Category::from));

    // `--output-format json` implies the JSON listing.
    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available Patterns:")?;
            let width = patterns
                .iter()
                .map(|p| p.as_str().len())
                .max()
                .unwrap_or_default();
            for pattern in &patterns {
                output.print(&format!(
                    "  {:<width$}  {:<10}  {}",
                    pattern.as_str(),
                    pattern.category().as_str(),
                    pattern.intent(),
                ))?;
            }
        }

        ListFormat::List => {
            for pattern in &patterns {
                output.print(pattern.as_str())?;
            }
        }

        ListFormat::Json => {
            let entries: Vec<PatternEntry> = patterns
                .iter()
                .map(|p| PatternEntry {
                    name: *p,
                    category: p.category(),
                    intent: p.intent(),
                })
                .collect();
            output.json(&entries)?;
        }
    }

    Ok(())
}

fn select(category: Option<Category>) -> Vec<Pattern> {
    match category {
        Some(category) => Pattern::in_category(category).collect(),
        None => Pattern::ALL.to_vec(),
    }
}
