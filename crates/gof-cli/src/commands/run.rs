//! Implementation of the `gof run` command.

use tracing::{debug, info};

use gof_core::catalog::Pattern;
use gof_core::demo::{self, DemoReport};

use crate::{
    cli::RunArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::{OutputFormat, OutputManager},
};

pub fn execute(args: RunArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = config.demo_options(args.racers);
    let patterns = resolve_patterns(&args, &config)?;
    debug!(?patterns, ?options, "Resolved demo selection");

    let reports = patterns
        .into_iter()
        .map(|p| demo::run_with(p, &options))
        .collect::<Result<Vec<DemoReport>, _>>()?;

    if output.format() == OutputFormat::Json {
        output.json(&reports)?;
        return Ok(());
    }

    for report in &reports {
        output.header(&format!(
            "{} ({})",
            report.pattern,
            report.pattern.category()
        ))?;
        for line in &report.lines {
            output.item(line)?;
        }
    }
    output.success(&format!("Ran {} demonstration(s)", reports.len()))?;

    info!(count = reports.len(), "Demonstrations complete");
    Ok(())
}

/// `--all`, else the named patterns, else `demo.default_patterns`.
fn resolve_patterns(args: &RunArgs, config: &AppConfig) -> CliResult<Vec<Pattern>> {
    if args.all {
        return Ok(Pattern::ALL.to_vec());
    }

    let names = if args.patterns.is_empty() {
        &config.demo.default_patterns
    } else {
        &args.patterns
    };

    if names.is_empty() {
        return Err(CliError::InvalidInput {
            message: "no pattern named and demo.default_patterns is empty".into(),
        });
    }

    let mut patterns = Vec::with_capacity(names.len());
    for name in names {
        let pattern: Pattern = name.parse()?;
        if !patterns.contains(&pattern) {
            patterns.push(pattern);
        }
    }
    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gof_core::error::PatternError;

    fn args(patterns: &[&str], all: bool) -> RunArgs {
        RunArgs {
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            all,
            racers: None,
        }
    }

    #[test]
    fn all_flag_selects_catalogue() {
        let got = resolve_patterns(&args(&[], true), &AppConfig::default()).unwrap();
        assert_eq!(got, Pattern::ALL.to_vec());
    }

    #[test]
    fn named_patterns_keep_order_and_drop_repeats() {
        let got = resolve_patterns(
            &args(&["visitor", "adapter", "visitor"], false),
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(got, vec![Pattern::Visitor, Pattern::Adapter]);
    }

    #[test]
    fn config_defaults_used_when_nothing_named() {
        let mut config = AppConfig::default();
        config.demo.default_patterns = vec!["memento".into()];
        let got = resolve_patterns(&args(&[], false), &config).unwrap();
        assert_eq!(got, vec![Pattern::Memento]);
    }

    #[test]
    fn nothing_to_run_is_invalid_input() {
        let err = resolve_patterns(&args(&[], false), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn unknown_name_surfaces_core_error() {
        let err = resolve_patterns(&args(&["decorator"], false), &AppConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(PatternError::UnknownPattern(ref name)) if name == "decorator"
        ));
    }
}
