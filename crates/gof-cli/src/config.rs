//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees [`DemoOptions`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `GOF_` prefixed, `__` between sections
//!    (e.g. `GOF_OUTPUT__FORMAT=json`)
//! 3. Config file (`--config`, else the platform config dir if present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use gof_core::demo::DemoOptions;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Demonstration settings.
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Threads racing for the thread-safe singleton.
    pub singleton_racers: usize,
    /// What `gof run` runs when no pattern is named.
    pub default_patterns: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            singleton_racers: DemoOptions::default().singleton_racers,
            default_patterns: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.
    /// Without it, the default location is used only if a file is there.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let mut builder = Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => builder.add_source(File::from(path.as_path()).format(FileFormat::Toml)),
            None => builder.add_source(
                File::from(Self::config_path().as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            ),
        };

        let config = builder
            .add_source(
                Environment::with_prefix("GOF")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("demo.default_patterns")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        let loaded: Self = config
            .try_deserialize()
            .context("Configuration has an invalid shape")?;

        loaded
            .demo_options(None)
            .validate()
            .context("Invalid demo.singleton_racers")?;

        tracing::debug!(?loaded, "Configuration loaded");
        Ok(loaded)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.gof.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "gof", "gof")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".gof.toml"))
    }

    /// Options handed to `gof_core::demo`, with an optional CLI override.
    pub fn demo_options(&self, racers: Option<u16>) -> DemoOptions {
        DemoOptions {
            singleton_racers: racers.map_or(self.demo.singleton_racers, usize::from),
        }
    }

    /// Whether `path` exists as a config file.
    pub fn exists(path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_format_is_auto() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn defaults_follow_core_demo_options() {
        assert_eq!(
            AppConfig::default().demo.singleton_racers,
            DemoOptions::default().singleton_racers
        );
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[demo]\nsingleton_racers = 3\ndefault_patterns = [\"adapter\"]\n"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.demo.singleton_racers, 3);
        assert_eq!(cfg.demo.default_patterns, vec!["adapter".to_string()]);
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn out_of_range_racers_are_rejected() {
        for racers in ["0", "100000"] {
            let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
            writeln!(file, "[demo]\nsingleton_racers = {racers}\n").unwrap();

            let err = AppConfig::load(Some(&file.path().to_path_buf())).unwrap_err();
            assert!(format!("{err:#}").contains("singleton_racers"));
        }
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = PathBuf::from("/definitely/not/here/gof.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn cli_racers_override_config() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.demo_options(Some(2)).singleton_racers, 2);
        assert_eq!(
            cfg.demo_options(None).singleton_racers,
            cfg.demo.singleton_racers
        );
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
        assert!(p.ends_with("config.toml") || p.ends_with(".gof.toml"));
    }
}
