//! Unified error handling for the pattern catalogue.
//!
//! Every example is a total function over well-formed input. The only
//! failures are caller misuse (popping an empty history) and lookups by
//! name (unknown prototype, unknown pattern, unknown notification mode).

use thiserror::Error;

/// Root error type for `gof-core` operations.
///
/// All errors are:
/// - Cloneable (cheap to hand back to callers and tests)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    // ========================================================================
    // Caller misuse
    // ========================================================================
    /// A caretaker was asked for a snapshot it does not hold.
    #[error("Memento history is empty: nothing to restore")]
    EmptyHistory,

    // ========================================================================
    // Lookups
    // ========================================================================
    #[error("No prototype registered under '{name}'")]
    UnknownPrototype { name: String },

    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    // ========================================================================
    // Parsing
    // ========================================================================
    #[error("Invalid notification mode '{0}': expected 'pull' or 'push'")]
    InvalidMode(String),

    #[error("Invalid singleton racer count {requested}: expected 1 to {max}")]
    InvalidRacers { requested: usize, max: usize },

    // ========================================================================
    // Runtime
    // ========================================================================
    /// Some racer threads could not be started or panicked.
    #[error("{failed} of {racers} singleton racers failed")]
    RacersFailed { failed: usize, racers: usize },
}

impl PatternError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyHistory => vec![
                "Push a memento onto the caretaker before popping".into(),
                "Check `Caretaker::is_empty()` first".into(),
            ],
            Self::UnknownPrototype { name } => vec![
                format!("Register a prototype named '{}' first", name),
                "Use `ShapeRegistry::names()` to see what is registered".into(),
            ],
            Self::UnknownPattern(name) => vec![
                format!("'{}' is not in the catalogue", name),
                "Try: gof list".into(),
            ],
            Self::InvalidMode(_) => vec!["Valid modes are: pull, push".into()],
            Self::InvalidRacers { max, .. } => vec![
                format!("Pick between 1 and {} racers", max),
                "Check demo.singleton_racers in the config or GOF_DEMO__SINGLETON_RACERS".into(),
            ],
            Self::RacersFailed { .. } => vec![
                "Try again with fewer racers (--racers)".into(),
                "Run with -vv to see which thread failed".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyHistory => ErrorCategory::Misuse,
            Self::UnknownPrototype { .. } | Self::UnknownPattern(_) => ErrorCategory::NotFound,
            Self::InvalidMode(_) | Self::InvalidRacers { .. } => ErrorCategory::Validation,
            Self::RacersFailed { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Misuse,
    NotFound,
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type PatternResult<T> = Result<T, PatternError>;
