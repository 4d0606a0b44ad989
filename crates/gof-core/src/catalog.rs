//! Catalogue value objects: [`Pattern`] and [`Category`].
//!
//! # Adding a pattern
//!
//! 1. Add the module and its example
//! 2. Add the enum variant, plus its `as_str`, `category`, `intent` and
//!    `FromStr` arms here
//! 3. Add a demo arm in `demo.rs`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PatternError;

// ── Category ──────────────────────────────────────────────────────────────────

/// The classic grouping of design patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Creational => "creational",
            Self::Structural => "structural",
            Self::Behavioral => "behavioral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Pattern ───────────────────────────────────────────────────────────────────

/// One entry of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    AbstractFactory,
    Adapter,
    Bridge,
    Composite,
    FactoryMethod,
    Memento,
    Observer,
    Prototype,
    Singleton,
    Visitor,
}

impl Pattern {
    /// Every pattern, in alphabetical order.
    pub const ALL: [Pattern; 10] = [
        Self::AbstractFactory,
        Self::Adapter,
        Self::Bridge,
        Self::Composite,
        Self::FactoryMethod,
        Self::Memento,
        Self::Observer,
        Self::Prototype,
        Self::Singleton,
        Self::Visitor,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AbstractFactory => "abstract-factory",
            Self::Adapter => "adapter",
            Self::Bridge => "bridge",
            Self::Composite => "composite",
            Self::FactoryMethod => "factory-method",
            Self::Memento => "memento",
            Self::Observer => "observer",
            Self::Prototype => "prototype",
            Self::Singleton => "singleton",
            Self::Visitor => "visitor",
        }
    }

    pub const fn category(&self) -> Category {
        match self {
            Self::AbstractFactory | Self::FactoryMethod | Self::Prototype | Self::Singleton => {
                Category::Creational
            }
            Self::Adapter | Self::Bridge | Self::Composite => Category::Structural,
            Self::Memento | Self::Observer | Self::Visitor => Category::Behavioral,
        }
    }

    /// One-line statement of what the pattern is for.
    pub const fn intent(&self) -> &'static str {
        match self {
            Self::AbstractFactory => "Create families of related objects without naming their types",
            Self::Adapter => "Make an incompatible interface fit the one clients expect",
            Self::Bridge => "Let an abstraction and its implementation vary independently",
            Self::Composite => "Treat single objects and groups of them uniformly",
            Self::FactoryMethod => "Let implementors decide which product a fixed algorithm creates",
            Self::Memento => "Capture and restore state without exposing it",
            Self::Observer => "Notify dependents when a subject changes",
            Self::Prototype => "Create objects by copying a prototype",
            Self::Singleton => "Ensure one instance with a global access point",
            Self::Visitor => "Add operations to a node hierarchy without changing it",
        }
    }

    pub fn in_category(category: Category) -> impl Iterator<Item = Pattern> {
        Self::ALL.into_iter().filter(move |p| p.category() == category)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "abstract-factory" | "abstractfactory" => Ok(Self::AbstractFactory),
            "adapter" => Ok(Self::Adapter),
            "bridge" => Ok(Self::Bridge),
            "composite" => Ok(Self::Composite),
            "factory-method" | "factorymethod" => Ok(Self::FactoryMethod),
            "memento" => Ok(Self::Memento),
            "observer" => Ok(Self::Observer),
            "prototype" => Ok(Self::Prototype),
            "singleton" => Ok(Self::Singleton),
            "visitor" => Ok(Self::Visitor),
            other => Err(PatternError::UnknownPattern(other.to_string())),
        }
    }
}
