//! gof-core - a catalogue of classic design patterns
//!
//! Ten small, self-contained examples. No module depends on another; each
//! is a leaf with its own tiny data model and its own tests.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              gof-cli (binary)               │
//! │        lists and runs demonstrations        │
//! └──────────────────────┬───────────────────────┘
//!                        │ calls
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │         catalog (Pattern, Category)         │
//! │         demo    (run, DemoReport)           │
//! └──────────────────────┬───────────────────────┘
//!                        │ drives
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │  Creational: abstract_factory, factory_method│
//! │              prototype, singleton           │
//! │  Structural: adapter, bridge, composite     │
//! │  Behavioral: memento, observer, visitor     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gof_core::factory_method::{Logistics, RoadLogistics};
//!
//! let transporter = RoadLogistics.create_transporter();
//! assert_eq!(transporter.deliver(42), "Delivering 42 using a truck.");
//! ```

// Creational
pub mod abstract_factory;
pub mod factory_method;
pub mod prototype;
pub mod singleton;

// Structural
pub mod adapter;
pub mod bridge;
pub mod composite;

// Behavioral
pub mod memento;
pub mod observer;
pub mod visitor;

// Catalogue and demonstrations
pub mod catalog;
pub mod demo;

pub mod error;

// Public API - what the CLI uses
pub mod prelude {
    pub use crate::catalog::{Category, Pattern};
    pub use crate::demo::{DemoOptions, DemoReport};
    pub use crate::error::{ErrorCategory, PatternError, PatternResult};
}
