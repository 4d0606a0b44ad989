//! Prototype: create new objects by copying existing ones.
//!
//! For concrete types this is just [`Clone`]. [`Shape::clone_shape`] extends
//! it to trait objects, which is what lets [`ShapeRegistry`] hand out fresh
//! copies of prototypes it only knows as `dyn Shape`.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use tracing::debug;

use crate::error::{PatternError, PatternResult};

pub trait Shape {
    fn area(&self) -> f64;
    fn name(&self) -> &'static str;

    /// An independent copy of this shape.
    fn clone_shape(&self) -> Box<dyn Shape>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    radius: u32,
}

impl Circle {
    pub fn new(radius: u32) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: u32) {
        self.radius = radius;
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        let r = f64::from(self.radius);
        PI * r * r
    }

    fn name(&self) -> &'static str {
        "circle"
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    length: f64,
}

impl Square {
    pub fn new(length: f64) -> Self {
        Self { length }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn set_length(&mut self, length: f64) {
        self.length = length;
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.length * self.length
    }

    fn name(&self) -> &'static str {
        "square"
    }

    fn clone_shape(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

/// A prototype manager: register preconfigured shapes, clone them on demand.
#[derive(Default)]
pub struct ShapeRegistry {
    prototypes: BTreeMap<String, Box<dyn Shape>>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the prototype stored under `name`.
    pub fn register(&mut self, name: impl Into<String>, prototype: Box<dyn Shape>) {
        let name = name.into();
        debug!(%name, kind = prototype.name(), "Prototype registered");
        self.prototypes.insert(name, prototype);
    }

    /// A fresh copy of the prototype registered under `name`.
    pub fn create(&self, name: &str) -> PatternResult<Box<dyn Shape>> {
        self.prototypes
            .get(name)
            .map(|p| p.clone_shape())
            .ok_or_else(|| PatternError::UnknownPrototype {
                name: name.to_string(),
            })
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.prototypes.keys().map(String::as_str).collect()
    }
}
