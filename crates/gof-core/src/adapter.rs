//! Adapter: make an incompatible type satisfy the interface we code against.
//!
//! The adapter wraps the adaptee by reference and translates every call;
//! it does not inherit from or copy it.

/// The domain-specific shape our code speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Data {
    pub x: i32,
}

impl Data {
    pub fn new(x: i32) -> Self {
        Self { x }
    }
}

/// The shape the external type expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialData {
    pub y: String,
}

// Total: every `Data` has exactly one `SpecialData`.
impl From<&Data> for SpecialData {
    fn from(data: &Data) -> Self {
        Self {
            y: data.x.to_string(),
        }
    }
}

/// The interface our program is written against.
pub trait Target {
    fn some_method(&self, data: &Data) -> String;
}

/// The native implementation of [`Target`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TargetClass;

impl Target for TargetClass {
    fn some_method(&self, data: &Data) -> String {
        format!("someMethod called with {}.", data.x)
    }
}

/// The external type with the incompatible interface.
#[derive(Debug, Default, Clone, Copy)]
pub struct Adaptee;

impl Adaptee {
    pub fn special_method(&self, special: &SpecialData) -> String {
        format!("specialMethod called with {}.", special.y)
    }
}

/// Implements [`Target`] by converting and delegating to an [`Adaptee`].
#[derive(Debug, Clone, Copy)]
pub struct Adapter<'a> {
    adaptee: &'a Adaptee,
}

impl<'a> Adapter<'a> {
    pub fn new(adaptee: &'a Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter<'_> {
    fn some_method(&self, data: &Data) -> String {
        let converted = SpecialData::from(data);
        self.adaptee.special_method(&converted)
    }
}
