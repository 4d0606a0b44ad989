//! Memento: capture and restore an object's state without exposing it.
//!
//! A [`Memento`] has two faces. Everyone can hold one, move it around and
//! ask for its [`MementoId`] (the narrow interface). Only code in this
//! module, i.e. the [`Originator`] and the [`Caretaker`], can read what it
//! captured (the wide interface).

use std::fmt;

use tracing::debug;
use uuid::Uuid;

use crate::error::{PatternError, PatternResult};

/// Opaque identity of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MementoId(Uuid);

impl fmt::Display for MementoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A snapshot of an [`Originator`]'s state.
#[derive(Debug)]
pub struct Memento {
    id: MementoId,
    state: String,
}

impl Memento {
    fn new(state: String) -> Self {
        Self {
            id: MementoId(Uuid::new_v4()),
            state,
        }
    }

    /// The only thing outsiders may learn about a snapshot.
    pub fn id(&self) -> MementoId {
        self.id
    }

    // Wide interface: private to this module.

    fn state(&self) -> &str {
        &self.state
    }
}

/// Holds the state worth saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Originator {
    state: String,
}

impl Originator {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
        }
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn create_memento(&self) -> Memento {
        let memento = Memento::new(self.state.clone());
        debug!(id = %memento.id(), "Memento captured");
        memento
    }

    /// Overwrite the current state with the one captured in `memento`.
    pub fn apply_memento(&mut self, memento: &Memento) {
        debug!(id = %memento.id(), "Memento applied");
        self.state = memento.state().to_owned();
    }
}

/// Keeps snapshots in LIFO order without looking inside them.
#[derive(Debug, Default)]
pub struct Caretaker {
    history: Vec<Memento>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: Vec<Memento>) -> Self {
        Self { history }
    }

    pub fn push(&mut self, memento: Memento) {
        self.history.push(memento);
    }

    /// Remove and return the most recent snapshot.
    ///
    /// # Errors
    ///
    /// [`PatternError::EmptyHistory`] when nothing has been pushed.
    pub fn pop(&mut self) -> PatternResult<Memento> {
        self.history.pop().ok_or(PatternError::EmptyHistory)
    }

    pub fn peek(&self) -> Option<&Memento> {
        self.history.last()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_reproduces_captured_state() {
        let mut originator = Originator::new("Foo");
        let mut caretaker = Caretaker::new();
        assert_eq!(originator.state(), "Foo");

        caretaker.push(originator.create_memento());

        originator.set_state("Bar");
        assert_eq!(originator.state(), "Bar");

        let memento = caretaker.pop().unwrap();
        originator.apply_memento(&memento);
        assert_eq!(originator.state(), "Foo");
    }

    #[test]
    fn caretaker_is_lifo() {
        let mut originator = Originator::new("one");
        let mut caretaker = Caretaker::new();

        let first = originator.create_memento();
        let first_id = first.id();
        caretaker.push(first);
        originator.set_state("two");
        let second = originator.create_memento();
        let second_id = second.id();
        caretaker.push(second);

        assert_eq!(caretaker.peek().map(Memento::id), Some(second_id));
        assert_eq!(caretaker.pop().unwrap().id(), second_id);
        assert_eq!(caretaker.pop().unwrap().id(), first_id);
        assert!(caretaker.is_empty());
    }

    #[test]
    fn pop_on_empty_history_is_an_error() {
        let mut caretaker = Caretaker::new();
        assert_eq!(caretaker.pop().unwrap_err(), PatternError::EmptyHistory);
    }

    #[test]
    fn snapshots_are_distinct() {
        let originator = Originator::new("same");
        let a = originator.create_memento();
        let b = originator.create_memento();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn caretaker_can_start_with_history() {
        let originator = Originator::new("seed");
        let caretaker = Caretaker::with_history(vec![originator.create_memento()]);
        assert_eq!(caretaker.len(), 1);
    }
}
