//! Observer: a subject keeps a list of dependents and tells them about changes.
//!
//! The subject only signals that something changed; observers pull the
//! current state themselves. Whether a change triggers that signal on its
//! own ([`NotifyMode::Push`]) or waits for an explicit [`Subject::notify`]
//! ([`NotifyMode::Pull`]) is fixed when the subject is built.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PatternError;

/// When subscribers hear about a state change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyMode {
    /// Changes are silent until someone calls [`Subject::notify`].
    #[default]
    Pull,
    /// Every [`Subject::set_state`] notifies immediately.
    Push,
}

impl NotifyMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pull => "pull",
            Self::Push => "push",
        }
    }
}

impl fmt::Display for NotifyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotifyMode {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pull" => Ok(Self::Pull),
            "push" => Ok(Self::Push),
            other => Err(PatternError::InvalidMode(other.to_string())),
        }
    }
}

pub trait Observer {
    /// Called on notification; query `subject` for whatever is needed.
    fn update(&self, subject: &Subject);
}

/// Holds an integer state and an ordered list of subscribers.
pub struct Subject {
    state: i32,
    mode: NotifyMode,
    observers: Vec<Rc<dyn Observer>>,
}

impl Subject {
    pub fn new(state: i32, mode: NotifyMode) -> Self {
        Self {
            state,
            mode,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> i32 {
        self.state
    }

    pub fn mode(&self) -> NotifyMode {
        self.mode
    }

    pub fn set_state(&mut self, state: i32) {
        self.state = state;
        if self.mode == NotifyMode::Push {
            self.notify();
        }
    }

    pub fn subscribe(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Returns `false` if `observer` was not subscribed.
    pub fn unsubscribe(&mut self, observer: &Rc<dyn Observer>) -> bool {
        match self.observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Tell every subscriber, in subscription order, that the state changed.
    pub fn notify(&self) {
        debug!(
            observers = self.observers.len(),
            state = self.state,
            "Notifying observers"
        );
        for observer in &self.observers {
            observer.update(self);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }
}

/// Mirrors its subject's state, for demonstration purposes.
#[derive(Debug)]
pub struct MirrorObserver {
    state: Cell<i32>,
}

impl MirrorObserver {
    /// Snapshot `subject`'s current state and subscribe to it.
    pub fn attach(subject: &mut Subject) -> Rc<Self> {
        let observer = Rc::new(Self {
            state: Cell::new(subject.state()),
        });
        subject.subscribe(observer.clone());
        observer
    }

    pub fn state(&self) -> i32 {
        self.state.get()
    }
}

impl Observer for MirrorObserver {
    fn update(&self, subject: &Subject) {
        self.state.set(subject.state());
    }
}
