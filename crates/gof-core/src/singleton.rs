//! Singleton: one instance per process, reachable from anywhere.
//!
//! Two flavours:
//!
//! - [`SimpleSingleton`] leans entirely on [`LazyLock`], which creates the
//!   value on first access.
//! - [`ThreadSafeSingleton`] spells out double-checked locking: a lock-free
//!   read on the fast path, and only when nothing is published yet, a mutex
//!   followed by a second check. Publication goes through [`OnceLock`], so the
//!   memory-ordering half of the idiom is handled by std.
//!
//! Each type counts its constructions so tests can prove there was exactly one.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{LazyLock, Mutex, OnceLock, PoisonError};

use tracing::{debug, trace};
use uuid::Uuid;

// ── SimpleSingleton ──────────────────────────────────────────────────────────

static SIMPLE_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

static SIMPLE: LazyLock<SimpleSingleton> = LazyLock::new(SimpleSingleton::new);

#[derive(Debug)]
pub struct SimpleSingleton {
    id: Uuid,
}

impl SimpleSingleton {
    fn new() -> Self {
        SIMPLE_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        let id = Uuid::new_v4();
        debug!(%id, "SimpleSingleton constructed");
        Self { id }
    }

    pub fn instance() -> &'static SimpleSingleton {
        &SIMPLE
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// How many times the constructor has run in this process.
    pub fn constructions() -> usize {
        SIMPLE_CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

// ── ThreadSafeSingleton ──────────────────────────────────────────────────────

static THREAD_SAFE_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

static THREAD_SAFE: OnceLock<ThreadSafeSingleton> = OnceLock::new();

static THREAD_SAFE_INIT: Mutex<()> = Mutex::new(());

#[derive(Debug)]
pub struct ThreadSafeSingleton {
    id: Uuid,
}

impl ThreadSafeSingleton {
    fn new() -> Self {
        THREAD_SAFE_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        let id = Uuid::new_v4();
        debug!(%id, "ThreadSafeSingleton constructed");
        Self { id }
    }

    pub fn instance() -> &'static ThreadSafeSingleton {
        // First check, no lock.
        if let Some(instance) = THREAD_SAFE.get() {
            return instance;
        }

        trace!("ThreadSafeSingleton slow path");
        // The guarded section only constructs, it cannot leave the cell
        // half-written, so a poisoned lock is still usable.
        let _guard = THREAD_SAFE_INIT
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Second check, under the lock.
        THREAD_SAFE.get_or_init(ThreadSafeSingleton::new)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// How many times the constructor has run in this process.
    pub fn constructions() -> usize {
        THREAD_SAFE_CONSTRUCTIONS.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_singleton_is_shared() {
        let a = SimpleSingleton::instance();
        let b = SimpleSingleton::instance();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.id(), b.id());
        assert_eq!(SimpleSingleton::constructions(), 1);
    }

    #[test]
    fn thread_safe_singleton_is_shared() {
        let a = ThreadSafeSingleton::instance();
        let b = ThreadSafeSingleton::instance();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn flavours_are_distinct_singletons() {
        assert_ne!(
            SimpleSingleton::instance().id(),
            ThreadSafeSingleton::instance().id()
        );
    }
}
