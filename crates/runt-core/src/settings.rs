//! Global library settings.
//!
//! [`Settings`] holds the **evaluation instant**, the timestamp that
//! "now" resolves to. It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`. When no override is set, "now" is the local wall
//! clock as reported by `chrono`.
//!
//! Thread safety: the override is stored behind a `Mutex` so that it can be
//! changed from any thread. Tests that pin the evaluation instant should do
//! so through [`ScopedEvaluationInstant`], which restores the previous value
//! on drop.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use chrono::NaiveDateTime;

/// Process-wide settings used by the runt-rs library.
pub struct Settings {
    evaluation_instant: Mutex<Option<NaiveDateTime>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_instant: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<NaiveDateTime>> {
        // The guarded value is a plain `Option`, so a poisoned lock still
        // holds a consistent state.
        self.evaluation_instant
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the evaluation-instant override, if one has been set.
    pub fn evaluation_instant(&self) -> Option<NaiveDateTime> {
        *self.slot()
    }

    /// Pin "now" to `instant`.
    pub fn set_evaluation_instant(&self, instant: NaiveDateTime) {
        *self.slot() = Some(instant);
    }

    /// Clear the override, resetting "now" to the wall clock.
    pub fn reset_evaluation_instant(&self) {
        *self.slot() = None;
    }

    /// The current timestamp: the override when set, the local wall clock
    /// otherwise.
    pub fn now(&self) -> NaiveDateTime {
        self.evaluation_instant()
            .unwrap_or_else(|| chrono::Local::now().naive_local())
    }
}

/// RAII guard that pins the evaluation instant and restores the previous
/// value when dropped.
#[must_use = "the override is reverted as soon as the guard is dropped"]
pub struct ScopedEvaluationInstant {
    previous: Option<NaiveDateTime>,
}

impl ScopedEvaluationInstant {
    /// Pin the evaluation instant to `instant` for the guard's lifetime.
    pub fn new(instant: NaiveDateTime) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_instant();
        settings.set_evaluation_instant(instant);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationInstant {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(instant) => settings.set_evaluation_instant(instant),
            None => settings.reset_evaluation_instant(),
        }
    }
}
