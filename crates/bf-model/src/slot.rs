//! Guarded one-time engine-handle materialization.

use std::sync::{Mutex, OnceLock, PoisonError};

use bf_core::Result;

/// Two-phase slot: "defined" until the first engine call, "materialized"
/// after it.
///
/// Reads go through the lock-free `OnceLock`; initialization is serialized
/// by the mutex, so a racing ensure-engine never constructs the handle
/// twice. A failed initializer leaves the slot empty, so a later call can
/// retry.
pub(crate) struct EngineSlot<T> {
    cell: OnceLock<T>,
    init: Mutex<()>,
}

impl<T> EngineSlot<T> {
    pub fn new() -> Self {
        Self { cell: OnceLock::new(), init: Mutex::new(()) }
    }

    /// Get the materialized value, running `f` at most once across threads.
    pub fn get_or_try_init<F>(&self, f: F) -> Result<&T>
    where
        F: FnOnce() -> Result<T>,
    {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }
        let value = f()?;
        Ok(self.cell.get_or_init(|| value))
    }

    /// Whether the slot has been materialized.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}
