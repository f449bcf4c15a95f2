use std::sync::{Mutex, PoisonError};

use anyhow::Result;

/// Process-wide registry: shared examples are registered once per process.
pub static SHARED_EXAMPLES: SharedExampleRegistry = SharedExampleRegistry::new();

/// Init-once guard around the process-wide shared example registration.
///
/// The flag is only set after a successful registration, so a failed attempt
/// is retried by the next caller.
#[derive(Debug, Default)]
pub struct SharedExampleRegistry {
    registered: Mutex<bool>,
}

impl SharedExampleRegistry {
    pub const fn new() -> Self {
        Self {
            registered: Mutex::new(false),
        }
    }

    pub fn is_registered(&self) -> bool {
        *self.registered.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `register` unless a previous call already succeeded.
    ///
    /// Returns `true` when this call performed the registration.
    pub fn ensure_registered<F>(&self, register: F) -> Result<bool>
    where
        F: FnOnce() -> Result<()>,
    {
        let mut registered = self.registered.lock().unwrap_or_else(PoisonError::into_inner);
        if *registered {
            return Ok(false);
        }
        register()?;
        *registered = true;
        tracing::debug!("shared examples registered");
        Ok(true)
    }
}
