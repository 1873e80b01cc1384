//! Shared test-only helpers for panelkit_core.

use std::sync::{Mutex, OnceLock};

/// Process-wide lock serializing environment mutation across test threads.
pub(crate) fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Applies a batch of environment changes and restores prior values on drop.
///
/// Callers must hold [`env_lock`] for the lifetime of the overrides.
pub(crate) struct EnvOverrides {
    previous: Vec<(String, Option<String>)>,
}

impl EnvOverrides {
    #[allow(unused_unsafe)]
    pub(crate) fn set(pairs: &[(&str, &str)]) -> Self {
        let mut previous = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            previous.push((key.to_string(), std::env::var(key).ok()));
            // SAFETY: env mutation is serialized by `env_lock`.
            unsafe { std::env::set_var(key, value) };
        }
        Self { previous }
    }

    #[allow(unused_unsafe)]
    pub(crate) fn cleared(keys: &[&str]) -> Self {
        let mut previous = Vec::with_capacity(keys.len());
        for key in keys {
            previous.push((key.to_string(), std::env::var(key).ok()));
            // SAFETY: env mutation is serialized by `env_lock`.
            unsafe { std::env::remove_var(key) };
        }
        Self { previous }
    }
}

impl Drop for EnvOverrides {
    #[allow(unused_unsafe)]
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..).rev() {
            // SAFETY: env mutation is serialized by `env_lock`.
            unsafe {
                match value {
                    Some(value) => std::env::set_var(&key, value),
                    None => std::env::remove_var(&key),
                }
            }
        }
    }
}
