use std::env;

use tracing::debug;

/// Read-only access to an environment, one key at a time.
///
/// Does **not** require `Send + Sync`; add the bounds at the call site when
/// a resolver has to cross threads.
pub trait ReadEnv {
    /// The value stored under `key`, or `None` when it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(v) => Some(v),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                debug!(key, "environment variable is not valid unicode, treating as unset");
                None
            }
        }
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
