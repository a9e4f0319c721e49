use chrono::Duration;
use tracing::debug;

use crate::error::EnvError;
use crate::read_env::ReadEnv;
use crate::value::FromEnvValue;

/// Typed lookups over an environment.
///
/// Lookups never write to the environment and never fail: a value that is
/// unset and a value that does not parse are treated the same way. The
/// only exception is [`Resolver::require_string`] (and its panicking twin
/// [`Resolver::must_string`]), where absence means the caller cannot
/// proceed.
#[derive(Debug, Clone, Default)]
pub struct Resolver<E> {
    env: E,
}

impl<E: ReadEnv> Resolver<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// The parsed value, or `None` when unset or malformed.
    pub fn lookup<T: FromEnvValue>(&self, key: &str) -> Option<T> {
        let raw = self.env.var(key)?;
        let parsed = T::parse_env(&raw);
        if parsed.is_none() {
            debug!(key, value_type = T::TYPE_NAME, "ignoring malformed environment value");
        }
        parsed
    }

    /// The parsed value, or `default` when unset or malformed.
    pub fn get_or<T: FromEnvValue>(&self, key: &str, default: T) -> T {
        self.lookup(key).unwrap_or(default)
    }

    /// `(value, true)` when set and well-formed, else `(zero, false)`.
    pub fn get<T: FromEnvValue>(&self, key: &str) -> (T, bool) {
        match self.lookup(key) {
            Some(v) => (v, true),
            None => (T::zero(), false),
        }
    }

    // ── Strings ────────────────────────────────────────────────

    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.env.var(key).unwrap_or_else(|| default.to_string())
    }

    /// Plain existence check. A variable set to the empty string is present.
    pub fn string(&self, key: &str) -> (String, bool) {
        self.get(key)
    }

    pub fn require_string(&self, key: &str) -> Result<String, EnvError> {
        self.env.var(key).ok_or_else(|| EnvError::Missing {
            key: key.to_string(),
        })
    }

    /// # Panics
    ///
    /// When `key` is not set. The message names the key.
    #[track_caller]
    pub fn must_string(&self, key: &str) -> String {
        match self.require_string(key) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    // ── Booleans ───────────────────────────────────────────────

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get_or(key, default)
    }

    pub fn bool(&self, key: &str) -> (bool, bool) {
        self.get(key)
    }

    // ── Numbers ────────────────────────────────────────────────

    pub fn int_or(&self, key: &str, default: isize) -> isize {
        self.get_or(key, default)
    }

    pub fn int(&self, key: &str) -> (isize, bool) {
        self.get(key)
    }

    pub fn float32_or(&self, key: &str, default: f32) -> f32 {
        self.get_or(key, default)
    }

    pub fn float32(&self, key: &str) -> (f32, bool) {
        self.get(key)
    }

    pub fn float64_or(&self, key: &str, default: f64) -> f64 {
        self.get_or(key, default)
    }

    pub fn float64(&self, key: &str) -> (f64, bool) {
        self.get(key)
    }

    // ── Durations ──────────────────────────────────────────────

    pub fn duration_or(&self, key: &str, default: Duration) -> Duration {
        self.get_or(key, default)
    }

    pub fn duration(&self, key: &str) -> (Duration, bool) {
        self.get(key)
    }
}
