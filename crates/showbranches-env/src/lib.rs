//! # showbranches-env
//!
//! Typed environment variable lookups. Every supported type has two access
//! modes: `*_or(key, default)` returns the parsed value or the default, and
//! `*(key)` returns `(value, found)`. A value that is set but cannot be parsed
//! is indistinguishable from an unset one in both modes.
//!
//! `require_string` / `must_string` are the only lookups where absence is not
//! absorbed.
//!
//! ```
//! use showbranches_env::{InMemoryEnv, Resolver};
//!
//! let env = InMemoryEnv::new();
//! env.set("PORT", "9090");
//! let resolver = Resolver::new(env);
//! assert_eq!(resolver.int_or("PORT", 8080), 9090);
//! assert_eq!(resolver.int_or("MISSING", 8080), 8080);
//! ```

pub mod duration;
pub mod error;
pub mod in_memory;
pub mod read_env;
pub mod resolver;
pub mod value;

pub use error::EnvError;
pub use in_memory::InMemoryEnv;
pub use read_env::{ReadEnv, SystemEnv};
pub use resolver::Resolver;
pub use value::FromEnvValue;

use chrono::Duration;

fn system() -> Resolver<SystemEnv> {
    Resolver::new(SystemEnv)
}

// ── Process environment shortcuts ──────────────────────────────

/// The variable's value, or `default` when it is not set.
pub fn string_or(key: &str, default: &str) -> String {
    system().string_or(key, default)
}

/// The variable's value and whether it was set at all.
pub fn string(key: &str) -> (String, bool) {
    system().string(key)
}

/// The variable's value, or [`EnvError::Missing`] when it is not set.
pub fn require_string(key: &str) -> Result<String, EnvError> {
    system().require_string(key)
}

/// The variable's value; panics when it is not set.
///
/// Only for values the process cannot run without and that have no sane
/// default, e.g. credentials or required endpoints.
#[track_caller]
pub fn must_string(key: &str) -> String {
    system().must_string(key)
}

pub fn bool_or(key: &str, default: bool) -> bool {
    system().bool_or(key, default)
}

pub fn bool(key: &str) -> (bool, bool) {
    system().bool(key)
}

pub fn int_or(key: &str, default: isize) -> isize {
    system().int_or(key, default)
}

pub fn int(key: &str) -> (isize, bool) {
    system().int(key)
}

pub fn float32_or(key: &str, default: f32) -> f32 {
    system().float32_or(key, default)
}

pub fn float32(key: &str) -> (f32, bool) {
    system().float32(key)
}

pub fn float64_or(key: &str, default: f64) -> f64 {
    system().float64_or(key, default)
}

pub fn float64(key: &str) -> (f64, bool) {
    system().float64(key)
}

/// See [`duration::parse`] for the accepted format.
pub fn duration_or(key: &str, default: Duration) -> Duration {
    system().duration_or(key, default)
}

pub fn duration(key: &str) -> (Duration, bool) {
    system().duration(key)
}
