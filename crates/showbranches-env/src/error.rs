use thiserror::Error;

/// Failures a lookup can surface. Only the require mode produces one; every
/// other mode absorbs absence and malformed values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("missing required environment variable value for {key}")]
    Missing { key: String },
}
