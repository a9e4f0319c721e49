//! # showbranches-config
//!
//! Configuration for showbranches. Reads `showbranches.toml` when present,
//! then applies `SHOWBRANCHES_*` environment overrides through the typed
//! resolver. CLI flags are layered on top by the caller.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{ConfigWarning, LoggingConfig, ScanConfig, ShowBranchesConfig, WarningSeverity};
