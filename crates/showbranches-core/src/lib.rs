//! # showbranches-core
//!
//! Error type and the row/option types shared by the scanner, the config
//! layer and the CLI.

pub mod error;
pub mod types;

pub use error::{Result, ShowBranchesError};
pub use types::*;
