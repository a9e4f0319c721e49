//! # showbranches-cli
//!
//! Command-line interface for showbranches.
//!
//! ```text
//! showbranches [-d] [-l] [DIRS...]
//! ```
//!
//! For every directory given (or every configured base when none are),
//! prints a table of the git repositories directly inside it with their
//! `origin` URL, the remote's default branch and the checked-out branch.

pub mod commands;
pub mod render;

pub use commands::Cli;
