//! # showbranches-scan
//!
//! Walks the immediate subdirectories of a base directory, opens each one
//! that is a git repository and reports its `origin` URL, the remote's
//! default branch and the checked-out branch.

pub mod repo;
pub mod scanner;

pub use scanner::scan_base;
