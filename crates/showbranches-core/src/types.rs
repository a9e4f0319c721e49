use std::path::PathBuf;

/// Column titles, in display order.
pub const HEADER: [&str; 4] = ["Directory", "Repo", "Main Branch", "Current Branch"];

/// Placeholder for a missing `origin` remote or remote default branch.
pub const NO_REMOTE: &str = "<no remote>";

/// Placeholder for a repository whose HEAD points nowhere yet.
pub const NO_BRANCH: &str = "<no branch>";

/// Filters applied while scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Keep only repositories whose current branch differs from the
    /// remote's default branch.
    pub only_diffs: bool,
    /// Keep repositories without an `origin` remote (or without a known
    /// remote default branch), showing [`NO_REMOTE`] in their place.
    pub include_no_remote: bool,
}

/// One scanned repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRow {
    pub directory: String,
    pub repo: String,
    pub main_branch: String,
    pub current_branch: String,
}

impl BranchRow {
    pub fn cells(&self) -> [&str; 4] {
        [
            self.directory.as_str(),
            self.repo.as_str(),
            self.main_branch.as_str(),
            self.current_branch.as_str(),
        ]
    }

    /// Whether the current branch differs from the remote default branch,
    /// ignoring case.
    pub fn is_off_main(&self) -> bool {
        self.main_branch.to_lowercase() != self.current_branch.to_lowercase()
    }
}

/// All rows found directly under one base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTable {
    pub base: PathBuf,
    pub rows: Vec<BranchRow>,
}

impl BranchTable {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
