use std::path::Path;

use git2::{ErrorCode, Repository};

/// Remote whose URL and default branch are reported.
pub const ORIGIN: &str = "origin";

/// Symbolic ref pointing at the remote's default branch.
pub const ORIGIN_HEAD: &str = "refs/remotes/origin/HEAD";

/// Open `path` as a repository without searching parent directories.
/// `Ok(None)` when `path` is not a repository.
pub fn open(path: &Path) -> Result<Option<Repository>, git2::Error> {
    match Repository::open(path) {
        Ok(repo) => Ok(Some(repo)),
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// First URL of the `origin` remote.
pub fn origin_url(repo: &Repository) -> Result<Option<String>, git2::Error> {
    match repo.find_remote(ORIGIN) {
        Ok(remote) => Ok(remote.url().filter(|u| !u.is_empty()).map(str::to_string)),
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Branch name `refs/remotes/origin/HEAD` points at, e.g. `main`.
///
/// `Ok(None)` when the ref does not exist. A direct (non-symbolic) ref
/// yields an empty name.
pub fn remote_default_branch(repo: &Repository) -> Result<Option<String>, git2::Error> {
    match repo.find_reference(ORIGIN_HEAD) {
        Ok(reference) => {
            let target = reference
                .symbolic_target_bytes()
                .map(String::from_utf8_lossy)
                .unwrap_or_default();
            Ok(Some(last_segment(&target).to_string()))
        }
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Name of the checked-out branch, or `HEAD` when detached.
///
/// `Ok(None)` when HEAD points at a branch with no commits yet.
pub fn current_branch(repo: &Repository) -> Result<Option<String>, git2::Error> {
    match repo.head() {
        Ok(head) => {
            let name = String::from_utf8_lossy(head.name_bytes());
            Ok(Some(last_segment(&name).to_string()))
        }
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Text after the final `/`.
pub fn last_segment(s: &str) -> &str {
    s.rsplit('/').next().unwrap_or(s)
}
