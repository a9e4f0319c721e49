use std::fs;
use std::path::Path;

use tracing::debug;

use showbranches_core::{
    BranchRow, BranchTable, NO_BRANCH, NO_REMOTE, Result, ScanOptions, ShowBranchesError,
};

use crate::repo;

/// Scan the immediate subdirectories of `base`, in name order.
///
/// Subdirectories that are not git repositories are skipped, as are plain
/// files and symlinks. Any other failure to read the directory or a
/// repository aborts the scan.
pub fn scan_base(base: &Path, opts: ScanOptions) -> Result<BranchTable> {
    let mut entries = fs::read_dir(base)
        .and_then(|dir| dir.collect::<std::io::Result<Vec<_>>>())
        .map_err(|e| ShowBranchesError::io(base, e))?;
    entries.sort_by_key(|e| e.file_name());

    let mut table = BranchTable::new(base);
    for entry in entries {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| ShowBranchesError::io(&path, e))?;
        if !file_type.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let Some(row) = read_row(base, &name, &path, opts)? else {
            continue;
        };
        if opts.only_diffs && !row.is_off_main() {
            debug!(directory = %row.directory, "on the remote default branch, hiding");
            continue;
        }
        table.rows.push(row);
    }

    debug!(base = %base.display(), rows = table.rows.len(), "scanned base directory");
    Ok(table)
}

fn read_row(base: &Path, name: &str, path: &Path, opts: ScanOptions) -> Result<Option<BranchRow>> {
    let git_err = |e: git2::Error| ShowBranchesError::git(path, e);

    let Some(repository) = repo::open(path).map_err(git_err)? else {
        debug!(path = %path.display(), "not a git repository, skipping");
        return Ok(None);
    };

    let directory = if name == ".git" {
        containing_dir_name(base)?
    } else {
        name.to_string()
    };

    let repo_url = match repo::origin_url(&repository).map_err(git_err)? {
        Some(url) => url,
        None if opts.include_no_remote => NO_REMOTE.to_string(),
        None => {
            debug!(%directory, "no origin remote, skipping");
            return Ok(None);
        }
    };

    let main_branch = match repo::remote_default_branch(&repository).map_err(git_err)? {
        Some(branch) => branch,
        None if opts.include_no_remote => NO_REMOTE.to_string(),
        None => {
            debug!(%directory, "origin has no default branch ref, skipping");
            return Ok(None);
        }
    };

    let current_branch = repo::current_branch(&repository)
        .map_err(git_err)?
        .unwrap_or_else(|| NO_BRANCH.to_string());

    Ok(Some(BranchRow {
        directory,
        repo: repo_url,
        main_branch,
        current_branch,
    }))
}

/// A repository found as `<base>/.git` belongs to `base` itself, so it is
/// listed under the name of `base`.
fn containing_dir_name(base: &Path) -> Result<String> {
    let absolute = fs::canonicalize(base).map_err(|e| ShowBranchesError::io(base, e))?;
    Ok(absolute
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| absolute.display().to_string()))
}
