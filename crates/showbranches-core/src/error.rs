use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for showbranches.
#[derive(Error, Debug)]
pub enum ShowBranchesError {
    // ── Filesystem errors ──────────────────────────────────────
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Repository errors ──────────────────────────────────────
    #[error("git error in {}: {source}", .path.display())]
    Git {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Env(#[from] showbranches_env::EnvError),
}

impl ShowBranchesError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn git(path: impl Into<PathBuf>, source: git2::Error) -> Self {
        Self::Git {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowBranchesError>;
