#[cfg(test)]
mod tests {
    use showbranches_core::*;

    fn row(main: &str, current: &str) -> BranchRow {
        BranchRow {
            directory: "proj".into(),
            repo: "git@example.com:proj.git".into(),
            main_branch: main.into(),
            current_branch: current.into(),
        }
    }

    // ── Row tests ──────────────────────────────────────────────

    #[test]
    fn test_row_cells_follow_header_order() {
        let r = row("main", "feature");
        assert_eq!(
            r.cells(),
            ["proj", "git@example.com:proj.git", "main", "feature"]
        );
        assert_eq!(HEADER.len(), r.cells().len());
    }

    #[test]
    fn test_row_off_main_ignores_case() {
        assert!(!row("main", "main").is_off_main());
        assert!(!row("Main", "MAIN").is_off_main());
        assert!(row("main", "develop").is_off_main());
        assert!(row(NO_REMOTE, NO_BRANCH).is_off_main());
    }

    #[test]
    fn test_scan_options_default_is_unfiltered() {
        let opts = ScanOptions::default();
        assert!(!opts.only_diffs);
        assert!(!opts.include_no_remote);
    }

    #[test]
    fn test_table_starts_empty() {
        let t = BranchTable::new("/src");
        assert!(t.is_empty());
        assert_eq!(t.base, std::path::PathBuf::from("/src"));
    }

    // ── Error tests ────────────────────────────────────────────

    #[test]
    fn test_io_error_display_names_path() {
        let err = ShowBranchesError::io(
            "/does/not/exist",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/does/not/exist"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_env_error_converts() {
        let err: ShowBranchesError = showbranches_env::EnvError::Missing {
            key: "API_KEY".into(),
        }
        .into();
        assert!(matches!(err, ShowBranchesError::Env(_)));
        assert!(err.to_string().contains("API_KEY"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ShowBranchesError::Config("bad format".into());
        assert_eq!(err.to_string(), "config error: bad format");
    }
}
