#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::process::{Command, Output};

    use git2::{Repository, RepositoryInitOptions, Signature};

    fn showbranches(config_dir: &Path, args: &[&str]) -> Output {
        command(config_dir).args(args).output().unwrap()
    }

    /// The binary with a clean SHOWBRANCHES_* environment and no config file.
    fn command(config_dir: &Path) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_showbranches"));
        cmd.env("SHOWBRANCHES_CONFIG", config_dir.join("absent.toml"))
            .env_remove("SHOWBRANCHES_DEFAULT")
            .env_remove("SHOWBRANCHES_ONLY_DIFFS")
            .env_remove("SHOWBRANCHES_INCLUDE_NO_REMOTE")
            .env_remove("SHOWBRANCHES_LOG_LEVEL")
            .env_remove("SHOWBRANCHES_LOG_FORMAT")
            .env_remove("RUST_LOG");
        cmd
    }

    fn tracked_repo(dir: &Path) {
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("main");
        let repo = Repository::init_opts(dir, &opts).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
        repo.remote("origin", "https://example.com/app.git").unwrap();
        repo.reference_symbolic(
            "refs/remotes/origin/HEAD",
            "refs/remotes/origin/main",
            true,
            "test fixture",
        )
        .unwrap();
    }

    #[test]
    fn test_prints_one_table_per_base() {
        let cfg = tempfile::tempdir().unwrap();
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        tracked_repo(&a.path().join("app"));

        let out = showbranches(
            cfg.path(),
            &[a.path().to_str().unwrap(), b.path().to_str().unwrap()],
        );
        assert!(out.status.success());
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert_eq!(stdout.matches("Current Branch").count(), 2);
        assert!(stdout.contains("https://example.com/app.git"));
        assert!(stdout.contains("│ app "));
    }

    #[test]
    fn test_only_diffs_with_nothing_to_show_still_succeeds() {
        let cfg = tempfile::tempdir().unwrap();
        let base = tempfile::tempdir().unwrap();
        tracked_repo(&base.path().join("app"));

        let out = showbranches(cfg.path(), &["-d", base.path().to_str().unwrap()]);
        assert!(out.status.success());
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains("Directory"));
        assert!(!stdout.contains("app.git"));
    }

    #[test]
    fn test_default_bases_come_from_environment() {
        let cfg = tempfile::tempdir().unwrap();
        let base = tempfile::tempdir().unwrap();
        tracked_repo(&base.path().join("app"));

        let out = command(cfg.path())
            .env("SHOWBRANCHES_DEFAULT", base.path())
            .output()
            .unwrap();
        assert!(out.status.success());
        assert!(String::from_utf8_lossy(&out.stdout).contains("app.git"));
    }

    // ── Logging ────────────────────────────────────────────────

    #[test]
    fn test_verbose_logs_config_load_on_stderr() {
        let cfg = tempfile::tempdir().unwrap();
        let base = tempfile::tempdir().unwrap();
        let config_path = cfg.path().join("showbranches.toml");
        std::fs::write(&config_path, "[scan]\ninclude_no_remote = true\n").unwrap();

        let out = command(cfg.path())
            .env("SHOWBRANCHES_CONFIG", &config_path)
            .args(["-v", base.path().to_str().unwrap()])
            .output()
            .unwrap();
        assert!(out.status.success());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("loaded configuration"), "stderr was: {stderr}");
        assert!(!String::from_utf8_lossy(&out.stdout).contains("loaded configuration"));
    }

    #[test]
    fn test_verbose_logs_missing_config_on_stderr() {
        let cfg = tempfile::tempdir().unwrap();
        let base = tempfile::tempdir().unwrap();

        let out = showbranches(cfg.path(), &["-v", base.path().to_str().unwrap()]);
        assert!(out.status.success());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("config file not found"), "stderr was: {stderr}");
    }

    #[test]
    fn test_missing_base_exits_nonzero() {
        let cfg = tempfile::tempdir().unwrap();
        let missing = cfg.path().join("does-not-exist");

        let out = showbranches(cfg.path(), &[missing.to_str().unwrap()]);
        assert_eq!(out.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("Error"));
        assert!(stderr.contains("does-not-exist"));
    }
}
