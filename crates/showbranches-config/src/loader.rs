use std::path::{Path, PathBuf};

use showbranches_core::{Result, ShowBranchesError};
use showbranches_env::{ReadEnv, Resolver, SystemEnv};

use crate::schema::{ConfigWarning, ShowBranchesConfig, split_bases};

/// Explicit config file location.
pub const ENV_CONFIG: &str = "SHOWBRANCHES_CONFIG";
/// Space-separated list of base directories.
pub const ENV_DEFAULT_BASES: &str = "SHOWBRANCHES_DEFAULT";
pub const ENV_ONLY_DIFFS: &str = "SHOWBRANCHES_ONLY_DIFFS";
pub const ENV_INCLUDE_NO_REMOTE: &str = "SHOWBRANCHES_INCLUDE_NO_REMOTE";
pub const ENV_LOG_LEVEL: &str = "SHOWBRANCHES_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "SHOWBRANCHES_LOG_FORMAT";

/// Loads the showbranches configuration.
#[derive(Debug)]
pub struct ConfigLoader {
    config: ShowBranchesConfig,
    config_path: PathBuf,
    from_file: bool,
    warnings: Vec<ConfigWarning>,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > SHOWBRANCHES_CONFIG env >
    /// <config dir>/showbranches/showbranches.toml
    pub fn resolve_path<E: ReadEnv>(explicit: Option<&Path>, env: &Resolver<E>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let (p, true) = env.string(ENV_CONFIG) {
            return PathBuf::from(p);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("showbranches")
            .join("showbranches.toml")
    }

    /// Load from disk and the process environment, falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, SystemEnv)
    }

    /// Load from disk and the given environment.
    pub fn load_with_env<E: ReadEnv>(path: Option<&Path>, env: E) -> Result<Self> {
        let env = Resolver::new(env);
        let config_path = Self::resolve_path(path, &env);
        let from_file = config_path.exists();
        let config = if from_file {
            let raw = std::fs::read_to_string(&config_path)
                .map_err(|e| ShowBranchesError::io(&config_path, e))?;
            toml::from_str::<ShowBranchesConfig>(&raw).map_err(|e| {
                ShowBranchesError::Config(format!(
                    "failed to parse {}: {}",
                    config_path.display(),
                    e
                ))
            })?
        } else {
            ShowBranchesConfig::default()
        };

        let config = Self::apply_env_overrides(config, &env);

        let warnings = config.validate().map_err(ShowBranchesError::Config)?;

        Ok(Self {
            config,
            config_path,
            from_file,
            warnings,
        })
    }

    /// Get a snapshot of the loaded config.
    pub fn get(&self) -> ShowBranchesConfig {
        self.config.clone()
    }

    /// Path the config was (or would have been) read from.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Whether a file existed at [`Self::path`]; `false` means defaults.
    pub fn from_file(&self) -> bool {
        self.from_file
    }

    /// Non-fatal validation findings, for logging once tracing is up.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Apply SHOWBRANCHES_* overrides. Malformed booleans leave the file
    /// value in place.
    fn apply_env_overrides<E: ReadEnv>(
        mut config: ShowBranchesConfig,
        env: &Resolver<E>,
    ) -> ShowBranchesConfig {
        if let (v, true) = env.string(ENV_DEFAULT_BASES) {
            config.scan.bases = split_bases(&v);
        }
        config.scan.only_diffs = env.bool_or(ENV_ONLY_DIFFS, config.scan.only_diffs);
        config.scan.include_no_remote =
            env.bool_or(ENV_INCLUDE_NO_REMOTE, config.scan.include_no_remote);
        config.logging.level = env.string_or(ENV_LOG_LEVEL, &config.logging.level);
        config.logging.format = env.string_or(ENV_LOG_FORMAT, &config.logging.format);
        config
    }
}
