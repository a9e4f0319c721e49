use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use console::Term;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use showbranches_config::{ConfigLoader, LoggingConfig, ShowBranchesConfig};
use showbranches_core::{Result, ScanOptions, ShowBranchesError};

use crate::render::render_table;

/// Show the checked-out branch of every git repository under a directory
#[derive(Parser, Debug)]
#[command(name = "showbranches", version, about, long_about = None)]
pub struct Cli {
    /// Only display dirs that are on a different branch than the remote default
    #[arg(short = 'd', long = "diffs")]
    only_diffs: bool,

    /// Include dirs without remote repositories
    #[arg(short = 'l', long = "no-remotes")]
    include_no_remote: bool,

    /// Path to showbranches.toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Base directories to scan (default: SHOWBRANCHES_DEFAULT or ".")
    dirs: Vec<PathBuf>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        if let Some(shell) = self.completions {
            return Self::cmd_completions(shell);
        }

        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();

        init_tracing(&config.logging, self.log_level());
        if config_loader.from_file() {
            info!(config_path = ?config_loader.path(), "loaded configuration");
        } else {
            debug!(config_path = ?config_loader.path(), "config file not found, using defaults");
        }
        for w in config_loader.warnings() {
            warn!("{}", w);
        }

        let opts = self.scan_options(&config);
        let bases = self.bases(&config)?;
        Self::cmd_scan(&bases, opts)
    }

    /// Resolve log level: --verbose > --quiet > --log-level > config.
    pub fn log_level(&self) -> Option<&str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            self.log_level.as_deref()
        }
    }

    /// Flags can only switch filters on; the config supplies the rest.
    pub fn scan_options(&self, config: &ShowBranchesConfig) -> ScanOptions {
        ScanOptions {
            only_diffs: self.only_diffs || config.scan.only_diffs,
            include_no_remote: self.include_no_remote || config.scan.include_no_remote,
        }
    }

    /// Directories from the command line, else the configured bases.
    pub fn bases(&self, config: &ShowBranchesConfig) -> Result<Vec<PathBuf>> {
        if !self.dirs.is_empty() {
            return Ok(self.dirs.clone());
        }
        if config.scan.bases.is_empty() {
            return Err(ShowBranchesError::Config(
                "no base directories to scan; pass DIRS or set SHOWBRANCHES_DEFAULT".into(),
            ));
        }
        Ok(config.scan.bases.clone())
    }

    fn cmd_scan(bases: &[PathBuf], opts: ScanOptions) -> Result<()> {
        let term = Term::stdout();
        let styled = console::colors_enabled();
        for base in bases {
            let table = showbranches_scan::scan_base(base, opts)?;
            term.write_str(&render_table(&table, styled))
                .map_err(|e| ShowBranchesError::io("<stdout>", e))?;
        }
        Ok(())
    }

    fn cmd_completions(shell: Shell) -> Result<()> {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "showbranches", &mut std::io::stdout());
        Ok(())
    }
}

/// Initialise tracing on stderr so stdout carries only tables.
/// `RUST_LOG` wins over everything else.
fn init_tracing(logging: &LoggingConfig, level_override: Option<&str>) {
    let level = level_override.unwrap_or(&logging.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let result = if logging.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
    };
    // Already initialised (e.g. embedded in a host that set its own).
    if result.is_err() {
        debug!("tracing subscriber already installed");
    }
}
