use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use showbranches_core::ScanOptions;

/// Root configuration, mapped from `showbranches.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowBranchesConfig {
    pub scan: ScanConfig,
    pub logging: LoggingConfig,
}

// ── Scan ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directories whose subdirectories are scanned when none are given
    /// on the command line.
    pub bases: Vec<PathBuf>,
    /// Only list repositories that are off the remote's default branch.
    pub only_diffs: bool,
    /// Also list repositories without an `origin` remote.
    pub include_no_remote: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            bases: vec![PathBuf::from(".")],
            only_diffs: false,
            include_no_remote: false,
        }
    }
}

impl ScanConfig {
    pub fn options(&self) -> ScanOptions {
        ScanOptions {
            only_diffs: self.only_diffs,
            include_no_remote: self.include_no_remote,
        }
    }
}

/// Split a space-separated base list, dropping empty segments.
pub fn split_bases(raw: &str) -> Vec<PathBuf> {
    raw.split(' ')
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty" or "json".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

/// A single config validation issue.
#[derive(Debug)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let icon = match self.severity {
            WarningSeverity::Error => "❌",
            WarningSeverity::Warning => "⚠️ ",
        };
        write!(f, "{} {}: {}", icon, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

pub const VALID_FORMATS: [&str; 2] = ["pretty", "json"];
pub const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl ShowBranchesConfig {
    /// Validate the config and return the non-fatal warnings.
    /// Returns `Err` with all messages joined if any severity is Error.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut warnings = Vec::new();

        // ── Logging format ───
        if !VALID_FORMATS.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}'", self.logging.format),
                severity: WarningSeverity::Error,
                hint: Some(format!("Valid values: {}", VALID_FORMATS.join(", "))),
            });
        }

        // ── Logging level ───
        if !VALID_LEVELS.contains(&self.logging.level.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", VALID_LEVELS.join(", "))),
            });
        }

        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .map(|w| format!("{}: {}", w.field, w.message))
            .collect();

        if !errors.is_empty() {
            return Err(format!("Configuration errors:\n  • {}", errors.join("\n  • ")));
        }

        Ok(warnings)
    }
}
