//! Steward configuration.
//!
//! All four filesystem paths and the agent executable name live in one
//! explicit struct — nothing is derived from the binary's own location.
//! Configuration is read from an optional `docsteward.yaml` in the invocation
//! directory; a partial file is fine, every field has a default.
//!
//! # API pattern
//!
//! - `load_at(dir: &Path)` — explicit directory; used in tests with `TempDir`
//! - `load()` — resolves against the current directory, delegates to `_at`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the optional per-directory configuration file.
pub const CONFIG_FILE: &str = "docsteward.yaml";

/// Runtime configuration for sync and stewardship runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StewardConfig {
    /// Checkout of the upstream repository the docs are mirrored from.
    pub upstream_root: PathBuf,
    /// Directory the transformed documentation files are written into.
    pub docs_root: PathBuf,
    /// Where the sync report is persisted (overwritten each run).
    pub sync_report_path: PathBuf,
    /// Where the steward report is persisted (overwritten each run).
    pub steward_report_path: PathBuf,
    /// Executable name of the external AI CLI.
    pub agent_command: String,
}

impl Default for StewardConfig {
    fn default() -> Self {
        Self {
            upstream_root: PathBuf::from("../upstream"),
            docs_root: PathBuf::from("docs-upstream"),
            sync_report_path: PathBuf::from("sync-report.md"),
            steward_report_path: PathBuf::from("steward-report.md"),
            agent_command: "claude".to_string(),
        }
    }
}

impl StewardConfig {
    /// Load configuration from `<dir>/docsteward.yaml`.
    ///
    /// Returns defaults when the file does not exist. A present-but-malformed
    /// file is a run-level error.
    pub fn load_at(dir: &Path) -> Result<StewardConfig, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(StewardConfig::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse { path, source: e })
    }

    /// `load_at` convenience wrapper resolving against the current directory.
    pub fn load() -> Result<StewardConfig, ConfigError> {
        let cwd = std::env::current_dir()?;
        Self::load_at(&cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_file_missing() {
        let dir = TempDir::new().unwrap();
        let config = StewardConfig::load_at(dir.path()).unwrap();
        assert_eq!(config, StewardConfig::default());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "upstream_root: /srv/upstream\nagent_command: fake-agent\n",
        )
        .unwrap();

        let config = StewardConfig::load_at(dir.path()).unwrap();
        assert_eq!(config.upstream_root, PathBuf::from("/srv/upstream"));
        assert_eq!(config.agent_command, "fake-agent");
        assert_eq!(config.docs_root, PathBuf::from("docs-upstream"));
        assert_eq!(config.sync_report_path, PathBuf::from("sync-report.md"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "upstream_root: [oops\n").unwrap();

        let err = StewardConfig::load_at(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn full_roundtrip() {
        let dir = TempDir::new().unwrap();
        let config = StewardConfig {
            upstream_root: PathBuf::from("/a"),
            docs_root: PathBuf::from("/b"),
            sync_report_path: PathBuf::from("/c.md"),
            steward_report_path: PathBuf::from("/d.md"),
            agent_command: "agent".to_string(),
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), yaml).unwrap();

        let loaded = StewardConfig::load_at(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
