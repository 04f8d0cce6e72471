//! Best-effort version-control metadata reader.
//!
//! Two read-only `git rev-parse` queries against the upstream checkout. Never
//! fails the run: any spawn failure, non-zero exit, or empty output degrades
//! to the `unknown` sentinels.

use std::path::Path;
use std::process::Command;

use docsteward_core::types::RepoMetadata;

/// Read the current commit hash (short, 7 characters) and branch name.
pub fn read(dir: &Path) -> RepoMetadata {
    let hash = git_output(dir, &["rev-parse", "HEAD"]);
    let branch = git_output(dir, &["rev-parse", "--abbrev-ref", "HEAD"]);

    match (hash, branch) {
        (Some(hash), Some(branch)) => RepoMetadata {
            hash: hash.chars().take(7).collect(),
            branch,
        },
        _ => {
            tracing::debug!("no readable git state in {}", dir.display());
            RepoMetadata::unknown()
        }
    }
}

fn git_output(dir: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use docsteward_core::types::UNKNOWN;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn non_repository_yields_unknown_sentinels() {
        let dir = TempDir::new().unwrap();
        let meta = read(dir.path());
        assert_eq!(meta.hash, UNKNOWN);
        assert_eq!(meta.branch, UNKNOWN);
    }

    #[test]
    fn missing_directory_yields_unknown_sentinels() {
        let meta = read(Path::new("/nonexistent/docsteward-test-dir"));
        assert_eq!(meta, RepoMetadata::unknown());
    }
}
