//! The documentation mapping table.
//!
//! Hand-authored association of upstream file paths to their location in the
//! documentation site. Insertion order defines processing order. A [`Skip`]
//! target marks a file that is intentionally excluded from the mirror and
//! must short-circuit before any I/O.
//!
//! [`Skip`]: MappingTarget::Skip

use std::path::PathBuf;

/// Destination of a mapping entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingTarget {
    /// Mirror the file to this path under the docs root.
    Path(PathBuf),
    /// Intentionally excluded from the mirror.
    Skip,
}

/// One upstream-path → docs-path association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// Path relative to the upstream root.
    pub source: PathBuf,
    pub target: MappingTarget,
}

fn map(source: &str, target: &str) -> MappingEntry {
    MappingEntry {
        source: PathBuf::from(source),
        target: MappingTarget::Path(PathBuf::from(target)),
    }
}

fn skip(source: &str) -> MappingEntry {
    MappingEntry {
        source: PathBuf::from(source),
        target: MappingTarget::Skip,
    }
}

/// The static mapping table, in processing order.
pub fn default_mappings() -> Vec<MappingEntry> {
    vec![
        // Top-level documentation files.
        map("README.md", "overview.md"),
        skip("AGENTS.md"), // internal agent guidance, not site material
        // Setup and getting started.
        map(
            "docs/complete-workflow.md",
            "getting-started/complete-workflow.md",
        ),
        map(
            "docs/container-setup.md",
            "getting-started/container-setup.md",
        ),
        map(
            "docs/setup-container-guide.md",
            "getting-started/setup-container-guide.md",
        ),
        map(
            "docs/authentication-guide.md",
            "configuration/authentication.md",
        ),
        // Cloud configuration.
        map(
            "docs/aws-authentication-best-practices.md",
            "configuration/aws-authentication.md",
        ),
        map(
            "docs/aws-profile-setup.md",
            "configuration/aws-profile-setup.md",
        ),
        map(
            "docs/aws-profile-quickstart.md",
            "configuration/aws-quickstart.md",
        ),
        // Environment and containers.
        map(
            "docs/docker-optimization.md",
            "configuration/docker-optimization.md",
        ),
        map(
            "docs/container-limitations.md",
            "configuration/container-limitations.md",
        ),
        // Features and workflows.
        map("docs/github-workflow.md", "features/github-integration.md"),
        map("docs/pr-review-workflow.md", "features/pr-reviews.md"),
        map("docs/workflow.md", "features/workflows.md"),
        // Troubleshooting and maintenance.
        map(
            "docs/logging-security.md",
            "troubleshooting/logging-security.md",
        ),
        map(
            "docs/credential-security.md",
            "troubleshooting/credential-security.md",
        ),
        map(
            "docs/container-pooling-lessons.md",
            "troubleshooting/container-pooling.md",
        ),
        // Scripts and automation.
        map("docs/SCRIPTS.md", "configuration/scripts-reference.md"),
        map("docs/ci-cd-setup.md", "configuration/ci-cd-setup.md"),
        map(
            "docs/pre-commit-setup.md",
            "configuration/pre-commit-setup.md",
        ),
    ]
}
