//! The fixed stewardship task set.
//!
//! Tasks are plain data with a uniform shape; only the runner executes them.
//! Order matters: drift detection re-syncs the mirror before prompting, so it
//! must run after the quality pass has seen the upstream state.

use std::path::Path;

use docsteward_core::StewardConfig;

/// Which configured directory the agent is launched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkDir {
    /// The upstream repository checkout.
    Upstream,
    /// The mirrored documentation tree.
    Docs,
}

impl WorkDir {
    pub fn resolve<'a>(&self, config: &'a StewardConfig) -> &'a Path {
        match self {
            WorkDir::Upstream => &config.upstream_root,
            WorkDir::Docs => &config.docs_root,
        }
    }
}

/// One named analysis request issued to the external AI CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTask {
    pub name: &'static str,
    pub prompt: &'static str,
    pub system_prompt: Option<&'static str>,
    pub work_dir: WorkDir,
    /// Re-run the file sync (as a child process) before prompting.
    pub sync_first: bool,
}

/// The five stewardship tasks, in execution order.
pub fn stewardship_tasks() -> Vec<AnalysisTask> {
    vec![
        AnalysisTask {
            name: "source-changes",
            prompt: "Analyze the current state of this repository's documentation:\n\
                1. Check version-control status for uncommitted documentation changes\n\
                2. Review recent commits that might affect documentation\n\
                3. Identify documentation files that need updates\n\
                4. Look for new features that lack documentation\n\
                5. Check for broken internal links or outdated information\n\
                \n\
                Focus specifically on README completeness, the docs/ directory\n\
                structure and content, missing setup instructions, outdated\n\
                configuration examples, and undocumented features.\n\
                \n\
                Provide specific, actionable recommendations.",
            system_prompt: Some(
                "You are a documentation quality expert. Be specific and actionable in your analysis.",
            ),
            work_dir: WorkDir::Upstream,
            sync_first: false,
        },
        AnalysisTask {
            name: "quality-analysis",
            prompt: "Perform a comprehensive documentation quality audit:\n\
                \n\
                1. Content: outdated information, missing prerequisites,\n\
                   example accuracy, completeness of setup guides.\n\
                2. Structure: information hierarchy, logical flow, gaps in the\n\
                   user journey, navigation clarity.\n\
                3. Technical accuracy: command examples, environment variable\n\
                   references, container configurations, API documentation.\n\
                4. User experience: beginner-friendliness, troubleshooting\n\
                   coverage, clarity of examples, error-handling guidance.\n\
                \n\
                Provide recommendations with priority levels (High/Medium/Low).",
            system_prompt: Some(
                "You are an expert technical writer focused on developer experience. Provide detailed, actionable feedback.",
            ),
            work_dir: WorkDir::Upstream,
            sync_first: false,
        },
        AnalysisTask {
            name: "drift-detection",
            prompt: "Compare the upstream documentation with the synchronized mirror:\n\
                \n\
                1. Check for files that failed to sync\n\
                2. Identify content differences or formatting issues\n\
                3. Look for links broken by synchronization\n\
                4. Verify that new upstream documentation is being captured\n\
                5. Check the sync mappings for completeness and accuracy\n\
                \n\
                Also suggest sync-process improvements: missing file mappings,\n\
                better organization, enhanced content processing, automated\n\
                quality checks. Focus on complete and accurate coverage of the\n\
                synchronized content.",
            system_prompt: Some(
                "You are a documentation synchronization expert. Focus on completeness and accuracy.",
            ),
            work_dir: WorkDir::Docs,
            sync_first: true,
        },
        AnalysisTask {
            name: "improvement-suggestions",
            prompt: "Based on the current documentation state, generate specific\n\
                improvement suggestions:\n\
                \n\
                1. Content: missing sections, areas needing more detail,\n\
                   examples to improve, unanswered common questions.\n\
                2. Structure: organization proposals, navigation enhancements,\n\
                   cross-referencing opportunities, search optimization.\n\
                3. Automation: processes to automate, quality checks and\n\
                   validation scripts to add, monitoring improvements.\n\
                4. User experience: onboarding flow, interactive elements,\n\
                   visual aids, quick-start optimizations.\n\
                \n\
                Prioritize by impact and implementation effort.",
            system_prompt: Some(
                "You are a product manager focused on developer documentation experience. Think strategically about improvements.",
            ),
            work_dir: WorkDir::Upstream,
            sync_first: false,
        },
        AnalysisTask {
            name: "automatic-fixes",
            prompt: "Identify and implement safe, automatic fixes for documentation\n\
                issues:\n\
                \n\
                1. Safe automated fixes: obvious typos and formatting issues,\n\
                   stale date references, code-block formatting, broken\n\
                   internal links, version references.\n\
                2. Content validation: command syntax, environment variable\n\
                   consistency, image references, URL accessibility.\n\
                3. Quality improvements: better code examples, missing\n\
                   error-handling examples, prerequisite clarity, consistent\n\
                   terminology.\n\
                \n\
                Only make changes that are clearly beneficial and low-risk.\n\
                Document every change made for review.",
            system_prompt: Some(
                "You are a careful documentation maintainer. Only make safe, obvious improvements that clearly add value.",
            ),
            work_dir: WorkDir::Upstream,
            sync_first: false,
        },
    ]
}

/// Look up a single task for the per-verb CLI entry points.
pub fn task_by_name(name: &str) -> Option<AnalysisTask> {
    stewardship_tasks().into_iter().find(|t| t.name == name)
}
