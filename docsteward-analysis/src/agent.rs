//! Blocking invocation of the external AI CLI.
//!
//! The tool is opaque: it takes `--print` for non-interactive output, an
//! optional `--append-system-prompt <text>`, and a free-text prompt as the
//! final argument, then emits UTF-8 on stdout. A 10 MiB ceiling on captured
//! output is enforced here. There is no timeout — a hung agent hangs the run.

use std::path::Path;
use std::process::Command;

use crate::error::AgentError;

/// Ceiling on captured agent stdout.
pub const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// One request to the external AI CLI.
#[derive(Debug, Clone)]
pub struct AgentRequest<'a> {
    pub prompt: &'a str,
    pub system_prompt: Option<&'a str>,
    pub working_dir: &'a Path,
}

/// Invoke the agent and return its trimmed stdout.
///
/// Empty output is an error in its own right — a silent agent is
/// indistinguishable from a broken one.
pub fn invoke(command: &str, request: &AgentRequest<'_>) -> Result<String, AgentError> {
    let mut cmd = Command::new(command);
    cmd.arg("--print");
    if let Some(system_prompt) = request.system_prompt {
        cmd.arg("--append-system-prompt").arg(system_prompt);
    }
    cmd.arg(request.prompt).current_dir(request.working_dir);

    let output = cmd.output().map_err(|e| AgentError::Spawn {
        command: command.to_string(),
        source: e,
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(AgentError::Failed {
            status: output.status.to_string(),
            stderr,
        });
    }

    if output.stdout.len() > MAX_OUTPUT_BYTES {
        return Err(AgentError::OutputTooLarge {
            limit: MAX_OUTPUT_BYTES,
        });
    }

    let content = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if content.is_empty() {
        return Err(AgentError::EmptyResponse);
    }

    Ok(content)
}
