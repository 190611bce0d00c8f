//! Shell execution and executable lookup
//!
//! Commands run through the platform shell and block until the subprocess
//! exits; there is no timeout and no input sanitization here, both are the
//! caller's responsibility.

use std::process::{Command, Output};

use log::error;

/// Typed failures from [`try_run_shell`]
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("failed to run `{cmd}`: {source}")]
    Spawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{cmd}` exited with {status}: {stderr}")]
    Exit {
        cmd: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Classified command output, replacing stringly truth checks at call sites
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputValue {
    /// Empty or literal "null" output
    Absent,
    Bool(bool),
    Text(String),
}

/// Run a shell command and return its trimmed combined output.
///
/// The exit status is ignored: a failing command's output still comes back.
/// Only a command that cannot be run at all degrades to an empty string, with
/// the failure logged at the highest severity. Callers that need to tell
/// failure apart from legitimately empty output should use [`try_run_shell`].
pub fn run_shell(cmd: &str) -> String {
    match shell_command(cmd).output() {
        Ok(output) => combined_output(&output),
        Err(err) => {
            error!("failed to run `{}`, returning empty output: {}", cmd, err);
            String::new()
        }
    }
}

/// Run a shell command, surfacing spawn failures and non-zero exits as errors.
pub fn try_run_shell(cmd: &str) -> Result<String, ShellError> {
    let output = shell_command(cmd).output().map_err(|source| ShellError::Spawn {
        cmd: cmd.to_string(),
        source,
    })?;

    if !output.status.success() {
        return Err(ShellError::Exit {
            cmd: cmd.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim_matches('\n').to_string(),
        });
    }

    Ok(combined_output(&output))
}

/// Check whether a named executable resolves on the search path.
pub fn is_tool_available(name: &str) -> bool {
    which::which(name).is_ok()
}

/// Classify command output into a tagged value.
///
/// Empty output and the literal "null" count as absent, "true"/"false" become
/// booleans, anything else passes through as text.
pub fn classify_output(output: &str) -> OutputValue {
    match output {
        "" | "null" => OutputValue::Absent,
        "true" => OutputValue::Bool(true),
        "false" => OutputValue::Bool(false),
        other => OutputValue::Text(other.to_string()),
    }
}

fn shell_command(cmd: &str) -> Command {
    if cfg!(windows) {
        let mut command = Command::new("cmd");
        command.args(["/C", cmd]);
        command
    } else {
        let mut command = Command::new("sh");
        command.args(["-c", cmd]);
        command
    }
}

/// Stdout followed by stderr, trimmed of leading/trailing newlines
fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.stderr.is_empty() {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&String::from_utf8_lossy(&output.stderr));
    }
    text.trim_matches('\n').to_string()
}
