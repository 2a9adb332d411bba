//! Subject program invocation
//!
//! The benchmarked programs are external executables with a fixed argument
//! contract: the baseline takes `<vertices> <edges>`, the variant takes
//! `<vertices> <edges> <threads>`. The harness launches them synchronously,
//! captures exit status and output, and never interprets what they print.

use serde::{Deserialize, Serialize};
use std::process::Command;
use thiserror::Error;

/// Errors from launching or completing a subject program
#[derive(Debug, Error)]
pub enum SubjectError {
    /// The executable could not be found or started
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The subject terminated with a non-zero exit status
    #[error("`{command}` exited with {status}{}", format_stderr(.stderr))]
    Failed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

/// An external program identity plus its fixed leading arguments
///
/// Experiment-specific arguments (vertex count, edge count, thread count)
/// are appended at invocation time; this template only carries what is
/// constant across the whole run, e.g. `java SequentialPageRank`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectCommand {
    /// Executable name or path
    pub program: String,
    /// Arguments that precede the per-experiment arguments
    #[serde(default)]
    pub args: Vec<String>,
}

impl SubjectCommand {
    /// Create a command template from a program and leading arguments
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Render the full command line for one invocation, for logs and errors
    pub fn display_line(&self, extra_args: &[String]) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        parts.extend(extra_args.iter().cloned());
        parts.join(" ")
    }
}

/// Captured completion state of one subject invocation
#[derive(Debug)]
pub struct RunOutput {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    /// Check the exit status, turning non-zero exit into a typed failure
    pub fn ensure_success(self, command: &str) -> Result<RunOutput, SubjectError> {
        if self.status.success() {
            Ok(self)
        } else {
            Err(SubjectError::Failed {
                command: command.to_string(),
                status: self.status,
                stderr: self.stderr,
            })
        }
    }
}

/// Synchronous launcher for subject programs
pub struct ProcessRunner;

impl ProcessRunner {
    /// Launch the subject with the template's arguments plus `extra_args`,
    /// block until it terminates, and capture its output.
    ///
    /// Exit status is returned uninterpreted; callers decide whether a
    /// non-zero exit is an error. A failed spawn is always `Launch`.
    pub fn run(command: &SubjectCommand, extra_args: &[String]) -> Result<RunOutput, SubjectError> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .args(extra_args)
            .output()
            .map_err(|source| SubjectError::Launch {
                command: command.display_line(extra_args),
                source,
            })?;

        Ok(RunOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let cmd = SubjectCommand::new("java", vec!["SequentialPageRank".to_string()]);
        let line = cmd.display_line(&["100".to_string(), "200".to_string()]);
        assert_eq!(line, "java SequentialPageRank 100 200");
    }

    #[test]
    fn test_run_captures_success() {
        let cmd = SubjectCommand::new("sh", vec!["-c".to_string(), "exit 0".to_string()]);
        let output = ProcessRunner::run(&cmd, &[]).unwrap();
        assert!(output.status.success());
        assert!(output.ensure_success("sh -c 'exit 0'").is_ok());
    }

    #[test]
    fn test_nonzero_exit_is_failure() {
        let cmd = SubjectCommand::new("sh", vec!["-c".to_string(), "exit 3".to_string()]);
        let output = ProcessRunner::run(&cmd, &[]).unwrap();
        let err = output.ensure_success("sh -c 'exit 3'").unwrap_err();
        match err {
            SubjectError::Failed { status, .. } => assert_eq!(status.code(), Some(3)),
            other => panic!("expected Failed, got: {other:?}"),
        }
    }

    #[test]
    fn test_missing_executable_is_launch_error() {
        let cmd = SubjectCommand::new("/nonexistent/pagerank-binary", vec![]);
        let err = ProcessRunner::run(&cmd, &[]).unwrap_err();
        assert!(matches!(err, SubjectError::Launch { .. }));
    }

    #[test]
    fn test_stderr_captured() {
        let cmd = SubjectCommand::new(
            "sh",
            vec!["-c".to_string(), "echo boom >&2; exit 1".to_string()],
        );
        let output = ProcessRunner::run(&cmd, &[]).unwrap();
        assert!(output.stderr.contains("boom"));
    }
}
