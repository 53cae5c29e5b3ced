//! Subprocess execution for version-control queries.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::debug;

/// Failure modes of a single command invocation.
#[derive(Error, Debug)]
pub enum CommandError {
    /// No command tokens were supplied.
    #[error("Cannot run an empty command")]
    Empty,

    /// The process could not be started (missing binary, bad working directory).
    #[error("Failed to execute `{command}`")]
    Spawn {
        /// The command line that was attempted.
        command: String,
        /// Underlying I/O error from the spawn.
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited unsuccessfully.
    #[error("`{command}` exited with {status}: {}", .stderr.trim())]
    NonZeroExit {
        /// The command line that was run.
        command: String,
        /// Exit status as reported by the OS.
        status: String,
        /// Everything the process wrote to standard output.
        stdout: String,
        /// Everything the process wrote to standard error.
        stderr: String,
    },
}

impl CommandError {
    /// Returns the captured standard output when the process ran to completion.
    ///
    /// Callers that prefer the lenient behavior of trusting whatever the tool
    /// printed, regardless of exit status, can recover it here.
    pub fn into_stdout(self) -> Option<String> {
        match self {
            Self::NonZeroExit { stdout, .. } => Some(stdout),
            Self::Empty | Self::Spawn { .. } => None,
        }
    }
}

/// Executes a command line and returns its standard output.
pub trait CommandRunner {
    /// Runs `cmd`, where the first token is the program and the rest are arguments.
    fn run(&self, cmd: &[&str]) -> Result<String, CommandError>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    current_dir: Option<PathBuf>,
}

impl SystemRunner {
    /// Creates a runner that executes in the current process directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a runner that executes inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            current_dir: Some(dir.as_ref().to_path_buf()),
        }
    }

    /// Returns the working directory commands run in, if one was set.
    pub fn current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &[&str]) -> Result<String, CommandError> {
        run_cmd(cmd, self.current_dir.as_deref())
    }
}

/// Spawns `cmd`, waits for it to exit and returns its stdout decoded as text.
///
/// Standard output is decoded lossily and returned untouched (no trimming).
/// There is no retry and no timeout; the caller blocks until the child exits.
pub fn run_cmd(cmd: &[&str], current_dir: Option<&Path>) -> Result<String, CommandError> {
    let (program, args) = cmd.split_first().ok_or(CommandError::Empty)?;
    let command_line = cmd.join(" ");

    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = current_dir {
        command.current_dir(dir);
    }

    debug!(command = %command_line, dir = ?current_dir, "Running command");

    let output = command.output().map_err(|source| CommandError::Spawn {
        command: command_line.clone(),
        source,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(command = %command_line, status = %output.status, "Command failed");
        return Err(CommandError::NonZeroExit {
            command: command_line,
            status: output.status.to_string(),
            stdout,
            stderr,
        });
    }

    Ok(stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_is_rejected() {
        let err = run_cmd(&[], None).unwrap_err();
        assert!(matches!(err, CommandError::Empty));
        assert!(err.into_stdout().is_none());
    }

    #[test]
    fn missing_binary_is_a_spawn_failure() {
        let err = run_cmd(&["relnotes-definitely-not-a-real-binary", "--version"], None)
            .unwrap_err();
        match &err {
            CommandError::Spawn { command, .. } => {
                assert_eq!(command, "relnotes-definitely-not-a-real-binary --version");
            }
            other => panic!("expected spawn failure, got {other:?}"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn successful_command_returns_stdout() {
        let stdout = run_cmd(&["git", "--version"], None).unwrap();
        assert!(stdout.starts_with("git version"));
    }

    #[test]
    fn non_zero_exit_keeps_output() {
        let dir = tempfile::tempdir().unwrap();
        let err = SystemRunner::in_dir(dir.path())
            .run(&["git", "log", "--oneline", "HEAD..HEAD"])
            .unwrap_err();
        match &err {
            CommandError::NonZeroExit {
                command, stderr, ..
            } => {
                assert_eq!(command, "git log --oneline HEAD..HEAD");
                assert!(!stderr.is_empty());
            }
            other => panic!("expected non-zero exit, got {other:?}"),
        }
        assert_eq!(err.into_stdout().as_deref(), Some(""));
    }

    #[test]
    fn runner_remembers_directory() {
        let runner = SystemRunner::in_dir("/tmp");
        assert_eq!(runner.current_dir(), Some(Path::new("/tmp")));
        assert!(SystemRunner::new().current_dir().is_none());
    }
}
