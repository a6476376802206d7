//! Git adapter for working-tree status retrieval.
//!
//! This crate is intentionally thin: it shells out to `git` for the raw
//! porcelain status text and keeps no evaluation policy. Interpreting
//! the status lines is the rule evaluator's job.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Errors from interacting with a git repository.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("git executable is not available in PATH")]
    NotInstalled,

    #[error("git command failed: git {args} ({message})")]
    CommandFailed { args: String, message: String },

    #[error("unable to parse git output: {0}")]
    Parse(String),
}

/// Thin client around the `git` CLI.
#[derive(Debug, Clone)]
pub struct GitClient {
    repo_root: PathBuf,
}

impl GitClient {
    /// Discover a git repository from `path` by resolving
    /// `git rev-parse --show-toplevel`.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let stdout = run_git(path.as_ref(), &["rev-parse", "--show-toplevel"])?;
        let root = first_nonempty_line(&stdout)
            .ok_or_else(|| GitError::Parse("git rev-parse returned empty output".to_string()))?;
        Ok(Self {
            repo_root: PathBuf::from(root),
        })
    }

    /// Filesystem path to the detected repository root.
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Raw porcelain status text, one entry per line.
    pub fn status_porcelain(&self) -> Result<String, GitError> {
        run_git(&self.repo_root, &["status", "--porcelain"])
    }
}

fn run_git(cwd: &Path, args: &[&str]) -> Result<String, GitError> {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                GitError::NotInstalled
            } else {
                GitError::CommandFailed {
                    args: args.join(" "),
                    message: err.to_string(),
                }
            }
        })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            "unknown error".to_string()
        } else {
            stderr
        };
        Err(GitError::CommandFailed {
            args: args.join(" "),
            message,
        })
    }
}

fn first_nonempty_line(input: &str) -> Option<&str> {
    input.lines().map(str::trim).find(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::first_nonempty_line;

    #[test]
    fn first_nonempty_line_skips_leading_blanks() {
        let s = "\n  \n/home/user/repo\n";
        assert_eq!(first_nonempty_line(s), Some("/home/user/repo"));
    }

    #[test]
    fn first_nonempty_line_none_for_blank_input() {
        assert_eq!(first_nonempty_line("\n \t \n"), None);
    }
}
