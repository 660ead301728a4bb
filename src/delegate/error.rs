//! Delegation error types.

use thiserror::Error;

/// Errors that can occur when handing work to an external collaborator.
#[derive(Error, Debug)]
pub enum DelegateError {
    #[error("{what} is not configured (set delegates.{key} in kiauh.toml)")]
    NotConfigured { what: &'static str, key: &'static str },

    #[error("empty command configured for {0}")]
    EmptyCommand(&'static str),

    #[error("command failed: {cmd} (exit code: {code:?})")]
    CommandFailed { cmd: String, code: Option<i32> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
