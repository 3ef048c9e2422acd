// ============================================================================
// dashpack-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for dashpack-core
//
// This module defines the error types used throughout the core library. Every
// failure of the pipeline is carried up to the binary as a CoreError, which
// alone decides how the process exits.
//
// KEY COMPONENTS:
// - CoreError: enum of every failure the pipeline can report
// - CoreResult: Result alias used across the crate
// - exit_code(): mapping from an error to the process exit status
//
// EXIT STATUS POLICY:
// - A failed external command passes its own exit code through untouched
// - Every other failure (unusable tool, launch error, directory setup) exits with 1

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status used for failures that did not come from an external tool.
pub const GENERIC_FAILURE_EXIT_CODE: i32 = 1;

/// Errors produced while running the demux/package pipeline.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A required external tool could not be probed successfully.
    #[error("{tool} path is not valid: {}", .path.display())]
    ToolUnavailable { tool: String, path: PathBuf },

    /// A pipeline-critical command ran and exited with a nonzero status.
    #[error("'{program}' failed and exited with {code}")]
    CommandFailed { program: String, code: i32 },

    /// A pipeline-critical command could not be launched at all.
    #[error("Failed to start '{program}': {source}")]
    CommandStart {
        program: String,
        #[source]
        source: io::Error,
    },

    /// Failed while waiting for a launched command to finish.
    #[error("Failed waiting for '{program}': {source}")]
    CommandWait {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Path error: {0}")]
    PathError(String),
}

impl CoreError {
    /// Returns the process exit status this error should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            CoreError::CommandFailed { code, .. } => *code,
            _ => GENERIC_FAILURE_EXIT_CODE,
        }
    }
}

/// Result alias used throughout dashpack-core.
pub type CoreResult<T> = Result<T, CoreError>;

// ---- Helper constructors ----

pub(crate) fn command_start_error(program: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::CommandStart {
        program: program.into(),
        source,
    }
}

pub(crate) fn command_wait_error(program: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::CommandWait {
        program: program.into(),
        source,
    }
}

pub(crate) fn command_failed_error(program: impl Into<String>, code: i32) -> CoreError {
    CoreError::CommandFailed {
        program: program.into(),
        code,
    }
}
