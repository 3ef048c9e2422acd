// ============================================================================
// dashpack-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and exit status mapping
//
// The CLI reuses CoreError directly. The only CLI-specific concern is turning
// the outcome of a run into the status the process exits with.

use dashpack_core::CoreResult;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Exit status for a successful run.
pub const EXIT_SUCCESS: i32 = 0;

/// Maps the outcome of a run to the process exit status.
///
/// A failed external tool's status is passed through unchanged.
pub fn exit_status<T>(result: &CliResult<T>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => e.exit_code(),
    }
}

/// Exit status used when the CLI fails before the pipeline starts.
pub fn setup_failure_status() -> i32 {
    dashpack_core::error::GENERIC_FAILURE_EXIT_CODE
}
