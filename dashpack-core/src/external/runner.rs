// ============================================================================
// dashpack-core/src/external/runner.rs
// ============================================================================
//
// COMMAND RUNNER: Strict and Probe Execution of External Tools
//
// Every external process the pipeline starts goes through CommandRunner, so
// all of them are logged the same way before they run.
//
// MODES:
// - run(): pipeline-critical steps. A nonzero exit becomes
//   CoreError::CommandFailed carrying the tool's own exit code.
// - probe(): checks that a tool is invocable. Never fails, answers a bool.

use super::{Invocation, OutputMode, ProcessExecutor, ProcessExit};
use crate::error::{CoreResult, command_failed_error};

use log::{debug, error, info};

/// Runs invocations through a `ProcessExecutor`, logging each one.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner<E: ProcessExecutor> {
    executor: E,
}

impl<E: ProcessExecutor> CommandRunner<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Runs `invocation` to completion with its output passed through.
    ///
    /// Returns the exit status on success. A nonzero exit is logged and
    /// returned as `CoreError::CommandFailed` with the same code; launch
    /// failures are returned as they come from the executor.
    pub fn run(&self, invocation: &Invocation) -> CoreResult<ProcessExit> {
        info!("executing {}", invocation);

        let exit = self
            .executor
            .execute(invocation, OutputMode::Inherit)
            .inspect_err(|e| error!("{}", e))?;

        if !exit.success() {
            error!("Failed and exiting with {}", exit);
            return Err(command_failed_error(invocation.program_name(), exit.code()));
        }

        debug!("{} finished successfully", invocation.program_name());
        Ok(exit)
    }

    /// Returns true if `invocation` runs and exits with status 0.
    ///
    /// Output is suppressed. Every failure (empty program, missing
    /// executable, launch error, nonzero exit) answers false.
    pub fn probe(&self, invocation: &Invocation) -> bool {
        if invocation.get_program().is_empty() {
            debug!("probe skipped: empty program path");
            return false;
        }

        info!("probing {}", invocation);

        match self.executor.execute(invocation, OutputMode::Suppress) {
            Ok(exit) if exit.success() => true,
            Ok(exit) => {
                debug!("probe of {} exited with {}", invocation.program_name(), exit);
                false
            }
            Err(e) => {
                debug!("probe of {} failed: {}", invocation.program_name(), e);
                false
            }
        }
    }
}
