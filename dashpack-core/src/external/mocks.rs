// dashpack-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// This module is only compiled for tests or when the "test-mocks" feature is enabled.

use super::{Invocation, OutputMode, ProcessExecutor, ProcessExit};
use crate::error::{CoreResult, command_start_error};

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

/// What a matched expectation does when the mock executes it.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// The process "runs" and exits with this code.
    Exit(i32),
    /// The process cannot be launched.
    LaunchFailure,
}

/// Represents an expected invocation and its mock result.
#[derive(Debug, Clone)]
pub struct MockExpectation {
    /// Substring the program path must contain.
    pub program_pattern: String,
    /// Argument that must appear verbatim in the argument vector.
    pub arg: String,
    pub outcome: MockOutcome,
    /// Create an empty file at the last argument on a zero exit.
    pub create_dummy_output: bool,
}

impl MockExpectation {
    fn matches(&self, invocation: &Invocation) -> bool {
        invocation.program_name().contains(&self.program_pattern)
            && invocation.get_args().any(|a| a == self.arg.as_str())
    }
}

/// Mock implementation of `ProcessExecutor` supporting multiple expectations.
///
/// Expectations are consumed in the order they were added; an invocation
/// matching none of them panics unless the mock was built with
/// `MockExecutor::permissive`, in which case it exits 0.
#[derive(Debug, Clone, Default)]
pub struct MockExecutor {
    expectations: Rc<RefCell<Vec<MockExpectation>>>,
    received_calls: Rc<RefCell<Vec<(Invocation, OutputMode)>>>,
    permissive: bool,
}

impl MockExecutor {
    pub fn new() -> Self {
        Default::default()
    }

    /// A mock that answers exit 0 to anything without a matching expectation.
    pub fn permissive() -> Self {
        Self {
            permissive: true,
            ..Default::default()
        }
    }

    pub fn add_expectation(
        &self,
        program_pattern: &str,
        arg: &str,
        outcome: MockOutcome,
        create_dummy_output: bool,
    ) {
        self.expectations.borrow_mut().push(MockExpectation {
            program_pattern: program_pattern.to_string(),
            arg: arg.to_string(),
            outcome,
            create_dummy_output,
        });
    }

    pub fn add_success_expectation(&self, program_pattern: &str, arg: &str, create_dummy_output: bool) {
        self.add_expectation(program_pattern, arg, MockOutcome::Exit(0), create_dummy_output);
    }

    pub fn add_exit_expectation(&self, program_pattern: &str, arg: &str, exit_code: i32) {
        self.add_expectation(program_pattern, arg, MockOutcome::Exit(exit_code), false);
    }

    pub fn add_launch_failure_expectation(&self, program_pattern: &str, arg: &str) {
        self.add_expectation(program_pattern, arg, MockOutcome::LaunchFailure, false);
    }

    /// Argument vectors (program first) of every invocation received.
    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls
            .borrow()
            .iter()
            .map(|(inv, _)| inv.argv())
            .collect()
    }

    pub fn get_received_modes(&self) -> Vec<OutputMode> {
        self.received_calls.borrow().iter().map(|(_, mode)| *mode).collect()
    }

    /// Number of received invocations whose program contains `program_pattern`.
    pub fn call_count(&self, program_pattern: &str) -> usize {
        self.received_calls
            .borrow()
            .iter()
            .filter(|(inv, _)| inv.program_name().contains(program_pattern))
            .count()
    }

    /// Expectations that were never matched.
    pub fn remaining_expectations(&self) -> usize {
        self.expectations.borrow().len()
    }
}

impl ProcessExecutor for MockExecutor {
    fn execute(&self, invocation: &Invocation, output: OutputMode) -> CoreResult<ProcessExit> {
        self.received_calls
            .borrow_mut()
            .push((invocation.clone(), output));

        let mut expectations = self.expectations.borrow_mut();
        let found_index = expectations.iter().position(|exp| exp.matches(invocation));

        let Some(index) = found_index else {
            if self.permissive {
                log::info!("MockExecutor: no expectation for {}, exiting 0", invocation);
                return Ok(ProcessExit::SUCCESS);
            }
            log::error!("MockExecutor: No expectation found for invocation: {}", invocation);
            panic!("MockExecutor: No expectation found for invocation: {}", invocation);
        };

        let expectation = expectations.remove(index);
        log::info!(
            "MockExecutor: Matched expectation '{}' / '{}'",
            expectation.program_pattern,
            expectation.arg
        );

        match expectation.outcome {
            MockOutcome::Exit(code) => {
                if code == 0 && expectation.create_dummy_output {
                    create_dummy_output(invocation);
                }
                Ok(ProcessExit::from_code(code))
            }
            MockOutcome::LaunchFailure => Err(command_start_error(
                invocation.program_name(),
                io::Error::new(io::ErrorKind::NotFound, "mock launch failure"),
            )),
        }
    }
}

fn create_dummy_output(invocation: &Invocation) {
    let Some(last) = invocation.get_args().last() else {
        log::warn!("MockExecutor couldn't find output path in args to create dummy file.");
        return;
    };
    let output_path = PathBuf::from(last);
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::error!("MockExecutor failed to create parent dir {:?}: {}", parent, e);
        }
    }
    match std::fs::File::create(&output_path) {
        Ok(_) => log::info!("MockExecutor created dummy output file: {:?}", output_path),
        Err(e) => log::error!("MockExecutor failed to create dummy output file {:?}: {}", output_path, e),
    }
}
