// ============================================================================
// dashpack-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the Transcoder and Packager Binaries
//
// This module encapsulates every interaction with external command-line
// tools. It provides a small process abstraction (Invocation, ProcessExit,
// ProcessExecutor) so the stages above it can be exercised against a mock
// executor in tests.
//
// KEY COMPONENTS:
// - Tool: the two external tools the pipeline depends on
// - Invocation: a program plus its argument vector
// - ProcessExit: normalized exit status of a finished child
// - ProcessExecutor: trait for launching an invocation and waiting on it
// - SystemExecutor: concrete implementation using std::process
// - CommandRunner: strict and probe execution modes on top of an executor
//
// DESIGN PHILOSOPHY:
// This module follows the dependency injection pattern, allowing consumers to
// provide their own ProcessExecutor for testing or specialized behavior.

use crate::error::{CoreResult, command_start_error, command_wait_error};

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::{Command, ExitStatus, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Strict and probe execution modes
pub mod runner;

/// Mock executor for tests
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

pub use runner::CommandRunner;

// ============================================================================
// TOOLS
// ============================================================================

/// The external binaries the pipeline orchestrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Media transcoder used to demux the source (FFmpeg).
    Transcoder,
    /// DASH packaging tool (Shaka Packager).
    Packager,
}

impl Tool {
    /// Human readable name used in log and error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Tool::Transcoder => "FFmpeg",
            Tool::Packager => "shaka packager",
        }
    }

    /// Command name looked up through `PATH` when no explicit path is given.
    pub fn default_command(self) -> &'static str {
        match self {
            Tool::Transcoder => "ffmpeg",
            Tool::Packager => "packager",
        }
    }

    /// Arguments for a trivial invocation that succeeds on a working install.
    pub fn probe_args(self) -> &'static [&'static str] {
        match self {
            Tool::Transcoder => &["-version"],
            Tool::Packager => &["--version"],
        }
    }

    /// Builds the probe invocation for this tool at `program`.
    pub fn probe_invocation(self, program: impl AsRef<OsStr>) -> Invocation {
        let mut invocation = Invocation::new(program);
        invocation.args(self.probe_args());
        invocation
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// INVOCATION
// ============================================================================

/// A program path and its argument vector.
///
/// Mirrors the builder style of `std::process::Command`, but stays a plain
/// value so it can be logged, compared in tests, and handed to any
/// `ProcessExecutor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(&mut self, arg: impl AsRef<OsStr>) -> &mut Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.arg(arg);
        }
        self
    }

    pub fn get_program(&self) -> &OsStr {
        &self.program
    }

    pub fn get_args(&self) -> impl Iterator<Item = &OsStr> {
        self.args.iter().map(OsString::as_os_str)
    }

    /// Program path as a lossy string, for messages.
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Full argument vector (program first), stringified.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.as_os_str())
            .chain(self.get_args())
            .map(|s| s.to_string_lossy().into_owned())
            .collect()
    }

    /// Builds a `std::process::Command` for this invocation.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.argv())
    }
}

// ============================================================================
// PROCESS EXIT
// ============================================================================

/// Offset added to a terminating signal number, following the shell convention.
#[cfg(unix)]
const SIGNAL_EXIT_OFFSET: i32 = 128;

/// Normalized exit status of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit(i32);

impl ProcessExit {
    pub const SUCCESS: ProcessExit = ProcessExit(0);

    pub fn from_code(code: i32) -> Self {
        ProcessExit(code)
    }

    pub fn code(self) -> i32 {
        self.0
    }

    pub fn success(self) -> bool {
        self.0 == 0
    }
}

impl From<ExitStatus> for ProcessExit {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ProcessExit(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ProcessExit(SIGNAL_EXIT_OFFSET + signal);
            }
        }

        ProcessExit(crate::error::GENERIC_FAILURE_EXIT_CODE)
    }
}

impl fmt::Display for ProcessExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// EXECUTION ABSTRACTION
// ============================================================================

/// What to do with a child's stdout/stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Child writes straight to our stdout/stderr.
    Inherit,
    /// Child output is discarded.
    Suppress,
}

/// Trait representing something that can run an invocation to completion.
pub trait ProcessExecutor {
    /// Launches `invocation`, blocks until it exits and returns its status.
    ///
    /// Launch failures are errors; a nonzero exit is not.
    fn execute(&self, invocation: &Invocation, output: OutputMode) -> CoreResult<ProcessExit>;
}

/// Concrete `ProcessExecutor` backed by `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct SystemExecutor;

impl ProcessExecutor for SystemExecutor {
    fn execute(&self, invocation: &Invocation, output: OutputMode) -> CoreResult<ProcessExit> {
        let mut cmd = invocation.to_command();
        cmd.stdin(Stdio::null());
        if output == OutputMode::Suppress {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let mut child = cmd
            .spawn()
            .map_err(|e| command_start_error(invocation.program_name(), e))?;

        let status = child
            .wait()
            .map_err(|e| command_wait_error(invocation.program_name(), e))?;

        Ok(ProcessExit::from(status))
    }
}
