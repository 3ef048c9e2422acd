// ============================================================================
// dashpack-core/src/processing/pipeline.rs
// ============================================================================
//
// PIPELINE DRIVER: Validate -> Demux -> Package
//
// Pipeline owns the resolved configuration and a CommandRunner. run() probes
// both external tools, prepares the output directories and then runs the two
// stages in order. Every step is terminal on failure: there is no retry and
// no rollback, and intermediates are left in the working directory.
//
// The driver never exits the process. The first error is returned to the
// caller, which maps it to an exit status with CoreError::exit_code().

use super::demux::{DemuxedAssets, demux};
use super::package::{PackagedOutputs, package};
use crate::config::PipelineConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::{CommandRunner, ProcessExecutor, SystemExecutor, Tool};
use crate::paths::parent_dir;

use log::{debug, error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub work_dir: PathBuf,
    pub intermediates: DemuxedAssets,
    pub outputs: PackagedOutputs,
    pub demux_time: Duration,
    pub package_time: Duration,
}

impl RunSummary {
    pub fn total_time(&self) -> Duration {
        self.demux_time + self.package_time
    }
}

/// Drives one demux + package run.
pub struct Pipeline<E: ProcessExecutor = SystemExecutor> {
    config: PipelineConfig,
    runner: CommandRunner<E>,
}

impl Pipeline<SystemExecutor> {
    /// Pipeline that launches real processes.
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_executor(config, SystemExecutor)
    }
}

impl<E: ProcessExecutor> Pipeline<E> {
    pub fn with_executor(config: PipelineConfig, executor: E) -> Self {
        Self {
            config,
            runner: CommandRunner::new(executor),
        }
    }

    /// Probes the transcoder and the packager, in that order.
    ///
    /// The first unusable tool is logged and returned as
    /// `CoreError::ToolUnavailable`.
    pub fn validate_tools(&self) -> CoreResult<()> {
        for tool in [Tool::Transcoder, Tool::Packager] {
            let path = self.config.tool_path(tool);
            if !self.runner.probe(&tool.probe_invocation(&path)) {
                let err = CoreError::ToolUnavailable {
                    tool: tool.display_name().to_string(),
                    path: PathBuf::from(path),
                };
                error!("{}", err);
                return Err(err);
            }
            debug!("{} is usable: {}", tool, Path::new(&path).display());
        }
        Ok(())
    }

    /// Creates the working directory and the manifest directory if missing.
    ///
    /// Returns the working directory. A directory that cannot be created is
    /// logged and returned as `CoreError::PathError`.
    pub fn prepare_directories(&self) -> CoreResult<PathBuf> {
        let work_dir = self.config.work_dir();
        create_dir(&work_dir, "working")?;

        let manifest_dir = parent_dir(self.config.manifest());
        if !manifest_dir.as_os_str().is_empty() {
            create_dir(&manifest_dir, "output")?;
        }

        Ok(work_dir)
    }

    /// Runs the whole pipeline.
    pub fn run(&self) -> CoreResult<RunSummary> {
        self.validate_tools()?;
        let work_dir = self.prepare_directories()?;
        info!("Using working directory {}", work_dir.display());

        let demux_start = Instant::now();
        let intermediates = demux(
            &self.runner,
            &self.config.transcoder_path(),
            self.config.input(),
            &work_dir,
        )?;
        let demux_time = demux_start.elapsed();

        let package_start = Instant::now();
        let outputs = package(
            &self.runner,
            &self.config.packager_path(),
            &intermediates,
            self.config.manifest(),
        )?;
        let package_time = package_start.elapsed();

        Ok(RunSummary {
            work_dir,
            intermediates,
            outputs,
            demux_time,
            package_time,
        })
    }
}

fn create_dir(dir: &Path, role: &str) -> CoreResult<()> {
    fs::create_dir_all(dir)
        .map_err(|e| {
            CoreError::PathError(format!(
                "Failed to create {} directory '{}': {}",
                role,
                dir.display(),
                e
            ))
        })
        .inspect_err(|e| error!("{}", e))
}
