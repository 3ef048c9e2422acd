// ============================================================================
// dashpack-core/src/config.rs
// ============================================================================
//
// CONFIGURATION: Pipeline Settings Resolved Once at Startup
//
// PipelineConfig holds everything the pipeline needs: the source file, the
// manifest output path, and optional overrides for the two tool paths and
// the working directory. Defaults are resolved through accessor methods so
// the stored fields always reflect exactly what the caller supplied.
//
// An empty override is treated the same as no override at all.

use crate::external::Tool;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Configuration for a single demux + package run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Source container to demux.
    pub input: PathBuf,

    /// Where the packager writes the DASH manifest.
    pub manifest: PathBuf,

    /// Explicit transcoder path (default: `ffmpeg` from `PATH`).
    pub transcoder: Option<PathBuf>,

    /// Explicit packager path (default: `packager` from `PATH`).
    pub packager: Option<PathBuf>,

    /// Directory for intermediate files (default: system temp directory).
    pub work_dir: Option<PathBuf>,
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>, manifest: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            manifest: manifest.into(),
            transcoder: None,
            packager: None,
            work_dir: None,
        }
    }

    pub fn with_transcoder(mut self, path: Option<impl Into<PathBuf>>) -> Self {
        self.transcoder = non_empty(path);
        self
    }

    pub fn with_packager(mut self, path: Option<impl Into<PathBuf>>) -> Self {
        self.packager = non_empty(path);
        self
    }

    pub fn with_work_dir(mut self, path: Option<impl Into<PathBuf>>) -> Self {
        self.work_dir = non_empty(path);
        self
    }

    /// Program path for `tool`: the explicit override, else its bare command name.
    pub fn tool_path(&self, tool: Tool) -> OsString {
        let explicit = match tool {
            Tool::Transcoder => self.transcoder.as_deref(),
            Tool::Packager => self.packager.as_deref(),
        };
        explicit
            .map(|p| p.as_os_str().to_os_string())
            .unwrap_or_else(|| OsString::from(tool.default_command()))
    }

    pub fn transcoder_path(&self) -> OsString {
        self.tool_path(Tool::Transcoder)
    }

    pub fn packager_path(&self) -> OsString {
        self.tool_path(Tool::Packager)
    }

    /// Working directory for intermediates.
    pub fn work_dir(&self) -> PathBuf {
        self.work_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn manifest(&self) -> &Path {
        &self.manifest
    }
}

fn non_empty(path: Option<impl Into<PathBuf>>) -> Option<PathBuf> {
    path.map(Into::into).filter(|p| !p.as_os_str().is_empty())
}
