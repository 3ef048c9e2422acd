//! Implementation of the demux + package run.
//!
//! Builds the core configuration from CLI arguments, runs the pipeline and
//! logs a summary of what was written.

use crate::cli::Cli;
use crate::config::pipeline_config;
use crate::error::CliResult;

use dashpack_core::utils::describe_file_size;
use dashpack_core::{Pipeline, PipelineConfig, RunSummary, format_duration};

use log::{debug, info};
use std::path::Path;

/// Runs the pipeline for the parsed arguments.
pub fn run_dash(args: &Cli) -> CliResult<RunSummary> {
    let config = pipeline_config(args);
    debug!("Resolved configuration: {:?}", config);
    log_run_header(&config);

    let summary = Pipeline::new(config).run()?;

    log_run_summary(&summary);
    Ok(summary)
}

fn log_run_header(config: &PipelineConfig) {
    info!("========================================");
    info!("dashpack run started: {}", chrono::Local::now());
    info!("Input file:      {}", config.input().display());
    info!("Output manifest: {}", config.manifest().display());
    info!("FFmpeg:          {}", Path::new(&config.transcoder_path()).display());
    info!("Packager:        {}", Path::new(&config.packager_path()).display());
    info!("Temp directory:  {}", config.work_dir().display());
    info!("========================================");
}

fn log_run_summary(summary: &RunSummary) {
    let outputs = &summary.outputs;
    info!("========================================");
    info!("DASH packaging summary:");
    info!("  Manifest: {} ({})", outputs.manifest.display(), describe_file_size(&outputs.manifest));
    info!("  Video:    {} ({})", outputs.video.display(), describe_file_size(&outputs.video));
    info!("  Audio:    {} ({})", outputs.audio.display(), describe_file_size(&outputs.audio));
    info!(
        "  Intermediates left in {}: {}, {}",
        summary.work_dir.display(),
        file_name(&summary.intermediates.video),
        file_name(&summary.intermediates.audio)
    );
    info!("  Demux time:   {}", format_duration(summary.demux_time.as_secs_f64()));
    info!("  Package time: {}", format_duration(summary.package_time.as_secs_f64()));
    info!("  Total time:   {}", format_duration(summary.total_time().as_secs_f64()));
    info!("========================================");
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
