// dashpack-cli/src/config.rs
//
// Turns parsed CLI arguments into the core pipeline configuration.

use crate::cli::Cli;
use dashpack_core::PipelineConfig;

/// Builds the pipeline configuration; empty tool/temp values mean "use the default".
pub fn pipeline_config(args: &Cli) -> PipelineConfig {
    PipelineConfig::new(&args.input, &args.output_manifest)
        .with_transcoder(args.ffmpeg.clone())
        .with_packager(args.packager.clone())
        .with_work_dir(args.temp.clone())
}
