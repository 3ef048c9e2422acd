//! Core library for turning a spatial audio/video Matroska file into a DASH
//! manifest using ffmpeg and Shaka Packager.
//!
//! The source is demuxed into an audio-only `.webm` and a video-only `.mp4`
//! in a working directory, then handed to the packager, which writes the
//! manifest and repackaged media next to it.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use dashpack_core::{Pipeline, PipelineConfig};
//!
//! let config = PipelineConfig::new("input.mkv", "out/manifest.mpd")
//!     .with_packager(Some("/opt/shaka/packager"));
//!
//! match Pipeline::new(config).run() {
//!     Ok(summary) => println!("wrote {}", summary.outputs.manifest.display()),
//!     Err(e) => std::process::exit(e.exit_code()),
//! }
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod paths;
pub mod processing;
pub mod utils;

// Re-exports for public API
pub use config::PipelineConfig;
pub use error::{CoreError, CoreResult};
pub use external::{CommandRunner, Invocation, ProcessExecutor, ProcessExit, SystemExecutor, Tool};
pub use paths::resolve_output_path;
pub use processing::{DemuxedAssets, PackagedOutputs, Pipeline, RunSummary, demux, package};
pub use utils::format_duration;
