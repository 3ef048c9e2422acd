//! Pipeline stages and the driver that sequences them.
//!
//! Responsibilities:
//! - Demux the source container into audio-only and video-only files
//! - Package the demuxed pair into a DASH manifest with its media
//! - Validate the external tools and run the stages in order
//!
//! Each stage returns a `CoreResult`; the first failure stops the run and is
//! carried up to the caller unchanged.

pub mod demux;
pub mod package;
pub mod pipeline;

pub use demux::{DemuxedAssets, demux};
pub use package::{PackagedOutputs, package};
pub use pipeline::{Pipeline, RunSummary};
