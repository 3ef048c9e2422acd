//! Demux stage.
//!
//! The packager only accepts single-stream inputs, so the source container
//! is first split with two stream-copy transcoder runs: one keeping only the
//! audio, one keeping only the video.

use crate::error::CoreResult;
use crate::external::{CommandRunner, Invocation, ProcessExecutor};
use crate::paths::{AUDIO_EXTENSION, VIDEO_EXTENSION, resolve_output_path};

use log::info;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Intermediate files written by the demux stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemuxedAssets {
    /// Video-only container (`<work_dir>/<name>.mp4`).
    pub video: PathBuf,
    /// Audio-only container (`<work_dir>/<name>.webm`).
    pub audio: PathBuf,
}

impl DemuxedAssets {
    /// Paths the demux stage writes for `source` inside `work_dir`.
    pub fn for_source(source: &Path, work_dir: &Path) -> Self {
        Self {
            video: resolve_output_path(work_dir, source, Some(VIDEO_EXTENSION)),
            audio: resolve_output_path(work_dir, source, Some(AUDIO_EXTENSION)),
        }
    }
}

/// `<transcoder> -y -i <source> -c:a copy -vn <audio>`
pub fn audio_extraction_invocation(transcoder: &OsStr, source: &Path, audio: &Path) -> Invocation {
    let mut inv = Invocation::new(transcoder);
    inv.arg("-y")
        .arg("-i")
        .arg(source)
        .args(["-c:a", "copy"])
        .arg("-vn")
        .arg(audio);
    inv
}

/// `<transcoder> -y -i <source> -c:v copy -movflags faststart -an <video>`
pub fn video_extraction_invocation(transcoder: &OsStr, source: &Path, video: &Path) -> Invocation {
    let mut inv = Invocation::new(transcoder);
    inv.arg("-y")
        .arg("-i")
        .arg(source)
        .args(["-c:v", "copy"])
        .args(["-movflags", "faststart"])
        .arg("-an")
        .arg(video);
    inv
}

/// Splits `source` into audio-only and video-only containers in `work_dir`.
///
/// Audio is extracted first, then video. Either failure stops the stage and
/// is returned as is; nothing checks the written files beyond the exit code.
pub fn demux<E: ProcessExecutor>(
    runner: &CommandRunner<E>,
    transcoder: &OsStr,
    source: &Path,
    work_dir: &Path,
) -> CoreResult<DemuxedAssets> {
    let assets = DemuxedAssets::for_source(source, work_dir);

    info!("Extracting audio to {}", assets.audio.display());
    runner.run(&audio_extraction_invocation(transcoder, source, &assets.audio))?;

    info!("Extracting video to {}", assets.video.display());
    runner.run(&video_extraction_invocation(transcoder, source, &assets.video))?;

    Ok(assets)
}
