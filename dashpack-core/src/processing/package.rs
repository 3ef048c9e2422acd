//! Package stage.
//!
//! Hands the demuxed pair to the packager, which writes the DASH manifest
//! and repackaged media next to it.

use super::demux::DemuxedAssets;
use crate::error::CoreResult;
use crate::external::{CommandRunner, Invocation, ProcessExecutor};
use crate::paths::{AUDIO_EXTENSION, VIDEO_EXTENSION, parent_dir, resolve_output_path};

use log::info;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Kind of elementary stream a packager descriptor selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Audio,
    Video,
}

impl StreamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StreamKind::Audio => "audio",
            StreamKind::Video => "video",
        }
    }
}

/// Files the packager produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagedOutputs {
    pub manifest: PathBuf,
    pub video: PathBuf,
    pub audio: PathBuf,
}

impl PackagedOutputs {
    /// Output locations for `assets` when the manifest is written to `manifest`.
    ///
    /// Media land in the manifest's directory under the demuxed base names.
    pub fn for_manifest(assets: &DemuxedAssets, manifest: &Path) -> Self {
        let out_dir = parent_dir(manifest);
        Self {
            manifest: manifest.to_path_buf(),
            video: resolve_output_path(&out_dir, &assets.video, Some(VIDEO_EXTENSION)),
            audio: resolve_output_path(&out_dir, &assets.audio, Some(AUDIO_EXTENSION)),
        }
    }
}

/// Builds a packager stream descriptor: `in=<input>,stream=<kind>,output=<output>`.
pub fn stream_descriptor(input: &Path, kind: StreamKind, output: &Path) -> OsString {
    let mut descriptor = OsString::from("in=");
    descriptor.push(input);
    descriptor.push(",stream=");
    descriptor.push(kind.as_str());
    descriptor.push(",output=");
    descriptor.push(output);
    descriptor
}

/// `<packager> <video descriptor> <audio descriptor> --mpd_output <manifest>`
pub fn packager_invocation(
    packager: &OsStr,
    assets: &DemuxedAssets,
    outputs: &PackagedOutputs,
) -> Invocation {
    let mut inv = Invocation::new(packager);
    inv.arg(stream_descriptor(&assets.video, StreamKind::Video, &outputs.video))
        .arg(stream_descriptor(&assets.audio, StreamKind::Audio, &outputs.audio))
        .arg("--mpd_output")
        .arg(&outputs.manifest);
    inv
}

/// Runs the packager over the demuxed pair, writing the manifest to `manifest`.
pub fn package<E: ProcessExecutor>(
    runner: &CommandRunner<E>,
    packager: &OsStr,
    assets: &DemuxedAssets,
    manifest: &Path,
) -> CoreResult<PackagedOutputs> {
    let outputs = PackagedOutputs::for_manifest(assets, manifest);

    info!("Packaging DASH manifest {}", outputs.manifest.display());
    runner.run(&packager_invocation(packager, assets, &outputs))?;

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets() -> DemuxedAssets {
        DemuxedAssets {
            video: PathBuf::from("/tmp/input.mp4"),
            audio: PathBuf::from("/tmp/input.webm"),
        }
    }

    #[test]
    fn outputs_go_next_to_manifest() {
        let outputs = PackagedOutputs::for_manifest(&assets(), Path::new("out/manifest.mpd"));
        assert_eq!(outputs.video, PathBuf::from("out/input.mp4"));
        assert_eq!(outputs.audio, PathBuf::from("out/input.webm"));
        assert_eq!(outputs.manifest, PathBuf::from("out/manifest.mpd"));
    }

    #[test]
    fn bare_manifest_name_writes_media_to_current_dir() {
        let outputs = PackagedOutputs::for_manifest(&assets(), Path::new("manifest.mpd"));
        assert_eq!(outputs.video, PathBuf::from("input.mp4"));
        assert_eq!(outputs.audio, PathBuf::from("input.webm"));
    }

    #[test]
    fn descriptor_format() {
        let d = stream_descriptor(Path::new("/tmp/a.webm"), StreamKind::Audio, Path::new("o/a.webm"));
        assert_eq!(d, OsString::from("in=/tmp/a.webm,stream=audio,output=o/a.webm"));
    }

    #[test]
    fn packager_invocation_lists_video_then_audio_then_manifest() {
        let assets = assets();
        let outputs = PackagedOutputs::for_manifest(&assets, Path::new("out/manifest.mpd"));
        let inv = packager_invocation(OsStr::new("packager"), &assets, &outputs);
        assert_eq!(
            inv.argv(),
            vec![
                "packager",
                "in=/tmp/input.mp4,stream=video,output=out/input.mp4",
                "in=/tmp/input.webm,stream=audio,output=out/input.webm",
                "--mpd_output",
                "out/manifest.mpd",
            ]
        );
    }
}
