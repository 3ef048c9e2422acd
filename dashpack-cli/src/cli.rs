// dashpack-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    name = "dashpack",
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Create a DASH manifest and assets from a spatial audio/video MKV file",
    long_about = "Uses FFmpeg and Shaka Packager to create a DASH manifest and assets from \
                  MKV files with spatial audio. The source is demuxed into a video-only .mp4 \
                  and an audio-only .webm, which the packager turns into the manifest.\n\n\
                  Requirements:\n  \
                  1. FFmpeg (either in the system PATH or use -f to specify a custom path)\n  \
                  2. Shaka Packager (https://github.com/google/shaka-packager) (use -p to specify the path)",
    after_help = "Example:\n  dashpack -i input.mkv -p /path/to/shaka/packager -o manifest.mpd"
)]
pub struct Cli {
    /// Input MKV file
    #[arg(short = 'i', long = "input", required = true, value_name = "INPUT_MKV")]
    pub input: PathBuf,

    /// Optional: Path to the FFmpeg executable (defaults to `ffmpeg` from PATH)
    #[arg(short = 'f', long = "ffmpeg", value_name = "FFMPEG", env = "DASHPACK_FFMPEG")]
    pub ffmpeg: Option<OsString>,

    /// Optional: Path to Shaka Packager (defaults to `packager` from PATH)
    #[arg(short = 'p', long = "packager", value_name = "PACKAGER", env = "DASHPACK_PACKAGER")]
    pub packager: Option<OsString>,

    /// Optional: Directory for intermediate files (defaults to the system temp dir)
    #[arg(short = 't', long = "temp", value_name = "TEMP_DIR", env = "DASHPACK_TEMP_DIR")]
    pub temp: Option<OsString>,

    /// Output path and name for the manifest
    #[arg(
        short = 'o',
        long = "output_manifest",
        visible_alias = "output-manifest",
        required = true,
        value_name = "OUTPUT_MANIFEST"
    )]
    pub output_manifest: PathBuf,

    /// Enable debug-level logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Optional: Directory for a run log file
    #[arg(short = 'l', long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}
