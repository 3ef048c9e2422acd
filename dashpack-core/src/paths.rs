//! Output path resolution.
//!
//! Intermediate and packaged assets keep the base name of the file they were
//! derived from and land in a different directory, optionally with a new
//! extension.

use std::path::{Path, PathBuf};

/// Extension of the audio-only container (demux output and packaged audio).
pub const AUDIO_EXTENSION: &str = ".webm";

/// Extension of the video-only container (demux output and packaged video).
pub const VIDEO_EXTENSION: &str = ".mp4";

/// Joins the base file name of `reference_file` onto `output_dir`.
///
/// When `new_extension` is given (with or without a leading dot), it replaces
/// the last extension of the base name; `None` or an empty string keeps the
/// name as is. The directory part of `reference_file` never reaches the
/// result.
///
/// ```
/// use dashpack_core::paths::resolve_output_path;
/// use std::path::{Path, PathBuf};
///
/// let out = resolve_output_path(Path::new("/tmp"), Path::new("a/b/c.mkv"), Some(".mp4"));
/// assert_eq!(out, PathBuf::from("/tmp/c.mp4"));
/// ```
pub fn resolve_output_path(
    output_dir: &Path,
    reference_file: &Path,
    new_extension: Option<&str>,
) -> PathBuf {
    let file_name = reference_file
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_default();

    let file_name = match new_extension.map(|ext| ext.trim_start_matches('.')) {
        Some(ext) if !ext.is_empty() => file_name.with_extension(ext),
        _ => file_name,
    };

    output_dir.join(file_name)
}

/// Directory that holds `file`; an empty parent means the current directory.
pub fn parent_dir(file: &Path) -> PathBuf {
    file.parent().map(Path::to_path_buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_extension_and_drops_source_directory() {
        let out = resolve_output_path(Path::new("/work"), Path::new("a/b/c.mkv"), Some(".mp4"));
        assert_eq!(out, PathBuf::from("/work/c.mp4"));
    }

    #[test]
    fn accepts_extension_without_leading_dot() {
        let out = resolve_output_path(Path::new("/work"), Path::new("clip.mkv"), Some("webm"));
        assert_eq!(out, PathBuf::from("/work/clip.webm"));
    }

    #[test]
    fn keeps_name_without_extension_override() {
        let out = resolve_output_path(Path::new("out"), Path::new("/media/clip.mkv"), None);
        assert_eq!(out, PathBuf::from("out/clip.mkv"));

        let out = resolve_output_path(Path::new("out"), Path::new("/media/clip.mkv"), Some(""));
        assert_eq!(out, PathBuf::from("out/clip.mkv"));
    }

    #[test]
    fn only_last_extension_is_replaced() {
        let out = resolve_output_path(Path::new("d"), Path::new("show.s01e01.mkv"), Some(".mp4"));
        assert_eq!(out, PathBuf::from("d/show.s01e01.mp4"));
    }

    #[test]
    fn adds_extension_to_names_without_one() {
        let out = resolve_output_path(Path::new("d"), Path::new("/media/recording"), Some(".webm"));
        assert_eq!(out, PathBuf::from("d/recording.webm"));
    }

    #[test]
    fn output_directory_never_changes_file_name() {
        let reference = Path::new("nested/dir/input.mkv");
        for dir in ["", "/tmp", "relative/out", "/var/tmp/deep/er"] {
            let out = resolve_output_path(Path::new(dir), reference, Some(VIDEO_EXTENSION));
            assert_eq!(out.file_name().unwrap(), "input.mp4");
            assert_eq!(out.parent().unwrap(), Path::new(dir));
        }
    }

    #[test]
    fn empty_output_dir_yields_bare_file_name() {
        let out = resolve_output_path(Path::new(""), Path::new("/tmp/input.mp4"), Some(VIDEO_EXTENSION));
        assert_eq!(out, PathBuf::from("input.mp4"));
    }

    #[test]
    fn reference_without_file_name_resolves_to_output_dir() {
        for reference in ["..", "/"] {
            let out = resolve_output_path(Path::new("/work"), Path::new(reference), Some(".mp4"));
            assert_eq!(out, PathBuf::from("/work"));
        }
    }

    #[test]
    fn parent_dir_of_bare_file_is_empty() {
        assert_eq!(parent_dir(Path::new("manifest.mpd")), PathBuf::new());
        assert_eq!(parent_dir(Path::new("out/manifest.mpd")), PathBuf::from("out"));
    }
}
