use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn dashpack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dashpack").expect("Failed to find dashpack binary");
    for var in ["DASHPACK_FFMPEG", "DASHPACK_PACKAGER", "DASHPACK_TEMP_DIR"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_lists_all_options() -> Result<(), Box<dyn Error>> {
    dashpack_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--input"))
        .stdout(contains("--ffmpeg"))
        .stdout(contains("--packager"))
        .stdout(contains("--temp"))
        .stdout(contains("--output_manifest"));
    Ok(())
}

#[test]
fn test_missing_output_manifest_is_usage_error() -> Result<(), Box<dyn Error>> {
    dashpack_cmd()
        .args(["-i", "input.mkv"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("--output_manifest"));
    Ok(())
}

#[test]
fn test_invalid_ffmpeg_path_exits_one_without_writing() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let work = tmp.path().join("work");

    dashpack_cmd()
        .arg("-i")
        .arg(tmp.path().join("input.mkv"))
        .arg("-f")
        .arg("/surely/this/does/not/exist/ffmpeg")
        .arg("-t")
        .arg(&work)
        .arg("-o")
        .arg(tmp.path().join("out/manifest.mpd"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("FFmpeg path is not valid: /surely/this/does/not/exist/ffmpeg"));

    assert!(!work.exists());
    assert!(!tmp.path().join("out").exists());
    Ok(())
}

#[test]
fn test_log_dir_records_tool_validation_failure() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let logs = tmp.path().join("logs");

    dashpack_cmd()
        .arg("-i")
        .arg(tmp.path().join("input.mkv"))
        .args(["-f", "/surely/this/does/not/exist/ffmpeg"])
        .arg("-t")
        .arg(tmp.path().join("work"))
        .arg("-o")
        .arg(tmp.path().join("out/manifest.mpd"))
        .arg("--log-dir")
        .arg(&logs)
        .assert()
        .failure()
        .code(1);

    // The opt-in log directory exists before validation; pipeline directories do not.
    let entries: Vec<_> = std::fs::read_dir(&logs)?.collect::<Result<_, _>>()?;
    assert_eq!(entries.len(), 1);
    let contents = std::fs::read_to_string(entries[0].path())?;
    assert!(contents.contains("FFmpeg path is not valid"));
    assert!(!tmp.path().join("work").exists());
    assert!(!tmp.path().join("out").exists());
    Ok(())
}

// ---- End-to-end runs against fake tools ----

#[cfg(unix)]
mod fake_tools {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    const FAKE_FFMPEG: &str = r#"#!/bin/sh
if [ "$1" = "-version" ]; then exit 0; fi
echo "$*" >> "$(dirname "$0")/ffmpeg_calls.log"
for last in "$@"; do :; done
case " $* " in
  *" -vn "*) code=${FAKE_AUDIO_EXIT:-0} ;;
  *) code=${FAKE_VIDEO_EXIT:-0} ;;
esac
if [ "$code" -eq 0 ]; then : > "$last"; fi
exit "$code"
"#;

    const FAKE_PACKAGER: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then exit 0; fi
printf '%s\n' "$@" > "$(dirname "$0")/packager_args.log"
exit "${FAKE_PACKAGER_EXIT:-0}"
"#;

    struct FakeTools {
        dir: PathBuf,
        ffmpeg: PathBuf,
        packager: PathBuf,
    }

    impl FakeTools {
        fn install(root: &Path) -> Result<Self, Box<dyn Error>> {
            let dir = root.join("tools");
            std::fs::create_dir_all(&dir)?;
            let ffmpeg = write_script(&dir, "ffmpeg", FAKE_FFMPEG)?;
            let packager = write_script(&dir, "packager", FAKE_PACKAGER)?;
            Ok(Self { dir, ffmpeg, packager })
        }

        fn packager_args(&self) -> Option<Vec<String>> {
            std::fs::read_to_string(self.dir.join("packager_args.log"))
                .ok()
                .map(|s| s.lines().map(str::to_string).collect())
        }

        fn ffmpeg_calls(&self) -> Vec<String> {
            std::fs::read_to_string(self.dir.join("ffmpeg_calls.log"))
                .map(|s| s.lines().map(str::to_string).collect())
                .unwrap_or_default()
        }

        fn command(&self, root: &Path) -> Command {
            let mut cmd = dashpack_cmd();
            cmd.current_dir(root)
                .args(["-i", "input.mkv", "-t", "work", "-o", "out/manifest.mpd"])
                .arg("-f")
                .arg(&self.ffmpeg)
                .arg("-p")
                .arg(&self.packager);
            cmd
        }
    }

    fn write_script(dir: &Path, name: &str, body: &str) -> Result<PathBuf, Box<dyn Error>> {
        let path = dir.join(name);
        std::fs::write(&path, body)?;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
        Ok(path)
    }

    #[test]
    fn test_end_to_end_success() -> Result<(), Box<dyn Error>> {
        let tmp = tempdir()?;
        std::fs::write(tmp.path().join("input.mkv"), "dummy content")?;
        let tools = FakeTools::install(tmp.path())?;

        tools
            .command(tmp.path())
            .assert()
            .success()
            .stderr(contains("executing"));

        assert_eq!(
            tools.packager_args().expect("packager should have run"),
            vec![
                "in=work/input.mp4,stream=video,output=out/input.mp4",
                "in=work/input.webm,stream=audio,output=out/input.webm",
                "--mpd_output",
                "out/manifest.mpd",
            ]
        );
        assert_eq!(
            tools.ffmpeg_calls(),
            vec![
                "-y -i input.mkv -c:a copy -vn work/input.webm",
                "-y -i input.mkv -c:v copy -movflags faststart -an work/input.mp4",
            ]
        );
        // Intermediates are left in place.
        assert!(tmp.path().join("work/input.webm").exists());
        assert!(tmp.path().join("work/input.mp4").exists());
        Ok(())
    }

    #[test]
    fn test_packager_exit_status_passes_through() -> Result<(), Box<dyn Error>> {
        let tmp = tempdir()?;
        let tools = FakeTools::install(tmp.path())?;

        tools
            .command(tmp.path())
            .env("FAKE_PACKAGER_EXIT", "5")
            .assert()
            .failure()
            .code(5)
            .stderr(contains("Failed and exiting with 5"));
        Ok(())
    }

    #[test]
    fn test_audio_extraction_failure_skips_packager() -> Result<(), Box<dyn Error>> {
        let tmp = tempdir()?;
        let tools = FakeTools::install(tmp.path())?;

        tools
            .command(tmp.path())
            .env("FAKE_AUDIO_EXIT", "3")
            .assert()
            .failure()
            .code(3);

        assert!(tools.packager_args().is_none(), "packager must not run");
        assert_eq!(tools.ffmpeg_calls().len(), 1, "video extraction must not run");
        Ok(())
    }

    #[test]
    fn test_invalid_packager_path_exits_one() -> Result<(), Box<dyn Error>> {
        let tmp = tempdir()?;
        let tools = FakeTools::install(tmp.path())?;

        dashpack_cmd()
            .current_dir(tmp.path())
            .args(["-i", "input.mkv", "-t", "work", "-o", "out/manifest.mpd"])
            .arg("-f")
            .arg(&tools.ffmpeg)
            .args(["-p", "/surely/not/a/packager"])
            .assert()
            .failure()
            .code(1)
            .stderr(contains("shaka packager path is not valid"));

        assert!(tools.ffmpeg_calls().is_empty());
        assert!(!tmp.path().join("work").exists());
        Ok(())
    }

    #[test]
    fn test_working_directory_failure_is_logged() -> Result<(), Box<dyn Error>> {
        let tmp = tempdir()?;
        let tools = FakeTools::install(tmp.path())?;
        std::fs::write(tmp.path().join("blocker"), "not a directory")?;

        dashpack_cmd()
            .current_dir(tmp.path())
            .args(["-i", "input.mkv", "-t", "blocker", "-o", "out/manifest.mpd"])
            .arg("-f")
            .arg(&tools.ffmpeg)
            .arg("-p")
            .arg(&tools.packager)
            .assert()
            .failure()
            .code(1)
            .stderr(contains("ERROR"))
            .stderr(contains("Failed to create working directory"));

        assert!(tools.ffmpeg_calls().is_empty());
        assert!(tools.packager_args().is_none());
        Ok(())
    }

    #[test]
    fn test_tool_paths_from_environment() -> Result<(), Box<dyn Error>> {
        let tmp = tempdir()?;
        let tools = FakeTools::install(tmp.path())?;

        dashpack_cmd()
            .current_dir(tmp.path())
            .args(["-i", "input.mkv", "-o", "manifest.mpd"])
            .env("DASHPACK_FFMPEG", &tools.ffmpeg)
            .env("DASHPACK_PACKAGER", &tools.packager)
            .env("DASHPACK_TEMP_DIR", tmp.path().join("scratch"))
            .assert()
            .success();

        let scratch = tmp.path().join("scratch");
        assert_eq!(
            tools.packager_args().expect("packager should have run"),
            vec![
                format!("in={},stream=video,output=input.mp4", scratch.join("input.mp4").display()),
                format!("in={},stream=audio,output=input.webm", scratch.join("input.webm").display()),
                "--mpd_output".to_string(),
                "manifest.mpd".to_string(),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_log_dir_receives_run_log() -> Result<(), Box<dyn Error>> {
        let tmp = tempdir()?;
        let tools = FakeTools::install(tmp.path())?;

        tools
            .command(tmp.path())
            .args(["--log-dir", "logs", "--verbose"])
            .assert()
            .success();

        let logs: Vec<_> = std::fs::read_dir(tmp.path().join("logs"))?.collect::<Result<_, _>>()?;
        assert_eq!(logs.len(), 1);
        let contents = std::fs::read_to_string(logs[0].path())?;
        assert!(contents.contains("executing"));
        assert!(contents.contains("--mpd_output"));
        assert!(contents.contains("DASH packaging summary"));
        Ok(())
    }
}
