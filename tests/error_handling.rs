//! FFmpeg-backed asset and error reporting tests.
//!
//! Fixture-based tests are skipped when `tests/fixtures/sample_video.mp4`
//! is absent.

#![cfg(feature = "ffmpeg")]

use std::path::Path;

use videoframes::{
    FfmpegAsset, FfmpegLogLevel, MediaAsset, VideoFramesError, VideoInfo, get_ffmpeg_log_level,
    quiet_ffmpeg, set_ffmpeg_log_level,
};

fn sample_video_path() -> &'static str {
    "tests/fixtures/sample_video.mp4"
}

#[test]
fn open_nonexistent_file() {
    let result = FfmpegAsset::open("this_file_does_not_exist.mp4");
    assert!(matches!(result, Err(VideoFramesError::VideoNotFound)));
}

#[test]
fn probe_nonexistent_file() {
    let result = VideoInfo::probe("this_file_does_not_exist.mp4", false);
    assert!(matches!(result, Err(VideoFramesError::VideoNotFound)));
}

#[test]
fn open_invalid_file() {
    let temporary_directory = tempfile::tempdir().expect("Failed to create temp dir");
    let invalid_file_path = temporary_directory.path().join("invalid.mp4");
    std::fs::write(&invalid_file_path, b"this is not a media file")
        .expect("Failed to write invalid file");

    let result = FfmpegAsset::open(&invalid_file_path);
    match result {
        Err(VideoFramesError::FileOpen { path, .. }) => assert_eq!(path, invalid_file_path),
        Err(other) => panic!("Expected FileOpen, got: {other}"),
        Ok(asset) => panic!("Expected FileOpen, got: {asset:?}"),
    }
}

#[test]
fn error_messages() {
    assert_eq!(VideoFramesError::VideoNotFound.to_string(), "Video not found");
    assert_eq!(
        VideoFramesError::VideoInfo("Video asset track not found.".to_string()).to_string(),
        "Failed to read video info: Video asset track not found.",
    );
    assert!(
        VideoFramesError::FramePixelBuffer("short".to_string())
            .to_string()
            .contains("pixel buffer"),
    );
}

// The FFmpeg log level is process-global, so every level check lives in
// this one test.
#[test]
fn quiet_ffmpeg_lowers_and_restores_level() {
    set_ffmpeg_log_level(FfmpegLogLevel::Info);
    assert_eq!(get_ffmpeg_log_level(), Some(FfmpegLogLevel::Info));

    {
        let _quiet = quiet_ffmpeg();
        assert_eq!(get_ffmpeg_log_level(), Some(FfmpegLogLevel::Error));
    }
    assert_eq!(get_ffmpeg_log_level(), Some(FfmpegLogLevel::Info));

    set_ffmpeg_log_level(FfmpegLogLevel::Quiet);
    {
        let _quiet = quiet_ffmpeg();
        assert_eq!(get_ffmpeg_log_level(), Some(FfmpegLogLevel::Quiet));
    }
    assert_eq!(get_ffmpeg_log_level(), Some(FfmpegLogLevel::Quiet));
}

#[test]
fn sample_video_metadata() {
    let path = sample_video_path();
    if !Path::new(path).exists() {
        return;
    }

    let asset = FfmpegAsset::open(path).expect("Failed to open fixture");
    assert_eq!(asset.path(), Path::new(path));
    assert!(!asset.video_tracks().is_empty());
    assert!(asset.duration().seconds() > 0.0);

    let info = VideoInfo::from_asset(&asset, true).expect("Failed to derive video info");
    assert!(info.fps > 0);
    assert!(info.size.width > 0 && info.size.height > 0);
    assert_eq!(
        info.frame_count(),
        (info.duration * f64::from(info.fps)) as u64
    );
}
