//! Video metadata derivation tests against in-memory assets.

use videoframes::{FrameSize, MediaAsset, MediaTime, VideoFramesError, VideoInfo, VideoTrack};

struct FakeAsset {
    duration: MediaTime,
    tracks: Vec<VideoTrack>,
}

impl FakeAsset {
    fn new(seconds: i64, frame_rate: f32) -> Self {
        Self {
            duration: MediaTime::new(seconds * 600, 600),
            tracks: vec![track(frame_rate, 1920, 1080)],
        }
    }
}

impl MediaAsset for FakeAsset {
    fn duration(&self) -> MediaTime {
        self.duration
    }

    fn video_tracks(&self) -> &[VideoTrack] {
        &self.tracks
    }
}

fn track(frame_rate: f32, width: u32, height: u32) -> VideoTrack {
    VideoTrack {
        nominal_frame_rate: frame_rate,
        natural_size: FrameSize::new(width, height),
    }
}

fn expect_video_info_error(result: Result<VideoInfo, VideoFramesError>) -> String {
    match result {
        Err(VideoFramesError::VideoInfo(reason)) => reason,
        Err(other) => panic!("Expected VideoInfo error, got: {other}"),
        Ok(info) => panic!("Expected VideoInfo error, got: {info:?}"),
    }
}

// ── MediaTime ──────────────────────────────────────────────────────

#[test]
fn media_time_converts_ticks_to_seconds() {
    assert_eq!(MediaTime::new(450_000, 90_000).seconds(), 5.0);
    assert_eq!(MediaTime::ZERO.seconds(), 0.0);
}

#[test]
fn media_time_from_time_base() {
    let time = MediaTime::from_time_base(300, 1001, 30_000);
    assert_eq!(time.timescale, 30_000);
    assert!((time.seconds() - 10.01).abs() < 1e-9);
}

#[test]
fn media_time_zero_timescale_is_invalid() {
    let time = MediaTime::new(100, 0);
    assert!(!time.is_valid());
    assert!(time.seconds().is_nan());
}

// ── Derivation ─────────────────────────────────────────────────────

#[test]
fn frame_count_is_duration_times_fps() {
    let info = VideoInfo::from_asset(&FakeAsset::new(10, 30.0), false).expect("valid asset");
    assert_eq!(info.duration, 10.0);
    assert_eq!(info.fps, 30);
    assert_eq!(info.frame_count(), 300);
}

#[test]
fn frame_count_floors_partial_frames() {
    let asset = FakeAsset {
        duration: MediaTime::new(10_050, 1000),
        tracks: vec![track(24.0, 640, 360)],
    };
    let info = VideoInfo::from_asset(&asset, false).expect("valid asset");
    // 10.05 * 24 = 241.2
    assert_eq!(info.frame_count(), 241);
}

#[test]
fn reads_natural_size() {
    let info = VideoInfo::from_asset(&FakeAsset::new(1, 25.0), false).expect("valid asset");
    assert_eq!(info.size, FrameSize::new(1920, 1080));
}

#[test]
fn uses_first_video_track() {
    let asset = FakeAsset {
        duration: MediaTime::new(2, 1),
        tracks: vec![track(24.0, 1280, 720), track(60.0, 320, 240)],
    };
    let info = VideoInfo::from_asset(&asset, false).expect("valid asset");
    assert_eq!(info.fps, 24);
    assert_eq!(info.size, FrameSize::new(1280, 720));
}

#[test]
fn decimal_fps_rejected_without_rounding() {
    let reason = expect_video_info_error(VideoInfo::from_asset(&FakeAsset::new(10, 29.97), false));
    assert!(reason.contains("Decimal FPS"), "unexpected reason: {reason}");
    assert!(reason.contains("--force"), "reason should name the flag: {reason}");
}

#[test]
fn decimal_fps_rounded_on_request() {
    let info = VideoInfo::from_asset(&FakeAsset::new(10, 29.97), true).expect("rounded fps");
    assert_eq!(info.fps, 30);
    assert_eq!(info.frame_count(), 300);

    let info = VideoInfo::from_asset(&FakeAsset::new(10, 23.976), true).expect("rounded fps");
    assert_eq!(info.fps, 24);
}

#[test]
fn integral_fps_unchanged_by_rounding() {
    let info = VideoInfo::from_asset(&FakeAsset::new(3, 25.0), true).expect("valid asset");
    assert_eq!(info.fps, 25);
}

#[test]
fn missing_video_track_fails() {
    let asset = FakeAsset {
        duration: MediaTime::new(10, 1),
        tracks: Vec::new(),
    };
    let reason = expect_video_info_error(VideoInfo::from_asset(&asset, true));
    assert!(reason.contains("track not found"), "unexpected reason: {reason}");
}

#[test]
fn missing_frame_rate_fails() {
    for round_fps in [false, true] {
        let reason =
            expect_video_info_error(VideoInfo::from_asset(&FakeAsset::new(10, 0.0), round_fps));
        assert!(reason.contains("frame rate unavailable"), "unexpected reason: {reason}");

        let reason = expect_video_info_error(VideoInfo::from_asset(
            &FakeAsset::new(10, f32::NAN),
            round_fps,
        ));
        assert!(reason.contains("frame rate unavailable"), "unexpected reason: {reason}");
    }

    // Rounds down to zero.
    let reason = expect_video_info_error(VideoInfo::from_asset(&FakeAsset::new(10, 0.3), true));
    assert!(reason.contains("frame rate unavailable"), "unexpected reason: {reason}");
}

#[test]
fn invalid_duration_fails() {
    let asset = FakeAsset {
        duration: MediaTime::new(10, 0),
        tracks: vec![track(30.0, 640, 480)],
    };
    expect_video_info_error(VideoInfo::from_asset(&asset, false));

    let asset = FakeAsset {
        duration: MediaTime::new(-5, 1),
        tracks: vec![track(30.0, 640, 480)],
    };
    expect_video_info_error(VideoInfo::from_asset(&asset, false));
}

#[test]
fn accepts_borrowed_asset() {
    let asset = FakeAsset::new(4, 30.0);
    let borrowed: &FakeAsset = &asset;
    let info = VideoInfo::from_asset(&borrowed, false).expect("valid asset");
    assert_eq!(info.frame_count(), 120);
}

// ── Helpers ────────────────────────────────────────────────────────

#[test]
fn frame_timestamp_divides_by_fps() {
    let info = VideoInfo::from_asset(&FakeAsset::new(10, 24.0), false).expect("valid asset");
    assert_eq!(info.frame_timestamp(0), 0.0);
    assert_eq!(info.frame_timestamp(48), 2.0);
}

#[test]
fn to_json_contains_all_fields() {
    let info = VideoInfo::from_asset(&FakeAsset::new(10, 30.0), false).expect("valid asset");
    let json = info.to_json();
    assert_eq!(json["duration_seconds"], 10.0);
    assert_eq!(json["fps"], 30);
    assert_eq!(json["width"], 1920);
    assert_eq!(json["height"], 1080);
    assert_eq!(json["frame_count"], 300);
}
