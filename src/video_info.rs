//! Video metadata derivation.
//!
//! [`VideoInfo`] is read once from a [`MediaAsset`] at the start of an
//! extraction run and stays unchanged for its lifetime. Only integral frame
//! rates are accepted; a fractional rate such as 29.97 is rejected unless
//! the caller opts into rounding.
//!
//! # Example
//!
//! ```no_run
//! use videoframes::{VideoFramesError, VideoInfo};
//!
//! # #[cfg(feature = "ffmpeg")] {
//! let info = VideoInfo::probe("input.mp4", true)?;
//! println!(
//!     "{}x{} @ {} fps, {} frames",
//!     info.size.width, info.size.height, info.fps, info.frame_count(),
//! );
//! # }
//! # Ok::<(), VideoFramesError>(())
//! ```

use serde_json::{Value, json};

use crate::{asset::MediaAsset, error::VideoFramesError, frame_image::FrameSize};

#[cfg(feature = "ffmpeg")]
use std::path::Path;

/// Basic metadata of the first video track in an asset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct VideoInfo {
    /// Total duration in seconds.
    pub duration: f64,
    /// Integral frames per second.
    pub fps: u32,
    /// Frame dimensions in pixels.
    pub size: FrameSize,
}

impl VideoInfo {
    /// Derive metadata from an asset.
    ///
    /// When `round_fps` is set the nominal frame rate is rounded to the
    /// nearest integer before validation.
    ///
    /// # Errors
    ///
    /// Returns [`VideoFramesError::VideoInfo`] if the asset has no video
    /// track, its duration is not a finite non-negative number of seconds,
    /// its frame rate is zero or unknown, or its frame rate is fractional
    /// and `round_fps` is `false`.
    pub fn from_asset<A: MediaAsset>(asset: &A, round_fps: bool) -> Result<Self, VideoFramesError> {
        let track = asset
            .video_tracks()
            .first()
            .ok_or_else(|| VideoFramesError::VideoInfo("Video asset track not found.".to_string()))?;

        let duration = asset.duration().seconds();
        if !duration.is_finite() || duration < 0.0 {
            return Err(VideoFramesError::VideoInfo(format!(
                "Invalid video duration: {duration}"
            )));
        }

        let mut raw_fps = track.nominal_frame_rate;
        if round_fps {
            let rounded = raw_fps.round();
            if rounded != raw_fps {
                log::info!("Rounding frame rate {raw_fps} to {rounded}");
            }
            raw_fps = rounded;
        }

        if raw_fps.is_nan() || raw_fps <= 0.0 {
            log::debug!("Rejecting unusable frame rate {raw_fps}");
            return Err(VideoFramesError::VideoInfo(
                "Video frame rate unavailable.".to_string(),
            ));
        }

        if !is_integral_rate(raw_fps) {
            log::debug!("Rejecting decimal frame rate {raw_fps}");
            return Err(VideoFramesError::VideoInfo(
                "Decimal FPS not supported. Use --force flag to round fps.".to_string(),
            ));
        }

        let info = Self {
            duration,
            fps: raw_fps as u32,
            size: track.natural_size,
        };

        log::debug!(
            "Video info: {}x{}, {} fps, {:.3}s, {} frames",
            info.size.width,
            info.size.height,
            info.fps,
            info.duration,
            info.frame_count(),
        );

        Ok(info)
    }

    /// Open a media file with FFmpeg and derive its metadata.
    ///
    /// # Errors
    ///
    /// Any error from [`FfmpegAsset::open`](crate::FfmpegAsset::open) or
    /// [`from_asset`](VideoInfo::from_asset).
    #[cfg(feature = "ffmpeg")]
    pub fn probe<P: AsRef<Path>>(path: P, round_fps: bool) -> Result<Self, VideoFramesError> {
        let asset = crate::asset::FfmpegAsset::open(path)?;
        Self::from_asset(&asset, round_fps)
    }

    /// Total number of frames, `floor(duration * fps)`.
    pub fn frame_count(&self) -> u64 {
        (self.duration * f64::from(self.fps)) as u64
    }

    /// Presentation time of frame `index` in seconds.
    ///
    /// Returns `0.0` when the frame rate is zero.
    pub fn frame_timestamp(&self, index: u64) -> f64 {
        if self.fps == 0 {
            return 0.0;
        }
        index as f64 / f64::from(self.fps)
    }

    /// Machine-readable summary.
    pub fn to_json(&self) -> Value {
        json!({
            "duration_seconds": self.duration,
            "fps": self.fps,
            "width": self.size.width,
            "height": self.size.height,
            "frame_count": self.frame_count(),
        })
    }
}

/// Casting to an integer and back must reproduce the rate exactly.
fn is_integral_rate(rate: f32) -> bool {
    (rate as i64) as f32 == rate
}
