//! Error types for the `videoframes` crate.
//!
//! [`VideoFramesError`] is returned by every fallible operation. The three
//! core conditions are [`VideoNotFound`](VideoFramesError::VideoNotFound),
//! [`FramePixelBuffer`](VideoFramesError::FramePixelBuffer) and
//! [`VideoInfo`](VideoFramesError::VideoInfo); the rest wrap upstream
//! failures from FFmpeg, the filesystem, and the `image` crate.

use std::{io::Error as IoError, path::PathBuf};

use image::ImageError;
use thiserror::Error;

/// The unified error type for all `videoframes` operations.
///
/// None of these are retried internally. A failed metadata read never yields
/// a partial [`VideoInfo`](crate::VideoInfo).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VideoFramesError {
    /// The video path could not be resolved.
    #[error("Video not found")]
    VideoNotFound,

    /// A frame failed to materialize as a pixel buffer.
    #[error("Failed to create frame pixel buffer: {0}")]
    FramePixelBuffer(String),

    /// Video metadata could not be derived from the asset.
    #[error("Failed to read video info: {0}")]
    VideoInfo(String),

    /// The media file exists but could not be opened as an asset.
    #[error("Failed to open media file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`FfmpegAsset::open`](crate::FfmpegAsset::open).
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// An error originating from the FFmpeg libraries.
    #[error("FFmpeg error: {0}")]
    FfmpegError(String),

    /// Writing to the output stream or a file failed.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    /// An error from the `image` crate while loading or saving a frame.
    #[error("Image processing error: {0}")]
    ImageError(#[from] ImageError),
}

#[cfg(feature = "ffmpeg")]
impl From<ffmpeg_next::Error> for VideoFramesError {
    fn from(error: ffmpeg_next::Error) -> Self {
        VideoFramesError::FfmpegError(error.to_string())
    }
}
