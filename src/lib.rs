//! # videoframes
//!
//! Helpers for video frame extraction tools: derive basic video metadata
//! from a media asset, format padded numerals and elapsed times, and draw a
//! textual progress bar while frames are written.
//!
//! ## Quick Start
//!
//! ### Read Video Info
//!
//! ```no_run
//! use videoframes::{VideoFramesError, VideoInfo};
//!
//! # #[cfg(feature = "ffmpeg")] {
//! // Round 29.97 fps to 30 instead of rejecting it.
//! let info = VideoInfo::probe("input.mp4", true)?;
//! println!("{} frames at {} fps", info.frame_count(), info.fps);
//! # }
//! # Ok::<(), VideoFramesError>(())
//! ```
//!
//! ### Report Progress
//!
//! ```no_run
//! use std::time::Instant;
//!
//! use videoframes::{BarOptions, VideoFramesError, progress::log_bar};
//!
//! let started = Instant::now();
//! for index in 0..240 {
//!     log_bar(index, 240, started, &BarOptions::new())?;
//! }
//! # Ok::<(), VideoFramesError>(())
//! ```
//!
//! ### Format Numbers
//!
//! ```
//! use videoframes::format::{format_seconds_f64, zfill};
//!
//! assert_eq!(format!("frame_{}.png", zfill("42", 6)), "frame_000042.png");
//! assert_eq!(format_seconds_f64(3661.25), "1:01:01.250");
//! ```
//!
//! ## Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `ffmpeg` | `FfmpegAsset`, `VideoInfo::probe`, and `quiet_ffmpeg` (default) |
//!
//! Without `ffmpeg`, implement [`MediaAsset`] for your own backend and use
//! [`VideoInfo::from_asset`].

pub mod asset;
pub mod config;
pub mod error;
#[cfg(feature = "ffmpeg")]
pub mod ffmpeg;
pub mod format;
pub mod frame_image;
pub mod progress;
pub mod terminal;
pub mod video_info;

#[cfg(feature = "ffmpeg")]
pub use asset::FfmpegAsset;
pub use asset::{MediaAsset, MediaTime, VideoTrack};
pub use config::BarOptions;
pub use error::VideoFramesError;
#[cfg(feature = "ffmpeg")]
pub use ffmpeg::{
    FfmpegLogLevel, FfmpegQuietGuard, get_ffmpeg_log_level, quiet_ffmpeg, set_ffmpeg_log_level,
};
pub use frame_image::{FrameImage, FrameSize, PixelFormat};
pub use terminal::TerminalLine;
pub use video_info::VideoInfo;
