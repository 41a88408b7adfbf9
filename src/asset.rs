//! Media asset abstraction.
//!
//! [`MediaAsset`] is the read-only view of a decodable media resource that
//! [`VideoInfo`](crate::VideoInfo) derives metadata from: a total duration
//! in the asset's own time base and an ordered list of video tracks.
//!
//! With the `ffmpeg` feature (on by default), [`FfmpegAsset`] implements the
//! trait by probing a file through FFmpeg. Other backends, and in-memory
//! fakes for testing, only need to implement the two accessors.

use crate::frame_image::FrameSize;

#[cfg(feature = "ffmpeg")]
use std::path::{Path, PathBuf};

#[cfg(feature = "ffmpeg")]
use ffmpeg_next::{Rational, codec::context::Context as CodecContext, media::Type};

#[cfg(feature = "ffmpeg")]
use crate::error::VideoFramesError;

/// A rational timestamp: `value` ticks of `1 / timescale` seconds each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaTime {
    /// Number of ticks.
    pub value: i64,
    /// Ticks per second. Zero marks an invalid time.
    pub timescale: i32,
}

impl MediaTime {
    /// The zero timestamp.
    pub const ZERO: MediaTime = MediaTime {
        value: 0,
        timescale: 1,
    };

    /// Create a timestamp from ticks and ticks-per-second.
    pub fn new(value: i64, timescale: i32) -> Self {
        Self { value, timescale }
    }

    /// Create a timestamp from ticks expressed in a `numerator / denominator`
    /// time base, as FFmpeg streams report them.
    pub fn from_time_base(value: i64, numerator: i32, denominator: i32) -> Self {
        Self {
            value: value.saturating_mul(i64::from(numerator)),
            timescale: denominator,
        }
    }

    /// Returns `true` when the timescale is positive.
    pub fn is_valid(&self) -> bool {
        self.timescale > 0
    }

    /// Convert to floating-point seconds.
    ///
    /// Returns NaN for an invalid timestamp.
    pub fn seconds(&self) -> f64 {
        if !self.is_valid() {
            return f64::NAN;
        }
        self.value as f64 / f64::from(self.timescale)
    }
}

/// A single video stream within an asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoTrack {
    /// Frame rate declared by the track. May be fractional (e.g. 29.97).
    pub nominal_frame_rate: f32,
    /// Pixel dimensions of decoded frames.
    pub natural_size: FrameSize,
}

/// Read-only access to the metadata of a decodable media resource.
pub trait MediaAsset {
    /// Total duration of the asset in its own time base.
    fn duration(&self) -> MediaTime;

    /// Video tracks in container order.
    fn video_tracks(&self) -> &[VideoTrack];
}

impl<A: MediaAsset + ?Sized> MediaAsset for &A {
    fn duration(&self) -> MediaTime {
        (**self).duration()
    }

    fn video_tracks(&self) -> &[VideoTrack] {
        (**self).video_tracks()
    }
}

/// FFmpeg's internal time base for container durations (microseconds).
#[cfg(feature = "ffmpeg")]
const AV_TIME_BASE: i32 = 1_000_000;

/// A media file probed through FFmpeg.
///
/// The demuxer is closed as soon as [`open`](FfmpegAsset::open) returns;
/// only the duration and per-track metadata are retained.
///
/// # Example
///
/// ```no_run
/// use videoframes::{FfmpegAsset, MediaAsset, VideoFramesError};
///
/// let asset = FfmpegAsset::open("input.mp4")?;
/// println!("{:.2}s, {} video track(s)", asset.duration().seconds(), asset.video_tracks().len());
/// # Ok::<(), VideoFramesError>(())
/// ```
#[cfg(feature = "ffmpeg")]
#[derive(Debug, Clone)]
pub struct FfmpegAsset {
    path: PathBuf,
    duration: MediaTime,
    video_tracks: Vec<VideoTrack>,
}

#[cfg(feature = "ffmpeg")]
impl FfmpegAsset {
    /// Open and probe a media file.
    ///
    /// # Errors
    ///
    /// - [`VideoFramesError::VideoNotFound`] if nothing exists at `path`.
    /// - [`VideoFramesError::FileOpen`] if FFmpeg cannot open the file or
    ///   read a video stream's codec parameters.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, VideoFramesError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            log::debug!("Media file does not exist: {}", path.display());
            return Err(VideoFramesError::VideoNotFound);
        }

        log::debug!("Opening media file: {}", path.display());

        ffmpeg_next::init().map_err(|error| VideoFramesError::FileOpen {
            path: path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input_context =
            ffmpeg_next::format::input(&path).map_err(|error| VideoFramesError::FileOpen {
                path: path.clone(),
                reason: error.to_string(),
            })?;

        let mut video_tracks = Vec::new();
        let mut stream_duration = None;

        for stream in input_context.streams() {
            if stream.parameters().medium() != Type::Video {
                continue;
            }

            let index = stream.index();
            let decoder_context =
                CodecContext::from_parameters(stream.parameters()).map_err(|error| {
                    VideoFramesError::FileOpen {
                        path: path.clone(),
                        reason: format!(
                            "Failed to read video codec parameters for stream {index}: {error}"
                        ),
                    }
                })?;
            let video_decoder =
                decoder_context
                    .decoder()
                    .video()
                    .map_err(|error| VideoFramesError::FileOpen {
                        path: path.clone(),
                        reason: format!(
                            "Failed to create video decoder for stream {index}: {error}"
                        ),
                    })?;

            // Prefer the average frame rate; fall back to the real base rate.
            let nominal_frame_rate = rational_to_rate(stream.avg_frame_rate())
                .or_else(|| rational_to_rate(stream.rate()))
                .unwrap_or(0.0);

            if stream_duration.is_none() && stream.duration() > 0 {
                let time_base = stream.time_base();
                stream_duration = Some(MediaTime::from_time_base(
                    stream.duration(),
                    time_base.numerator(),
                    time_base.denominator(),
                ));
            }

            video_tracks.push(VideoTrack {
                nominal_frame_rate,
                natural_size: FrameSize::new(video_decoder.width(), video_decoder.height()),
            });
        }

        let container_duration = input_context.duration();
        let duration = if container_duration > 0 {
            MediaTime::new(container_duration, AV_TIME_BASE)
        } else {
            stream_duration.unwrap_or(MediaTime::ZERO)
        };

        log::info!(
            "Opened media file: {} (format={}, duration={:.2}s, video_tracks={})",
            path.display(),
            input_context.format().name(),
            duration.seconds(),
            video_tracks.len(),
        );

        Ok(Self {
            path,
            duration,
            video_tracks,
        })
    }

    /// Path the asset was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(feature = "ffmpeg")]
impl MediaAsset for FfmpegAsset {
    fn duration(&self) -> MediaTime {
        self.duration
    }

    fn video_tracks(&self) -> &[VideoTrack] {
        &self.video_tracks
    }
}

#[cfg(feature = "ffmpeg")]
fn rational_to_rate(rate: Rational) -> Option<f32> {
    if rate.denominator() == 0 || rate.numerator() <= 0 {
        return None;
    }
    Some((f64::from(rate.numerator()) / f64::from(rate.denominator())) as f32)
}
