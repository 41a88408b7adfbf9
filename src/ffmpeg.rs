//! Keeping FFmpeg's own stderr output away from the progress line.
//!
//! FFmpeg prints diagnostics to stderr, independent of the `log` facade this
//! crate uses. During an extraction loop those messages tear through the
//! in-place progress line. [`quiet_ffmpeg`] lowers FFmpeg's verbosity for as
//! long as the returned guard lives and restores the previous level when it
//! drops.
//!
//! ```no_run
//! use std::time::Instant;
//!
//! use videoframes::{BarOptions, TerminalLine, VideoFramesError, progress::write_bar, quiet_ffmpeg};
//!
//! let _quiet = quiet_ffmpeg();
//! let mut line = TerminalLine::stdout();
//! let started = Instant::now();
//! for index in 0..100 {
//!     write_bar(&mut line, index, 100, started, &BarOptions::new())?;
//! }
//! line.finish()?;
//! # Ok::<(), VideoFramesError>(())
//! ```

use ffmpeg_next::util::log as ffmpeg_log;

pub use ffmpeg_next::util::log::Level as FfmpegLogLevel;

/// Level used by [`quiet_ffmpeg`]: errors still reach stderr.
pub const PROGRESS_LOG_LEVEL: FfmpegLogLevel = FfmpegLogLevel::Error;

/// Set FFmpeg's internal log level.
pub fn set_ffmpeg_log_level(level: FfmpegLogLevel) {
    log::debug!("Setting FFmpeg log level to {level:?}");
    ffmpeg_log::set_level(level);
}

/// Current FFmpeg log level, or `None` if it maps to no known level.
pub fn get_ffmpeg_log_level() -> Option<FfmpegLogLevel> {
    ffmpeg_log::get_level().ok()
}

/// Restores FFmpeg's previous log level when dropped.
#[derive(Debug)]
#[must_use = "FFmpeg output is restored as soon as the guard is dropped"]
pub struct FfmpegQuietGuard {
    previous: Option<FfmpegLogLevel>,
}

impl Drop for FfmpegQuietGuard {
    fn drop(&mut self) {
        if let Some(level) = self.previous {
            set_ffmpeg_log_level(level);
        }
    }
}

/// Lower FFmpeg's verbosity to [`PROGRESS_LOG_LEVEL`] until the guard drops.
///
/// If the current level is already at or below that, it is left alone.
pub fn quiet_ffmpeg() -> FfmpegQuietGuard {
    let previous = get_ffmpeg_log_level();
    let already_quiet = previous.is_some_and(|level| {
        i32::from(level) <= i32::from(PROGRESS_LOG_LEVEL)
    });

    if already_quiet {
        return FfmpegQuietGuard { previous: None };
    }

    set_ffmpeg_log_level(PROGRESS_LOG_LEVEL);
    FfmpegQuietGuard { previous }
}
