//! Textual progress bar for frame extraction loops.
//!
//! Each call is stateless: the caller keeps the loop index and the start
//! instant and passes them in on every iteration. A rendered line looks like
//!
//! ```text
//! [=========================                         ]   50%   6/11  0:03.120
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::time::Instant;
//!
//! use videoframes::{BarOptions, VideoFramesError, progress::log_bar};
//!
//! let started = Instant::now();
//! let options = BarOptions::new();
//! for index in 0..100 {
//!     // ... extract frame `index` ...
//!     log_bar(index, 100, started, &options)?;
//! }
//! # Ok::<(), VideoFramesError>(())
//! ```

use std::{
    io::Write,
    time::{Duration, Instant},
};

use crate::{
    config::BarOptions,
    error::VideoFramesError,
    format::{format_seconds_f64, sfill},
    terminal::TerminalLine,
};

/// Completed share of a loop over `count` items at 0-based `index`.
///
/// Computed as `index / (count - 1)` and clamped to `[0, 1]`. A loop of
/// zero or one item is always complete.
pub fn fraction(index: u64, count: u64) -> f64 {
    if count <= 1 {
        return 1.0;
    }
    (index as f64 / (count - 1) as f64).clamp(0.0, 1.0)
}

/// Render the bracketed bar of `length` cells.
pub fn render_cells(fraction: f64, length: usize) -> String {
    let mut bar = String::with_capacity(length + 2);
    bar.push('[');
    for cell in 0..length {
        let position = cell as f64 / length as f64;
        bar.push(if position < fraction { '=' } else { ' ' });
    }
    bar.push(']');
    bar
}

/// Render a complete progress line.
pub fn render_bar(index: u64, count: u64, elapsed: Duration, length: usize) -> String {
    let fraction = fraction(index, count);
    let bar = render_cells(fraction, length);

    let percent_value = (fraction * 100.0).round() as u64;
    let percent = format!("{}%", sfill(&percent_value.to_string(), 3));

    let total = count.to_string();
    let progress = format!(
        "{}/{total}",
        sfill(&index.saturating_add(1).to_string(), total.chars().count())
    );

    let timestamp = format_seconds_f64(elapsed.as_secs_f64());

    format!("{bar}  {percent}  {progress}  {timestamp}")
}

/// Emit a progress line for `index` out of `count` to `line`.
///
/// With [`BarOptions::clear`] the line replaces the previous one; otherwise
/// it is appended.
pub fn write_bar<W: Write>(
    line: &mut TerminalLine<W>,
    index: u64,
    count: u64,
    started: Instant,
    options: &BarOptions,
) -> Result<(), VideoFramesError> {
    let rendered = render_bar(index, count, started.elapsed(), options.length());
    if options.clear() {
        line.update(&rendered)?;
    } else {
        line.write_line(&rendered)?;
    }
    Ok(())
}

/// Emit a progress line for `index` out of `count` to standard output.
///
/// In-place clearing falls back to plain lines when standard output is not
/// a terminal.
///
/// Every call wraps standard output afresh, so the final `\r` line is never
/// terminated. Loops that print after the bar should keep one
/// [`TerminalLine`] and call [`write_bar`], then [`TerminalLine::finish`]:
///
/// ```no_run
/// use std::time::Instant;
///
/// use videoframes::{BarOptions, TerminalLine, VideoFramesError, progress::write_bar};
///
/// let mut line = TerminalLine::stdout();
/// let started = Instant::now();
/// for index in 0..100 {
///     write_bar(&mut line, index, 100, started, &BarOptions::new())?;
/// }
/// line.finish()?;
/// println!("done");
/// # Ok::<(), VideoFramesError>(())
/// ```
///
/// # Errors
///
/// Returns [`VideoFramesError::IoError`] if writing to standard output fails.
pub fn log_bar(
    index: u64,
    count: u64,
    started: Instant,
    options: &BarOptions,
) -> Result<(), VideoFramesError> {
    write_bar(&mut TerminalLine::stdout(), index, count, started, options)
}
