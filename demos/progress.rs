//! Walk a video's frame timeline with a live progress bar.
//!
//! Usage:
//!   cargo run --example progress -- <input_file> [--force]

use std::{
    error::Error,
    thread,
    time::{Duration, Instant},
};

use videoframes::{
    BarOptions, TerminalLine, VideoInfo,
    format::{format_seconds_f64, zfill},
    progress::write_bar,
    quiet_ffmpeg,
};

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let input_path = args.next().unwrap_or_else(|| "input.mp4".to_string());
    let round_fps = args.any(|arg| arg == "--force");

    let _quiet = quiet_ffmpeg();

    let info = VideoInfo::probe(&input_path, round_fps)?;
    println!("{}", serde_json::to_string_pretty(&info.to_json())?);

    let count = info.frame_count();
    let digits = count.to_string().len();
    let options = BarOptions::new();
    let mut line = TerminalLine::stdout();
    let started = Instant::now();

    for index in 0..count {
        // Stand-in for decoding and writing the frame.
        let _name = format!("frame_{}.png", zfill(&index.to_string(), digits));
        thread::sleep(Duration::from_millis(2));
        write_bar(&mut line, index, count, started, &options)?;
    }
    line.finish()?;

    println!(
        "Visited {count} frame(s) covering {}",
        format_seconds_f64(info.duration)
    );
    Ok(())
}
