//! Single-line error reports for log transport
//!
//! Renders an error chain and its captured backtrace into one diagnostic line
//! so a whole failure fits a single log entry. Frame capture follows the
//! standard `RUST_BACKTRACE` rules; without it the trace part collapses to the
//! placeholder the runtime emits.

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ReportConfig;

/// Marker inserted between the head and tail frames of a truncated trace
const ELIDED_MARKER: &str = "...";

static FRAME_LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bat\s+(?P<file>\S+?):(?P<line>\d+)(?::\d+)?\s*$").expect("frame location pattern"));

/// Source location extracted from a rendered backtrace line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub file: String,
    pub line: u32,
}

/// Render an error into a single diagnostic line.
///
/// The line carries the local timestamp, the failing function's name, an
/// optional delay in seconds, the full error chain, and the backtrace frames
/// joined by tabs. `cfg.show_all` keeps every frame; otherwise only the first
/// and last `cfg.shownums` frames survive, with an elision marker between.
/// With `cfg.brief` the configured path redactions are applied to the frames.
pub fn format_error_report(
    err: &anyhow::Error,
    func_name: &str,
    delay: Option<u64>,
    cfg: &ReportConfig,
) -> String {
    let now = Local::now().format("%F %T");
    let chain = err.chain().map(|cause| cause.to_string()).collect::<Vec<_>>().join(": ");

    let mut frames = backtrace_lines(err);
    frames = truncate_frames(frames, cfg);
    if cfg.brief {
        frames = redact_frames(frames, cfg);
    }

    let mut line = format!("[{}] failed at {}", func_name, now);
    if let Some(delay) = delay {
        line.push_str(&format!(" (delay {}s)", delay));
    }
    line.push_str(&format!(": {}; trace: {}", chain, frames.join("\t")));
    line
}

/// Extract the source location from a rendered backtrace line, if it has one.
pub fn parse_frame(line: &str) -> Option<Frame> {
    let caps = FRAME_LOCATION.captures(line)?;
    Some(Frame {
        file: caps["file"].to_string(),
        line: caps["line"].parse().ok()?,
    })
}

fn backtrace_lines(err: &anyhow::Error) -> Vec<String> {
    err.backtrace()
        .to_string()
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn truncate_frames(frames: Vec<String>, cfg: &ReportConfig) -> Vec<String> {
    if cfg.show_all || frames.len() <= cfg.shownums * 2 {
        return frames;
    }

    let mut kept = frames[..cfg.shownums].to_vec();
    kept.push(ELIDED_MARKER.to_string());
    kept.extend_from_slice(&frames[frames.len() - cfg.shownums..]);
    kept
}

fn redact_frames(frames: Vec<String>, cfg: &ReportConfig) -> Vec<String> {
    frames
        .into_iter()
        .map(|frame| {
            cfg.redactions
                .iter()
                .fold(frame, |acc, redaction| acc.replace(&redaction.from, &redaction.to))
        })
        .collect()
}
