//! # Media Info Parser Module
//!
//! Questo modulo estrae le informazioni minime su un file media dal testo
//! diagnostico che `ffmpeg -i <file>` scrive su stderr.
//!
//! ## Responsabilità:
//! - Codec del primo stream video (`Stream #0:0 ... Video: h264 (High), ...`)
//! - Codec del primo stream audio (`Stream #0:1 ... Audio: aac (LC), ...`)
//! - Durata (`Duration: 00:01:30.50`) convertita in secondi
//!
//! ## Regole di estrazione:
//! - Il codec è il testo dopo `Video:`/`Audio:` fino alla prima virgola
//! - Solo il primo stream di ogni tipo viene considerato
//! - Un pattern assente produce `None`, mai un errore
//!
//! ## Esempio:
//! ```rust
//! use media_menu::media_info::parse_media_info;
//!
//! let info = parse_media_info("  Duration: 00:00:10.00, start: 0.000000");
//! assert_eq!(info.duration_seconds, Some(10.0));
//! assert!(info.video_codec.is_none());
//! ```

use crate::error::MenuResult;
use crate::operations::OperationArgs;
use crate::runner::CommandRunner;
use crate::utils::path_arg;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// What the probe report told us about a file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaInfo {
    pub video_codec: Option<String>,
    pub audio_codec: Option<String>,
    pub duration_seconds: Option<f64>,
}

fn video_stream_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Stream #\d+:\d+.*Video: (.*)").expect("valid video stream pattern"))
}

fn audio_stream_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Stream #\d+:\d+.*Audio: (.*)").expect("valid audio stream pattern"))
}

fn duration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Duration: (\d+):(\d+):(\d+\.\d+)").expect("valid duration pattern"))
}

/// Parse the diagnostic text of a probe run
pub fn parse_media_info(report: &str) -> MediaInfo {
    MediaInfo {
        video_codec: first_codec(video_stream_re(), report),
        audio_codec: first_codec(audio_stream_re(), report),
        duration_seconds: parse_duration(report),
    }
}

fn first_codec(re: &Regex, report: &str) -> Option<String> {
    re.captures(report)
        .and_then(|caps| caps.get(1))
        .map(|m| codec_token(m.as_str()).to_string())
}

/// The codec token is everything before the first comma of a stream descriptor.
pub fn codec_token(descriptor: &str) -> &str {
    descriptor.split(',').next().unwrap_or(descriptor)
}

/// Total seconds from the first `Duration: HH:MM:SS.frac` field, if any.
pub fn parse_duration(report: &str) -> Option<f64> {
    let caps = duration_re().captures(report)?;
    let hours: f64 = caps[1].parse().ok()?;
    let minutes: f64 = caps[2].parse().ok()?;
    let seconds: f64 = caps[3].parse().ok()?;

    // Sum in f64 so absurd hour fields cannot overflow an integer
    Some(hours * 3600.0 + minutes * 60.0 + seconds)
}

/// Run `ffmpeg -i <input>` and parse what it reports.
///
/// ffmpeg exits non-zero when no output is given, so only a failure to start
/// the process is treated as an error.
pub async fn probe<R: CommandRunner>(runner: &R, input: &Path) -> MenuResult<MediaInfo> {
    let args = OperationArgs::from(crate::args!["-i", path_arg(input)]);
    let report = runner.capture_stderr(&args).await?;
    let info = parse_media_info(&report);

    debug!(
        "Probed {}: video={:?} audio={:?} duration={:?}",
        input.display(),
        info.video_codec,
        info.audio_codec,
        info.duration_seconds
    );

    Ok(info)
}
