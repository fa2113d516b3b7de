//! # Operation Argument Builder
//!
//! Traduce ogni `Operation` nella lista di argomenti per ffmpeg.
//!
//! ## Forme degli argomenti:
//! - Cut: `-i IN -ss START -to END -c copy OUT`
//! - Convert: `-i IN -vcodec libx264 -b:v Nk -acodec aac -b:a 128k -preset P OUT`
//! - Merge (video/audio): `-f concat -safe 0 -i MANIFEST -c copy OUT`
//! - Extract audio: `-i IN -q:a 0 -map a OUT`
//! - Resize: `-i IN -vf scale=W:H OUT`
//! - Watermark: `-i IN -i MARK -filter_complex overlay=POS OUT`
//! - Frames: `-i IN -vf fps=R PATTERN`
//! - Speed: `-i IN -filter:v setpts=S*PTS OUT`
//! - Subtitles: `-i IN -vf subtitles=SUBS OUT`
//! - Convert audio: `-i IN OUT`
//! - Slideshow: `-framerate R -pattern_type glob -i PATTERN -c:v libx264 -r 30 -pix_fmt yuv420p OUT` (`-r` da `slideshow_output_fps`)
//! - Convert format: `-i IN OUT.FORMAT`
//!
//! Convert e merge richiedono dati derivati (bitrate, manifest) e hanno
//! builder dedicati; tutte le altre passano da `direct_args`.

use super::{ConversionRequest, FfmpegArgs, Operation, OperationArgs};
use crate::bitrate::format_kbps;
use crate::config::Config;
use crate::utils::path_arg;
use std::path::Path;

/// Arguments for operations that need nothing but their own parameters.
///
/// Returns `None` for convert and merge operations, which need a probe or a
/// manifest first.
pub fn direct_args(operation: &Operation, config: &Config) -> Option<OperationArgs> {
    let ffmpeg = FfmpegArgs::new(config.overwrite);
    let output = path_arg(&operation.output_path());

    let args = match operation {
        Operation::ConvertVideo(_) | Operation::MergeVideos { .. } | Operation::MergeAudios { .. } => {
            return None;
        }
        Operation::CutVideo { input, start, end, .. } => ffmpeg
            .input(input)
            .option("-ss", start.as_str())
            .option("-to", end.as_str())
            .option("-c", "copy")
            .output(output),
        Operation::ExtractAudio { input, .. } => ffmpeg
            .input(input)
            .option("-q:a", "0")
            .option("-map", "a")
            .output(output),
        Operation::ResizeVideo { input, width, height, .. } => ffmpeg
            .input(input)
            .option("-vf", format!("scale={}:{}", width, height))
            .output(output),
        Operation::AddWatermark { input, watermark, position, .. } => ffmpeg
            .input(input)
            .input(watermark)
            .option("-filter_complex", format!("overlay={}", position))
            .output(output),
        Operation::ExtractFrames { input, frame_rate, .. } => ffmpeg
            .input(input)
            .option("-vf", format!("fps={}", frame_rate))
            .output(output),
        Operation::AdjustSpeed { input, speed, .. } => ffmpeg
            .input(input)
            .option("-filter:v", format!("setpts={}*PTS", speed))
            .output(output),
        Operation::AddSubtitles { input, subtitles, .. } => ffmpeg
            .input(input)
            .option("-vf", format!("subtitles={}", path_arg(subtitles)))
            .output(output),
        Operation::ConvertAudio { input, .. } | Operation::ConvertVideoFormat { input, .. } => {
            ffmpeg.input(input).output(output)
        }
        Operation::CreateSlideshow { image_pattern, frame_rate, .. } => ffmpeg
            .option("-framerate", frame_rate.as_str())
            .option("-pattern_type", "glob")
            .input_str(image_pattern)
            .option("-c:v", "libx264")
            .option("-r", config.slideshow_output_fps.to_string())
            .option("-pix_fmt", "yuv420p")
            .output(output),
    };

    Some(args)
}

/// Size-targeted x264/AAC transcode
pub fn transcode_args(request: &ConversionRequest, video_bitrate_bps: f64, config: &Config) -> OperationArgs {
    FfmpegArgs::new(config.overwrite)
        .input(&request.input_path)
        .option("-vcodec", "libx264")
        .option("-b:v", format_kbps(video_bitrate_bps))
        .option("-acodec", "aac")
        .option("-b:a", format!("{}k", config.audio_bitrate_kbps))
        .option("-preset", request.quality.preset())
        .output(path_arg(&request.output_path))
}

/// Stream-copy concatenation driven by a manifest file
pub fn concat_args(manifest: &Path, output: &Path, config: &Config) -> OperationArgs {
    FfmpegArgs::new(config.overwrite)
        .option("-f", "concat")
        .option("-safe", "0")
        .input(manifest)
        .option("-c", "copy")
        .output(path_arg(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::Quality;
    use std::path::PathBuf;

    fn build(operation: Operation) -> Vec<String> {
        direct_args(&operation, &Config::default()).unwrap().as_slice().to_vec()
    }

    #[test]
    fn test_cut_args() {
        let args = build(Operation::CutVideo {
            input: PathBuf::from("in.mp4"),
            start: "00:01:00".to_string(),
            end: "90".to_string(),
            output: PathBuf::from("out.mp4"),
        });
        assert_eq!(args, ["-i", "in.mp4", "-ss", "00:01:00", "-to", "90", "-c", "copy", "out.mp4"]);
    }

    #[test]
    fn test_extract_audio_args() {
        let args = build(Operation::ExtractAudio {
            input: PathBuf::from("in.mp4"),
            output: PathBuf::from("out.mp3"),
        });
        assert_eq!(args, ["-i", "in.mp4", "-q:a", "0", "-map", "a", "out.mp3"]);
    }

    #[test]
    fn test_resize_args() {
        let args = build(Operation::ResizeVideo {
            input: PathBuf::from("in.mp4"),
            width: "1280".to_string(),
            height: "-2".to_string(),
            output: PathBuf::from("small.mp4"),
        });
        assert_eq!(args, ["-i", "in.mp4", "-vf", "scale=1280:-2", "small.mp4"]);
    }

    #[test]
    fn test_watermark_args() {
        let args = build(Operation::AddWatermark {
            input: PathBuf::from("in.mp4"),
            watermark: PathBuf::from("logo.png"),
            position: "10:10".to_string(),
            output: PathBuf::from("marked.mp4"),
        });
        assert_eq!(
            args,
            ["-i", "in.mp4", "-i", "logo.png", "-filter_complex", "overlay=10:10", "marked.mp4"]
        );
    }

    #[test]
    fn test_frames_args() {
        let args = build(Operation::ExtractFrames {
            input: PathBuf::from("in.mp4"),
            frame_rate: "1/5".to_string(),
            output_pattern: "frame_%04d.png".to_string(),
        });
        assert_eq!(args, ["-i", "in.mp4", "-vf", "fps=1/5", "frame_%04d.png"]);
    }

    #[test]
    fn test_speed_args() {
        let args = build(Operation::AdjustSpeed {
            input: PathBuf::from("in.mp4"),
            speed: "0.5".to_string(),
            output: PathBuf::from("fast.mp4"),
        });
        assert_eq!(args, ["-i", "in.mp4", "-filter:v", "setpts=0.5*PTS", "fast.mp4"]);
    }

    #[test]
    fn test_subtitles_args() {
        let args = build(Operation::AddSubtitles {
            input: PathBuf::from("in.mp4"),
            subtitles: PathBuf::from("subs.srt"),
            output: PathBuf::from("subbed.mp4"),
        });
        assert_eq!(args, ["-i", "in.mp4", "-vf", "subtitles=subs.srt", "subbed.mp4"]);
    }

    #[test]
    fn test_convert_audio_args() {
        let args = build(Operation::ConvertAudio {
            input: PathBuf::from("song.wav"),
            output: PathBuf::from("song.flac"),
        });
        assert_eq!(args, ["-i", "song.wav", "song.flac"]);
    }

    #[test]
    fn test_slideshow_args() {
        let args = build(Operation::CreateSlideshow {
            image_pattern: "images/*.jpg".to_string(),
            frame_rate: "2".to_string(),
            output: PathBuf::from("show.mp4"),
        });
        assert_eq!(
            args,
            [
                "-framerate", "2", "-pattern_type", "glob", "-i", "images/*.jpg", "-c:v", "libx264", "-r", "30",
                "-pix_fmt", "yuv420p", "show.mp4"
            ]
        );
    }

    #[test]
    fn test_format_conversion_args() {
        let args = build(Operation::ConvertVideoFormat {
            input: PathBuf::from("talk.avi"),
            format: "mp4".to_string(),
            output_stem: PathBuf::from("talk"),
        });
        assert_eq!(args, ["-i", "talk.avi", "talk.mp4"]);
    }

    #[test]
    fn test_derived_operations_have_no_direct_args() {
        let merge = Operation::MergeAudios {
            inputs: vec![PathBuf::from("a.mp3")],
            output: PathBuf::from("all.mp3"),
        };
        assert!(direct_args(&merge, &Config::default()).is_none());
    }

    #[test]
    fn test_transcode_args() {
        let request = ConversionRequest {
            input_path: PathBuf::from("in.mov"),
            target_size_mb: 10.0,
            quality: Quality::High,
            output_path: PathBuf::from("out.mp4"),
        };
        let args = transcode_args(&request, 707_788.8, &Config::default());
        assert_eq!(
            args.as_slice(),
            [
                "-i", "in.mov", "-vcodec", "libx264", "-b:v", "707k", "-acodec", "aac", "-b:a", "128k", "-preset",
                "slow", "out.mp4"
            ]
        );
    }

    #[test]
    fn test_concat_args() {
        let args = concat_args(Path::new("./concat_ab12.txt"), Path::new("all.mp4"), &Config::default());
        assert_eq!(
            args.as_slice(),
            ["-f", "concat", "-safe", "0", "-i", "./concat_ab12.txt", "-c", "copy", "all.mp4"]
        );
    }

    #[test]
    fn test_overwrite_and_slideshow_fps_from_config() {
        let config = Config {
            overwrite: true,
            slideshow_output_fps: 24,
            ..Config::default()
        };
        let op = Operation::CreateSlideshow {
            image_pattern: "*.png".to_string(),
            frame_rate: "1".to_string(),
            output: PathBuf::from("s.mp4"),
        };
        let args = direct_args(&op, &config).unwrap();
        assert_eq!(args.as_slice()[0], "-y");
        assert!(args.as_slice().windows(2).any(|pair| pair == ["-r", "24"]));
    }
}
