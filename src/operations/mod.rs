//! # Operations Module
//!
//! Le tredici operazioni del menu, separate in sottomoduli:
//! - `kind`: numerazione del menu, titoli e messaggi
//! - `command`: `OperationArgs` e builder degli argomenti ffmpeg
//! - `builder`: la forma degli argomenti per ogni operazione
//! - `executor`: probe, bitrate, manifest, esecuzione e `OperationOutcome`

pub mod builder;
pub mod command;
pub mod executor;
pub mod kind;

pub use command::{FfmpegArgs, OperationArgs};
pub use executor::OperationExecutor;
pub use kind::OperationKind;

use crate::quality::Quality;
use std::path::PathBuf;

/// Parameters of a size-targeted transcode
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    /// Desired output size in megabytes, always > 0
    pub target_size_mb: f64,
    pub quality: Quality,
    pub output_path: PathBuf,
}

/// One fully specified menu operation.
///
/// Text fields (times, sizes, rates) are passed to ffmpeg exactly as typed.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    CutVideo {
        input: PathBuf,
        start: String,
        end: String,
        output: PathBuf,
    },
    ConvertVideo(ConversionRequest),
    MergeVideos {
        inputs: Vec<PathBuf>,
        output: PathBuf,
    },
    MergeAudios {
        inputs: Vec<PathBuf>,
        output: PathBuf,
    },
    ExtractAudio {
        input: PathBuf,
        output: PathBuf,
    },
    ResizeVideo {
        input: PathBuf,
        width: String,
        height: String,
        output: PathBuf,
    },
    AddWatermark {
        input: PathBuf,
        watermark: PathBuf,
        position: String,
        output: PathBuf,
    },
    ExtractFrames {
        input: PathBuf,
        frame_rate: String,
        output_pattern: String,
    },
    AdjustSpeed {
        input: PathBuf,
        speed: String,
        output: PathBuf,
    },
    AddSubtitles {
        input: PathBuf,
        subtitles: PathBuf,
        output: PathBuf,
    },
    ConvertAudio {
        input: PathBuf,
        output: PathBuf,
    },
    CreateSlideshow {
        image_pattern: String,
        frame_rate: String,
        output: PathBuf,
    },
    ConvertVideoFormat {
        input: PathBuf,
        format: String,
        /// Output name without extension
        output_stem: PathBuf,
    },
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::CutVideo { .. } => OperationKind::CutVideo,
            Self::ConvertVideo(_) => OperationKind::ConvertVideo,
            Self::MergeVideos { .. } => OperationKind::MergeVideos,
            Self::MergeAudios { .. } => OperationKind::MergeAudios,
            Self::ExtractAudio { .. } => OperationKind::ExtractAudio,
            Self::ResizeVideo { .. } => OperationKind::ResizeVideo,
            Self::AddWatermark { .. } => OperationKind::AddWatermark,
            Self::ExtractFrames { .. } => OperationKind::ExtractFrames,
            Self::AdjustSpeed { .. } => OperationKind::AdjustSpeed,
            Self::AddSubtitles { .. } => OperationKind::AddSubtitles,
            Self::ConvertAudio { .. } => OperationKind::ConvertAudio,
            Self::CreateSlideshow { .. } => OperationKind::CreateSlideshow,
            Self::ConvertVideoFormat { .. } => OperationKind::ConvertVideoFormat,
        }
    }

    /// Where ffmpeg is told to write; for frame extraction this is the name pattern
    pub fn output_path(&self) -> PathBuf {
        match self {
            Self::ConvertVideo(request) => request.output_path.clone(),
            Self::ExtractFrames { output_pattern, .. } => PathBuf::from(output_pattern),
            Self::ConvertVideoFormat { format, output_stem, .. } => {
                PathBuf::from(format!("{}.{}", output_stem.display(), format))
            }
            Self::CutVideo { output, .. }
            | Self::MergeVideos { output, .. }
            | Self::MergeAudios { output, .. }
            | Self::ExtractAudio { output, .. }
            | Self::ResizeVideo { output, .. }
            | Self::AddWatermark { output, .. }
            | Self::AdjustSpeed { output, .. }
            | Self::AddSubtitles { output, .. }
            | Self::ConvertAudio { output, .. }
            | Self::CreateSlideshow { output, .. } => output.clone(),
        }
    }

    /// Message shown once ffmpeg reports success
    pub fn completion_message(&self) -> String {
        format!(
            "{} Saved as {}",
            self.kind().completion_phrase(),
            self.output_path().display()
        )
    }
}
