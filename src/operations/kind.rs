//! Menu entries: numbering, titles and the wording used in outcome messages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of the numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    CutVideo,
    ConvertVideo,
    MergeVideos,
    MergeAudios,
    ExtractAudio,
    ResizeVideo,
    AddWatermark,
    ExtractFrames,
    AdjustSpeed,
    AddSubtitles,
    ConvertAudio,
    CreateSlideshow,
    ConvertVideoFormat,
}

impl OperationKind {
    /// Menu order
    pub const ALL: [OperationKind; 13] = [
        Self::CutVideo,
        Self::ConvertVideo,
        Self::MergeVideos,
        Self::MergeAudios,
        Self::ExtractAudio,
        Self::ResizeVideo,
        Self::AddWatermark,
        Self::ExtractFrames,
        Self::AdjustSpeed,
        Self::AddSubtitles,
        Self::ConvertAudio,
        Self::CreateSlideshow,
        Self::ConvertVideoFormat,
    ];

    /// 1-based menu number
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|kind| *kind == self).map_or(0, |index| index + 1)
    }

    /// Look up the entry for what the user typed at the menu prompt
    pub fn from_choice(choice: &str) -> Option<Self> {
        let number: usize = choice.trim().parse().ok()?;
        number.checked_sub(1).and_then(|index| Self::ALL.get(index)).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::CutVideo => "Cut Video",
            Self::ConvertVideo => "Convert Video",
            Self::MergeVideos => "Merge Videos",
            Self::MergeAudios => "Merge Audios",
            Self::ExtractAudio => "Extract Audio from Video",
            Self::ResizeVideo => "Resize Video",
            Self::AddWatermark => "Add Watermark to Video",
            Self::ExtractFrames => "Extract Frames from Video",
            Self::AdjustSpeed => "Adjust Video Speed",
            Self::AddSubtitles => "Add Subtitles to Video",
            Self::ConvertAudio => "Convert Audio Format",
            Self::CreateSlideshow => "Create Video Slideshow from Images",
            Self::ConvertVideoFormat => "Convert Video Format",
        }
    }

    /// First sentence of the success message
    pub fn completion_phrase(self) -> &'static str {
        match self {
            Self::CutVideo => "Video cut complete.",
            Self::ConvertVideo => "Video conversion complete.",
            Self::MergeVideos => "Videos merged successfully.",
            Self::MergeAudios => "Audios merged successfully.",
            Self::ExtractAudio => "Audio extracted successfully.",
            Self::ResizeVideo => "Video resized successfully.",
            Self::AddWatermark => "Watermark added successfully.",
            Self::ExtractFrames => "Frames extracted successfully.",
            Self::AdjustSpeed => "Video speed adjusted successfully.",
            Self::AddSubtitles => "Subtitles added successfully.",
            Self::ConvertAudio => "Audio conversion complete.",
            Self::CreateSlideshow => "Slideshow created successfully.",
            Self::ConvertVideoFormat => "Video format converted successfully.",
        }
    }

    /// Gerund used in failure messages ("while cutting the video")
    pub fn activity(self) -> &'static str {
        match self {
            Self::CutVideo => "cutting the video",
            Self::ConvertVideo => "converting the video",
            Self::MergeVideos => "merging the videos",
            Self::MergeAudios => "merging the audio files",
            Self::ExtractAudio => "extracting the audio",
            Self::ResizeVideo => "resizing the video",
            Self::AddWatermark => "adding the watermark",
            Self::ExtractFrames => "extracting frames",
            Self::AdjustSpeed => "adjusting the video speed",
            Self::AddSubtitles => "adding subtitles",
            Self::ConvertAudio => "converting the audio",
            Self::CreateSlideshow => "creating the slideshow",
            Self::ConvertVideoFormat => "converting the video format",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}
