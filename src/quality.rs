//! Quality levels accepted by the convert operation and the x264 preset each one selects.

/// Notice attached to an outcome when the quality word is not recognised
pub const UNKNOWN_QUALITY_NOTICE: &str = "Unknown quality. Defaulting to medium.";

/// Requested output quality
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quality {
    Low,
    Medium,
    High,
    /// Anything else the user typed, kept for the notice
    Unknown(String),
}

impl Quality {
    /// Parse user text; case and surrounding whitespace are ignored.
    pub fn parse(text: &str) -> Self {
        let normalized = text.trim().to_lowercase();
        match normalized.as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown(normalized),
        }
    }

    /// x264 preset for this quality
    pub fn preset(&self) -> &'static str {
        match self {
            Self::Low => "fast",
            Self::Medium => "medium",
            Self::High => "slow",
            Self::Unknown(_) => "medium",
        }
    }

    /// Fallback notice, present only for unrecognised input
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Unknown(_) => Some(UNKNOWN_QUALITY_NOTICE),
            _ => None,
        }
    }
}
