//! # Utility Functions Module
//!
//! Small helpers for assembling ffmpeg argument vectors.

use std::path::Path;

/// Renders a path as a single ffmpeg argument.
///
/// Non UTF-8 sequences are replaced rather than rejected; ffmpeg would not
/// open such a path through a lossy conversion either, and it reports that
/// itself.
pub fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Macro for building argument vectors from mixed literals and values.
///
/// ffmpeg arguments mix literals (`"-i"`), numbers and formatted filters;
/// every item goes through `ToString` into the `Vec<String>` the runner expects.
///
/// # Example
/// ```rust
/// use media_menu::args;
///
/// let preset = "slow";
/// let args = args!["-preset", preset, "-r", 30];
/// assert_eq!(args, vec!["-preset", "slow", "-r", "30"]);
/// ```
#[macro_export]
macro_rules! args {
    [$($item:expr),* $(,)?] => {
        vec![$(::std::string::ToString::to_string(&$item)),*]
    };
}
