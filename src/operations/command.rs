//! Argument lists for a single ffmpeg invocation.

use crate::utils::path_arg;
use std::path::Path;

/// Ordered arguments for one ffmpeg invocation, program name excluded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationArgs {
    args: Vec<String>,
}

impl OperationArgs {
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    /// Shell-like rendering for logs and dry runs
    pub fn to_command_line(&self, program: &Path) -> String {
        std::iter::once(path_arg(program))
            .chain(self.args.iter().map(|arg| quote_for_display(arg)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Vec<String>> for OperationArgs {
    fn from(args: Vec<String>) -> Self {
        Self { args }
    }
}

fn quote_for_display(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_string()
    }
}

/// Builder for ffmpeg argument lists
#[derive(Debug, Default)]
pub struct FfmpegArgs {
    args: Vec<String>,
}

impl FfmpegArgs {
    /// Start a new list; `overwrite` answers ffmpeg's overwrite prompt with `-y`
    pub fn new(overwrite: bool) -> Self {
        let mut builder = Self::default();
        if overwrite {
            builder.args.push("-y".to_string());
        }
        builder
    }

    /// `-i <path>`
    #[must_use]
    pub fn input(self, path: &Path) -> Self {
        self.input_str(&path_arg(path))
    }

    /// `-i <spec>` for inputs that are not plain paths (glob patterns)
    #[must_use]
    pub fn input_str(mut self, spec: &str) -> Self {
        self.args.push("-i".to_string());
        self.args.push(spec.to_string());
        self
    }

    /// `<flag> <value>`
    #[must_use]
    pub fn option(mut self, flag: &str, value: impl Into<String>) -> Self {
        self.args.push(flag.to_string());
        self.args.push(value.into());
        self
    }

    /// Final positional argument, usually the output path
    pub fn output(mut self, target: impl Into<String>) -> OperationArgs {
        self.args.push(target.into());
        OperationArgs { args: self.args }
    }
}
