//! # Operation Outcome Module
//!
//! Questo modulo definisce il risultato strutturato di un'operazione, al
//! posto dei semplici messaggi stampati a console.
//!
//! ## Responsabilità:
//! - Distingue successo, fallimento di ffmpeg, ffmpeg non avviabile,
//!   operazione annullata e dry run
//! - Conserva il messaggio per l'utente e le eventuali note (es. qualità sconosciuta)
//! - Serializza in JSON per uso programmatico (`--json`)
//!
//! ## Esempio di output JSON:
//! ```json
//! {
//!   "operation": "cut_video",
//!   "status": { "type": "completed" },
//!   "message": "Video cut complete. Saved as cut.mp4",
//!   "output": "cut.mp4"
//! }
//! ```

use crate::operations::{Operation, OperationKind};
use crate::runner::ProcessStatus;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How an operation ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// ffmpeg ran and reported success
    Completed,
    /// ffmpeg ran and reported failure
    ToolFailed { exit_code: Option<i32> },
    /// ffmpeg could not be started
    ToolUnavailable { reason: String },
    /// Stopped before invoking ffmpeg
    Aborted { reason: String },
    /// Command shown, not executed
    DryRun { command_line: String },
}

/// Result of one menu operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationOutcome {
    pub operation: OperationKind,
    pub status: OutcomeStatus,
    pub message: String,
    pub output: PathBuf,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
}

impl OperationOutcome {
    /// Build the outcome of an operation that reached ffmpeg
    pub fn from_process(operation: &Operation, process: ProcessStatus, notices: Vec<String>) -> Self {
        let kind = operation.kind();
        let output = operation.output_path();

        let (status, message) = match process {
            ProcessStatus::Succeeded => (OutcomeStatus::Completed, operation.completion_message()),
            ProcessStatus::Failed { exit_code } => {
                let how = match exit_code {
                    Some(code) => format!("ffmpeg exited with status {}", code),
                    None => "ffmpeg was terminated by a signal".to_string(),
                };
                let message = format!(
                    "{} while {}. {} may be missing or incomplete.",
                    how,
                    kind.activity(),
                    output.display()
                );
                (OutcomeStatus::ToolFailed { exit_code }, message)
            }
            ProcessStatus::NotStarted { reason } => {
                let message = format!("Could not start ffmpeg: {}", reason);
                (OutcomeStatus::ToolUnavailable { reason }, message)
            }
            ProcessStatus::DryRun { command_line } => {
                let message = format!("Dry run: {}", command_line);
                (OutcomeStatus::DryRun { command_line }, message)
            }
        };

        Self {
            operation: kind,
            status,
            message,
            output,
            notices,
        }
    }

    /// Outcome of an operation stopped before ffmpeg was invoked
    pub fn aborted(operation: &Operation, reason: impl Into<String>, notices: Vec<String>) -> Self {
        let reason = reason.into();
        Self {
            operation: operation.kind(),
            message: reason.clone(),
            status: OutcomeStatus::Aborted { reason },
            output: operation.output_path(),
            notices,
        }
    }

    /// Completed, or shown in a dry run
    pub fn is_success(&self) -> bool {
        matches!(self.status, OutcomeStatus::Completed | OutcomeStatus::DryRun { .. })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Emit the outcome as one JSON line on stdout
    pub fn emit_json(&self) {
        if let Ok(json) = self.to_json() {
            println!("{}", json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract() -> Operation {
        Operation::ExtractAudio {
            input: PathBuf::from("talk.mp4"),
            output: PathBuf::from("talk.mp3"),
        }
    }

    #[test]
    fn test_success_uses_completion_message() {
        let outcome = OperationOutcome::from_process(&extract(), ProcessStatus::Succeeded, Vec::new());
        assert!(outcome.is_success());
        assert_eq!(outcome.message, "Audio extracted successfully. Saved as talk.mp3");
    }

    #[test]
    fn test_failure_is_not_reported_as_success() {
        let outcome =
            OperationOutcome::from_process(&extract(), ProcessStatus::Failed { exit_code: Some(1) }, Vec::new());
        assert!(!outcome.is_success());
        assert_eq!(outcome.status, OutcomeStatus::ToolFailed { exit_code: Some(1) });
        assert!(outcome.message.starts_with("ffmpeg exited with status 1 while extracting the audio"));
    }

    #[test]
    fn test_not_started() {
        let outcome = OperationOutcome::from_process(
            &extract(),
            ProcessStatus::NotStarted { reason: "not found".to_string() },
            Vec::new(),
        );
        assert!(!outcome.is_success());
        assert_eq!(outcome.message, "Could not start ffmpeg: not found");
    }

    #[test]
    fn test_aborted_json_shape() {
        let outcome = OperationOutcome::aborted(&extract(), "stopped", vec!["note".to_string()]);
        let value: serde_json::Value = serde_json::from_str(&outcome.to_json().unwrap()).unwrap();

        assert_eq!(value["operation"], "extract_audio");
        assert_eq!(value["status"]["type"], "aborted");
        assert_eq!(value["status"]["reason"], "stopped");
        assert_eq!(value["notices"][0], "note");
    }

    #[test]
    fn test_empty_notices_omitted() {
        let outcome = OperationOutcome::from_process(&extract(), ProcessStatus::Succeeded, Vec::new());
        let value: serde_json::Value = serde_json::from_str(&outcome.to_json().unwrap()).unwrap();
        assert!(value.get("notices").is_none());
        assert_eq!(value["status"]["type"], "completed");
    }
}
