//! # Command Runner Module
//!
//! Questo modulo esegue le invocazioni di ffmpeg e riporta in modo esplicito
//! come è andata.
//!
//! ## Responsabilità:
//! - `CommandRunner`: trait che separa la costruzione degli argomenti
//!   dall'esecuzione (i test usano un runner che registra le chiamate)
//! - `FfmpegRunner`: esegue il processo reale con `tokio::process`
//! - `DryRunRunner`: logga il comando invece di eseguirlo
//!
//! ## Stato del processo:
//! - `Succeeded`: il processo è terminato con exit code 0
//! - `Failed`: il processo è partito ma ha fallito (exit code != 0 o segnale)
//! - `NotStarted`: impossibile avviare il processo (binario mancante, permessi)
//! - `DryRun`: il comando non è stato eseguito
//!
//! ## I/O del processo:
//! Le operazioni ereditano stdin/stdout/stderr, così l'utente vede il
//! progresso di ffmpeg e può rispondere alle sue domande (es. sovrascrittura).
//! Il probe invece cattura stderr per il parser.

use crate::error::{MenuError, MenuResult};
use crate::operations::OperationArgs;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// How one external invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessStatus {
    Succeeded,
    Failed { exit_code: Option<i32> },
    NotStarted { reason: String },
    DryRun { command_line: String },
}

/// Executes ffmpeg invocations
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Program every invocation runs
    fn program(&self) -> &Path;

    /// Run to completion with inherited stdio
    async fn run(&self, args: &OperationArgs) -> ProcessStatus;

    /// Run to completion and return whatever the process wrote to stderr.
    /// The exit status is not inspected.
    async fn capture_stderr(&self, args: &OperationArgs) -> MenuResult<String>;
}

/// Runs the real ffmpeg binary
#[derive(Debug, Clone)]
pub struct FfmpegRunner {
    program: PathBuf,
}

impl FfmpegRunner {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }
}

impl CommandRunner for FfmpegRunner {
    fn program(&self) -> &Path {
        &self.program
    }

    async fn run(&self, args: &OperationArgs) -> ProcessStatus {
        debug!("Running: {}", args.to_command_line(&self.program));

        let start_time = std::time::Instant::now();
        let result = Command::new(&self.program).args(args.as_slice()).status().await;
        let elapsed = start_time.elapsed();

        match result {
            Ok(status) if status.success() => {
                debug!("{} finished in {:.1}s", self.program.display(), elapsed.as_secs_f64());
                ProcessStatus::Succeeded
            }
            Ok(status) => {
                warn!("{} failed after {:.1}s with {}", self.program.display(), elapsed.as_secs_f64(), status);
                ProcessStatus::Failed { exit_code: status.code() }
            }
            Err(e) => {
                warn!("Failed to execute {}: {}", self.program.display(), e);
                ProcessStatus::NotStarted { reason: e.to_string() }
            }
        }
    }

    async fn capture_stderr(&self, args: &OperationArgs) -> MenuResult<String> {
        debug!("Probing: {}", args.to_command_line(&self.program));

        let output = Command::new(&self.program)
            .args(args.as_slice())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| MenuError::Spawn {
                tool: self.program.display().to_string(),
                source,
            })?;

        Ok(String::from_utf8_lossy(&output.stderr).into_owned())
    }
}

/// Logs operation commands instead of running them; probes still run
#[derive(Debug, Clone)]
pub struct DryRunRunner<R> {
    inner: R,
}

impl<R: CommandRunner> DryRunRunner<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: CommandRunner> CommandRunner for DryRunRunner<R> {
    fn program(&self) -> &Path {
        self.inner.program()
    }

    async fn run(&self, args: &OperationArgs) -> ProcessStatus {
        let command_line = args.to_command_line(self.inner.program());
        info!("Dry run, not executing: {}", command_line);
        ProcessStatus::DryRun { command_line }
    }

    async fn capture_stderr(&self, args: &OperationArgs) -> MenuResult<String> {
        self.inner.capture_stderr(args).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records every invocation and answers with scripted results
    pub(crate) struct RecordingRunner {
        status: ProcessStatus,
        report: Option<String>,
        runs: Mutex<Vec<Vec<String>>>,
        captures: Mutex<Vec<Vec<String>>>,
        manifests: Mutex<Vec<String>>,
    }

    impl RecordingRunner {
        pub(crate) fn new(status: ProcessStatus) -> Self {
            Self {
                status,
                report: Some(String::new()),
                runs: Mutex::new(Vec::new()),
                captures: Mutex::new(Vec::new()),
                manifests: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn succeeding() -> Self {
            Self::new(ProcessStatus::Succeeded)
        }

        pub(crate) fn with_report(report: &str) -> Self {
            let mut runner = Self::succeeding();
            runner.report = Some(report.to_string());
            runner
        }

        /// Probes fail to start, as if ffmpeg were not installed
        pub(crate) fn missing_binary() -> Self {
            let mut runner = Self::new(ProcessStatus::NotStarted {
                reason: "No such file or directory (os error 2)".to_string(),
            });
            runner.report = None;
            runner
        }

        pub(crate) fn runs(&self) -> Vec<Vec<String>> {
            self.runs.lock().unwrap().clone()
        }

        pub(crate) fn captures(&self) -> Vec<Vec<String>> {
            self.captures.lock().unwrap().clone()
        }

        /// Manifest contents as they were when each concat run started
        pub(crate) fn manifests(&self) -> Vec<String> {
            self.manifests.lock().unwrap().clone()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn program(&self) -> &Path {
            Path::new("ffmpeg")
        }

        async fn run(&self, args: &OperationArgs) -> ProcessStatus {
            let args = args.as_slice().to_vec();
            if args.iter().any(|arg| arg == "concat") {
                if let Some(pos) = args.iter().position(|arg| arg == "-i") {
                    let body = std::fs::read_to_string(&args[pos + 1]).unwrap_or_default();
                    self.manifests.lock().unwrap().push(body);
                }
            }
            self.runs.lock().unwrap().push(args);
            self.status.clone()
        }

        async fn capture_stderr(&self, args: &OperationArgs) -> MenuResult<String> {
            self.captures.lock().unwrap().push(args.as_slice().to_vec());
            match &self.report {
                Some(report) => Ok(report.clone()),
                None => Err(MenuError::Spawn {
                    tool: "ffmpeg".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "ffmpeg not found"),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingRunner;
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_is_not_started() {
        let runner = FfmpegRunner::new("/nonexistent/bin/ffmpeg-for-tests");
        let status = runner.run(&OperationArgs::from(crate::args!["-version"])).await;
        assert!(matches!(status, ProcessStatus::NotStarted { .. }));
    }

    #[tokio::test]
    async fn test_capture_on_missing_binary_is_spawn_error() {
        let runner = FfmpegRunner::new("/nonexistent/bin/ffmpeg-for-tests");
        let err = runner
            .capture_stderr(&OperationArgs::from(crate::args!["-i", "x.mp4"]))
            .await
            .unwrap_err();
        assert!(matches!(err, MenuError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_failed() {
        let runner = FfmpegRunner::new("false");
        let status = runner.run(&OperationArgs::default()).await;
        assert_eq!(status, ProcessStatus::Failed { exit_code: Some(1) });
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_zero_exit_is_succeeded() {
        let runner = FfmpegRunner::new("true");
        let status = runner.run(&OperationArgs::default()).await;
        assert_eq!(status, ProcessStatus::Succeeded);
    }

    #[test]
    fn test_dry_run_skips_execution() {
        let dry = DryRunRunner::new(RecordingRunner::succeeding());
        let args = OperationArgs::from(crate::args!["-i", "in.mp4", "out.mkv"]);

        let status = tokio_test::block_on(dry.run(&args));

        assert_eq!(
            status,
            ProcessStatus::DryRun { command_line: "ffmpeg -i in.mp4 out.mkv".to_string() }
        );
        assert!(dry.inner.runs().is_empty());
    }

    #[test]
    fn test_dry_run_still_probes() {
        let dry = DryRunRunner::new(RecordingRunner::with_report("Duration: 00:00:01.00"));
        let report = tokio_test::block_on(dry.capture_stderr(&OperationArgs::from(crate::args!["-i", "a.mp4"])));
        assert_eq!(report.unwrap(), "Duration: 00:00:01.00");
        assert_eq!(dry.inner.captures().len(), 1);
    }
}
