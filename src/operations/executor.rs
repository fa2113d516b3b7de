//! # Operation Executor
//!
//! Esegue un'operazione del menu dall'inizio alla fine.
//!
//! ## Flusso:
//! 1. **Convert**: probe del file → durata → stima bitrate → preset → ffmpeg
//! 2. **Merge**: manifest univoco → ffmpeg concat → manifest eliminato
//! 3. **Altre**: argomenti diretti → ffmpeg
//!
//! ## Gestione errori:
//! - Durata mancante o bitrate non valido: `Aborted`, ffmpeg non viene invocato
//! - ffmpeg non avviabile durante il probe: `ToolUnavailable`
//! - Errori di I/O sul manifest: propagati come `MenuError`
//!
//! ## Esempio:
//! ```rust,no_run
//! # async fn demo() -> media_menu::MenuResult<()> {
//! use media_menu::{Config, FfmpegRunner, OperationExecutor};
//! use media_menu::operations::Operation;
//!
//! let config = Config::default();
//! let executor = OperationExecutor::new(FfmpegRunner::new("ffmpeg"), &config);
//! let outcome = executor
//!     .execute(&Operation::ConvertAudio { input: "a.wav".into(), output: "a.mp3".into() })
//!     .await?;
//! println!("{}", outcome.message);
//! # Ok(())
//! # }
//! ```

use super::builder::{concat_args, direct_args, transcode_args};
use super::{ConversionRequest, Operation, OperationArgs};
use crate::bitrate::{format_kbps, target_video_bitrate};
use crate::config::Config;
use crate::error::{MenuError, MenuResult};
use crate::manifest::{render_manifest, ConcatManifest};
use crate::media_info;
use crate::outcome::OperationOutcome;
use crate::runner::{CommandRunner, ProcessStatus};
use crate::utils::path_arg;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Runs menu operations through a [`CommandRunner`]
pub struct OperationExecutor<R> {
    runner: R,
    config: Config,
    manifest_dir: PathBuf,
}

impl<R: CommandRunner> OperationExecutor<R> {
    pub fn new(runner: R, config: &Config) -> Self {
        Self {
            runner,
            config: config.clone(),
            manifest_dir: PathBuf::from("."),
        }
    }

    /// Directory for merge manifests (default: current directory)
    pub fn with_manifest_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.manifest_dir = dir.into();
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Execute one operation and describe how it ended
    pub async fn execute(&self, operation: &Operation) -> MenuResult<OperationOutcome> {
        info!("🎬 {}", operation.kind().title());

        let outcome = match operation {
            Operation::ConvertVideo(request) => self.convert(operation, request).await?,
            Operation::MergeVideos { inputs, output } | Operation::MergeAudios { inputs, output } => {
                self.merge(operation, inputs, output).await?
            }
            _ => match direct_args(operation, &self.config) {
                Some(args) => self.invoke(operation, &args, Vec::new()).await,
                None => {
                    return Err(MenuError::InvalidInput(format!(
                        "{} has no direct ffmpeg arguments",
                        operation.kind().title()
                    )))
                }
            },
        };

        if outcome.is_success() {
            info!("✅ {}", outcome.message);
        } else {
            warn!("❌ {}", outcome.message);
        }

        Ok(outcome)
    }

    async fn convert(&self, operation: &Operation, request: &ConversionRequest) -> MenuResult<OperationOutcome> {
        let info = match media_info::probe(&self.runner, &request.input_path).await {
            Ok(info) => info,
            Err(MenuError::Spawn { source, .. }) => {
                let status = ProcessStatus::NotStarted { reason: source.to_string() };
                return Ok(OperationOutcome::from_process(operation, status, Vec::new()));
            }
            Err(e) => return Err(e),
        };

        let Some(duration_seconds) = info.duration_seconds else {
            return Ok(OperationOutcome::aborted(
                operation,
                MenuError::MissingDuration.to_string(),
                Vec::new(),
            ));
        };

        let bitrate = match target_video_bitrate(
            request.target_size_mb,
            duration_seconds,
            self.config.audio_allowance_bps(),
            self.config.min_video_bitrate_kbps,
        ) {
            Ok(bitrate) => bitrate,
            Err(e) => return Ok(OperationOutcome::aborted(operation, e.to_string(), Vec::new())),
        };

        let mut notices = Vec::new();
        if let Some(notice) = request.quality.notice() {
            warn!("{}", notice);
            notices.push(notice.to_string());
        }

        info!(
            "Target {:.1} MB over {:.2}s: video {} with preset {}",
            request.target_size_mb,
            duration_seconds,
            format_kbps(bitrate),
            request.quality.preset()
        );

        let args = transcode_args(request, bitrate, &self.config);
        Ok(self.invoke(operation, &args, notices).await)
    }

    async fn merge(&self, operation: &Operation, inputs: &[PathBuf], output: &Path) -> MenuResult<OperationOutcome> {
        if inputs.is_empty() {
            return Ok(OperationOutcome::aborted(operation, "No input files given.", Vec::new()));
        }

        let manifest = ConcatManifest::create_in(&self.manifest_dir, inputs)?;
        let args = concat_args(manifest.path(), output, &self.config);
        let status = self.runner.run(&args).await;

        // The printed command names a list that is removed below, so show its body
        let mut notices = Vec::new();
        if matches!(status, ProcessStatus::DryRun { .. }) {
            let notice = format!(
                "Concat list {} (removed after the dry run):\n{}",
                path_arg(manifest.path()),
                render_manifest(inputs).trim_end()
            );
            info!("{}", notice);
            notices.push(notice);
        }

        // Removed here whatever ffmpeg reported
        drop(manifest);
        Ok(OperationOutcome::from_process(operation, status, notices))
    }

    async fn invoke(&self, operation: &Operation, args: &OperationArgs, notices: Vec<String>) -> OperationOutcome {
        let status = self.runner.run(args).await;
        OperationOutcome::from_process(operation, status, notices)
    }
}
