//! # Media Menu Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Responsabilità:
//! - Definisce la struttura modulare dell'applicazione
//! - Espone i tipi e le funzioni principali tramite re-exports
//! - Fornisce un'interfaccia pulita per il main.rs e per altri consumatori
//!
//! ## Architettura dei moduli:
//! - `config`: Gestione configurazione e validazione parametri
//! - `error`: Tipi di errore custom
//! - `media_info`: Parsing dell'output diagnostico di `ffmpeg -i`
//! - `bitrate`: Stima del bitrate video per una dimensione target
//! - `quality`: Mappatura qualità → preset x264
//! - `manifest`: File di lista per il demuxer concat
//! - `runner`: Esecuzione di ffmpeg con stato esplicito del processo
//! - `operations`: Le tredici operazioni del menu
//! - `outcome`: Risultato strutturato di un'operazione
//! - `shell`: Menu interattivo
//! - `platform`: Risoluzione del binario ffmpeg
//!
//! ## Utilizzo:
//! ```rust,no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use media_menu::{Config, FfmpegRunner, InteractiveShell, OperationExecutor};
//!
//! let config = Config::default();
//! let stdin = std::io::stdin();
//! let operation = InteractiveShell::new(stdin.lock(), std::io::stdout(), &config).read_operation()?;
//! let executor = OperationExecutor::new(FfmpegRunner::new("ffmpeg"), &config);
//! let outcome = executor.execute(&operation).await?;
//! println!("{}", outcome.message);
//! # Ok(())
//! # }
//! ```

pub mod bitrate;
pub mod config;
pub mod error;
pub mod manifest;
pub mod media_info;
pub mod operations;
pub mod outcome;
pub mod platform;
pub mod quality;
pub mod runner;
pub mod shell;
pub mod utils;

pub use config::Config;
pub use error::{MenuError, MenuResult};
pub use media_info::MediaInfo;
pub use operations::{Operation, OperationExecutor, OperationKind};
pub use outcome::{OperationOutcome, OutcomeStatus};
pub use quality::Quality;
pub use runner::{CommandRunner, DryRunRunner, FfmpegRunner, ProcessStatus};
pub use shell::InteractiveShell;
