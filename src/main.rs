//! # Media Menu - Main Entry Point
//!
//! Questo è il punto di ingresso principale dell'applicazione.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing`
//! - Caricamento e validazione della configurazione
//! - Menu interattivo, esecuzione di una singola operazione, report del risultato
//!
//! ## Flusso di esecuzione:
//! 1. Parsa gli argomenti CLI (config, ffmpeg, json, dry-run, overwrite, verbose)
//! 2. Configura il logging su stderr (INFO o DEBUG, `RUST_LOG` ha la precedenza)
//! 3. Carica la configurazione e applica gli override della CLI
//! 4. Mostra il menu e legge i parametri
//! 5. Esegue l'operazione e stampa il risultato (testo o JSON)
//! 6. Exit code 1 se l'operazione non è andata a buon fine
//!
//! ## Esempio di utilizzo:
//! ```bash
//! media-menu --overwrite --verbose
//! media-menu --dry-run --json
//! ```

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use media_menu::platform::PlatformCommands;
use media_menu::{
    CommandRunner, Config, DryRunRunner, FfmpegRunner, InteractiveShell, Operation, OperationExecutor,
    OperationOutcome,
};

#[derive(Parser)]
#[command(name = "media-menu")]
#[command(about = "Interactive menu for common ffmpeg video and audio tasks")]
struct Args {
    /// Configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the ffmpeg binary
    #[arg(long)]
    ffmpeg: Option<PathBuf>,

    /// Print the outcome as JSON on stdout (prompts go to stderr)
    #[arg(long)]
    json: bool,

    /// Show the ffmpeg command instead of running it
    #[arg(long)]
    dry_run: bool,

    /// Overwrite existing output files without asking
    #[arg(short = 'y', long)]
    overwrite: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    debug!("Platform: {}", PlatformCommands::system_info());

    let mut config = Config::load(args.config.as_deref()).await?;
    if args.ffmpeg.is_some() {
        config.ffmpeg_path = args.ffmpeg;
    }
    config.json_output |= args.json;
    config.dry_run |= args.dry_run;
    config.overwrite |= args.overwrite;
    config.validate()?;

    let operation = read_operation(&config)?;

    let runner = FfmpegRunner::new(PlatformCommands::instance().resolve_ffmpeg(&config));
    let outcome = if config.dry_run {
        run(DryRunRunner::new(runner), &config, &operation).await?
    } else {
        run(runner, &config, &operation).await?
    };

    report(&outcome, config.json_output);

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_operation(config: &Config) -> Result<Operation> {
    let stdin = std::io::stdin();
    let screen: Box<dyn Write> = if config.json_output {
        Box::new(std::io::stderr())
    } else {
        Box::new(std::io::stdout())
    };

    Ok(InteractiveShell::new(stdin.lock(), screen, config).read_operation()?)
}

async fn run<R: CommandRunner>(runner: R, config: &Config, operation: &Operation) -> Result<OperationOutcome> {
    let executor = OperationExecutor::new(runner, config);
    Ok(executor.execute(operation).await?)
}

fn report(outcome: &OperationOutcome, json: bool) {
    if json {
        outcome.emit_json();
    } else {
        // Notices were already logged while the operation ran
        println!("{}", outcome.message);
    }
}
