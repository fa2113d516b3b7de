//! # Error Types Module
//!
//! Questo modulo definisce tutti i tipi di errore custom dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce `MenuError` enum per categorizzare gli errori del menu
//! - Fornisce messaggi di errore descrittivi e strutturati
//! - Integra con `thiserror` per automatic error conversion
//!
//! ## Categorie di errori:
//! - `Io`: Errori di I/O (manifest, lettura prompt, etc.)
//! - `InvalidInput`: Input dell'utente non convertibile (es. dimensione non numerica)
//! - `InvalidChoice`: Voce di menu inesistente
//! - `MissingDuration`: Durata non trovata nell'output di ffmpeg
//! - `BitrateTooLow`: Bitrate stimato non utilizzabile
//! - `Spawn`: Impossibile avviare il tool esterno
//! - `Config`: Configurazione non valida
//!
//! ## Nota:
//! I fallimenti del processo ffmpeg *non* sono errori: vengono riportati
//! come `OutcomeStatus` dentro `OperationOutcome`.
//!
//! ## Esempio:
//! ```ignore
//! let size: f64 = text.parse()
//!     .map_err(|_| MenuError::InvalidInput(format!("not a number: {}", text)))?;
//! ```

/// Custom error types for the media menu
#[derive(thiserror::Error, Debug)]
pub enum MenuError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid menu choice: {0}")]
    InvalidChoice(String),

    #[error("Could not determine the duration of the video.")]
    MissingDuration,

    #[error("Estimated video bitrate of {bitrate:.0} bps is below the {min_kbps}k minimum")]
    BitrateTooLow { bitrate: f64, min_kbps: u32 },

    #[error("Failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias used across the library
pub type MenuResult<T> = std::result::Result<T, MenuError>;
