//! # Configuration Management Module
//!
//! Questo modulo gestisce la configurazione dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` con i parametri delle operazioni
//! - Fornisce validazione dei parametri
//! - Supporta caricamento configurazione da file JSON (sola lettura)
//! - Fornisce valori di default che riproducono il comportamento classico del menu
//!
//! ## Parametri di configurazione:
//! - `ffmpeg_path`: Path esplicito di ffmpeg (default: None = cerca nel PATH)
//! - `audio_bitrate_kbps`: Bitrate audio per la conversione (default: 128)
//! - `min_video_bitrate_kbps`: Bitrate video minimo accettato (default: 1)
//! - `watermark_position`: Posizione watermark se non specificata (default: "10:10")
//! - `slideshow_output_fps`: Frame rate di output dello slideshow (default: 30)
//! - `overwrite`: Passa `-y` a ffmpeg (default: false)
//! - `dry_run`: Mostra i comandi senza eseguirli (default: false)
//! - `json_output`: Risultato in JSON su stdout (default: false)
//!
//! ## Posizione del file:
//! - `--config <FILE>` se specificato (deve esistere)
//! - altrimenti `<config_dir>/media-menu/config.json` se presente
//! - altrimenti i default
//!
//! ## Esempio:
//! ```rust
//! use media_menu::Config;
//!
//! let config = Config {
//!     overwrite: true,
//!     slideshow_output_fps: 25,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for the media menu
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explicit ffmpeg binary (None = look it up in PATH)
    pub ffmpeg_path: Option<PathBuf>,
    /// Audio bitrate for conversions, also reserved by the size estimate
    pub audio_bitrate_kbps: u32,
    /// Conversions whose estimated video bitrate falls below this are rejected
    pub min_video_bitrate_kbps: u32,
    /// Watermark position used when the prompt is left empty
    pub watermark_position: String,
    /// Output frame rate of generated slideshows
    pub slideshow_output_fps: u32,
    /// Overwrite existing outputs without asking
    pub overwrite: bool,
    /// Print the ffmpeg commands instead of running them
    pub dry_run: bool,
    /// Report the outcome as JSON
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ffmpeg_path: None,
            audio_bitrate_kbps: 128,
            min_video_bitrate_kbps: 1,
            watermark_position: "10:10".to_string(),
            slideshow_output_fps: 30,
            overwrite: false,
            dry_run: false,
            json_output: false,
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.audio_bitrate_kbps == 0 {
            return Err(anyhow::anyhow!("Audio bitrate must be greater than 0"));
        }

        if self.min_video_bitrate_kbps == 0 {
            return Err(anyhow::anyhow!("Minimum video bitrate must be greater than 0"));
        }

        if self.slideshow_output_fps == 0 {
            return Err(anyhow::anyhow!("Slideshow frame rate must be greater than 0"));
        }

        match self.watermark_position.split_once(':') {
            Some((x, y)) if !x.trim().is_empty() && !y.trim().is_empty() => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Watermark position must look like x:y, got '{}'",
                    self.watermark_position
                ));
            }
        }

        if let Some(ref ffmpeg_path) = self.ffmpeg_path {
            if !ffmpeg_path.exists() {
                return Err(anyhow::anyhow!("ffmpeg path does not exist: {}", ffmpeg_path.display()));
            }
        }

        Ok(())
    }

    /// Audio allowance for the bitrate estimate, in bits per second
    pub fn audio_allowance_bps(&self) -> f64 {
        f64::from(self.audio_bitrate_kbps) * 1024.0
    }

    /// Default config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("media-menu").join("config.json"))
    }

    /// Load configuration from file; a missing file means defaults
    pub async fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from an explicit path (which must exist) or from the default location
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) if !path.exists() => {
                Err(anyhow::anyhow!("Config file does not exist: {}", path.display()))
            }
            Some(path) => Self::from_file(path).await,
            None => match Self::default_path() {
                Some(path) => Self::from_file(&path).await,
                None => Ok(Self::default()),
            },
        }
    }
}
