//! # Platform-specific utilities
//!
//! Questo modulo centralizza la logica cross-platform per trovare ffmpeg:
//! path esplicito da configurazione, poi il PATH di sistema, infine il nome
//! nudo del comando (il fallimento verrà riportato come `ToolUnavailable`).

use crate::config::Config;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Platform-specific command resolution
pub struct PlatformCommands {
    executable_suffix: &'static str,
}

impl PlatformCommands {
    /// Get the singleton instance
    pub fn instance() -> &'static Self {
        static INSTANCE: OnceLock<PlatformCommands> = OnceLock::new();
        INSTANCE.get_or_init(Self::new)
    }

    fn new() -> Self {
        Self {
            executable_suffix: if cfg!(windows) { ".exe" } else { "" },
        }
    }

    /// Get the platform-specific command name
    pub fn get_command(&self, base_name: &str) -> String {
        format!("{}{}", base_name, self.executable_suffix)
    }

    /// Find a tool in the system PATH
    pub fn find_in_system_path(&self, base_name: &str) -> Option<PathBuf> {
        let command = self.get_command(base_name);
        env::var_os("PATH")
            .map(|paths| env::split_paths(&paths).collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter()
            .map(|dir| dir.join(&command))
            .find(|path| path.is_file())
    }

    /// ffmpeg binary to run for this configuration
    pub fn resolve_ffmpeg(&self, config: &Config) -> PathBuf {
        if let Some(ref explicit) = config.ffmpeg_path {
            debug!("Using configured ffmpeg: {}", explicit.display());
            return explicit.clone();
        }

        match self.find_in_system_path("ffmpeg") {
            Some(path) => {
                debug!("Using system ffmpeg: {}", path.display());
                path
            }
            None => {
                warn!("ffmpeg not found in PATH (install with: sudo apt-get install ffmpeg)");
                PathBuf::from(self.get_command("ffmpeg"))
            }
        }
    }

    /// Get system information for debugging
    pub fn system_info() -> SystemInfo {
        SystemInfo {
            os: env::consts::OS,
            arch: env::consts::ARCH,
            family: env::consts::FAMILY,
        }
    }
}

/// System information structure
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub os: &'static str,
    pub arch: &'static str,
    pub family: &'static str,
}

impl std::fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.os, self.arch, self.family)
    }
}
