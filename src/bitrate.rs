//! # Bitrate Estimator Module
//!
//! Calcola il bitrate video necessario per ottenere un file di una certa
//! dimensione, riservando una quota fissa all'audio.
//!
//! ## Formula:
//! - `target_bits = target_size_mb * 8 * 1024 * 1024`
//! - `video_bitrate = target_bits / duration_seconds - audio_allowance`
//! - `audio_allowance` di default: 128 * 1024 bit/s
//!
//! ## Validazione:
//! `estimate_bitrate` non applica limiti e può restituire valori negativi.
//! `target_video_bitrate` rifiuta durate non positive e stime sotto il
//! minimo configurato, così ffmpeg non riceve mai `-b:v 0k` o peggio.

use crate::error::{MenuError, MenuResult};

/// Audio allowance subtracted from every estimate, in bits per second
pub const DEFAULT_AUDIO_ALLOWANCE_BPS: f64 = 128.0 * 1024.0;

const BITS_PER_MB: f64 = 8.0 * 1024.0 * 1024.0;

/// Video bitrate (bits/s) that fills `target_size_mb` over `duration_seconds`.
pub fn estimate_bitrate(target_size_mb: f64, duration_seconds: f64) -> f64 {
    estimate_bitrate_with_allowance(target_size_mb, duration_seconds, DEFAULT_AUDIO_ALLOWANCE_BPS)
}

/// Same as [`estimate_bitrate`] with an explicit audio allowance.
pub fn estimate_bitrate_with_allowance(
    target_size_mb: f64,
    duration_seconds: f64,
    audio_allowance_bps: f64,
) -> f64 {
    let target_bits = target_size_mb * BITS_PER_MB;
    target_bits / duration_seconds - audio_allowance_bps
}

/// Estimate and validate the bitrate handed to the encoder.
pub fn target_video_bitrate(
    target_size_mb: f64,
    duration_seconds: f64,
    audio_allowance_bps: f64,
    min_kbps: u32,
) -> MenuResult<f64> {
    if duration_seconds.is_nan() || duration_seconds <= 0.0 {
        return Err(MenuError::MissingDuration);
    }

    let bitrate = estimate_bitrate_with_allowance(target_size_mb, duration_seconds, audio_allowance_bps);
    if to_kbps(bitrate) < i64::from(min_kbps) {
        return Err(MenuError::BitrateTooLow { bitrate, min_kbps });
    }

    Ok(bitrate)
}

/// Whole kilobits per second, truncated toward zero.
pub fn to_kbps(bitrate_bps: f64) -> i64 {
    (bitrate_bps / 1000.0).trunc() as i64
}

/// Format a bitrate the way ffmpeg's `-b:v` expects it, e.g. `707k`.
pub fn format_kbps(bitrate_bps: f64) -> String {
    format!("{}k", to_kbps(bitrate_bps))
}
