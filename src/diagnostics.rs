use crate::api::ListingError;
use dioxus::logger::tracing::{error, info, warn};

#[inline]
pub fn report_listing_failure(endpoint: &str, err: &ListingError) {
    error!("Error fetching audio files from {endpoint}: {err}");
}

#[inline]
pub fn report_files_loaded(count: usize, first: Option<&str>) {
    match first {
        Some(first) => info!("[listing] loaded {count} audio files, defaulting to {first}"),
        None => info!("[listing] endpoint returned no audio files"),
    }
}

#[inline]
pub fn report_selection(previous: Option<&str>, next: &str) {
    info!("[select] {} -> {next}", previous.unwrap_or("<none>"));
}

#[inline]
pub fn report_unlisted_selection(file_name: &str) {
    warn!("[select] ignoring {file_name:?}, it is not in the loaded file list");
}

#[inline]
pub fn report_play_without_source() {
    info!("[playback] play/pause pressed before any file was loaded");
}

#[inline]
pub fn report_rate_change(previous: f64, next: f64) {
    info!("[speed] {previous} -> {next}");
}

#[inline]
pub fn report_bad_speed(raw: &str) {
    warn!("[speed] ignoring speed control with non-numeric value {raw:?}");
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[inline]
pub fn report_play_rejected(details: &str) {
    warn!("[playback] play request rejected | {details}");
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[inline]
pub fn report_pause_failed(details: &str) {
    warn!("[playback] pause request failed | {details}");
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[inline]
pub fn report_shortcuts_unavailable(details: &str) {
    warn!("[shortcuts] keydown listener could not be installed | {details}");
}

#[inline]
pub fn report_config_unreadable(details: &str) {
    error!("[config] stored player config is unreadable, using defaults | {details}");
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[inline]
pub fn report_config_unsaved(details: &str) {
    warn!("[config] could not persist player config | {details}");
}

#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
#[inline]
pub fn report_detached_playback() {
    warn!("[playback] audio output is only available in the web build");
}
