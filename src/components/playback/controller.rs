use super::{ControllerEvent, MediaEvent, UiEvent};
use crate::api::{media_url, ListingError};
use crate::config::PlayerConfig;
use crate::diagnostics;

pub const PLAY_LABEL: &str = "Play";
pub const PAUSE_LABEL: &str = "Pause";

pub fn loop_label(looping: bool) -> &'static str {
    if looping {
        "Loop: On"
    } else {
        "Loop: Off"
    }
}

/// The single media resource the deck drives. The controller mutates it but
/// never creates or destroys it.
pub trait PlaybackHandle {
    fn paused(&self) -> bool;
    fn play(&mut self);
    fn pause(&mut self);
    fn source(&self) -> Option<String>;
    fn set_source(&mut self, url: &str);
    fn looping(&self) -> bool;
    fn set_looping(&mut self, looping: bool);
    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&mut self, rate: f64);
}

/// Display state of the deck widgets. Never read back as a source of truth.
pub trait ControlSurface {
    fn append_option(&mut self, file_name: &str);
    fn set_play_label(&mut self, label: &str);
    fn set_loop_label(&mut self, label: &str);
}

pub struct PlaybackController<H, S> {
    handle: H,
    surface: S,
    config: PlayerConfig,
    files: Vec<String>,
    selection: Option<String>,
}

impl<H: PlaybackHandle, S: ControlSurface> PlaybackController<H, S> {
    pub fn new(handle: H, surface: S, config: PlayerConfig) -> Self {
        Self {
            handle,
            surface,
            config,
            files: Vec::new(),
            selection: None,
        }
    }

    /// Route one event to the controller method that owns it.
    pub fn dispatch(&mut self, event: impl Into<ControllerEvent>) {
        match event.into() {
            ControllerEvent::Ui(UiEvent::SelectionChanged(name)) => self.select_file(&name),
            ControllerEvent::Ui(UiEvent::PlayPauseClicked) => self.toggle_play_pause(),
            ControllerEvent::Ui(UiEvent::LoopClicked) => self.toggle_loop(),
            ControllerEvent::Ui(UiEvent::SpeedClicked(raw)) => self.set_rate(&raw),
            ControllerEvent::Media(MediaEvent::Played) => self.media_played(),
            ControllerEvent::Media(MediaEvent::Paused) => self.media_paused(),
        }
    }

    /// Take the outcome of the listing request. Failures are logged and leave
    /// the selector empty and the source unset.
    pub fn apply_file_list(&mut self, result: Result<Vec<String>, ListingError>) {
        let files = match result {
            Ok(files) => files,
            Err(err) => {
                diagnostics::report_listing_failure(&self.config.listing_endpoint, &err);
                return;
            }
        };

        for name in &files {
            self.surface.append_option(name);
        }
        diagnostics::report_files_loaded(files.len(), files.first().map(String::as_str));

        if let Some(first) = files.first().cloned() {
            self.handle.set_source(&media_url(&self.config.media_prefix, &first));
            self.selection = Some(first);
        }
        self.files = files;
    }

    /// Point the handle at a newly chosen file. The play label drops back to
    /// "Play" without asking the new source whether it is already playing.
    pub fn select_file(&mut self, file_name: &str) {
        if file_name.is_empty() {
            return;
        }
        if !self.files.iter().any(|name| name == file_name) {
            diagnostics::report_unlisted_selection(file_name);
            return;
        }
        diagnostics::report_selection(self.selection.as_deref(), file_name);
        self.handle.set_source(&media_url(&self.config.media_prefix, file_name));
        self.selection = Some(file_name.to_string());
        self.surface.set_play_label(PLAY_LABEL);
    }

    pub fn toggle_play_pause(&mut self) {
        if self.handle.source().is_none() {
            diagnostics::report_play_without_source();
        }
        if self.handle.paused() {
            self.handle.play();
            self.surface.set_play_label(PAUSE_LABEL);
        } else {
            self.handle.pause();
            self.surface.set_play_label(PLAY_LABEL);
        }
    }

    pub fn media_played(&mut self) {
        self.surface.set_play_label(PAUSE_LABEL);
    }

    pub fn media_paused(&mut self) {
        self.surface.set_play_label(PLAY_LABEL);
    }

    pub fn toggle_loop(&mut self) {
        let looping = !self.handle.looping();
        self.handle.set_looping(looping);
        self.surface.set_loop_label(loop_label(self.handle.looping()));
    }

    /// Apply a speed control's value exactly as written. Values are trusted;
    /// only text that is not a finite number is dropped.
    pub fn set_rate(&mut self, raw: &str) {
        match raw.trim().parse::<f64>() {
            Ok(rate) if rate.is_finite() => {
                diagnostics::report_rate_change(self.handle.playback_rate(), rate);
                self.handle.set_playback_rate(rate);
            }
            _ => diagnostics::report_bad_speed(raw),
        }
    }

    #[cfg(test)]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[cfg(test)]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    #[cfg(test)]
    pub fn handle(&self) -> &H {
        &self.handle
    }

    #[cfg(test)]
    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
